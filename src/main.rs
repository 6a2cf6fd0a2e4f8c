mod demo;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use biosmenu::{Config, Theme};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "biosmenu", version, about = "BIOS-style setup menu for the terminal")]
struct Cli {
    #[arg(short, long, help = "Theme name (aptio, award, mono or a user theme)")]
    theme: Option<String>,

    #[arg(short, long, help = "Draw frames with plain ASCII characters")]
    ascii: bool,

    #[arg(long, value_name = "PATH", help = "Write diagnostics to this file")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, path = %Config::config_path().display(), "ignoring unreadable config");
            Config::default()
        }
    };
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if cli.ascii {
        config.ascii_glyphs = true;
    }

    let theme = match Theme::named(&config.theme) {
        Ok(theme) => theme,
        Err(err) => {
            warn!(error = %err, available = ?Theme::available_themes(), "falling back to the default theme");
            Theme::default()
        }
    };
    info!(theme = %theme.name, ascii = config.ascii_glyphs, "starting");

    biosmenu::run(demo::pages(), config, &theme).context("setup menu failed")?;
    info!("exited");
    Ok(())
}

/// Logs go to a file only: anything on stdout or stderr would tear the
/// full-screen UI.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("cannot create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}
