use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ui::glyphs::Glyphs;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_ascii_glyphs")]
    pub ascii_glyphs: bool,
    #[serde(default = "default_help_width")]
    pub help_width: u16,
    #[serde(default = "default_dialog_ratio")]
    pub dialog_ratio: f32,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_help_keys")]
    pub help_keys: String,
}

fn default_theme() -> String {
    "aptio".to_string()
}
fn default_ascii_glyphs() -> bool {
    false
}
fn default_help_width() -> u16 {
    27
}
fn default_dialog_ratio() -> f32 {
    0.6
}
fn default_title() -> String {
    "BIOS Setup Utility - Copyright (C) 2024 Company Inc.".to_string()
}
fn default_version() -> String {
    "Version 1.23.4567. Copyright (C) 2024 Company Inc.".to_string()
}
fn default_help_keys() -> String {
    [
        "\u{2190}\u{2192} Select Screen",
        "\u{2191}\u{2193} Select Item",
        "Enter: Select",
        "F1: General Help",
        "F10: Save and Exit",
        "ESC: Exit",
    ]
    .join("\n")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            ascii_glyphs: default_ascii_glyphs(),
            help_width: default_help_width(),
            dialog_ratio: default_dialog_ratio(),
            title: default_title(),
            version: default_version(),
            help_keys: default_help_keys(),
        }
    }
}

impl Config {
    /// Reads the user's config file, falling back to defaults when there
    /// is none. The file is never written.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("biosmenu")
            .join("config.toml")
    }

    pub fn glyphs(&self) -> &'static Glyphs {
        Glyphs::for_ascii(self.ascii_glyphs)
    }
}
