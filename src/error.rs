use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("theme `{0}` not found")]
    ThemeNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
