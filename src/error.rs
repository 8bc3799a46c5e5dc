use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Please enter a search query.")]
    EmptyQuery,

    #[error("Failed to open browser: {0}")]
    Browser(#[source] io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, FinderError>;
