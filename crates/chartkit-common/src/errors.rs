use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("theme file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("theme parse error: {0}")]
    ParseError(String),

    #[error("unsupported theme format: {0}")]
    UnsupportedFormat(String),

    #[error("theme watch error: {0}")]
    WatchError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ChartkitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
