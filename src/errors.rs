use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Sink write error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to read config '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in config '{}': {source}", .path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
}
