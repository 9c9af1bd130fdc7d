use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File '{}' is not valid UTF-8 text: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Cannot access '{}': {source}", .path.display())]
    RootAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a directory: '{}'", .0.display())]
    NotADirectory(PathBuf),

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to start counting pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
