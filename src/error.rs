// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] devscripts_engine::error::EngineError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl From<devscripts_engine::config::ConfigBuilderError> for AppError {
    fn from(e: devscripts_engine::config::ConfigBuilderError) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<devscripts_engine::config::WalkOptionsBuilderError> for AppError {
    fn from(e: devscripts_engine::config::WalkOptionsBuilderError) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
