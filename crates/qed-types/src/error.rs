use thiserror::Error;

#[derive(Error, Debug)]
pub enum QedError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid parameter {name}={value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type QedResult<T> = Result<T, QedError>;
