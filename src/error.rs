use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchedulerError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// True for validation failures, as opposed to errors reading input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SchedulerError::InvalidInput(_))
    }
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
