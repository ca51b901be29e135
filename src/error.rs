use thiserror::Error;

#[derive(Debug, Error)]
pub enum NutriError {
    #[error("unknown common food: {0}")]
    UnknownFood(String),

    #[error("corrupt record under '{key}': {reason}")]
    DataCorruption { key: String, reason: String },

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NutriError {
    /// Error code used in the JSON error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownFood(_) => "not_found",
            Self::DataCorruption { .. } => "data_corruption",
            Self::InvalidState(_) => "invalid_state",
            Self::InvalidInput(_) => "invalid_input",
            Self::Storage(_) | Self::Json(_) | Self::Io(_) => "general_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, NutriError>;
