use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClausewiseError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid regex pattern for clause type '{clause_type}': {message}")]
    InvalidPattern {
        clause_type: String,
        message: String,
    },

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClausewiseError>;
