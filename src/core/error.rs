use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvolveError {
    #[error("Unknown category: {0:?}")]
    UnknownCategory(String),

    #[error("Unclosed placeholder in environment {environment:?}")]
    UnclosedPlaceholder { environment: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EvolveError>;
