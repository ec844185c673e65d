// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagError {
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    #[error("Unknown list style: {0:?}")]
    UnknownStyle(String),

    #[error("Tag catalog error: {message}")]
    Catalog { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TagError>;
