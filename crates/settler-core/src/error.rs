//! Error types for the Settler system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettlerError {
    #[error("Entity already exists: {entity}")]
    AlreadyExists { entity: String },

    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

pub type SettlerResult<T> = Result<T, SettlerError>;
