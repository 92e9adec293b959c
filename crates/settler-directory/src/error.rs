//! Directory-specific error types and conversions.

use settler_core::error::SettlerError;

/// Directory-layer error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("account already exists: {identity}")]
    AlreadyExists { identity: String },

    #[error("identity is empty")]
    EmptyIdentity,
}

impl From<DirectoryError> for SettlerError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::AlreadyExists { identity } => SettlerError::AlreadyExists {
                entity: format!("account {identity}"),
            },
            DirectoryError::EmptyIdentity => SettlerError::Validation {
                message: "identity is empty".into(),
            },
        }
    }
}
