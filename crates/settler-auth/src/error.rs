//! Authentication error types.

use settler_core::error::SettlerError;
use thiserror::Error;

/// Login failure categories. The rendered message is the reason string
/// surfaced through [`crate::AuthService::last_error`], so callers can
/// distinguish categories by content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("empty identity")]
    EmptyIdentity,

    #[error("unknown identity: {identity}")]
    UnknownIdentity { identity: String },

    #[error("account expired: {identity}")]
    AccountExpired { identity: String },

    #[error("account locked: {identity}")]
    AccountLocked { identity: String },

    #[error("invalid credential (attempt {attempt}): {identity}")]
    InvalidCredential { identity: String, attempt: u32 },

    /// The failed attempt that crossed the lockout threshold. Replaces
    /// `InvalidCredential` for that attempt so the caller is never told
    /// more attempts remain on a freshly locked account.
    #[error("account locked after max attempts: {identity}")]
    LockedOut { identity: String },
}

impl From<AuthError> for SettlerError {
    fn from(err: AuthError) -> Self {
        SettlerError::AuthenticationFailed {
            reason: err.to_string(),
        }
    }
}

/// Invalid constructor arguments. Raised at construction time, never
/// at call time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_attempts must be greater than zero")]
    ZeroMaxAttempts,

    #[error("session_timeout must be positive")]
    NonPositiveSessionTimeout,
}

impl From<ConfigError> for SettlerError {
    fn from(err: ConfigError) -> Self {
        SettlerError::Validation {
            message: err.to_string(),
        }
    }
}
