//! Authentication configuration.

use chrono::Duration;

use crate::error::ConfigError;

/// Configuration for the authentication service.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Wrong-credential attempts tolerated before auto-lock
    /// (default: 5).
    pub max_attempts: u32,
    /// Inactivity window after which a session is considered expired
    /// (default: 15 minutes).
    pub session_timeout: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            session_timeout: Duration::minutes(15),
        }
    }
}

impl AuthConfig {
    /// Reject unusable thresholds up front so login never has to.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroMaxAttempts);
        }
        if self.session_timeout <= Duration::zero() {
            return Err(ConfigError::NonPositiveSessionTimeout);
        }
        Ok(())
    }
}
