//! Audit trail record types.
//!
//! One record per login-attempt outcome plus one per auto-lock event.
//! The rendered form is the stable audit-line grammar; collaborators
//! grep these lines, so the format is part of the contract.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuditEvent {
    EmptyIdentity,
    UnknownIdentity { identity: String },
    AccountExpired { identity: String },
    AccountLocked { identity: String },
    BadCredential { identity: String, attempt: u32 },
    /// Threshold crossed: the account transitioned to `Locked`.
    AutoLocked { identity: String },
    Success { identity: String },
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditEvent::EmptyIdentity => write!(f, "FAIL empty-identity"),
            AuditEvent::UnknownIdentity { identity } => {
                write!(f, "FAIL unknown-identity:{identity}")
            }
            AuditEvent::AccountExpired { identity } => write!(f, "FAIL expired:{identity}"),
            AuditEvent::AccountLocked { identity } => write!(f, "FAIL locked:{identity}"),
            AuditEvent::BadCredential { identity, attempt } => {
                write!(f, "FAIL bad-credential:{identity}:attempt={attempt}")
            }
            AuditEvent::AutoLocked { identity } => write!(f, "LOCKED:{identity}"),
            AuditEvent::Success { identity } => write!(f, "SUCCESS:{identity}"),
        }
    }
}
