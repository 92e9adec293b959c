//! Account domain model.

use std::fmt;

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};

use crate::models::role::Role;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
    Expired,
    Locked,
}

/// Sequential account identifier, rendered as `U{n}`.
///
/// Directory-created accounts are numbered from 2000 upward; seeded
/// bootstrap accounts occupy the 1000 range, so the two can never
/// collide. Identifiers are never reused.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(u64);

impl AccountId {
    pub const fn new(n: u64) -> Self {
        Self(n)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U{}", self.0)
    }
}

/// Mutable security and session fields of an [`Account`].
///
/// All of these move together under one mutex: the wrong-credential
/// path reads the credential, bumps the attempt counter, and may flip
/// the status to `Locked` as a single critical section.
#[derive(Debug)]
pub struct AccountState {
    /// Opaque comparable secret. Compared by equality; hashing is the
    /// host's concern.
    pub credential: String,
    pub status: AccountStatus,
    /// Wrong-credential attempts since the last successful login.
    pub failed_attempts: u32,
    pub session_active: bool,
    /// Set on login and on every keepalive touch; ignored once
    /// `session_active` is false.
    pub last_activity: Option<DateTime<Utc>>,
}

/// A principal capable of authenticating.
///
/// Identity fields are immutable once assigned; security and session
/// state lives behind [`Account::state`].
#[derive(Debug)]
pub struct Account {
    pub id: AccountId,
    /// Normalized login name, unique within a directory.
    pub identity_key: String,
    /// The identity string as originally supplied. Differs from
    /// `identity_key` only in casing.
    pub display_identity: String,
    pub role: Role,
    state: Mutex<AccountState>,
}

impl Account {
    pub fn new(
        id: AccountId,
        identity_key: impl Into<String>,
        display_identity: impl Into<String>,
        credential: impl Into<String>,
        status: AccountStatus,
        role: Role,
    ) -> Self {
        Self {
            id,
            identity_key: identity_key.into(),
            display_identity: display_identity.into(),
            role,
            state: Mutex::new(AccountState {
                credential: credential.into(),
                status,
                failed_attempts: 0,
                session_active: false,
                last_activity: None,
            }),
        }
    }

    /// Lock the mutable state for a compound check-then-mutate
    /// sequence. Operations on other accounts are unaffected.
    pub fn state(&self) -> MutexGuard<'_, AccountState> {
        self.state.lock()
    }

    pub fn status(&self) -> AccountStatus {
        self.state.lock().status
    }

    pub fn failed_attempts(&self) -> u32 {
        self.state.lock().failed_attempts
    }

    pub fn session_active(&self) -> bool {
        self.state.lock().session_active
    }

    pub fn last_activity(&self) -> Option<DateTime<Utc>> {
        self.state.lock().last_activity
    }

    /// Administrative status edit (expire, lock, reinstate). The
    /// authentication service itself only ever sets `Locked`.
    pub fn set_status(&self, status: AccountStatus) {
        self.state.lock().status = status;
    }

    /// Out-of-band credential change.
    pub fn set_credential(&self, credential: impl Into<String>) {
        self.state.lock().credential = credential.into();
    }
}
