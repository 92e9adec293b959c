//! Settler Directory — the canonical identity-to-account mapping.
//!
//! Owns the normalized-key map and sequential identifier generation.
//! Lookup and insertion take the map lock briefly; per-account state
//! mutation happens under each account's own lock, so operations on
//! distinct accounts do not block each other.

mod error;

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use settler_core::models::account::{Account, AccountId, AccountStatus};
use settler_core::models::role::Role;

pub use error::DirectoryError;

/// First identifier handed out to directory-created accounts. Seeded
/// bootstrap accounts live below this offset and can never collide.
const GENERATED_ID_OFFSET: u64 = 2000;

/// In-memory account directory keyed by normalized identity.
pub struct AccountDirectory {
    accounts: RwLock<HashMap<String, Arc<Account>>>,
    next_account_num: AtomicU64,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            next_account_num: AtomicU64::new(GENERATED_ID_OFFSET),
        }
    }

    /// Normalize a raw identity for case-insensitive lookup: trim
    /// surrounding whitespace, fold to lowercase. Idempotent.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    pub fn exists(&self, raw_identity: &str) -> bool {
        self.accounts
            .read()
            .contains_key(&Self::normalize(raw_identity))
    }

    pub fn find(&self, raw_identity: &str) -> Option<Arc<Account>> {
        self.accounts
            .read()
            .get(&Self::normalize(raw_identity))
            .cloned()
    }

    /// Create a new account under the normalized identity key with the
    /// next sequential identifier.
    ///
    /// Rejects an identity whose normalized key is already present
    /// rather than overwriting the existing principal, and rejects an
    /// identity that normalizes to the empty string.
    pub fn create(
        &self,
        raw_identity: &str,
        credential: &str,
        status: AccountStatus,
        role: Role,
    ) -> Result<Arc<Account>, DirectoryError> {
        let key = Self::normalize(raw_identity);
        if key.is_empty() {
            return Err(DirectoryError::EmptyIdentity);
        }

        let mut accounts = self.accounts.write();
        if accounts.contains_key(&key) {
            return Err(DirectoryError::AlreadyExists { identity: key });
        }

        let id = AccountId::new(self.next_account_num.fetch_add(1, Ordering::Relaxed));
        let account = Arc::new(Account::new(
            id,
            key.clone(),
            raw_identity.trim(),
            credential,
            status,
            role,
        ));
        accounts.insert(key, Arc::clone(&account));
        tracing::debug!(id = %account.id, identity = %account.identity_key, "account created");
        Ok(account)
    }

    /// Seed the three bootstrap principals (U1001-U1003), one per role,
    /// all Active so they can log in immediately.
    pub fn seed_samples(&self) {
        self.insert_seeded(
            1001,
            "resident.valid@mars.local",
            "Passw0rd!",
            Role::ColonyResident,
        );
        self.insert_seeded(
            1002,
            "resident.expired@mars.local",
            "AnyPass",
            Role::MissionControlOperator,
        );
        self.insert_seeded(
            1003,
            "resident.locked@mars.local",
            "Pass123",
            Role::InfrastructureTechnician,
        );
    }

    fn insert_seeded(&self, id_num: u64, identity: &str, credential: &str, role: Role) {
        let key = Self::normalize(identity);
        let account = Arc::new(Account::new(
            AccountId::new(id_num),
            key.clone(),
            identity,
            credential,
            AccountStatus::Active,
            role,
        ));
        self.accounts.write().insert(key, account);
    }

    pub fn len(&self) -> usize {
        self.accounts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.read().is_empty()
    }
}

impl Default for AccountDirectory {
    fn default() -> Self {
        Self::new()
    }
}
