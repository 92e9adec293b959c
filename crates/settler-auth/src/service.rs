//! Authentication service — login and session lifecycle orchestration.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use settler_core::models::account::{Account, AccountStatus};
use settler_core::models::audit::AuditEvent;
use settler_directory::AccountDirectory;

use crate::config::AuthConfig;
use crate::error::{AuthError, ConfigError};

/// Authentication service.
///
/// Holds a shared reference to the directory's mapping and applies the
/// login state machine to the accounts in it. Every login outcome is
/// appended to the audit trail; the trail and the returned failure
/// never disagree.
pub struct AuthService {
    directory: Arc<AccountDirectory>,
    config: AuthConfig,
    audit: Mutex<Vec<String>>,
    last_error: Mutex<Option<String>>,
}

impl AuthService {
    /// Fails fast on an unusable configuration; login never revalidates.
    pub fn new(directory: Arc<AccountDirectory>, config: AuthConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            directory,
            config,
            audit: Mutex::new(Vec::new()),
            last_error: Mutex::new(None),
        })
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Authenticate an identity + credential and open a session.
    ///
    /// Checks run in a fixed order, cheapest first, short-circuiting at
    /// the first failure. The order is a contract: each step produces a
    /// distinct failure reason and a distinct audit entry. An absent
    /// credential compares as the empty credential.
    pub fn login(
        &self,
        identity: &str,
        credential: Option<&str>,
    ) -> Result<Arc<Account>, AuthError> {
        *self.last_error.lock() = None;

        // 1. Blank identity.
        let key = AccountDirectory::normalize(identity);
        if key.is_empty() {
            return Err(self.deny(AuthError::EmptyIdentity, AuditEvent::EmptyIdentity));
        }

        // 2. Unknown identity. No existing account is touched.
        let Some(account) = self.directory.find(&key) else {
            return Err(self.deny(
                AuthError::UnknownIdentity {
                    identity: key.clone(),
                },
                AuditEvent::UnknownIdentity { identity: key },
            ));
        };

        let supplied = credential.unwrap_or("");

        // Steps 3-6 hold the account's state lock: the status check,
        // attempt increment, lock transition, and session open are one
        // critical section per account.
        let mut state = account.state();
        let who = account.display_identity.clone();

        // 3. Expired account.
        if state.status == AccountStatus::Expired {
            return Err(self.deny(
                AuthError::AccountExpired {
                    identity: who.clone(),
                },
                AuditEvent::AccountExpired { identity: who },
            ));
        }

        // 4. Locked account.
        if state.status == AccountStatus::Locked {
            return Err(self.deny(
                AuthError::AccountLocked {
                    identity: who.clone(),
                },
                AuditEvent::AccountLocked { identity: who },
            ));
        }

        // 5. Credential mismatch: count the attempt, auto-lock at the
        //    threshold. The lockout overrides the invalid-credential
        //    failure so the caller is told the account is now locked.
        if state.credential != supplied {
            state.failed_attempts += 1;
            let attempt = state.failed_attempts;

            let mut err = self.deny(
                AuthError::InvalidCredential {
                    identity: who.clone(),
                    attempt,
                },
                AuditEvent::BadCredential {
                    identity: who.clone(),
                    attempt,
                },
            );

            if attempt >= self.config.max_attempts {
                state.status = AccountStatus::Locked;
                tracing::warn!(
                    identity = %who,
                    attempts = attempt,
                    "account locked after repeated credential failures"
                );
                err = self.deny(
                    AuthError::LockedOut {
                        identity: who.clone(),
                    },
                    AuditEvent::AutoLocked { identity: who },
                );
            }

            return Err(err);
        }

        // 6. Success: reset the attempt counter and open the session.
        state.failed_attempts = 0;
        state.session_active = true;
        state.last_activity = Some(Utc::now());
        self.record(AuditEvent::Success { identity: who });
        drop(state);

        Ok(account)
    }

    /// Keepalive: refresh the activity timestamp. Does not re-validate
    /// status or credential.
    pub fn touch(&self, account: &Account) {
        account.state().last_activity = Some(Utc::now());
    }

    /// Lazily evaluate session expiry. A session with no activity
    /// marker, or none open at all, reports expired. Inactivity exactly
    /// equal to the timeout is still valid.
    pub fn is_session_expired(&self, account: &Account, now: Option<DateTime<Utc>>) -> bool {
        let state = account.state();
        if !state.session_active {
            return true;
        }
        let Some(last) = state.last_activity else {
            return true;
        };
        let now = now.unwrap_or_else(Utc::now);
        now.signed_duration_since(last) > self.config.session_timeout
    }

    /// Close the session. The activity timestamp is kept as a
    /// historical marker; expiry checks report expired regardless of
    /// its recency once the session is closed.
    pub fn logout(&self, account: &Account) {
        account.state().session_active = false;
    }

    /// Insertion-ordered snapshot of the audit trail.
    pub fn audit(&self) -> Vec<String> {
        self.audit.lock().clone()
    }

    /// Failure reason of the most recent login, if it failed. Cleared
    /// at the start of every login call.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().clone()
    }

    fn record(&self, event: AuditEvent) {
        self.audit.lock().push(event.to_string());
    }

    /// Record the failure in both caller-visible places at once: the
    /// last-error slot and the audit trail.
    fn deny(&self, err: AuthError, event: AuditEvent) -> AuthError {
        *self.last_error.lock() = Some(err.to_string());
        self.record(event);
        err
    }
}
