//! Admin session gate.
//!
//! A session is two keys in the same key-value store as the suggestions:
//! a `"true"` flag and the login time in ms. A session older than the TTL,
//! or one whose keys are malformed, is cleared on the next check.

use sbox_core::responses::SessionResponse;
use tracing::{debug, info};

use crate::adapter::StorageAdapter;
use crate::error::StoreError;

pub const LOGGED_IN_KEY: &str = "adminLoggedIn";
pub const LOGIN_TIME_KEY: &str = "adminLoginTime";

/// Boundary check consulted before any admin-side repository call.
pub trait SessionGate {
    /// Whether an admin session is active at `now_ms`. An inactive session is
    /// cleared as a side effect.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read or cleared.
    fn is_authenticated(&mut self, now_ms: i64) -> Result<bool, StoreError>;

    /// Fail with `StoreError::SessionExpired` unless authenticated.
    ///
    /// # Errors
    ///
    /// `StoreError::SessionExpired`, or a backend error.
    fn require(&mut self, now_ms: i64) -> Result<(), StoreError> {
        if self.is_authenticated(now_ms)? {
            Ok(())
        } else {
            Err(StoreError::SessionExpired)
        }
    }
}

/// Session gate backed by a [`StorageAdapter`].
#[derive(Debug)]
pub struct StorageSession<S> {
    storage: S,
    ttl_ms: i64,
}

impl<S: StorageAdapter> StorageSession<S> {
    #[must_use]
    pub const fn new(storage: S, ttl_ms: i64) -> Self {
        Self { storage, ttl_ms }
    }

    /// Start a session at `now_ms`, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the keys cannot be written.
    pub fn login(&mut self, now_ms: i64) -> Result<SessionResponse, StoreError> {
        self.storage.set_raw(LOGGED_IN_KEY, "true")?;
        self.storage.set_raw(LOGIN_TIME_KEY, &now_ms.to_string())?;
        info!(login_time = now_ms, "admin session started");
        Ok(self.active(now_ms))
    }

    /// # Errors
    ///
    /// Returns `StoreError` if the keys cannot be removed.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.clear()?;
        info!("admin session ended");
        Ok(())
    }

    /// Current session state at `now_ms`; clears an expired session.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read or cleared.
    pub fn status(&mut self, now_ms: i64) -> Result<SessionResponse, StoreError> {
        match self.login_time()? {
            Some(login_time) if now_ms.saturating_sub(login_time) <= self.ttl_ms => {
                Ok(self.active(login_time))
            }
            stale => {
                if stale.is_some() {
                    debug!(ttl_ms = self.ttl_ms, "admin session expired");
                }
                self.clear()?;
                Ok(SessionResponse {
                    authenticated: false,
                    login_time: None,
                    expires_at: None,
                })
            }
        }
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn login_time(&self) -> Result<Option<i64>, StoreError> {
        if self.storage.get_raw(LOGGED_IN_KEY)?.as_deref() != Some("true") {
            return Ok(None);
        }
        Ok(self
            .storage
            .get_raw(LOGIN_TIME_KEY)?
            .and_then(|raw| raw.trim().parse().ok()))
    }

    const fn active(&self, login_time: i64) -> SessionResponse {
        SessionResponse {
            authenticated: true,
            login_time: Some(login_time),
            expires_at: Some(login_time.saturating_add(self.ttl_ms)),
        }
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.storage.remove(LOGGED_IN_KEY)?;
        self.storage.remove(LOGIN_TIME_KEY)
    }
}

impl<S: StorageAdapter> SessionGate for StorageSession<S> {
    fn is_authenticated(&mut self, now_ms: i64) -> Result<bool, StoreError> {
        Ok(self.status(now_ms)?.authenticated)
    }
}
