//! Admin session settings.

use serde::{Deserialize, Serialize};

const fn default_session_ttl_hours() -> u64 {
    24
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdminConfig {
    /// Hours after login before the admin session expires.
    #[serde(default = "default_session_ttl_hours")]
    pub session_ttl_hours: u64,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            session_ttl_hours: default_session_ttl_hours(),
        }
    }
}

impl AdminConfig {
    /// Session lifetime in milliseconds.
    #[must_use]
    pub const fn session_ttl_ms(&self) -> i64 {
        #[allow(clippy::cast_possible_wrap)]
        let hours = self.session_ttl_hours as i64;
        hours.saturating_mul(60 * 60 * 1000)
    }
}
