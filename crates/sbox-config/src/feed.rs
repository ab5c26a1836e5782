//! Public feed and submission form settings.

use serde::{Deserialize, Serialize};

/// Number of suggestions shown on the public feed.
const fn default_public_limit() -> u32 {
    6
}

/// Character cap of the submission form.
const fn default_max_chars() -> usize {
    500
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedConfig {
    #[serde(default = "default_public_limit")]
    pub public_limit: u32,

    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            public_limit: default_public_limit(),
            max_chars: default_max_chars(),
        }
    }
}
