use std::path::PathBuf;

use sbox_config::SboxConfig;
use sbox_store::{Clock, FileStorage, SessionGate, StorageSession, SuggestionRepo};

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub repo: SuggestionRepo<FileStorage>,
    pub session: StorageSession<FileStorage>,
    pub config: SboxConfig,
}

impl AppContext {
    /// Open the store named by `--store`, or `storage.path` from the config.
    pub fn init(config: SboxConfig, flags: &GlobalFlags) -> Self {
        let store_path = flags
            .store
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.storage.path));
        tracing::debug!(path = %store_path.display(), "opening suggestion store");

        let storage = FileStorage::open(&store_path);
        let repo = SuggestionRepo::from_config(storage.clone(), &config.storage);
        let session = StorageSession::new(storage, config.admin.session_ttl_ms());

        Self {
            repo,
            session,
            config,
        }
    }

    pub fn now_ms(&self) -> i64 {
        self.repo.clock().now_ms()
    }

    /// Refuse admin work without an active session.
    pub fn require_admin(&mut self) -> anyhow::Result<()> {
        let now = self.now_ms();
        self.session.require(now)?;
        Ok(())
    }
}
