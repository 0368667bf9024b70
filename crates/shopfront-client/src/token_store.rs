//! # Durable Token Store
//!
//! Thin persistence boundary for exactly one value: the raw session token.
//! Absence of the value means logged-out at startup.
//!
//! Writes are synchronous and complete before the caller's login/logout is
//! considered committed, so a crash immediately after cannot leave memory
//! and disk disagreeing for longer than the call itself.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Persistence seam for the session token.
///
/// Implementations must be safe to call from any thread; the store core
/// shares one instance across managers.
pub trait TokenStore: Send + Sync {
    /// Returns the stored token, or `None` when no session is persisted.
    fn load(&self) -> ClientResult<Option<String>>;

    /// Persists the token, replacing any previous one.
    fn save(&self, token: &str) -> ClientResult<()>;

    /// Removes the persisted token. Removing an absent token is a no-op.
    fn clear(&self) -> ClientResult<()>;
}

/// File-backed token store under the platform app-data directory.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Opens the store at the default platform location
    /// (e.g. `~/.local/share/shopfront/session.token` on Linux).
    pub fn new() -> ClientResult<Self> {
        let dirs = directories::ProjectDirs::from("io", "shopfront", "shopfront")
            .ok_or_else(|| ClientError::TokenStore("no home directory available".to_string()))?;
        Ok(Self::at_path(dirs.data_dir().join("session.token")))
    }

    /// Opens the store at an explicit path.
    pub fn at_path(path: PathBuf) -> Self {
        FileTokenStore { path }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> ClientResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim().to_string();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ClientError::TokenStore(e.to_string())),
        }
    }

    fn save(&self, token: &str) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ClientError::TokenStore(e.to_string()))?;
        }
        std::fs::write(&self.path, token).map_err(|e| ClientError::TokenStore(e.to_string()))?;
        debug!(path = %self.path.display(), "Session token persisted");
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::TokenStore(e.to_string())),
        }
    }
}

/// In-memory token store for tests and automation.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a token, as if a previous session persisted
    /// one.
    pub fn with_token(token: impl Into<String>) -> Self {
        MemoryTokenStore { token: Mutex::new(Some(token.into())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> ClientResult<Option<String>> {
        Ok(self.token.lock().expect("token store lock poisoned").clone())
    }

    fn save(&self, token: &str) -> ClientResult<()> {
        *self.token.lock().expect("token store lock poisoned") = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        *self.token.lock().expect("token store lock poisoned") = None;
        Ok(())
    }
}
