//! # Store Core
//!
//! The single process-wide state container. Composes the session, cart, and
//! catalog slices; every transition in the process funnels through
//! [`StoreInner::commit`], which applies the pure transition under a short
//! write lock and then notifies subscribers.
//!
//! ## Commit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Commit Flow                                     │
//! │                                                                         │
//! │  manager op ──► StoreEvent ──► write lock ──► AppState::apply ──► drop  │
//! │                                                        │                │
//! │                                                        ▼                │
//! │                                      broadcast to subscribers           │
//! │                                      (lagged/dropped receivers only     │
//! │                                       hurt themselves)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The write lock is held only across the synchronous apply, never across
//! an await point. Remote operations commit their pending phase, suspend on
//! the network, and commit the resolution when it arrives — other dispatches
//! interleave freely in between.

use std::sync::{Arc, RwLock};

use tokio::sync::broadcast;
use tracing::info;

use shopfront_core::{AppState, AuthState, StoreEvent};

use crate::api::{HttpApi, RemoteApi};
use crate::auth::AuthManager;
use crate::cart::CartManager;
use crate::error::{ClientError, ClientResult};
use crate::products::ProductsManager;
use crate::token_store::{FileTokenStore, TokenStore};

/// Subscribers further behind than this many committed events start seeing
/// `Lagged` on their receiver.
const EVENT_CHANNEL_CAPACITY: usize = 64;

// =============================================================================
// Configuration
// =============================================================================

/// What happens to the cart mirror when the session ends.
///
/// The server keeps the cart per account either way; this only controls the
/// local mirror. `RetainCart` matches a single-user device where the next
/// login is the same person; `ClearCart` suits shared devices where a stale
/// mirror must not be shown to the next user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogoutCartPolicy {
    /// Leave the mirror in place across logout.
    #[default]
    RetainCart,
    /// Commit a cart clear as part of logout.
    ClearCart,
}

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the shop server, e.g. `http://localhost:5000`.
    pub api_url: String,

    /// Cart policy applied during logout.
    pub logout_cart: LogoutCartPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            api_url: "http://localhost:5000".to_string(),
            logout_cart: LogoutCartPolicy::default(),
        }
    }
}

impl StoreConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHOPFRONT_API_URL`: Override the shop server base URL
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();
        if let Ok(api_url) = std::env::var("SHOPFRONT_API_URL") {
            config.api_url = api_url;
        }
        config
    }
}

// =============================================================================
// Store
// =============================================================================

/// Shared interior of the store. Managers clone the `Arc` and go through
/// [`commit`](Self::commit) for every mutation; nothing else touches
/// `state`.
pub(crate) struct StoreInner {
    state: RwLock<AppState>,
    changes: broadcast::Sender<StoreEvent>,
    pub(crate) api: Arc<dyn RemoteApi>,
    pub(crate) tokens: Arc<dyn TokenStore>,
    pub(crate) config: StoreConfig,
}

impl StoreInner {
    /// Applies one transition and notifies subscribers. The single
    /// serialization point: an event is applied exactly once, and listeners
    /// see it only after it is in the state.
    pub(crate) fn commit(&self, event: StoreEvent) {
        {
            let mut state = self.state.write().expect("state lock poisoned");
            state.apply(&event);
        }
        // Send fails only when no subscriber exists, which is fine.
        let _ = self.changes.send(event);
    }

    pub(crate) fn snapshot(&self) -> AppState {
        self.state.read().expect("state lock poisoned").clone()
    }

    /// Current session token, if any.
    pub(crate) fn token(&self) -> Option<String> {
        self.state.read().expect("state lock poisoned").auth.token.clone()
    }

    /// Token guard for remote operations: fails with `Unauthorized` before
    /// any network call is attempted.
    pub(crate) fn require_token(&self) -> ClientResult<String> {
        self.token().ok_or(ClientError::Unauthorized)
    }
}

/// The process-wide state container.
///
/// Cheap to clone; all clones share the same state, subscribers, and
/// collaborators.
#[derive(Clone)]
pub struct Store {
    pub(crate) inner: Arc<StoreInner>,
}

impl Store {
    /// Explicit bootstrap: reads the durable token store once and returns a
    /// fully-formed store. Called by the process bootstrap; nothing reads
    /// ambient storage at load time.
    ///
    /// # Errors
    ///
    /// [`ClientError::TokenStore`] when the durable store cannot be read.
    pub fn initialize(
        config: StoreConfig,
        api: Arc<dyn RemoteApi>,
        tokens: Arc<dyn TokenStore>,
    ) -> ClientResult<Self> {
        let stored = tokens.load()?;
        let auth = AuthState::from_stored_token(stored);
        info!(authenticated = auth.is_authenticated, "Store initialized");

        let (changes, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Ok(Store {
            inner: Arc::new(StoreInner {
                state: RwLock::new(AppState::with_auth(auth)),
                changes,
                api,
                tokens,
                config,
            }),
        })
    }

    /// Bootstrap with the default collaborators: [`HttpApi`] against
    /// `config.api_url` and the platform [`FileTokenStore`].
    pub fn open(config: StoreConfig) -> ClientResult<Self> {
        let api = Arc::new(HttpApi::new(config.api_url.clone())?);
        let tokens = Arc::new(FileTokenStore::new()?);
        Self::initialize(config, api, tokens)
    }

    /// Synchronous snapshot of the whole state.
    pub fn snapshot(&self) -> AppState {
        self.inner.snapshot()
    }

    /// Subscribes to committed transitions. Every event arrives after it
    /// has been applied, in commit order.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.inner.changes.subscribe()
    }

    /// Session operations.
    pub fn auth(&self) -> AuthManager {
        AuthManager::new(Arc::clone(&self.inner))
    }

    /// Cart operations.
    pub fn cart(&self) -> CartManager {
        CartManager::new(Arc::clone(&self.inner))
    }

    /// Catalog operations.
    pub fn products(&self) -> ProductsManager {
        ProductsManager::new(Arc::clone(&self.inner))
    }
}
