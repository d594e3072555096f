//! Persisted bearer-token storage.
//!
//! The token is the only durable state the client owns: one opaque string
//! under a fixed localStorage key. Everything else is refetched from the API.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::sync::{Arc, Mutex};

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Durable credential storage.
///
/// Reads are a full atomic fetch of the current value and writes are
/// last-write-wins; the trait deliberately has no compare-and-swap.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Token storage backed by the browser's localStorage.
///
/// Outside a browser (SSR, native tests) every read degrades to anonymous
/// and writes are no-ops.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

/// In-memory token storage for native tests and non-browser callers.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    inner: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a token, as after a previous visit.
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.inner.lock().ok().and_then(|token| token.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.inner.lock() {
            *slot = Some(token.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.inner.lock() {
            *slot = None;
        }
    }
}
