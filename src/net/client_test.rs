use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::*;
use crate::net::token::{MemoryTokenStore, TokenStore};

fn client_with(store: MemoryTokenStore) -> ApiClient {
    ApiClient::new("/api", Arc::new(store))
}

// =============================================================
// URL joining
// =============================================================

#[test]
fn join_url_tolerates_slashes_on_either_side() {
    assert_eq!(join_url("/api", "news"), "/api/news");
    assert_eq!(join_url("/api/", "/news"), "/api/news");
    assert_eq!(
        join_url("https://example.com/api", "auth/login"),
        "https://example.com/api/auth/login"
    );
}

// =============================================================
// Authorization-denied handling
// =============================================================

#[test]
fn unauthorized_clears_token_then_notifies() {
    let store = MemoryTokenStore::with_token("abc");
    let cleared_when_notified = Arc::new(AtomicBool::new(false));

    let observed = Arc::clone(&cleared_when_notified);
    let probe = store.clone();
    let client = ApiClient::new("/api", Arc::new(store.clone()))
        .with_unauthorized_handler(move || observed.store(probe.get().is_none(), Ordering::SeqCst));

    client.handle_unauthorized(401);

    // Token was already gone when the callback ran.
    assert!(cleared_when_notified.load(Ordering::SeqCst));
    assert!(store.get().is_none());
}

#[test]
fn other_statuses_leave_the_token_alone() {
    let store = MemoryTokenStore::with_token("abc");
    let notified = Arc::new(AtomicBool::new(false));

    let observed = Arc::clone(&notified);
    let client = ApiClient::new("/api", Arc::new(store.clone()))
        .with_unauthorized_handler(move || observed.store(true, Ordering::SeqCst));

    for status in [200, 204, 400, 403, 404, 500] {
        client.handle_unauthorized(status);
    }

    assert!(!notified.load(Ordering::SeqCst));
    assert_eq!(store.get().as_deref(), Some("abc"));
}

#[test]
fn unauthorized_without_handler_still_clears_token() {
    let store = MemoryTokenStore::with_token("abc");
    let client = client_with(store.clone());

    client.handle_unauthorized(401);

    assert!(store.get().is_none());
}

#[test]
fn clones_share_the_token_store() {
    let store = MemoryTokenStore::with_token("abc");
    let client = client_with(store.clone());
    let clone = client.clone();

    clone.handle_unauthorized(401);

    assert!(client.token_store().get().is_none());
    assert!(store.get().is_none());
}

// =============================================================
// SSR degradation
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn requests_off_browser_normalize_to_failure_envelope() {
    let client = client_with(MemoryTokenStore::new());
    let envelope: crate::net::types::ApiResponse<()> =
        futures::executor::block_on(client.get("news"));
    assert!(!envelope.success);
    assert_eq!(envelope.message.as_deref(), Some(TRANSPORT_ERROR));
}
