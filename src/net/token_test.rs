use super::*;

#[test]
fn memory_store_round_trips_a_token() {
    let store = MemoryTokenStore::new();
    assert!(store.get().is_none());

    store.set("abc");
    assert_eq!(store.get().as_deref(), Some("abc"));

    store.clear();
    assert!(store.get().is_none());
}

#[test]
fn memory_store_writes_are_last_write_wins() {
    let store = MemoryTokenStore::new();
    let alias = store.clone();

    store.set("first");
    alias.set("second");
    assert_eq!(store.get().as_deref(), Some("second"));
}

#[test]
fn seeded_store_starts_with_token() {
    let store = MemoryTokenStore::with_token("abc");
    assert_eq!(store.get().as_deref(), Some("abc"));
}

#[test]
fn browser_store_degrades_to_anonymous_off_browser() {
    // Without a window there is no storage; reads must stay None and
    // writes must not panic.
    let store = BrowserTokenStore;
    store.set("abc");
    assert!(store.get().is_none());
    store.clear();
}
