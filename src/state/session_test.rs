use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::executor::block_on;
use leptos::prelude::*;

use super::*;
use crate::net::token::{MemoryTokenStore, TokenStore};
use crate::net::types::{ApiResponse, AuthPayload, LoginCredentials, RegisterCredentials, User};

// =============================================================
// Stub auth backend
// =============================================================

#[derive(Clone, Debug, Default)]
struct StubAuthApi {
    login_response: Rc<RefCell<Option<ApiResponse<AuthPayload>>>>,
    register_response: Rc<RefCell<Option<ApiResponse<AuthPayload>>>>,
    profile_response: Rc<RefCell<Option<ApiResponse<User>>>>,
    calls: Rc<Cell<u32>>,
}

impl StubAuthApi {
    fn with_login(response: ApiResponse<AuthPayload>) -> Self {
        let stub = Self::default();
        *stub.login_response.borrow_mut() = Some(response);
        stub
    }

    fn with_register(response: ApiResponse<AuthPayload>) -> Self {
        let stub = Self::default();
        *stub.register_response.borrow_mut() = Some(response);
        stub
    }

    fn with_profile(response: ApiResponse<User>) -> Self {
        let stub = Self::default();
        *stub.profile_response.borrow_mut() = Some(response);
        stub
    }

    fn call_count(&self) -> u32 {
        self.calls.get()
    }
}

impl AuthApi for StubAuthApi {
    async fn login(&self, _credentials: &LoginCredentials) -> ApiResponse<AuthPayload> {
        self.calls.set(self.calls.get() + 1);
        self.login_response
            .borrow()
            .clone()
            .unwrap_or_else(|| ApiResponse::failure("network down"))
    }

    async fn register(&self, _credentials: &RegisterCredentials) -> ApiResponse<AuthPayload> {
        self.calls.set(self.calls.get() + 1);
        self.register_response
            .borrow()
            .clone()
            .unwrap_or_else(|| ApiResponse::failure("network down"))
    }

    async fn profile(&self) -> ApiResponse<User> {
        self.calls.set(self.calls.get() + 1);
        self.profile_response
            .borrow()
            .clone()
            .unwrap_or_else(|| ApiResponse::failure("network down"))
    }
}

// =============================================================
// Helpers
// =============================================================

fn user(username: &str) -> User {
    User {
        id: 1,
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        role: "reader".to_owned(),
        created_at: String::new(),
        updated_at: String::new(),
    }
}

fn accepted(username: &str, token: &str) -> ApiResponse<AuthPayload> {
    ApiResponse {
        success: true,
        message: None,
        data: Some(AuthPayload {
            user: user(username),
            token: token.to_owned(),
        }),
        error: None,
        pagination: None,
    }
}

fn rejected(message: &str) -> ApiResponse<AuthPayload> {
    ApiResponse {
        success: false,
        message: Some(message.to_owned()),
        data: None,
        error: None,
        pagination: None,
    }
}

fn controller(
    api: StubAuthApi,
    store: MemoryTokenStore,
) -> SessionController<StubAuthApi, MemoryTokenStore> {
    SessionController::new(RwSignal::new(SessionState::default()), api, store)
}

fn creds() -> LoginCredentials {
    LoginCredentials {
        email: "ali@example.com".to_owned(),
        password: "hunter2".to_owned(),
    }
}

fn assert_invariant(state: &SessionState) {
    assert_eq!(
        state.is_authenticated(),
        state.user().is_some() && state.token().is_some()
    );
}

// =============================================================
// Defaults and initialize
// =============================================================

#[test]
fn default_session_is_anonymous_and_loading() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
    assert!(state.token().is_none());
    assert!(state.last_error.is_none());
    assert!(state.loading);
}

#[test]
fn initialize_without_token_stays_anonymous_without_network() {
    let api = StubAuthApi::default();
    let ctl = controller(api.clone(), MemoryTokenStore::new());

    block_on(ctl.initialize());

    let state = ctl.session().get_untracked();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(api.call_count(), 0);
}

#[test]
fn initialize_with_token_resolves_profile() {
    let api = StubAuthApi::with_profile(ApiResponse {
        success: true,
        message: None,
        data: Some(user("ali")),
        error: None,
        pagination: None,
    });
    let store = MemoryTokenStore::with_token("abc");
    let ctl = controller(api, store.clone());

    block_on(ctl.initialize());

    let state = ctl.session().get_untracked();
    assert!(state.is_authenticated());
    assert_eq!(state.user().map(|u| u.username.as_str()), Some("ali"));
    assert_eq!(state.token(), Some("abc"));
    assert!(!state.loading);
    assert_eq!(store.get().as_deref(), Some("abc"));
}

#[test]
fn initialize_with_failing_profile_discards_token() {
    // Stub default answers with a transport-failure envelope.
    let api = StubAuthApi::default();
    let store = MemoryTokenStore::with_token("stale");
    let ctl = controller(api.clone(), store.clone());

    block_on(ctl.initialize());

    let state = ctl.session().get_untracked();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert!(store.get().is_none());
    // Single attempt, no retry.
    assert_eq!(api.call_count(), 1);
    assert_invariant(&state);
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_success_establishes_session_and_persists_token() {
    let store = MemoryTokenStore::new();
    let ctl = controller(StubAuthApi::with_login(accepted("ali", "abc")), store.clone());

    let outcome = block_on(ctl.login(&creds()));

    assert_eq!(outcome, LoginOutcome::Authenticated);
    let state = ctl.session().get_untracked();
    assert!(state.is_authenticated());
    assert_eq!(state.user().map(|u| u.username.as_str()), Some("ali"));
    assert_eq!(store.get().as_deref(), Some("abc"));
    assert!(state.last_error.is_none());
    assert_invariant(&state);
}

#[test]
fn login_rejection_surfaces_server_message() {
    let store = MemoryTokenStore::new();
    let ctl = controller(
        StubAuthApi::with_login(rejected("Invalid credentials")),
        store.clone(),
    );

    let outcome = block_on(ctl.login(&creds()));

    assert_eq!(outcome, LoginOutcome::Rejected);
    let state = ctl.session().get_untracked();
    assert!(!state.is_authenticated());
    assert_eq!(state.last_error.as_deref(), Some("Invalid credentials"));
    assert!(store.get().is_none());
    assert_invariant(&state);
}

#[test]
fn login_failure_without_message_uses_fallback() {
    let ctl = controller(
        StubAuthApi::with_login(ApiResponse {
            success: false,
            message: None,
            data: None,
            error: None,
            pagination: None,
        }),
        MemoryTokenStore::new(),
    );

    block_on(ctl.login(&creds()));

    let state = ctl.session().get_untracked();
    assert_eq!(state.last_error.as_deref(), Some(LOGIN_FALLBACK));
}

#[test]
fn login_clears_previous_error_before_attempt() {
    let api = StubAuthApi::with_login(rejected("Invalid credentials"));
    let ctl = controller(api.clone(), MemoryTokenStore::new());

    block_on(ctl.login(&creds()));
    assert!(ctl.session().get_untracked().last_error.is_some());

    *api.login_response.borrow_mut() = Some(accepted("ali", "abc"));
    let outcome = block_on(ctl.login(&creds()));

    assert_eq!(outcome, LoginOutcome::Authenticated);
    assert!(ctl.session().get_untracked().last_error.is_none());
}

// =============================================================
// Register
// =============================================================

#[test]
fn register_success_behaves_like_login() {
    let store = MemoryTokenStore::new();
    let ctl = controller(
        StubAuthApi::with_register(accepted("newcomer", "fresh")),
        store.clone(),
    );

    let outcome = block_on(ctl.register(&RegisterCredentials {
        username: "newcomer".to_owned(),
        email: "new@example.com".to_owned(),
        password: "hunter2".to_owned(),
    }));

    assert_eq!(outcome, LoginOutcome::Authenticated);
    let state = ctl.session().get_untracked();
    assert!(state.is_authenticated());
    assert_eq!(store.get().as_deref(), Some("fresh"));
}

#[test]
fn register_rejection_sets_error_and_persists_nothing() {
    let store = MemoryTokenStore::new();
    let ctl = controller(
        StubAuthApi::with_register(rejected("Username taken")),
        store.clone(),
    );

    let outcome = block_on(ctl.register(&RegisterCredentials {
        username: "taken".to_owned(),
        email: "taken@example.com".to_owned(),
        password: "hunter2".to_owned(),
    }));

    assert_eq!(outcome, LoginOutcome::Rejected);
    assert_eq!(
        ctl.session().get_untracked().last_error.as_deref(),
        Some("Username taken")
    );
    assert!(store.get().is_none());
}

// =============================================================
// Logout and clear_error
// =============================================================

#[test]
fn logout_always_clears_session_without_network() {
    let api = StubAuthApi::with_login(accepted("ali", "abc"));
    let store = MemoryTokenStore::new();
    let ctl = controller(api.clone(), store.clone());

    block_on(ctl.login(&creds()));
    assert!(ctl.session().get_untracked().is_authenticated());
    let calls_before = api.call_count();

    ctl.logout();

    let state = ctl.session().get_untracked();
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
    assert!(state.token().is_none());
    assert!(store.get().is_none());
    assert_eq!(api.call_count(), calls_before);
    assert_invariant(&state);
}

#[test]
fn logout_from_anonymous_is_a_no_op_transition() {
    let ctl = controller(StubAuthApi::default(), MemoryTokenStore::new());

    ctl.logout();

    let state = ctl.session().get_untracked();
    assert!(!state.is_authenticated());
    assert_invariant(&state);
}

#[test]
fn clear_error_is_idempotent() {
    let ctl = controller(
        StubAuthApi::with_login(rejected("Invalid credentials")),
        MemoryTokenStore::new(),
    );
    block_on(ctl.login(&creds()));
    let before = ctl.session().get_untracked();

    ctl.clear_error();
    let first = ctl.session().get_untracked();
    assert!(first.last_error.is_none());

    ctl.clear_error();
    let second = ctl.session().get_untracked();
    assert!(second.last_error.is_none());

    // No other field moves.
    assert_eq!(first.user(), before.user());
    assert_eq!(first.token(), before.token());
    assert_eq!(first.loading, before.loading);
    assert_eq!(first, second);
}

// =============================================================
// Invariant across operation sequences
// =============================================================

#[test]
fn invariant_holds_across_mixed_sequences() {
    let api = StubAuthApi::with_login(accepted("ali", "abc"));
    let store = MemoryTokenStore::new();
    let ctl = controller(api.clone(), store.clone());

    block_on(ctl.initialize());
    assert_invariant(&ctl.session().get_untracked());

    block_on(ctl.login(&creds()));
    assert_invariant(&ctl.session().get_untracked());

    *api.login_response.borrow_mut() = Some(rejected("nope"));
    block_on(ctl.login(&creds()));
    assert_invariant(&ctl.session().get_untracked());

    ctl.logout();
    assert_invariant(&ctl.session().get_untracked());

    ctl.clear_error();
    assert_invariant(&ctl.session().get_untracked());
}
