//! Session state and the auth lifecycle controller.
//!
//! INVARIANT
//! =========
//! A session is authenticated exactly when both the user and the token are
//! present. `SessionState` keeps the pair private and only mutates it
//! through [`SessionState::establish`] / [`SessionState::clear`], so a
//! half-authenticated state (token without user, user without token) is
//! unrepresentable.
//!
//! The controller performs no mutual exclusion: overlapping operations are
//! last-write-wins, and the forms disable their submit controls while a
//! call is in flight.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::auth;
use crate::net::client::ApiClient;
use crate::net::token::TokenStore;
use crate::net::types::{ApiResponse, AuthPayload, LoginCredentials, RegisterCredentials, User};

const LOGIN_FALLBACK: &str = "Login failed. Please try again.";
const REGISTER_FALLBACK: &str = "Registration failed. Please try again.";

/// The logged-in user and the credential that proves it, plus the last
/// operation error for inline display.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    user: Option<User>,
    token: Option<String>,
    pub last_error: Option<String>,
    /// True until `initialize` has resolved the persisted token.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            last_error: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Derived, never stored: authenticated iff user and token are both set.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    fn establish(&mut self, user: User, token: String) {
        self.user = Some(user);
        self.token = Some(token);
    }

    fn clear(&mut self) {
        self.user = None;
        self.token = None;
    }
}

/// Result of a login or register attempt, from the caller's point of view.
/// The page navigates home on `Authenticated`; on `Rejected` the inline
/// error is already set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated,
    Rejected,
}

/// Seam to the authentication service, so the controller can be exercised
/// against a stub backend in native tests.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, credentials: &LoginCredentials) -> ApiResponse<AuthPayload>;
    async fn register(&self, credentials: &RegisterCredentials) -> ApiResponse<AuthPayload>;
    async fn profile(&self) -> ApiResponse<User>;
}

/// Production [`AuthApi`] backed by the request pipeline.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    client: ApiClient,
}

impl HttpAuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &LoginCredentials) -> ApiResponse<AuthPayload> {
        auth::login(&self.client, credentials).await
    }

    async fn register(&self, credentials: &RegisterCredentials) -> ApiResponse<AuthPayload> {
        auth::register(&self.client, credentials).await
    }

    async fn profile(&self) -> ApiResponse<User> {
        auth::profile(&self.client).await
    }
}

/// Single source of truth for "who is logged in".
///
/// Owns the only mutation path to the session signal and the persisted
/// token; components consume the signal read-only.
#[derive(Clone, Debug)]
pub struct SessionController<A, S> {
    session: RwSignal<SessionState>,
    api: A,
    store: S,
}

impl<A: AuthApi, S: TokenStore> SessionController<A, S> {
    pub fn new(session: RwSignal<SessionState>, api: A, store: S) -> Self {
        Self {
            session,
            api,
            store,
        }
    }

    /// The read side, for providing to components via context.
    pub fn session(&self) -> RwSignal<SessionState> {
        self.session
    }

    /// One-shot session rehydration at startup.
    ///
    /// No persisted token leaves the session anonymous. A persisted token
    /// is resolved with a single profile fetch; on any failure the token is
    /// discarded and the session stays anonymous. No retry.
    pub async fn initialize(&self) {
        let Some(token) = self.store.get() else {
            self.session.update(|s| s.loading = false);
            return;
        };

        let response = self.api.profile().await;
        let user = if response.success { response.data } else { None };
        match user {
            Some(user) => self.session.update(|s| {
                s.establish(user, token);
                s.loading = false;
            }),
            None => {
                self.store.clear();
                self.session.update(|s| {
                    s.clear();
                    s.loading = false;
                });
            }
        }
    }

    /// Exchange credentials for a session. Persists the token and
    /// establishes the session on success; records the server's message (or
    /// a generic fallback) on failure.
    pub async fn login(&self, credentials: &LoginCredentials) -> LoginOutcome {
        self.session.update(|s| s.last_error = None);
        let response = self.api.login(credentials).await;
        self.apply_auth_response(response, LOGIN_FALLBACK)
    }

    /// Create an account; identical control flow to [`Self::login`].
    pub async fn register(&self, credentials: &RegisterCredentials) -> LoginOutcome {
        self.session.update(|s| s.last_error = None);
        let response = self.api.register(credentials).await;
        self.apply_auth_response(response, REGISTER_FALLBACK)
    }

    /// Drop the session. Purely local: clears the persisted token and the
    /// in-memory state, never issues a network call, always succeeds.
    pub fn logout(&self) {
        self.store.clear();
        self.session.update(SessionState::clear);
    }

    /// Forget the last operation error. Idempotent.
    pub fn clear_error(&self) {
        self.session.update(|s| s.last_error = None);
    }

    fn apply_auth_response(
        &self,
        response: ApiResponse<AuthPayload>,
        fallback: &str,
    ) -> LoginOutcome {
        if response.success {
            if let Some(payload) = response.data {
                self.store.set(&payload.token);
                self.session
                    .update(|s| s.establish(payload.user, payload.token));
                return LoginOutcome::Authenticated;
            }
        }

        let message = response.message.unwrap_or_else(|| fallback.to_owned());
        self.session.update(|s| {
            s.clear();
            s.last_error = Some(message);
        });
        LoginOutcome::Rejected
    }
}
