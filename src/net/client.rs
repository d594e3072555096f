//! Authenticated HTTP request pipeline.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token read from the [`TokenStore`] before every request. Server-side
//! (SSR): stubs returning the transport-failure envelope, since data is
//! fetched in the browser after hydration.
//!
//! An authorization-denied response (HTTP 401) is an unconditional,
//! unrecoverable signal: the pipeline clears the persisted token
//! synchronously and then fires the `on_unauthorized` callback installed by
//! the application wiring. Navigation is the wiring's business, not ours.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::token::TokenStore;
use super::types::ApiResponse;

/// Shown when a request never produced a server answer.
pub const TRANSPORT_ERROR: &str = "Unable to reach the server. Please try again.";

const UNAUTHORIZED: u16 = 401;

#[derive(Clone, Copy)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Shared request pipeline: base URL, token storage, and the
/// authorization-denied callback.
///
/// Cheap to clone; clones share the same token store and callback.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    store: Arc<dyn TokenStore>,
    on_unauthorized: Arc<dyn Fn() + Send + Sync>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, store: Arc<dyn TokenStore>) -> Self {
        Self {
            base_url: base_url.into(),
            store,
            on_unauthorized: Arc::new(|| {}),
        }
    }

    /// Install the callback fired after a 401 has cleared the stored token.
    pub fn with_unauthorized_handler(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Arc::new(handler);
        self
    }

    pub fn token_store(&self) -> Arc<dyn TokenStore> {
        Arc::clone(&self.store)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.dispatch(Method::Get, path, None).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResponse<T> {
        self.dispatch(Method::Post, path, Some(to_body(body))).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResponse<T> {
        self.dispatch(Method::Put, path, Some(to_body(body))).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.dispatch(Method::Delete, path, None).await
    }

    /// React to a response status before the body reaches the caller.
    ///
    /// A 401 invalidates the session no matter which request triggered it:
    /// the token is cleared first, then the wiring's callback runs.
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn handle_unauthorized(&self, status: u16) {
        if status == UNAUTHORIZED {
            self.store.clear();
            (self.on_unauthorized)();
        }
    }

    #[cfg(feature = "hydrate")]
    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ApiResponse<T> {
        use gloo_net::http::Request;

        let url = join_url(&self.base_url, path);
        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        if let Some(token) = self.store.get() {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder.json(&json),
            None => builder.build(),
        };
        let request = match request {
            Ok(r) => r,
            Err(e) => {
                leptos::logging::warn!("failed to build request for {url}: {e}");
                return ApiResponse::failure(TRANSPORT_ERROR);
            }
        };

        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                leptos::logging::warn!("request to {url} failed: {e}");
                return ApiResponse::failure(TRANSPORT_ERROR);
            }
        };

        self.handle_unauthorized(response.status());

        // Error statuses still carry the uniform envelope; pass it through
        // verbatim when it decodes.
        match response.json::<ApiResponse<T>>().await {
            Ok(envelope) => envelope,
            Err(e) => {
                leptos::logging::warn!("undecodable response from {url}: {e}");
                ApiResponse::failure(TRANSPORT_ERROR)
            }
        }
    }

    #[cfg(not(feature = "hydrate"))]
    async fn dispatch<T: DeserializeOwned>(
        &self,
        _method: Method,
        _path: &str,
        _body: Option<serde_json::Value>,
    ) -> ApiResponse<T> {
        ApiResponse::failure(TRANSPORT_ERROR)
    }
}

fn to_body<B: Serialize>(body: &B) -> serde_json::Value {
    serde_json::to_value(body).unwrap_or(serde_json::Value::Null)
}

/// Join the configured base URL with an endpoint path, tolerating slashes
/// on either side.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
