//! Authentication endpoints: login, register, profile.

use serde::Serialize;

use super::client::ApiClient;
use super::types::{
    ApiResponse, AuthPayload, LoginCredentials, ProfileUpdate, RegisterCredentials, User,
};

/// `POST auth/login` — exchange credentials for a token and user.
pub async fn login(client: &ApiClient, credentials: &LoginCredentials) -> ApiResponse<AuthPayload> {
    client.post("auth/login", credentials).await
}

/// `POST auth/register` — create an account; answers like login.
pub async fn register(
    client: &ApiClient,
    credentials: &RegisterCredentials,
) -> ApiResponse<AuthPayload> {
    client.post("auth/register", credentials).await
}

/// `GET auth/profile` — the user the bearer token belongs to.
pub async fn profile(client: &ApiClient) -> ApiResponse<User> {
    client.get("auth/profile").await
}

/// `PUT auth/profile` — update username/email for the current user.
pub async fn update_profile(client: &ApiClient, changes: &ProfileUpdate) -> ApiResponse<User> {
    client.put("auth/profile", changes).await
}

/// `PUT auth/change-password`.
pub async fn change_password(
    client: &ApiClient,
    current_password: &str,
    new_password: &str,
) -> ApiResponse<()> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Body<'a> {
        current_password: &'a str,
        new_password: &'a str,
    }
    client
        .put(
            "auth/change-password",
            &Body {
                current_password,
                new_password,
            },
        )
        .await
}
