//! Reaction endpoints.

use serde::Serialize;

use super::client::ApiClient;
use super::types::{ApiResponse, Reaction, ReactionCount, ReactionType};

/// `GET reactions/news/{newsId}` — aggregated tallies for one article.
pub async fn fetch_reactions(client: &ApiClient, news_id: u64) -> ApiResponse<Vec<ReactionCount>> {
    client.get(&format!("reactions/news/{news_id}")).await
}

/// `GET reactions/user/news/{newsId}` — the current user's reaction, if
/// any (`data: null` when none). Requires a session.
pub async fn fetch_user_reaction(client: &ApiClient, news_id: u64) -> ApiResponse<Reaction> {
    client.get(&format!("reactions/user/news/{news_id}")).await
}

/// `POST reactions` — add or replace the current user's reaction.
pub async fn set_reaction(
    client: &ApiClient,
    news_id: u64,
    kind: ReactionType,
) -> ApiResponse<Reaction> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Body {
        news_id: u64,
        #[serde(rename = "type")]
        kind: ReactionType,
    }
    client.post("reactions", &Body { news_id, kind }).await
}

/// `DELETE reactions/news/{newsId}` — withdraw the current user's reaction.
pub async fn remove_reaction(client: &ApiClient, news_id: u64) -> ApiResponse<()> {
    client.delete(&format!("reactions/news/{news_id}")).await
}
