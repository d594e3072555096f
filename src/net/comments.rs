//! Comment endpoints.

use serde::Serialize;

use super::client::ApiClient;
use super::types::{ApiResponse, Comment};

/// `GET comments/news/{newsId}` — paged comments for one article.
pub async fn fetch_comments(
    client: &ApiClient,
    news_id: u64,
    page: u32,
    limit: u32,
) -> ApiResponse<Vec<Comment>> {
    let path = format!("comments/news/{news_id}?page={page}&limit={limit}");
    client.get(&path).await
}

/// `POST comments` — add a comment to an article. Requires a session.
pub async fn create_comment(
    client: &ApiClient,
    news_id: u64,
    content: &str,
) -> ApiResponse<Comment> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Body<'a> {
        content: &'a str,
        news_id: u64,
    }
    client.post("comments", &Body { content, news_id }).await
}

/// `PUT comments/{id}` — edit one's own comment.
pub async fn update_comment(client: &ApiClient, id: u64, content: &str) -> ApiResponse<Comment> {
    #[derive(Serialize)]
    struct Body<'a> {
        content: &'a str,
    }
    client.put(&format!("comments/{id}"), &Body { content }).await
}

/// `DELETE comments/{id}` — remove one's own comment.
pub async fn delete_comment(client: &ApiClient, id: u64) -> ApiResponse<()> {
    client.delete(&format!("comments/{id}")).await
}
