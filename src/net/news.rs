//! News and category endpoints.

use super::client::ApiClient;
use super::types::{ApiResponse, Category, News, NewsQuery};

/// `GET news` with pass-through query parameters.
pub async fn fetch_news(client: &ApiClient, query: &NewsQuery) -> ApiResponse<Vec<News>> {
    let path = format!("news{}", query.to_query_string());
    client.get(&path).await
}

/// `GET news/{id}` — one article with its categories, comments and
/// reaction tallies.
pub async fn fetch_news_by_id(client: &ApiClient, id: u64) -> ApiResponse<News> {
    client.get(&format!("news/{id}")).await
}

/// `GET news` filtered to a category slug.
pub async fn fetch_news_by_category(
    client: &ApiClient,
    slug: &str,
    query: &NewsQuery,
) -> ApiResponse<Vec<News>> {
    let query = NewsQuery {
        category: Some(slug.to_owned()),
        ..query.clone()
    };
    fetch_news(client, &query).await
}

/// `GET news` filtered by a search keyword.
pub async fn search_news(
    client: &ApiClient,
    keyword: &str,
    query: &NewsQuery,
) -> ApiResponse<Vec<News>> {
    let query = NewsQuery {
        keyword: Some(keyword.to_owned()),
        ..query.clone()
    };
    fetch_news(client, &query).await
}

/// `GET categories` — all browsable categories.
pub async fn fetch_categories(client: &ApiClient) -> ApiResponse<Vec<Category>> {
    client.get("categories").await
}
