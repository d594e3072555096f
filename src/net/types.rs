//! Wire types for the portal API.
//!
//! Field names follow the backend's camelCase JSON; unknown or absent
//! optional fields deserialize to `None` so older server payloads keep
//! working.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A registered portal user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Login form payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Registration form payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterCredentials {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful login/register response body: the user plus a bearer token.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthPayload {
    pub user: User,
    pub token: String,
}

/// Partial profile update; only the present fields change.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A news article.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
    #[serde(default)]
    pub comments: Option<Vec<Comment>>,
    #[serde(default)]
    pub reactions: Option<Vec<ReactionCount>>,
}

/// A browsable news category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// A reader comment on an article.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub content: String,
    pub user_id: u64,
    pub news_id: u64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Emoji-style reaction kinds, lowercase on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionType {
    Like,
    Dislike,
    Angry,
    Happy,
    Sad,
    Surprised,
}

impl ReactionType {
    /// All kinds, in display order.
    pub const ALL: [Self; 6] = [
        Self::Like,
        Self::Dislike,
        Self::Angry,
        Self::Happy,
        Self::Sad,
        Self::Surprised,
    ];

    /// Emoji glyph shown on the reaction button.
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Like => "\u{1f44d}",
            Self::Dislike => "\u{1f44e}",
            Self::Angry => "\u{1f620}",
            Self::Happy => "\u{1f604}",
            Self::Sad => "\u{1f622}",
            Self::Surprised => "\u{1f632}",
        }
    }

    /// Accessible label for the reaction button.
    pub fn label(self) -> &'static str {
        match self {
            Self::Like => "Like",
            Self::Dislike => "Dislike",
            Self::Angry => "Angry",
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Surprised => "Surprised",
        }
    }
}

/// One user's reaction to one article.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    pub id: u64,
    pub user_id: u64,
    pub news_id: u64,
    #[serde(rename = "type")]
    pub kind: ReactionType,
    #[serde(default)]
    pub created_at: String,
}

/// Aggregated reaction tally for an article.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCount {
    #[serde(rename = "type")]
    pub kind: ReactionType,
    pub count: u64,
}

/// Paging metadata returned alongside list responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub pages: u32,
}

/// The uniform response envelope every endpoint answers with.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de>"
))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> ApiResponse<T> {
    /// Envelope for a request that never produced a server answer.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            error: None,
            pagination: None,
        }
    }

    /// The payload, if the call succeeded and the server sent one.
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}

/// Sort direction, uppercase on the query string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Query parameters for news listings. All fields are pass-throughs; the
/// backend does the filtering, sorting, and paging.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsQuery {
    pub category: Option<String>,
    pub author: Option<String>,
    pub source: Option<String>,
    pub keyword: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
}

impl NewsQuery {
    /// Newest-first listing, the default for every page of the portal.
    pub fn latest(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            sort: Some("publishedAt".to_owned()),
            order: Some(SortOrder::Desc),
            ..Self::default()
        }
    }

    /// Render as a query string (with leading `?`), or an empty string when
    /// no parameter is set.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(v) = &self.category {
            pairs.push(("category", encode_component(v)));
        }
        if let Some(v) = &self.author {
            pairs.push(("author", encode_component(v)));
        }
        if let Some(v) = &self.source {
            pairs.push(("source", encode_component(v)));
        }
        if let Some(v) = &self.keyword {
            pairs.push(("keyword", encode_component(v)));
        }
        if let Some(v) = self.page {
            pairs.push(("page", v.to_string()));
        }
        if let Some(v) = self.limit {
            pairs.push(("limit", v.to_string()));
        }
        if let Some(v) = &self.sort {
            pairs.push(("sort", encode_component(v)));
        }
        if let Some(v) = self.order {
            pairs.push(("order", v.as_str().to_owned()));
        }

        if pairs.is_empty() {
            return String::new();
        }
        let mut out = String::from("?");
        for (i, (key, value)) in pairs.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
        out
    }
}

/// Percent-encode a query component (RFC 3986 unreserved set kept as-is).
fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}
