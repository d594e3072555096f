use super::*;

// =============================================================
// Envelope
// =============================================================

#[test]
fn envelope_with_only_success_deserializes() {
    let envelope: ApiResponse<Vec<News>> = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert!(envelope.success);
    assert!(envelope.data.is_none());
    assert!(envelope.message.is_none());
    assert!(envelope.pagination.is_none());
}

#[test]
fn envelope_carries_pagination() {
    let body = r#"{
        "success": true,
        "data": [],
        "pagination": {"total": 42, "page": 2, "limit": 10, "pages": 5}
    }"#;
    let envelope: ApiResponse<Vec<News>> = serde_json::from_str(body).unwrap();
    let pagination = envelope.pagination.unwrap();
    assert_eq!(pagination.total, 42);
    assert_eq!(pagination.page, 2);
    assert_eq!(pagination.pages, 5);
}

#[test]
fn envelope_null_data_is_none() {
    let envelope: ApiResponse<Reaction> =
        serde_json::from_str(r#"{"success":true,"data":null}"#).unwrap();
    assert!(envelope.success);
    assert!(envelope.data.is_none());
}

#[test]
fn failure_envelope_has_message_and_no_data() {
    let envelope: ApiResponse<News> = ApiResponse::failure("down");
    assert!(!envelope.success);
    assert_eq!(envelope.message.as_deref(), Some("down"));
    assert!(envelope.into_data().is_none());
}

#[test]
fn into_data_ignores_payload_on_failure() {
    let envelope = ApiResponse {
        success: false,
        message: None,
        data: Some(1_u32),
        error: None,
        pagination: None,
    };
    assert!(envelope.into_data().is_none());
}

// =============================================================
// Domain types
// =============================================================

#[test]
fn news_deserializes_camel_case_fields() {
    let body = r#"{
        "id": 7,
        "title": "Markets rally",
        "content": "Body text",
        "imageUrl": "https://cdn.example.com/7.jpg",
        "publishedAt": "2024-05-23T15:30:00.000Z",
        "createdAt": "2024-05-23T15:31:00.000Z",
        "updatedAt": "2024-05-23T15:31:00.000Z",
        "categories": [{"id":1,"name":"Economy","slug":"economy"}]
    }"#;
    let news: News = serde_json::from_str(body).unwrap();
    assert_eq!(news.id, 7);
    assert_eq!(news.image_url.as_deref(), Some("https://cdn.example.com/7.jpg"));
    assert_eq!(news.published_at, "2024-05-23T15:30:00.000Z");
    assert_eq!(news.categories.unwrap()[0].slug, "economy");
    assert!(news.comments.is_none());
}

#[test]
fn reaction_type_is_lowercase_on_the_wire() {
    assert_eq!(
        serde_json::to_string(&ReactionType::Surprised).unwrap(),
        r#""surprised""#
    );
    let kind: ReactionType = serde_json::from_str(r#""angry""#).unwrap();
    assert_eq!(kind, ReactionType::Angry);
}

#[test]
fn reaction_uses_type_field_name() {
    let body = r#"{"id":3,"userId":9,"newsId":7,"type":"like"}"#;
    let reaction: Reaction = serde_json::from_str(body).unwrap();
    assert_eq!(reaction.kind, ReactionType::Like);
    assert_eq!(reaction.user_id, 9);

    let counts: Vec<ReactionCount> =
        serde_json::from_str(r#"[{"type":"happy","count":12}]"#).unwrap();
    assert_eq!(counts[0].kind, ReactionType::Happy);
    assert_eq!(counts[0].count, 12);
}

// =============================================================
// News query building
// =============================================================

#[test]
fn empty_query_renders_no_query_string() {
    assert_eq!(NewsQuery::default().to_query_string(), "");
}

#[test]
fn latest_query_sorts_newest_first() {
    let query = NewsQuery::latest(12);
    assert_eq!(
        query.to_query_string(),
        "?limit=12&sort=publishedAt&order=DESC"
    );
}

#[test]
fn full_query_renders_all_parameters() {
    let query = NewsQuery {
        category: Some("economy".to_owned()),
        author: None,
        source: Some("wire".to_owned()),
        keyword: Some("rate hike".to_owned()),
        page: Some(3),
        limit: Some(10),
        sort: Some("publishedAt".to_owned()),
        order: Some(SortOrder::Asc),
    };
    assert_eq!(
        query.to_query_string(),
        "?category=economy&source=wire&keyword=rate%20hike&page=3&limit=10&sort=publishedAt&order=ASC"
    );
}

#[test]
fn keyword_is_percent_encoded() {
    let query = NewsQuery {
        keyword: Some("50% off & more?".to_owned()),
        ..NewsQuery::default()
    };
    assert_eq!(
        query.to_query_string(),
        "?keyword=50%25%20off%20%26%20more%3F"
    );
}
