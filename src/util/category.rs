//! Category slug/name mapping.
//!
//! The API stores categories by slug; the UI shows display names. Unknown
//! slugs are humanized rather than hidden so newly added backend categories
//! still render.

#[cfg(test)]
#[path = "category_test.rs"]
mod category_test;

/// Display name for a category slug.
pub fn display_name(slug: &str) -> String {
    match slug {
        "breaking-news" => "Breaking News".to_owned(),
        "politics" => "Politics".to_owned(),
        "economy" => "Economy".to_owned(),
        "world" => "World".to_owned(),
        "sports" => "Sports".to_owned(),
        "technology" => "Technology".to_owned(),
        "health" => "Health".to_owned(),
        "science" => "Science".to_owned(),
        "culture" => "Culture".to_owned(),
        "education" => "Education".to_owned(),
        "business" => "Business".to_owned(),
        other => humanize(other),
    }
}

/// Slug for a category name: lowercase, alphanumeric runs joined by `-`.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.to_lowercase().chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch);
        } else {
            pending_dash = true;
        }
    }
    out
}

fn humanize(slug: &str) -> String {
    slug.split('-')
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
