use super::*;

#[test]
fn known_slugs_map_to_display_names() {
    assert_eq!(display_name("breaking-news"), "Breaking News");
    assert_eq!(display_name("economy"), "Economy");
}

#[test]
fn unknown_slugs_are_humanized() {
    assert_eq!(display_name("local-elections"), "Local Elections");
    assert_eq!(display_name("weather"), "Weather");
}

#[test]
fn slugify_joins_alphanumeric_runs() {
    assert_eq!(slugify("Breaking News"), "breaking-news");
    assert_eq!(slugify("  Local   Elections "), "local-elections");
    assert_eq!(slugify("Economy"), "economy");
}

#[test]
fn slugify_drops_punctuation() {
    assert_eq!(slugify("Q&A: Markets"), "q-a-markets");
    assert_eq!(slugify(""), "");
}
