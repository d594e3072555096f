use super::*;

fn at(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
}

#[test]
fn recent_timestamps_are_just_now() {
    let now = at("2024-05-23T15:30:00Z");
    assert_eq!(format_relative("2024-05-23T15:29:30Z", now), "just now");
}

#[test]
fn future_timestamps_clamp_to_just_now() {
    let now = at("2024-05-23T15:30:00Z");
    assert_eq!(format_relative("2024-05-23T16:45:00Z", now), "just now");
}

#[test]
fn minutes_hours_days_scale_with_plurals() {
    let now = at("2024-05-23T15:30:00Z");
    assert_eq!(format_relative("2024-05-23T15:29:00Z", now), "1 minute ago");
    assert_eq!(format_relative("2024-05-23T15:05:00Z", now), "25 minutes ago");
    assert_eq!(format_relative("2024-05-23T14:25:00Z", now), "1 hour ago");
    assert_eq!(format_relative("2024-05-22T15:30:00Z", now), "1 day ago");
    assert_eq!(format_relative("2024-05-20T10:00:00Z", now), "3 days ago");
    assert_eq!(format_relative("2024-02-01T00:00:00Z", now), "3 months ago");
    assert_eq!(format_relative("2021-05-01T00:00:00Z", now), "3 years ago");
}

#[test]
fn offset_timestamps_normalize_to_utc() {
    let now = at("2024-05-23T15:30:00Z");
    // +02:00 offset: same instant as 13:25 UTC.
    assert_eq!(
        format_relative("2024-05-23T15:25:00+02:00", now),
        "2 hours ago"
    );
}

#[test]
fn unparseable_input_renders_empty() {
    let now = at("2024-05-23T15:30:00Z");
    assert_eq!(format_relative("", now), "");
    assert_eq!(format_relative("yesterday", now), "");
    assert_eq!(format_full("not-a-date"), "");
}

#[test]
fn full_format_reads_naturally() {
    assert_eq!(
        format_full("2024-05-23T15:30:00.000Z"),
        "23 May 2024, 15:30"
    );
    assert_eq!(format_full("2024-01-05T09:05:00Z"), "5 January 2024, 09:05");
}
