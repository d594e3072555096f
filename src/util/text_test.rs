use super::*;

#[test]
fn short_text_is_untouched() {
    assert_eq!(truncate("brief", 10), "brief");
    assert_eq!(truncate("", 10), "");
}

#[test]
fn long_text_is_cut_with_ellipsis() {
    assert_eq!(truncate("a longer sentence", 8), "a longer...");
}

#[test]
fn exact_length_is_untouched() {
    assert_eq!(truncate("12345", 5), "12345");
}

#[test]
fn multibyte_text_cuts_on_characters() {
    assert_eq!(truncate("çok önemli haber", 3), "çok...");
}
