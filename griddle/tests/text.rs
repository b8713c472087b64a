use griddle::TextAlign;
use griddle::text::{display_width, fit_to_width, truncate_to_width};

#[test]
fn test_truncate_short_string_unchanged() {
    assert_eq!(truncate_to_width("abc", 5), "abc");
    assert_eq!(truncate_to_width("abc", 3), "abc");
}

#[test]
fn test_truncate_appends_ellipsis() {
    assert_eq!(truncate_to_width("abcdef", 4), "abc…");
}

#[test]
fn test_truncate_never_exceeds_width() {
    for width in 0..10 {
        let out = truncate_to_width("a long header label", width);
        assert!(display_width(&out) <= width, "width {width}: {out:?}");
    }
}

#[test]
fn test_truncate_respects_wide_chars() {
    // Each CJK char is two cells; "你好" at width 3 leaves room for one
    // char plus the ellipsis.
    assert_eq!(truncate_to_width("你好世界", 3), "你…");
    assert_eq!(truncate_to_width("你好", 4), "你好");
}

#[test]
fn test_fit_pads_to_exact_width() {
    assert_eq!(fit_to_width("ab", 5, TextAlign::Left), "ab   ");
    assert_eq!(fit_to_width("ab", 5, TextAlign::Right), "   ab");
    assert_eq!(fit_to_width("ab", 6, TextAlign::Center), "  ab  ");
}

#[test]
fn test_fit_truncates_overflow() {
    assert_eq!(fit_to_width("abcdef", 4, TextAlign::Left), "abc…");
    assert_eq!(display_width(&fit_to_width("abcdef", 4, TextAlign::Right)), 4);
}
