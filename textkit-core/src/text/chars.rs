//! Character classification and per-character transforms
//!
//! Full-width forms (U+FF01–U+FF5E) sit at a fixed offset of `0xFEE0` from
//! their ASCII counterparts; the ideographic space U+3000 is the odd one out
//! and maps to U+0020 directly.

use regex::Regex;
use std::sync::OnceLock;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Offset between a full-width form and its ASCII counterpart
pub const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Ideographic (full-width) space
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Replacement for each run of digits
pub const NUM_TOKEN: &str = "<num>";

static DIGITS: OnceLock<Regex> = OnceLock::new();

/// Whether `ch` counts as whitespace: space, tab, CR, LF or any `Zs` character
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
        || get_general_category(ch) == GeneralCategory::SpaceSeparator
}

/// Whether `ch` counts as punctuation
///
/// Every non-alphanumeric printable ASCII character qualifies, even those
/// Unicode files under symbols (`$`, `^`, `` ` ``), along with every
/// character in a Unicode punctuation category.
pub fn is_punctuation(ch: char) -> bool {
    let cp = ch as u32;
    if (33..=47).contains(&cp)
        || (58..=64).contains(&cp)
        || (91..=96).contains(&cp)
        || (123..=126).contains(&cp)
    {
        return true;
    }
    matches!(
        get_general_category(ch),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

/// Map a full-width character to its half-width form
///
/// Characters whose mapped code point is not printable ASCII are returned
/// unchanged.
pub fn to_halfwidth_char(ch: char) -> char {
    let mapped = if ch == IDEOGRAPHIC_SPACE {
        Some(0x20)
    } else {
        (ch as u32).checked_sub(FULLWIDTH_OFFSET)
    };
    match mapped {
        Some(cp @ 0x20..=0x7E) => char::from_u32(cp).unwrap_or(ch),
        _ => ch,
    }
}

/// Map every full-width character in `text` to half-width
pub fn to_halfwidth(text: &str) -> String {
    text.chars().map(to_halfwidth_char).collect()
}

/// Remove every punctuation character
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|&c| !is_punctuation(c)).collect()
}

/// Remove every whitespace character
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|&c| !is_whitespace(c)).collect()
}

/// Replace each maximal run of ASCII digits with `<num>`
pub fn mask_digits(text: &str) -> String {
    let digits = DIGITS.get_or_init(|| Regex::new("[0-9]+").expect("digit pattern is valid"));
    digits.replace_all(text, NUM_TOKEN).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_whitespace_classes() {
        for ch in [' ', '\t', '\n', '\r', '\u{3000}', '\u{00A0}', '\u{2003}'] {
            assert!(is_whitespace(ch), "{ch:?} should be whitespace");
        }
        for ch in ['a', '中', '\u{000B}', '。'] {
            assert!(!is_whitespace(ch), "{ch:?} should not be whitespace");
        }
    }

    #[test]
    fn test_ascii_punctuation() {
        for ch in "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~".chars() {
            assert!(is_punctuation(ch), "{ch:?} should be punctuation");
        }
        for ch in "aZ09 ".chars() {
            assert!(!is_punctuation(ch), "{ch:?} should not be punctuation");
        }
    }

    #[test]
    fn test_cjk_punctuation() {
        for ch in "。，、；：？！「」『』（）《》——…·".chars() {
            assert!(is_punctuation(ch), "{ch:?} should be punctuation");
        }
        assert!(!is_punctuation('中'));
        assert!(!is_punctuation('￥'));
    }

    #[test]
    fn test_halfwidth_mapping() {
        assert_eq!(to_halfwidth_char('Ａ'), 'A');
        assert_eq!(to_halfwidth_char('１'), '1');
        assert_eq!(to_halfwidth_char('！'), '!');
        assert_eq!(to_halfwidth_char('～'), '~');
        assert_eq!(to_halfwidth_char('\u{3000}'), ' ');
        assert_eq!(to_halfwidth_char('中'), '中');
        assert_eq!(to_halfwidth_char('a'), 'a');
        assert_eq!(to_halfwidth("ＨＥＬＬＯ　世界１２３"), "HELLO 世界123");
    }

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(strip_punctuation("a,b.c!"), "abc");
        assert_eq!(strip_punctuation("你好，世界！"), "你好世界");
    }

    #[test]
    fn test_strip_whitespace() {
        assert_eq!(strip_whitespace(" 你 好\t世\u{3000}界\r\n"), "你好世界");
    }

    #[test]
    fn test_mask_digits() {
        assert_eq!(mask_digits("a123b45"), "a<num>b<num>");
        assert_eq!(mask_digits("2024年10月"), "<num>年<num>月");
        assert_eq!(mask_digits("no digits"), "no digits");
        // full-width digits are not ASCII digits
        assert_eq!(mask_digits("１２"), "１２");
    }

    proptest! {
        #[test]
        fn halfwidth_is_idempotent(s in "\\PC*") {
            let once = to_halfwidth(&s);
            prop_assert_eq!(to_halfwidth(&once), once);
        }

        #[test]
        fn halfwidth_preserves_char_count(s in "\\PC*") {
            prop_assert_eq!(to_halfwidth(&s).chars().count(), s.chars().count());
        }

        #[test]
        fn masked_text_has_no_ascii_digits(s in "[a-z0-9中文]{0,40}") {
            prop_assert!(!mask_digits(&s).chars().any(|c| c.is_ascii_digit()));
        }
    }
}
