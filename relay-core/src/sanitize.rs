//! ASCII normalisation for model output.
//!
//! Model replies are printed to consoles that may not be UTF-8 aware and are
//! spliced verbatim into later prompts. [`clean_text`] reduces a reply to
//! printable ASCII plus `\n`, `\t` and `\r`, mapping the common typographic
//! quotes and the em dash to their plain equivalents.

/// Normalise `input` to printable ASCII.
///
/// - `U+0020..=U+007E`, `\n`, `\t`, `\r` are kept unchanged.
/// - `U+2018` / `U+2019` become `'`, `U+201C` / `U+201D` become `"`.
/// - `U+2014` becomes `-`.
/// - Everything else, including other control characters and all remaining
///   non-ASCII characters, is dropped.
///
/// The output only contains characters that are kept unchanged, so the
/// function is idempotent.
pub fn clean_text(input: &str) -> String {
    input.chars().filter_map(normalize_char).collect()
}

fn normalize_char(c: char) -> Option<char> {
    match c {
        ' '..='~' | '\n' | '\t' | '\r' => Some(c),
        '\u{2018}' | '\u{2019}' => Some('\''),
        '\u{201C}' | '\u{201D}' => Some('"'),
        '\u{2014}' => Some('-'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_replaces_smart_punctuation_and_drops_controls() {
        let input = "\u{2018}it\u{2019}s\u{201C}  \u{201D}a\u{2014}b\u{0007}c";
        assert_eq!(clean_text(input), "'it's\"  \"a-bc");
    }

    #[test]
    fn test_preserves_whitespace_controls() {
        let input = "line one\n\tindented\r\nend";
        assert_eq!(clean_text(input), input);
    }

    #[test]
    fn test_drops_other_non_ascii() {
        assert_eq!(clean_text("caf\u{e9} \u{2013} na\u{ef}ve \u{1F680}"), "caf  nave ");
        assert_eq!(clean_text("\u{7f}\u{0}\u{1b}[0m"), "[0m");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_text(""), "");
    }

    proptest! {
        #[test]
        fn prop_clean_text_is_idempotent(s in any::<String>()) {
            let once = clean_text(&s);
            prop_assert_eq!(clean_text(&once), once);
        }

        #[test]
        fn prop_output_is_printable_ascii(s in any::<String>()) {
            let cleaned = clean_text(&s);
            prop_assert!(cleaned
                .chars()
                .all(|c| (' '..='~').contains(&c) || matches!(c, '\n' | '\t' | '\r')));
        }

        #[test]
        fn prop_printable_ascii_is_untouched(s in "[ -~\n\t\r]*") {
            prop_assert_eq!(clean_text(&s), s);
        }
    }
}
