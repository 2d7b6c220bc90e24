//! Optimal-recognition-point layout.
//!
//! Each token is split around a focal character that the presenter keeps at
//! a fixed visual column across words of different lengths. The focal
//! position sits left of center and deepens with word length.

/// A token partitioned around its focal character.
///
/// For non-empty tokens `before + focus + after` reassembles the token
/// exactly; the empty token renders as a single blank placeholder.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WordLayout<'a> {
    pub before: &'a str,
    pub focus: &'a str,
    pub after: &'a str,
}

/// Focal char index for `token`, counted in chars.
///
/// Leading punctuation is skipped before the banded offset is applied, so
/// quoted or bracketed words focus on the same letter as their bare form.
/// The result is clamped into the token, making it a valid char index for
/// every non-empty token.
pub fn focus_index(token: &str) -> usize {
    let total_chars = token.chars().count();
    if total_chars == 0 {
        return 0;
    }

    let leading = token
        .chars()
        .take_while(|c| !c.is_alphanumeric())
        .count();
    let letter_chars = total_chars - leading;

    (leading + focus_offset(letter_chars)).min(total_chars - 1)
}

/// Offset of the focal char within the letter suffix, by char count.
fn focus_offset(letter_chars: usize) -> usize {
    match letter_chars {
        0..=3 => 0,
        4..=5 => 1,
        6..=9 => 2,
        10..=13 => 3,
        _ => 4,
    }
}

/// Splits `token` at its focal character.
pub fn split(token: &str) -> WordLayout<'_> {
    let focus_char = focus_index(token);

    let mut indices = token
        .char_indices()
        .map(|(byte, c)| (byte, byte + c.len_utf8()));
    let Some((focus_start, focus_end)) = indices.nth(focus_char) else {
        return WordLayout {
            before: "",
            focus: " ",
            after: "",
        };
    };

    WordLayout {
        before: &token[..focus_start],
        focus: &token[focus_start..focus_end],
        after: &token[focus_end..],
    }
}

/// Maximum measured width over the token sequence.
///
/// `measure` is supplied by the presenter and only needs to be monotonic in
/// character count; the core does not interpret the unit. Hosts use the
/// result as a width hint when sizing the reading surface.
pub fn widest_token_width<F>(tokens: &[String], measure: F) -> f64
where
    F: Fn(&str) -> f64,
{
    tokens
        .iter()
        .map(|token| measure(token))
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_reassembles_token() {
        for token in ["a", "cat", "hello", "beautiful.", "\u{ab}quijote\u{bb}", "extraordinarily"] {
            let layout = split(token);
            let rebuilt = format!("{}{}{}", layout.before, layout.focus, layout.after);
            assert_eq!(rebuilt, token);
            assert_eq!(layout.focus.chars().count(), 1);
        }
    }

    #[test]
    fn focus_deepens_with_word_length() {
        assert_eq!(focus_index("a"), 0);
        assert_eq!(focus_index("cat"), 0);
        assert_eq!(focus_index("word"), 1);
        assert_eq!(focus_index("reads"), 1);
        assert_eq!(focus_index("lector"), 2);
        assert_eq!(focus_index("beautiful"), 2);
        assert_eq!(focus_index("dictionary"), 3);
        assert_eq!(focus_index("extraordinarily"), 4);
    }

    #[test]
    fn focus_offset_is_monotonic_across_bands() {
        let mut previous = 0;
        for letter_chars in 0..=20 {
            let offset = focus_offset(letter_chars);
            assert!(offset >= previous);
            previous = offset;
        }
    }

    #[test]
    fn leading_punctuation_shifts_the_focus() {
        assert_eq!(focus_index("\u{ab}hola"), 2);
        assert_eq!(split("\u{ab}hola").focus, "o");
        assert_eq!(split("(word)").focus, "o");
    }

    #[test]
    fn all_punctuation_token_clamps_into_the_token() {
        assert_eq!(focus_index("--"), 1);
        assert_eq!(split("--").focus, "-");
    }

    #[test]
    fn empty_token_uses_blank_placeholder() {
        let layout = split("");
        assert_eq!(layout, WordLayout { before: "", focus: " ", after: "" });
    }

    #[test]
    fn multibyte_tokens_split_on_char_boundaries() {
        let layout = split("se\u{f1}or");
        assert_eq!(layout.before, "s");
        assert_eq!(layout.focus, "e");
        assert_eq!(layout.after, "\u{f1}or");
    }

    #[test]
    fn widest_width_is_the_maximum_over_tokens() {
        let tokens = vec!["uno".to_owned(), "cuarenta".to_owned(), "y".to_owned()];
        let width = widest_token_width(&tokens, |t| t.chars().count() as f64);
        assert_eq!(width, 8.0);
        assert_eq!(widest_token_width(&[], |t| t.len() as f64), 0.0);
    }
}
