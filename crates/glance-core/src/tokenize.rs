//! Source text tokenization.

/// Splits `text` into display tokens on runs of whitespace.
///
/// With `clean_words` set, leading and trailing punctuation/symbol
/// characters are stripped from each fragment; fragments emptied by
/// stripping are dropped. Pure function: identical inputs always yield an
/// identical sequence.
pub fn tokenize(text: &str, clean_words: bool) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|fragment| {
            let word = if clean_words {
                clean_word(fragment)
            } else {
                fragment
            };
            (!word.is_empty()).then(|| word.to_owned())
        })
        .collect()
}

/// Strips leading/trailing characters outside the letter and digit
/// categories. Interior punctuation (hyphens, apostrophes) is preserved.
fn clean_word(fragment: &str) -> &str {
    fragment.trim_matches(|c: char| !c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_runs() {
        assert_eq!(tokenize("a  b\nc", false), ["a", "b", "c"]);
        assert_eq!(tokenize("  uno\t dos \r\n tres ", false), ["uno", "dos", "tres"]);
    }

    #[test]
    fn empty_and_blank_input_yield_no_tokens() {
        assert!(tokenize("", false).is_empty());
        assert!(tokenize("   \n\t ", true).is_empty());
    }

    #[test]
    fn clean_words_strips_edge_punctuation() {
        assert_eq!(tokenize("hello, world!", true), ["hello", "world"]);
        assert_eq!(tokenize("\u{ab}hola\u{bb} \u{2014} mundo\u{2026}", true), ["hola", "mundo"]);
    }

    #[test]
    fn clean_words_keeps_interior_punctuation() {
        assert_eq!(tokenize("don't re-read", true), ["don't", "re-read"]);
    }

    #[test]
    fn fragments_emptied_by_cleaning_are_dropped() {
        assert_eq!(tokenize("one -- two", true), ["one", "two"]);
        assert!(tokenize("... !!!", true).is_empty());
    }

    #[test]
    fn cleaning_disabled_keeps_punctuation() {
        assert_eq!(tokenize("hello, world!", false), ["hello,", "world!"]);
    }

    #[test]
    fn tokenization_is_idempotent() {
        let text = "Uno, dos; tres... \u{2014}cuatro";
        for clean in [false, true] {
            assert_eq!(tokenize(text, clean), tokenize(text, clean));
        }
    }
}
