use regex::Regex;

lazy_static::lazy_static! {
    static ref WORD_RGX: Regex = Regex::new(r"\w+").unwrap();
}

/// Lowercases `text` and returns every maximal run of word characters
/// (letters, digits, underscore) in source order. Punctuation and
/// whitespace never produce tokens, so the empty string and strings of
/// pure punctuation both come back as an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RGX
        .find_iter(&lowered)
        .map(|word| word.as_str().to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_and_whitespace() {
        let tokens = tokenize("Hello, world!!  123_abc");
        assert_eq!(tokens, vec!["hello", "world", "123_abc"]);
    }

    #[test]
    fn lowercases_every_token() {
        let tokens = tokenize("GOOD good GoOd");
        assert_eq!(tokens, vec!["good", "good", "good"]);
    }

    #[test]
    fn keeps_source_order() {
        let tokens = tokenize("one two one three");
        assert_eq!(tokens, vec!["one", "two", "one", "three"]);
    }

    #[test]
    fn empty_and_blank_input_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t\n  ").is_empty());
        assert!(tokenize("?!,.;:").is_empty());
    }
}
