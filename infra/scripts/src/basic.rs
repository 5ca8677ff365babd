use crate::TextNormalizer;
use crate::error::ScriptError;
use crate::text::{
    collapse_whitespace, ensure_well_formed, remove_bracketed, remove_symbols,
    remove_symbols_and_diacritics, split_letters,
};

/// Language-agnostic cleanup.
///
/// Lowercases, drops bracketed annotations, turns marks, symbols and punctuation
/// into spaces and collapses whitespace. With `remove_diacritics` accented
/// letters are folded to their base letter instead of being split apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicNormalizer {
    remove_diacritics: bool,
    split_letters: bool,
}

impl BasicNormalizer {
    #[must_use]
    pub const fn new(remove_diacritics: bool, split_letters: bool) -> Self {
        Self { remove_diacritics, split_letters }
    }
}

impl TextNormalizer for BasicNormalizer {
    fn apply(&self, text: &str) -> Result<String, ScriptError> {
        ensure_well_formed(text)?;

        let text = remove_bracketed(&text.to_lowercase());
        let mut text = if self.remove_diacritics {
            remove_symbols_and_diacritics(&text, "")
        } else {
            remove_symbols(&text, "")
        };
        if self.split_letters {
            text = split_letters(&text);
        }

        Ok(collapse_whitespace(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_lowercase_and_strip_punctuation() {
        let out = BasicNormalizer::default().apply("Hello,   World! [music]").unwrap();
        assert_eq!(out, "hello world");
    }

    #[test]
    fn diacritics_are_folded_on_request() {
        let keep = BasicNormalizer::default().apply("naïve café").unwrap();
        let fold = BasicNormalizer::new(true, false).apply("naïve café").unwrap();
        assert_eq!(keep, "naïve café");
        assert_eq!(fold, "naive cafe");
    }

    #[test]
    fn letters_are_split_on_request() {
        let out = BasicNormalizer::new(false, true).apply("Abc, de").unwrap();
        assert_eq!(out, "a b c d e");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(BasicNormalizer::default().apply("").unwrap(), "");
        assert_eq!(BasicNormalizer::default().apply(" (inaudible) ").unwrap(), "");
    }

    #[test]
    fn control_characters_fail() {
        let err = BasicNormalizer::default().apply("a\u{7}b").unwrap_err();
        assert!(matches!(err, ScriptError::MalformedInput { .. }));
    }
}
