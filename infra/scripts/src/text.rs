//! Helpers shared by every backend.

use crate::error::ScriptError;
use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

static ANGLE_OR_SQUARE: LazyLock<Regex> = LazyLock::new(|| compile(r"[<\[][^>\]]*[>\]]"));
static PARENTHESIZED: LazyLock<Regex> = LazyLock::new(|| compile(r"\(([^)]+?)\)"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+"));

/// Letters that carry a diacritic but have no canonical decomposition.
const ADDITIONAL_DIACRITICS: &[(char, &str)] = &[
    ('œ', "oe"),
    ('Œ', "OE"),
    ('ø', "o"),
    ('Ø', "O"),
    ('æ', "ae"),
    ('Æ', "AE"),
    ('ß', "ss"),
    ('ẞ', "SS"),
    ('đ', "d"),
    ('Đ', "D"),
    ('ð', "d"),
    ('Ð', "D"),
    ('þ', "th"),
    ('Þ', "th"),
    ('ł', "l"),
    ('Ł', "L"),
];

pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static normalizer pattern must compile")
}

/// Rejects control characters other than tab, newline and carriage return.
pub(crate) fn ensure_well_formed(text: &str) -> Result<(), ScriptError> {
    match text.char_indices().find(|&(_, c)| c.is_control() && !matches!(c, '\t' | '\n' | '\r')) {
        Some((offset, c)) => Err(ScriptError::MalformedInput {
            message: format!("control character U+{:04X} at byte {offset}", u32::from(c)).into(),
            context: None,
        }),
        None => Ok(()),
    }
}

/// Drops `[...]`, `<...>` and `(...)` spans (annotations such as `[noise]`).
pub(crate) fn remove_bracketed(text: &str) -> String {
    let text = ANGLE_OR_SQUARE.replace_all(text, "");
    PARENTHESIZED.replace_all(&text, "").into_owned()
}

/// Punctuation or symbol: neither letter, digit, mark nor whitespace.
pub(crate) fn is_symbol_or_punctuation(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace() && !is_combining_mark(c)
}

/// NFKC, then marks, symbols and punctuation become spaces.
pub(crate) fn remove_symbols(text: &str, keep: &str) -> String {
    text.nfkc()
        .map(|c| {
            if keep.contains(c) || !(is_combining_mark(c) || is_symbol_or_punctuation(c)) {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// NFKD, drops combining marks, maps undecomposable letters, and turns symbols
/// and punctuation into spaces.
pub(crate) fn remove_symbols_and_diacritics(text: &str, keep: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.nfkd() {
        if keep.contains(c) {
            out.push(c);
        } else if let Some((_, replacement)) = ADDITIONAL_DIACRITICS.iter().find(|(d, _)| *d == c)
        {
            out.push_str(replacement);
        } else if is_combining_mark(c) {
            continue;
        } else if is_symbol_or_punctuation(c) {
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}

/// Separates letter clusters (a base character and its combining marks) by spaces.
pub(crate) fn split_letters(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        if c.is_whitespace() {
            out.push(' ');
            continue;
        }
        if !is_combining_mark(c) && !out.is_empty() && !out.ends_with(' ') {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_owned()
}
