use crate::TextNormalizer;
use crate::error::ScriptError;
use crate::text::{
    collapse_whitespace, compile, ensure_well_formed, remove_bracketed,
    remove_symbols_and_diacritics,
};
use regex::Regex;
use std::sync::LazyLock;

/// Currency signs, the percent sign and the decimal point survive symbol removal.
const KEPT_SYMBOLS: &str = ".%$¢€£";

static FILLERS: LazyLock<Regex> = LazyLock::new(|| compile(r"\b(hmm|mm|mhm|mmm|uh|um)\b"));
static SPACE_BEFORE_APOSTROPHE: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+'"));
static THOUSANDS_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| compile(r"(\d),(\d)"));
static SENTENCE_PERIOD: LazyLock<Regex> = LazyLock::new(|| compile(r"\.([^0-9]|$)"));
static DETACHED_SYMBOL: LazyLock<Regex> = LazyLock::new(|| compile(r"[.$¢€£]([^0-9])"));
static DETACHED_PERCENT: LazyLock<Regex> = LazyLock::new(|| compile(r"([^0-9])%"));
static WORD: LazyLock<Regex> = LazyLock::new(|| compile(r"[a-z]+"));

/// Applied in order; specific forms must precede the generic suffix rules.
static REPLACEMENTS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\bwon't\b", "will not"),
        (r"\bcan't\b", "can not"),
        (r"\blet's\b", "let us"),
        (r"\bain't\b", "aint"),
        (r"\by'all\b", "you all"),
        (r"\bwanna\b", "want to"),
        (r"\bgotta\b", "got to"),
        (r"\bgonna\b", "going to"),
        (r"\bi'ma\b", "i am going to"),
        (r"\bimma\b", "i am going to"),
        (r"\bwoulda\b", "would have"),
        (r"\bcoulda\b", "could have"),
        (r"\bshoulda\b", "should have"),
        (r"\bma'am\b", "madam"),
        (r"\bmr\b", "mister "),
        (r"\bmrs\b", "missus "),
        (r"\bst\b", "saint "),
        (r"\bdr\b", "doctor "),
        (r"\bprof\b", "professor "),
        (r"\bcapt\b", "captain "),
        (r"\bgov\b", "governor "),
        (r"\bsgt\b", "sergeant "),
        (r"\bjr\b", "junior "),
        (r"\bsr\b", "senior "),
        (r"n't\b", " not"),
        (r"'re\b", " are"),
        (r"'s\b", " is"),
        (r"'d\b", " would"),
        (r"'ll\b", " will"),
        (r"'t\b", " not"),
        (r"'ve\b", " have"),
        (r"'m\b", " am"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (compile(pattern), replacement))
    .collect()
});

/// British spellings rewritten to their American form.
const SPELLINGS: &[(&str, &str)] = &[
    ("analyse", "analyze"),
    ("behaviour", "behavior"),
    ("centre", "center"),
    ("colour", "color"),
    ("colours", "colors"),
    ("defence", "defense"),
    ("favourite", "favorite"),
    ("grey", "gray"),
    ("honour", "honor"),
    ("labour", "labor"),
    ("licence", "license"),
    ("metre", "meter"),
    ("neighbour", "neighbor"),
    ("organise", "organize"),
    ("programme", "program"),
    ("realise", "realize"),
    ("theatre", "theater"),
    ("travelled", "traveled"),
    ("travelling", "traveling"),
];

/// English transcription cleanup.
///
/// Extends the basic pipeline with filler-word removal, contraction expansion,
/// title expansion and American spelling. Currency and percent signs attached to
/// digits are preserved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnglishNormalizer;

impl EnglishNormalizer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TextNormalizer for EnglishNormalizer {
    fn apply(&self, text: &str) -> Result<String, ScriptError> {
        ensure_well_formed(text)?;

        let mut s = remove_bracketed(&text.to_lowercase());
        s = FILLERS.replace_all(&s, "").into_owned();
        s = SPACE_BEFORE_APOSTROPHE.replace_all(&s, "'").into_owned();

        for (pattern, replacement) in REPLACEMENTS.iter() {
            s = pattern.replace_all(&s, *replacement).into_owned();
        }

        s = THOUSANDS_SEPARATOR.replace_all(&s, "$1$2").into_owned();
        s = SENTENCE_PERIOD.replace_all(&s, " $1").into_owned();
        s = remove_symbols_and_diacritics(&s, KEPT_SYMBOLS);
        s = DETACHED_SYMBOL.replace_all(&s, " $1").into_owned();
        s = DETACHED_PERCENT.replace_all(&s, "$1 ").into_owned();
        s = WORD
            .replace_all(&s, |caps: &regex::Captures<'_>| {
                let word = &caps[0];
                SPELLINGS
                    .iter()
                    .find(|(british, _)| *british == word)
                    .map_or_else(|| word.to_owned(), |(_, american)| (*american).to_owned())
            })
            .into_owned();

        Ok(collapse_whitespace(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(text: &str) -> String {
        EnglishNormalizer::new().apply(text).unwrap()
    }

    #[test]
    fn punctuation_and_case() {
        assert_eq!(normalize("Hello, world!"), "hello world");
    }

    #[test]
    fn contractions_are_expanded() {
        assert_eq!(normalize("I won't go, they're late"), "i will not go they are late");
        assert_eq!(normalize("We're gonna win"), "we are going to win");
    }

    #[test]
    fn fillers_and_annotations_are_dropped() {
        assert_eq!(normalize("Um, I think [laughter] uh yes"), "i think yes");
    }

    #[test]
    fn titles_are_expanded() {
        assert_eq!(normalize("Mr. Smith met Dr. Jones"), "mister smith met doctor jones");
    }

    #[test]
    fn british_spelling_becomes_american() {
        assert_eq!(normalize("My favourite colour"), "my favorite color");
    }

    #[test]
    fn numbers_keep_their_symbols() {
        assert_eq!(normalize("It costs $1,000.50 or 20%."), "it costs $1000.50 or 20%");
    }
}
