mod rules;
mod script;

pub use self::script::Script;

use crate::TextNormalizer;
use crate::error::ScriptError;
use crate::text::{collapse_whitespace, ensure_well_formed};
use unicode_normalization::UnicodeNormalization;

/// How nasal clusters are rewritten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NasalsPolicy {
    #[default]
    Keep,
    /// Nasal + virama + stop of the same class becomes anusvara + stop.
    AnusvaraStrict,
    /// Nasal + virama + any consonant becomes anusvara + consonant.
    AnusvaraRelaxed,
    /// Anusvara before a stop becomes the class nasal + virama.
    NasalConsonants,
}

/// Switches for [`IndicNormalizer`].
///
/// Script-specific switches are ignored for other scripts:
/// `remap_assamese_chars` applies to Bengali, `canonicalize_addak`,
/// `canonicalize_tippi` and `replace_vowel_bases` to Gurmukhi, `remap_wa` to Odia.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct IndicConfig {
    pub remove_nuktas: bool,
    pub nasals: NasalsPolicy,
    pub normalize_chandras: bool,
    pub normalize_vowel_ending: bool,
    pub tts_mode: bool,
    pub remap_assamese_chars: bool,
    pub canonicalize_addak: bool,
    pub canonicalize_tippi: bool,
    pub replace_vowel_bases: bool,
    pub remap_wa: bool,
}

/// Unicode-level normalizer for one Indic script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicNormalizer {
    script: Script,
    config: IndicConfig,
}

impl IndicNormalizer {
    #[must_use]
    pub const fn new(script: Script, config: IndicConfig) -> Self {
        Self { script, config }
    }

    fn remap_script_specific(&self, mut chars: Vec<char>) -> Vec<char> {
        let config = &self.config;
        match self.script {
            Script::Bengali if config.remap_assamese_chars => rules::remap_assamese_chars(&chars),
            Script::Odia if config.remap_wa => rules::remap_wa(&chars),
            Script::Gurmukhi => {
                if config.canonicalize_addak {
                    chars = rules::canonicalize_addak(&chars);
                }
                if config.canonicalize_tippi {
                    chars = rules::canonicalize_tippi(&chars);
                }
                if config.replace_vowel_bases {
                    chars = rules::replace_vowel_bases(&chars);
                }
                chars
            },
            _ => chars,
        }
    }
}

impl TextNormalizer for IndicNormalizer {
    fn apply(&self, text: &str) -> Result<String, ScriptError> {
        ensure_well_formed(text)?;

        let script = self.script;
        let config = &self.config;

        let nfc: Vec<char> = text.nfc().collect();
        let mut chars = self.remap_script_specific(rules::clean_zero_width(script, &nfc));

        if config.remove_nuktas {
            chars = rules::remove_nuktas(script, &chars);
        }
        if config.normalize_chandras {
            chars = rules::normalize_chandras(script, &chars);
        }
        if script.uses_anusvara() {
            chars = match config.nasals {
                NasalsPolicy::Keep => chars,
                NasalsPolicy::AnusvaraStrict => rules::to_anusvara(script, &chars, true),
                NasalsPolicy::AnusvaraRelaxed => rules::to_anusvara(script, &chars, false),
                NasalsPolicy::NasalConsonants => rules::to_nasal_consonants(script, &chars),
            };
        }

        chars = rules::strip_punctuation(&chars, config.tts_mode);
        if config.normalize_vowel_ending {
            chars = rules::normalize_vowel_ending(script, &chars);
        }

        Ok(collapse_whitespace(&chars.into_iter().collect::<String>()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(script: Script, config: IndicConfig, text: &str) -> String {
        IndicNormalizer::new(script, config).apply(text).unwrap()
    }

    #[test]
    fn defaults_only_clean_up() {
        let out = normalize(Script::Devanagari, IndicConfig::default(), "  नमस्ते,\u{200B} दुनिया! ");
        assert_eq!(out, "नमस्ते दुनिया");
    }

    #[test]
    fn tts_mode_keeps_sentence_punctuation() {
        let config = IndicConfig { tts_mode: true, ..IndicConfig::default() };
        assert_eq!(normalize(Script::Devanagari, config, "नमस्ते, दुनिया।"), "नमस्ते, दुनिया।");
    }

    #[test]
    fn nasals_policy_is_applied() {
        let config = IndicConfig { nasals: NasalsPolicy::AnusvaraStrict, ..IndicConfig::default() };
        assert_eq!(normalize(Script::Devanagari, config, "हिन्दी"), "हिंदी");
        assert_eq!(normalize(Script::Gujarati, config, "હિન્દી"), "હિંદી");
    }

    #[test]
    fn tamil_has_no_anusvara_conversion() {
        let config = IndicConfig { nasals: NasalsPolicy::AnusvaraRelaxed, ..IndicConfig::default() };
        assert_eq!(normalize(Script::Tamil, config, "பந்து"), "பந்து");
    }

    #[test]
    fn script_specific_switches_are_ignored_elsewhere() {
        let config = IndicConfig { remap_wa: true, remap_assamese_chars: true, ..IndicConfig::default() };
        assert_eq!(normalize(Script::Devanagari, config, "वन"), "वन");
        assert_eq!(normalize(Script::Bengali, config, "ৰং"), "রং");
    }

    #[test]
    fn gurmukhi_switches_compose() {
        let config = IndicConfig {
            canonicalize_addak: true,
            canonicalize_tippi: true,
            replace_vowel_bases: true,
            ..IndicConfig::default()
        };
        assert_eq!(normalize(Script::Gurmukhi, config, "ਅਾਪ ਪੱਕਾ ਮੁੰਡਾ"), "ਆਪ ਪਕ੍ਕਾ ਮੁਂਡਾ");
    }

    #[test]
    fn malformed_input_fails() {
        let err = IndicNormalizer::new(Script::Telugu, IndicConfig::default())
            .apply("తెలుగు\u{1B}")
            .unwrap_err();
        assert!(matches!(err, ScriptError::MalformedInput { .. }));
    }
}
