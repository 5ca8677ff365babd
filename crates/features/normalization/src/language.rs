//! Language registry: the single table mapping a language identifier to its
//! normalizer capability and option schema.

use crate::error::NormalizationError;
use crate::schema::{IndicCommonOptions, NasalsMode, SchemaKind, ValidatedOptions};
use lipi_scripts::{
    BasicNormalizer, EnglishNormalizer, IndicConfig, IndicNormalizer, NasalsPolicy, Script,
    TextNormalizer,
};
use serde::{Serialize, Serializer};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Supported languages.
///
/// Displays as the canonical wire code; parses from either the code or the
/// lowercase label (`"hi"` and `"hindi"`), case-sensitively.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum LanguageCode {
    #[strum(to_string = "en", serialize = "english")]
    English,
    #[strum(to_string = "basic")]
    Basic,
    #[strum(to_string = "devanagari")]
    Devanagari,
    #[strum(to_string = "hi", serialize = "hindi")]
    Hindi,
    #[strum(to_string = "pa", serialize = "punjabi")]
    Punjabi,
    #[strum(to_string = "te", serialize = "telugu")]
    Telugu,
    #[strum(to_string = "gu", serialize = "gujarati")]
    Gujarati,
    #[strum(to_string = "or", serialize = "odia")]
    Odia,
    #[strum(to_string = "bn", serialize = "bengali")]
    Bengali,
    #[strum(to_string = "ta", serialize = "tamil")]
    Tamil,
    #[strum(to_string = "kn", serialize = "kannada")]
    Kannada,
    #[strum(to_string = "ml", serialize = "malayalam")]
    Malayalam,
}

impl LanguageCode {
    /// Canonical wire code.
    #[must_use]
    pub fn code(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub fn entry(self) -> &'static LanguageEntry {
        &LANGUAGES[self as usize]
    }
}

impl Serialize for LanguageCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// How a language is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    English,
    Basic,
    Indic(Script),
}

impl Capability {
    /// Builds a configured normalizer.
    ///
    /// # Errors
    /// Returns [`NormalizationError::Internal`] when the options were validated
    /// against a schema this capability cannot consume.
    pub fn build(
        self,
        options: &ValidatedOptions,
    ) -> Result<Box<dyn TextNormalizer>, NormalizationError> {
        let normalizer: Box<dyn TextNormalizer> = match (self, options) {
            (Self::English, ValidatedOptions::NoOptions) => Box::new(EnglishNormalizer::new()),
            (Self::Basic, ValidatedOptions::Basic(o)) => {
                Box::new(BasicNormalizer::new(o.remove_diacritics, o.split_letters))
            },
            (Self::Indic(script), ValidatedOptions::IndicCommon(o)) => {
                Box::new(IndicNormalizer::new(script, indic_config(o)))
            },
            (Self::Indic(script @ Script::Bengali), ValidatedOptions::Bengali(o)) => {
                let config = IndicConfig {
                    remap_assamese_chars: o.remap_assamese_chars,
                    ..indic_config(&o.common)
                };
                Box::new(IndicNormalizer::new(script, config))
            },
            (Self::Indic(script @ Script::Gurmukhi), ValidatedOptions::Punjabi(o)) => {
                let config = IndicConfig {
                    canonicalize_addak: o.canonicalize_addak,
                    canonicalize_tippi: o.canonicalize_tippi,
                    replace_vowel_bases: o.replace_vowel_bases,
                    ..indic_config(&o.common)
                };
                Box::new(IndicNormalizer::new(script, config))
            },
            (Self::Indic(script @ Script::Odia), ValidatedOptions::Odia(o)) => {
                let config = IndicConfig { remap_wa: o.remap_wa, ..indic_config(&o.common) };
                Box::new(IndicNormalizer::new(script, config))
            },
            (capability, options) => {
                return Err(NormalizationError::Internal {
                    message: format!(
                        "capability {capability:?} cannot take {} options",
                        options.kind()
                    )
                    .into(),
                    context: None,
                });
            },
        };
        Ok(normalizer)
    }
}

fn indic_config(options: &IndicCommonOptions) -> IndicConfig {
    IndicConfig {
        remove_nuktas: options.remove_nuktas,
        nasals: match options.nasals_mode {
            NasalsMode::DoNothing => NasalsPolicy::Keep,
            NasalsMode::ToAnusvaaraStrict => NasalsPolicy::AnusvaraStrict,
            NasalsMode::ToAnusvaaraRelaxed => NasalsPolicy::AnusvaraRelaxed,
            NasalsMode::ToNasalConsonants => NasalsPolicy::NasalConsonants,
        },
        normalize_chandras: options.normalize_chandras,
        normalize_vowel_ending: options.normalize_vowel_ending,
        tts_mode: options.tts_mode,
        ..IndicConfig::default()
    }
}

/// One registry row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    pub code: LanguageCode,
    pub label: &'static str,
    pub display_name: &'static str,
    pub capability: Capability,
    pub schema: SchemaKind,
}

const fn row(
    code: LanguageCode,
    label: &'static str,
    display_name: &'static str,
    capability: Capability,
    schema: SchemaKind,
) -> LanguageEntry {
    LanguageEntry { code, label, display_name, capability, schema }
}

/// Ordered by [`LanguageCode`] discriminant.
pub static LANGUAGES: [LanguageEntry; 12] = [
    row(LanguageCode::English, "english", "English", Capability::English, SchemaKind::NoOptions),
    row(
        LanguageCode::Basic,
        "basic",
        "Basic (language-agnostic)",
        Capability::Basic,
        SchemaKind::Basic,
    ),
    row(
        LanguageCode::Devanagari,
        "devanagari",
        "Devanagari",
        Capability::Indic(Script::Devanagari),
        SchemaKind::IndicCommon,
    ),
    row(
        LanguageCode::Hindi,
        "hindi",
        "Hindi",
        Capability::Indic(Script::Devanagari),
        SchemaKind::IndicCommon,
    ),
    row(
        LanguageCode::Punjabi,
        "punjabi",
        "Punjabi (Gurmukhi)",
        Capability::Indic(Script::Gurmukhi),
        SchemaKind::Punjabi,
    ),
    row(
        LanguageCode::Telugu,
        "telugu",
        "Telugu",
        Capability::Indic(Script::Telugu),
        SchemaKind::IndicCommon,
    ),
    row(
        LanguageCode::Gujarati,
        "gujarati",
        "Gujarati",
        Capability::Indic(Script::Gujarati),
        SchemaKind::IndicCommon,
    ),
    row(LanguageCode::Odia, "odia", "Odia", Capability::Indic(Script::Odia), SchemaKind::Odia),
    row(
        LanguageCode::Bengali,
        "bengali",
        "Bengali",
        Capability::Indic(Script::Bengali),
        SchemaKind::Bengali,
    ),
    row(
        LanguageCode::Tamil,
        "tamil",
        "Tamil",
        Capability::Indic(Script::Tamil),
        SchemaKind::IndicCommon,
    ),
    row(
        LanguageCode::Kannada,
        "kannada",
        "Kannada",
        Capability::Indic(Script::Kannada),
        SchemaKind::IndicCommon,
    ),
    row(
        LanguageCode::Malayalam,
        "malayalam",
        "Malayalam",
        Capability::Indic(Script::Malayalam),
        SchemaKind::IndicCommon,
    ),
];

/// Registry rows in table order.
#[must_use]
pub fn entries() -> &'static [LanguageEntry] {
    &LANGUAGES
}

/// Every canonical wire code, in table order.
#[must_use]
pub fn supported_codes() -> Vec<&'static str> {
    LANGUAGES.iter().map(|e| e.code.code()).collect()
}

/// Looks up a language by wire code or label.
///
/// # Errors
/// Returns [`NormalizationError::UnsupportedLanguage`] listing every supported code.
pub fn resolve(language: &str) -> Result<&'static LanguageEntry, NormalizationError> {
    language.parse::<LanguageCode>().map(LanguageCode::entry).map_err(|_| {
        NormalizationError::UnsupportedLanguage {
            language: language.to_owned(),
            supported: supported_codes(),
            context: None,
        }
    })
}

/// Entry of the language listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSummary {
    pub code: &'static str,
    pub display_name: &'static str,
}

#[must_use]
pub fn list_supported_languages() -> Vec<LanguageSummary> {
    LANGUAGES
        .iter()
        .map(|e| LanguageSummary { code: e.code.code(), display_name: e.display_name })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn table_is_indexed_by_discriminant() {
        for code in LanguageCode::iter() {
            assert_eq!(code.entry().code, code);
        }
        assert_eq!(LANGUAGES.len(), LanguageCode::iter().count());
    }

    #[test]
    fn codes_and_labels_resolve() {
        for entry in entries() {
            assert_eq!(resolve(entry.code.code()).unwrap(), entry);
            assert_eq!(resolve(entry.label).unwrap(), entry);
        }
    }

    #[test]
    fn resolution_is_case_sensitive() {
        assert!(resolve("Hindi").is_err());
        assert!(resolve("EN").is_err());
        assert!(resolve(" en").is_err());
    }

    #[test]
    fn devanagari_and_hindi_share_capability_and_schema() {
        let devanagari = resolve("devanagari").unwrap();
        let hindi = resolve("hi").unwrap();
        assert_ne!(devanagari.code, hindi.code);
        assert_eq!(devanagari.capability, hindi.capability);
        assert_eq!(devanagari.schema, hindi.schema);
    }

    #[test]
    fn unknown_language_lists_every_code() {
        let err = resolve("klingon").unwrap_err();
        let NormalizationError::UnsupportedLanguage { supported, .. } = &err else {
            panic!("unexpected error: {err}");
        };
        assert_eq!(supported.len(), 12);
        let message = err.to_string();
        let codes =
            ["en", "basic", "devanagari", "hi", "pa", "te", "gu", "or", "bn", "ta", "kn", "ml"];
        assert!(codes.iter().all(|code| message.contains(code)));
    }

    #[test]
    fn mismatched_options_are_an_internal_error() {
        let err = Capability::English
            .build(&ValidatedOptions::defaults(SchemaKind::Basic))
            .unwrap_err();
        assert_eq!(err.kind(), "internal");

        let err = Capability::Indic(Script::Tamil)
            .build(&ValidatedOptions::defaults(SchemaKind::Odia))
            .unwrap_err();
        assert_eq!(err.kind(), "internal");
    }

    #[test]
    fn every_entry_builds_with_its_defaults() {
        for entry in entries() {
            let options = ValidatedOptions::defaults(entry.schema);
            assert!(entry.capability.build(&options).is_ok(), "{}", entry.code);
        }
    }
}
