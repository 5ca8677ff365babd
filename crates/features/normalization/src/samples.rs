//! Ready-made request payloads, one per language.

use crate::error::NormalizationError;
use crate::language::{self, LanguageCode};
use serde::Serialize;
use serde_json::{Value, json};
use strum::IntoEnumIterator;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRequest {
    pub text: &'static str,
    pub language: LanguageCode,
    pub options: Option<Value>,
}

fn sample(language: LanguageCode) -> SampleRequest {
    let (text, options) = match language {
        LanguageCode::English => ("Hello, world! I'm gonna check the colour [noise].", None),
        LanguageCode::Basic => {
            ("Crème Brûlée (laughs) à la carte!", Some(json!({"remove_diacritics": true})))
        },
        LanguageCode::Devanagari => ("क़लम और काग़ज़", Some(json!({"remove_nuktas": true}))),
        LanguageCode::Hindi => (
            "नमस्ते, दुनिया! हिन्दी",
            Some(json!({"tts_mode": true, "nasals_mode": "to_anusvaara_relaxed"})),
        ),
        LanguageCode::Punjabi => (
            "ਪੱਕਾ ਮੁੰਡਾ ਅਾਪ",
            Some(json!({
                "canonicalize_addak": true,
                "canonicalize_tippi": true,
                "replace_vowel_bases": true
            })),
        ),
        LanguageCode::Telugu => ("తెలుగు భాష", Some(json!({"normalize_chandras": true}))),
        LanguageCode::Gujarati => {
            ("ગુજરાતી હિન્દી", Some(json!({"nasals_mode": "to_anusvaara_strict"})))
        },
        LanguageCode::Odia => ("ଓଡ଼ିଆ ଭାଷା", Some(json!({"remap_wa": true, "remove_nuktas": true}))),
        LanguageCode::Bengali => ("ৰং আৰু ৱাৰ", Some(json!({"remap_assamese_chars": true}))),
        LanguageCode::Tamil => ("தமிழ் மொழி!", None),
        LanguageCode::Kannada => ("ಕನ್ನಡ ಭಾಷೆ", Some(json!({"nasals_mode": "to_nasal_consonants"}))),
        LanguageCode::Malayalam => {
            ("അവന്\u{200D} വന്നു്.", Some(json!({"normalize_vowel_ending": true})))
        },
    };
    SampleRequest { text, language, options }
}

/// One sample per language, in registry order.
#[must_use]
pub fn sample_requests() -> Vec<SampleRequest> {
    LanguageCode::iter().map(sample).collect()
}

/// The sample for one language.
///
/// # Errors
/// [`NormalizationError::UnsupportedLanguage`] for an unknown language.
pub fn sample_request(language: &str) -> Result<SampleRequest, NormalizationError> {
    language::resolve(language).map(|entry| sample(entry.code))
}
