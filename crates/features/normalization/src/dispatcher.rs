//! The straight-line pipeline `resolve → validate → instantiate → invoke → respond`.

use crate::error::NormalizationError;
use crate::language::{self, LanguageCode};
use crate::schema::{self, NasalsMode, SchemaDescription, ValidatedOptions};
use crate::validator::validate_for_language;
use serde::Serialize;
use serde_json::Value;
use strum::IntoEnumIterator;
use tracing::{debug, error, instrument, warn};

/// Outcome of a successful [`normalize`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationResult {
    pub normalized_text: String,
    pub language_used: LanguageCode,
    pub options_used: ValidatedOptions,
}

/// A validated language/options pair, ready to instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub language: LanguageCode,
    pub options: ValidatedOptions,
}

/// Entry of the nasals mode listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NasalsModeSummary {
    pub value: &'static str,
    pub description: &'static str,
}

/// Resolves `language` and validates `raw` against its schema.
///
/// # Errors
/// [`NormalizationError::UnsupportedLanguage`], [`NormalizationError::OptionsNotAllowed`]
/// or [`NormalizationError::InvalidOptions`].
pub fn resolve_and_validate(
    language: &str,
    raw: Option<&Value>,
) -> Result<ResolvedOptions, NormalizationError> {
    let entry = language::resolve(language).inspect_err(log_failure)?;
    debug!(language = %entry.code, schema = %entry.schema, "Language resolved");

    let options = validate_for_language(entry.code, raw).inspect_err(log_failure)?;
    debug!(language = %entry.code, "Options validated");

    Ok(ResolvedOptions { language: entry.code, options })
}

/// Normalizes `text` for `language` with the caller's raw options.
///
/// A fresh normalizer is built for every call; nothing is cached or retried.
///
/// # Errors
/// Every failure of [`resolve_and_validate`], plus
/// [`NormalizationError::NormalizationFailed`] when the normalizer rejects the text
/// and [`NormalizationError::Internal`] on a capability/options mismatch.
#[instrument(level = "debug", skip_all, fields(language = %language, chars = text.chars().count()))]
pub fn normalize(
    text: &str,
    language: &str,
    raw: Option<&Value>,
) -> Result<NormalizationResult, NormalizationError> {
    let ResolvedOptions { language, options } = resolve_and_validate(language, raw)?;

    let normalizer = language.entry().capability.build(&options).inspect_err(log_failure)?;
    debug!(normalizer = ?normalizer, "Normalizer instantiated");

    let normalized_text = normalizer
        .apply(text)
        .map_err(|source| NormalizationError::NormalizationFailed {
            language: language.code(),
            source,
            context: None,
        })
        .inspect_err(log_failure)?;
    debug!(output_chars = normalized_text.chars().count(), "Text normalized");

    Ok(NormalizationResult { normalized_text, language_used: language, options_used: options })
}

/// Describes the options accepted by `language`.
///
/// # Errors
/// [`NormalizationError::UnsupportedLanguage`] for an unknown language.
pub fn describe_options(language: &str) -> Result<SchemaDescription, NormalizationError> {
    let entry = language::resolve(language).inspect_err(log_failure)?;
    Ok(schema::describe(entry.schema))
}

/// Supported languages in registry order.
#[must_use]
pub fn list_supported_languages() -> Vec<language::LanguageSummary> {
    language::list_supported_languages()
}

/// Nasals modes in declaration order.
#[must_use]
pub fn list_nasals_modes() -> Vec<NasalsModeSummary> {
    NasalsMode::iter()
        .map(|mode| NasalsModeSummary { value: mode.as_str(), description: mode.description() })
        .collect()
}

fn log_failure(err: &NormalizationError) {
    if err.is_client_error() {
        warn!(kind = err.kind(), "{err}");
    } else {
        error!(kind = err.kind(), "{err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn english_hello_world() {
        let result = normalize("Hello, world!", "en", None).unwrap();
        assert_eq!(result.normalized_text, "hello world");
        assert_eq!(result.language_used.code(), "en");
        assert_eq!(result.options_used, ValidatedOptions::NoOptions);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"normalizedText": "hello world", "languageUsed": "en", "optionsUsed": null})
        );
    }

    #[test]
    fn failures_short_circuit_in_pipeline_order() {
        let err = normalize("text", "xx", Some(&json!({"bogus": 1}))).unwrap_err();
        assert_eq!(err.kind(), "unsupported_language");

        let err = normalize("text", "en", Some(&json!({}))).unwrap_err();
        assert_eq!(err.kind(), "options_not_allowed");

        let err = normalize("text\u{0}", "ta", Some(&json!({"bogus": 1}))).unwrap_err();
        assert_eq!(err.kind(), "invalid_options");
    }

    #[test]
    fn capability_failure_names_the_language() {
        let err = normalize("bad\u{1}", "ml", None).unwrap_err();
        let NormalizationError::NormalizationFailed { language, .. } = &err else {
            panic!("unexpected error: {err}");
        };
        assert_eq!(*language, "ml");
        assert_eq!(err.kind(), "normalization_failed");
    }

    #[test]
    fn labels_resolve_to_the_canonical_code() {
        let result = normalize("नमस्ते", "hindi", None).unwrap();
        assert_eq!(result.language_used, LanguageCode::Hindi);
        assert_eq!(result.language_used.to_string(), "hi");
    }

    #[test]
    fn describe_unknown_language_fails() {
        assert_eq!(describe_options("xx").unwrap_err().kind(), "unsupported_language");
        assert!(!describe_options("english").unwrap().accepts_options);
    }

    #[test]
    fn listings_follow_declaration_order() {
        let codes: Vec<_> = list_supported_languages().iter().map(|l| l.code).collect();
        assert_eq!(codes.first(), Some(&"en"));
        assert_eq!(codes.last(), Some(&"ml"));
        let modes: Vec<_> = list_nasals_modes().iter().map(|m| m.value).collect();
        assert_eq!(modes, NasalsMode::values());
    }
}
