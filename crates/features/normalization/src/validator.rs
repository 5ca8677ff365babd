use crate::error::{NormalizationError, OptionIssue};
use crate::language::LanguageCode;
use crate::schema::{self, SchemaKind, ValidatedOptions, json_type_name};
use serde_json::Value;
use tracing::debug;

/// Validates caller options for `language`.
///
/// `None` and JSON `null` mean "no options"; they (like an empty object) yield the
/// declared defaults. Languages without options reject every other payload,
/// including `{}`.
///
/// # Errors
/// * [`NormalizationError::OptionsNotAllowed`] for options on a language that takes none.
/// * [`NormalizationError::InvalidOptions`] with every rejected field.
pub fn validate_for_language(
    language: LanguageCode,
    raw: Option<&Value>,
) -> Result<ValidatedOptions, NormalizationError> {
    let kind = language.entry().schema;
    let raw = raw.filter(|value| !value.is_null());

    let Some(raw) = raw else {
        debug!(%language, %kind, "No options supplied, using defaults");
        return Ok(ValidatedOptions::defaults(kind));
    };

    if kind == SchemaKind::NoOptions {
        return Err(NormalizationError::OptionsNotAllowed {
            language: language.code(),
            context: None,
        });
    }

    let Value::Object(map) = raw else {
        let found = json_type_name(raw);
        return Err(invalid(language, vec![OptionIssue::NotAnObject { found }]));
    };

    schema::validate(kind, map).map_err(|issues| invalid(language, issues))
}

fn invalid(language: LanguageCode, issues: Vec<OptionIssue>) -> NormalizationError {
    NormalizationError::InvalidOptions { language: language.code(), issues, context: None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BasicOptions, IndicCommonOptions, NasalsMode};
    use serde_json::json;

    #[test]
    fn english_rejects_even_an_empty_object() {
        let err = validate_for_language(LanguageCode::English, Some(&json!({}))).unwrap_err();
        assert_eq!(err.kind(), "options_not_allowed");
    }

    #[test]
    fn english_accepts_null_and_absent_options() {
        assert_eq!(
            validate_for_language(LanguageCode::English, Some(&Value::Null)).unwrap(),
            ValidatedOptions::NoOptions
        );
        assert_eq!(
            validate_for_language(LanguageCode::English, None).unwrap(),
            ValidatedOptions::NoOptions
        );
    }

    #[test]
    fn basic_fills_in_defaults() {
        let options =
            validate_for_language(LanguageCode::Basic, Some(&json!({"remove_diacritics": true})))
                .unwrap();
        assert_eq!(
            options,
            ValidatedOptions::Basic(BasicOptions { remove_diacritics: true, split_letters: false })
        );
    }

    #[test]
    fn non_object_payload_is_invalid() {
        let err =
            validate_for_language(LanguageCode::Tamil, Some(&json!(["tts_mode"]))).unwrap_err();
        let NormalizationError::InvalidOptions { language, issues, .. } = err else {
            panic!("expected invalid options");
        };
        assert_eq!(language, "ta");
        assert_eq!(issues, [OptionIssue::NotAnObject { found: "array" }]);
    }

    #[test]
    fn bengali_names_the_unexpected_field() {
        let raw = json!({"remap_assamese_chars": true, "unexpected_field": 1});
        let err = validate_for_language(LanguageCode::Bengali, Some(&raw)).unwrap_err();
        let NormalizationError::InvalidOptions { issues, .. } = &err else {
            panic!("expected invalid options, got {err}");
        };
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field(), Some("unexpected_field"));
        assert!(err.to_string().contains("unexpected_field"));
    }

    #[test]
    fn punjabi_lists_allowed_nasals_modes() {
        let raw = json!({"nasals_mode": "not_a_real_mode"});
        let err = validate_for_language(LanguageCode::Punjabi, Some(&raw)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("nasals_mode"));
        for mode in NasalsMode::values() {
            assert!(message.contains(mode), "{message}");
        }
    }

    #[test]
    fn hindi_keeps_supplied_values() {
        let raw = json!({"tts_mode": true, "nasals_mode": "to_anusvaara_relaxed"});
        let options = validate_for_language(LanguageCode::Hindi, Some(&raw)).unwrap();
        assert_eq!(
            options,
            ValidatedOptions::IndicCommon(IndicCommonOptions {
                tts_mode: true,
                nasals_mode: NasalsMode::ToAnusvaaraRelaxed,
                ..IndicCommonOptions::default()
            })
        );
    }
}
