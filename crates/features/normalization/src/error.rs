use lipi_scripts::ScriptError;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Errors of the dispatch layer. Every variant is terminal for its request.
#[lipi_derive::lipi_error]
pub enum NormalizationError {
    /// The language identifier matches no registry entry.
    #[error(
        "Unsupported language '{language}'{}; supported languages: {}",
        format_context(.context),
        .supported.join(", ")
    )]
    UnsupportedLanguage {
        language: String,
        supported: Vec<&'static str>,
        context: Option<Cow<'static, str>>,
    },

    /// Options were supplied for a language that takes none.
    #[error("Language '{language}' does not accept options{}", format_context(.context))]
    OptionsNotAllowed { language: &'static str, context: Option<Cow<'static, str>> },

    /// One or more option fields were rejected.
    #[error(
        "Invalid options for language '{language}'{}: {}",
        format_context(.context),
        render_issues(.issues)
    )]
    InvalidOptions {
        language: &'static str,
        issues: Vec<OptionIssue>,
        context: Option<Cow<'static, str>>,
    },

    /// The normalizer rejected the text.
    #[error("Normalization failed for language '{language}'{}: {source}", format_context(.context))]
    NormalizationFailed {
        language: &'static str,
        source: ScriptError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal normalization error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl NormalizationError {
    /// Stable machine-readable identifier of the variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedLanguage { .. } => "unsupported_language",
            Self::OptionsNotAllowed { .. } => "options_not_allowed",
            Self::InvalidOptions { .. } => "invalid_options",
            Self::NormalizationFailed { .. } => "normalization_failed",
            Self::Internal { .. } => "internal",
        }
    }

    /// Whether the caller can fix the request (as opposed to a server fault).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedLanguage { .. }
                | Self::OptionsNotAllowed { .. }
                | Self::InvalidOptions { .. }
        )
    }
}

/// A single rejected option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum OptionIssue {
    UnknownField { field: String, allowed: Vec<&'static str> },
    TypeMismatch { field: String, expected: &'static str, found: &'static str },
    InvalidValue { field: String, value: String, allowed: Vec<&'static str> },
    /// The options payload itself is not a JSON object.
    NotAnObject { found: &'static str },
    /// The merged options could not be turned into the typed configuration.
    Coercion { message: String },
}

impl OptionIssue {
    /// Name of the offending field, when the issue concerns one.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::UnknownField { field, .. }
            | Self::TypeMismatch { field, .. }
            | Self::InvalidValue { field, .. } => Some(field),
            Self::NotAnObject { .. } | Self::Coercion { .. } => None,
        }
    }
}

impl fmt::Display for OptionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField { field, allowed } => {
                write!(f, "unknown field '{field}' (allowed: {})", allowed.join(", "))
            },
            Self::TypeMismatch { field, expected, found } => {
                write!(f, "field '{field}' expects {expected}, got {found}")
            },
            Self::InvalidValue { field, value, allowed } => {
                let allowed = allowed.join(", ");
                write!(f, "field '{field}' has invalid value {value} (allowed: {allowed})")
            },
            Self::NotAnObject { found } => write!(f, "options must be a JSON object, got {found}"),
            Self::Coercion { message } => write!(f, "{message}"),
        }
    }
}

fn render_issues(issues: &[OptionIssue]) -> String {
    issues.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_stable() {
        let err = NormalizationError::OptionsNotAllowed { language: "en", context: None };
        assert_eq!(err.kind(), "options_not_allowed");
        assert!(err.is_client_error());

        let err = NormalizationError::from("mismatch");
        assert_eq!(err.kind(), "internal");
        assert!(!err.is_client_error());
    }

    #[test]
    fn unsupported_language_lists_codes() {
        let err = NormalizationError::UnsupportedLanguage {
            language: "xx".to_owned(),
            supported: vec!["en", "hi"],
            context: None,
        };
        assert_eq!(err.to_string(), "Unsupported language 'xx'; supported languages: en, hi");
    }

    #[test]
    fn invalid_options_render_every_issue() {
        let err = NormalizationError::InvalidOptions {
            language: "bn",
            issues: vec![
                OptionIssue::TypeMismatch {
                    field: "tts_mode".to_owned(),
                    expected: "boolean",
                    found: "string",
                },
                OptionIssue::UnknownField { field: "x".to_owned(), allowed: vec!["tts_mode"] },
            ],
            context: None,
        };
        assert_eq!(
            err.to_string(),
            "Invalid options for language 'bn': field 'tts_mode' expects boolean, got string; \
             unknown field 'x' (allowed: tts_mode)"
        );
    }

    #[test]
    fn issues_serialize_with_a_tag() {
        let issue = OptionIssue::NotAnObject { found: "array" };
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json, serde_json::json!({"issue": "not_an_object", "found": "array"}));
        assert_eq!(issue.field(), None);
    }
}
