use crate::dispatcher::{NasalsModeSummary, NormalizationResult, ResolvedOptions};
use crate::language::LanguageSummary;
use crate::samples::SampleRequest;
use crate::schema::{FieldDescription, SchemaDescription, ValidatedOptions};
use lipi_derive::api_model;
use serde_json::Value;

#[api_model]
/// Text to normalize, its language and optional language-specific options
pub struct NormalizeRequest {
    /// Input text; may be empty
    pub text: String,
    /// Language code (`hi`) or label (`hindi`)
    pub language: String,
    /// Option map with snake_case keys; `null` or absent for defaults
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub options: Option<Value>,
}

#[api_model]
/// Normalized text with the canonical language code and the options applied
pub struct NormalizeResponse {
    pub normalized_text: String,
    /// Canonical language code
    pub language_used: String,
    /// Fully defaulted option map, `null` for languages without options
    #[schema(value_type = Option<Object>)]
    pub options_used: Option<Value>,
}

#[api_model]
/// Options to check against a language's schema
pub struct ValidateOptionsRequest {
    /// Language code or label
    pub language: String,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub options: Option<Value>,
}

#[api_model]
/// Options after validation and defaulting
pub struct ValidateOptionsResponse {
    /// Canonical language code
    pub language: String,
    #[schema(value_type = Option<Object>)]
    pub options: Option<Value>,
}

#[api_model]
/// Supported language
pub struct LanguageDto {
    pub code: String,
    pub display_name: String,
}

#[api_model]
/// Nasals handling mode
pub struct NasalsModeDto {
    pub value: String,
    pub description: String,
}

#[api_model]
/// One option field
pub struct FieldDto {
    /// snake_case option key
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[schema(value_type = Object)]
    pub default: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,
    pub description: String,
}

#[api_model]
/// Options accepted by a language
pub struct SchemaDto {
    /// Schema kind (`indic_common`, `bengali`, ...)
    pub kind: String,
    pub accepts_options: bool,
    pub fields: Vec<FieldDto>,
}

fn options_value(options: &ValidatedOptions) -> Option<Value> {
    options.to_map().map(Value::Object)
}

impl From<NormalizationResult> for NormalizeResponse {
    fn from(result: NormalizationResult) -> Self {
        Self {
            options_used: options_value(&result.options_used),
            language_used: result.language_used.code().to_owned(),
            normalized_text: result.normalized_text,
        }
    }
}

impl From<ResolvedOptions> for ValidateOptionsResponse {
    fn from(resolved: ResolvedOptions) -> Self {
        Self {
            language: resolved.language.code().to_owned(),
            options: options_value(&resolved.options),
        }
    }
}

impl From<LanguageSummary> for LanguageDto {
    fn from(summary: LanguageSummary) -> Self {
        Self { code: summary.code.to_owned(), display_name: summary.display_name.to_owned() }
    }
}

impl From<NasalsModeSummary> for NasalsModeDto {
    fn from(mode: NasalsModeSummary) -> Self {
        Self { value: mode.value.to_owned(), description: mode.description.to_owned() }
    }
}

impl From<FieldDescription> for FieldDto {
    fn from(field: FieldDescription) -> Self {
        Self {
            name: field.name.to_owned(),
            ty: field.ty.to_owned(),
            default: field.default,
            allowed_values: field
                .allowed_values
                .map(|values| values.into_iter().map(str::to_owned).collect()),
            description: field.description.to_owned(),
        }
    }
}

impl From<SchemaDescription> for SchemaDto {
    fn from(schema: SchemaDescription) -> Self {
        Self {
            kind: schema.kind.to_string(),
            accepts_options: schema.accepts_options,
            fields: schema.fields.into_iter().map(FieldDto::from).collect(),
        }
    }
}

impl From<SampleRequest> for NormalizeRequest {
    fn from(sample: SampleRequest) -> Self {
        Self {
            text: sample.text.to_owned(),
            language: sample.language.code().to_owned(),
            options: sample.options,
        }
    }
}
