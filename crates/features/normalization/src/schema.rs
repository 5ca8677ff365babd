//! Per-language option schemas.
//!
//! Each [`SchemaKind`] owns a closed table of [`FieldSpec`]s. The same table
//! drives [`describe`] and [`validate`], so documentation and enforcement cannot
//! drift apart.

use crate::error::OptionIssue;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Nasal cluster handling for Indic scripts.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NasalsMode {
    #[default]
    DoNothing,
    ToAnusvaaraStrict,
    ToAnusvaaraRelaxed,
    ToNasalConsonants,
}

impl NasalsMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::DoNothing => "Leave nasal clusters as written.",
            Self::ToAnusvaaraStrict => {
                "Replace a nasal consonant + virama with the anusvaara only before a stop of the same class."
            },
            Self::ToAnusvaaraRelaxed => {
                "Replace a nasal consonant + virama with the anusvaara before any consonant."
            },
            Self::ToNasalConsonants => {
                "Expand the anusvaara before a stop into the nasal consonant of that class + virama."
            },
        }
    }

    /// Every accepted literal, in declaration order.
    #[must_use]
    pub fn values() -> Vec<&'static str> {
        Self::iter().map(Self::as_str).collect()
    }
}

/// Which option set applies to a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SchemaKind {
    NoOptions,
    Basic,
    IndicCommon,
    Bengali,
    Punjabi,
    Odia,
}

/// Type and default of one option field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Bool { default: bool },
    NasalsMode { default: NasalsMode },
}

impl FieldType {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool { .. } => "boolean",
            Self::NasalsMode { .. } => "nasals_mode",
        }
    }

    #[must_use]
    pub fn default_value(self) -> Value {
        match self {
            Self::Bool { default } => Value::Bool(default),
            Self::NasalsMode { default } => Value::String(default.as_str().to_owned()),
        }
    }

    fn allowed_values(self) -> Option<Vec<&'static str>> {
        match self {
            Self::Bool { .. } => None,
            Self::NasalsMode { .. } => Some(NasalsMode::values()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    pub description: &'static str,
}

const fn flag(name: &'static str, description: &'static str) -> FieldSpec {
    FieldSpec { name, ty: FieldType::Bool { default: false }, description }
}

const BASIC_FIELDS: &[FieldSpec] = &[
    flag("remove_diacritics", "Fold accented letters to their base letter."),
    flag("split_letters", "Separate every letter cluster with a space."),
];

const INDIC_COMMON_FIELDS: &[FieldSpec] = &[
    flag("remove_nuktas", "Drop the nukta sign, folding nukta letters to their base."),
    FieldSpec {
        name: "nasals_mode",
        ty: FieldType::NasalsMode { default: NasalsMode::DoNothing },
        description: "How nasal clusters are rewritten.",
    },
    flag("normalize_chandras", "Replace candrabindu and candra vowels with their plain forms."),
    flag("normalize_vowel_ending", "Canonicalize how word-final vowels are written."),
    flag("tts_mode", "Keep sentence punctuation for speech synthesis."),
];

const BENGALI_FIELDS: &[FieldSpec] =
    &[flag("remap_assamese_chars", "Map Assamese ra and wa to their Bengali letters.")];

const PUNJABI_FIELDS: &[FieldSpec] = &[
    flag("canonicalize_addak", "Write addak gemination as consonant + virama + consonant."),
    flag("canonicalize_tippi", "Replace tippi with bindi."),
    flag("replace_vowel_bases", "Fold a vowel carrier + vowel sign into the independent vowel."),
];

const ODIA_FIELDS: &[FieldSpec] = &[flag("remap_wa", "Map the letter va to wa.")];

impl SchemaKind {
    /// Whether any options payload is accepted at all.
    #[must_use]
    pub const fn accepts_options(self) -> bool {
        !matches!(self, Self::NoOptions)
    }

    const fn tables(self) -> [&'static [FieldSpec]; 2] {
        match self {
            Self::NoOptions => [&[], &[]],
            Self::Basic => [BASIC_FIELDS, &[]],
            Self::IndicCommon => [INDIC_COMMON_FIELDS, &[]],
            Self::Bengali => [INDIC_COMMON_FIELDS, BENGALI_FIELDS],
            Self::Punjabi => [INDIC_COMMON_FIELDS, PUNJABI_FIELDS],
            Self::Odia => [INDIC_COMMON_FIELDS, ODIA_FIELDS],
        }
    }

    /// Fields in declaration order (shared fields first).
    pub fn fields(self) -> impl Iterator<Item = &'static FieldSpec> {
        self.tables().into_iter().flatten()
    }

    #[must_use]
    pub fn field(self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().find(|spec| spec.name == name)
    }

    #[must_use]
    pub fn field_names(self) -> Vec<&'static str> {
        self.fields().map(|spec| spec.name).collect()
    }

    /// The declared defaults as a JSON object.
    #[must_use]
    pub fn defaults(self) -> Map<String, Value> {
        self.fields().map(|spec| (spec.name.to_owned(), spec.ty.default_value())).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BasicOptions {
    pub remove_diacritics: bool,
    pub split_letters: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct IndicCommonOptions {
    pub remove_nuktas: bool,
    pub nasals_mode: NasalsMode,
    pub normalize_chandras: bool,
    pub normalize_vowel_ending: bool,
    pub tts_mode: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BengaliOptions {
    #[serde(flatten)]
    pub common: IndicCommonOptions,
    pub remap_assamese_chars: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct PunjabiOptions {
    #[serde(flatten)]
    pub common: IndicCommonOptions,
    pub canonicalize_addak: bool,
    pub canonicalize_tippi: bool,
    pub replace_vowel_bases: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OdiaOptions {
    #[serde(flatten)]
    pub common: IndicCommonOptions,
    pub remap_wa: bool,
}

/// Fully defaulted, type-checked options, tagged by schema kind.
///
/// Serializes to the flat option map, or `null` for [`ValidatedOptions::NoOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ValidatedOptions {
    NoOptions,
    Basic(BasicOptions),
    IndicCommon(IndicCommonOptions),
    Bengali(BengaliOptions),
    Punjabi(PunjabiOptions),
    Odia(OdiaOptions),
}

impl ValidatedOptions {
    #[must_use]
    pub fn defaults(kind: SchemaKind) -> Self {
        match kind {
            SchemaKind::NoOptions => Self::NoOptions,
            SchemaKind::Basic => Self::Basic(BasicOptions::default()),
            SchemaKind::IndicCommon => Self::IndicCommon(IndicCommonOptions::default()),
            SchemaKind::Bengali => Self::Bengali(BengaliOptions::default()),
            SchemaKind::Punjabi => Self::Punjabi(PunjabiOptions::default()),
            SchemaKind::Odia => Self::Odia(OdiaOptions::default()),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> SchemaKind {
        match self {
            Self::NoOptions => SchemaKind::NoOptions,
            Self::Basic(_) => SchemaKind::Basic,
            Self::IndicCommon(_) => SchemaKind::IndicCommon,
            Self::Bengali(_) => SchemaKind::Bengali,
            Self::Punjabi(_) => SchemaKind::Punjabi,
            Self::Odia(_) => SchemaKind::Odia,
        }
    }

    /// The option map echoed back to callers; `None` for languages without options.
    #[must_use]
    pub fn to_map(&self) -> Option<Map<String, Value>> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Some(map),
            _ => None,
        }
    }
}

/// One field of a [`SchemaDescription`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescription {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: &'static str,
    pub default: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<&'static str>>,
    pub description: &'static str,
}

/// Self-description of a schema kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaDescription {
    pub kind: SchemaKind,
    pub accepts_options: bool,
    pub fields: Vec<FieldDescription>,
}

#[must_use]
pub fn describe(kind: SchemaKind) -> SchemaDescription {
    SchemaDescription {
        kind,
        accepts_options: kind.accepts_options(),
        fields: kind
            .fields()
            .map(|spec| FieldDescription {
                name: spec.name,
                ty: spec.ty.name(),
                default: spec.ty.default_value(),
                allowed_values: spec.ty.allowed_values(),
                description: spec.description,
            })
            .collect(),
    }
}

/// Validates `raw` against `kind` and returns the typed, defaulted options.
///
/// Every offending field is reported, sorted by field name. Absent fields take
/// their default.
///
/// # Errors
/// Returns the collected issues when any field is unknown, mistyped or out of range.
pub fn validate(
    kind: SchemaKind,
    raw: &Map<String, Value>,
) -> Result<ValidatedOptions, Vec<OptionIssue>> {
    let mut issues: Vec<OptionIssue> =
        raw.iter().filter_map(|(name, value)| check_field(kind, name, value)).collect();
    if !issues.is_empty() {
        issues.sort_by(|a, b| a.field().cmp(&b.field()));
        return Err(issues);
    }

    let mut merged = kind.defaults();
    merged.extend(raw.iter().map(|(name, value)| (name.clone(), value.clone())));
    coerce(kind, Value::Object(merged))
        .map_err(|e| vec![OptionIssue::Coercion { message: e.to_string() }])
}

fn check_field(kind: SchemaKind, name: &str, value: &Value) -> Option<OptionIssue> {
    let Some(spec) = kind.field(name) else {
        return Some(OptionIssue::UnknownField {
            field: name.to_owned(),
            allowed: kind.field_names(),
        });
    };

    match (spec.ty, value) {
        (FieldType::Bool { .. }, Value::Bool(_)) => None,
        (FieldType::NasalsMode { .. }, Value::String(s)) if s.parse::<NasalsMode>().is_ok() => None,
        (FieldType::NasalsMode { .. }, Value::String(s)) => Some(OptionIssue::InvalidValue {
            field: name.to_owned(),
            value: Value::String(s.clone()).to_string(),
            allowed: NasalsMode::values(),
        }),
        (ty, other) => Some(OptionIssue::TypeMismatch {
            field: name.to_owned(),
            expected: match ty {
                FieldType::Bool { .. } => "boolean",
                FieldType::NasalsMode { .. } => "string (one of the nasals modes)",
            },
            found: json_type_name(other),
        }),
    }
}

fn coerce(kind: SchemaKind, merged: Value) -> Result<ValidatedOptions, serde_json::Error> {
    Ok(match kind {
        SchemaKind::NoOptions => ValidatedOptions::NoOptions,
        SchemaKind::Basic => ValidatedOptions::Basic(serde_json::from_value(merged)?),
        SchemaKind::IndicCommon => ValidatedOptions::IndicCommon(serde_json::from_value(merged)?),
        SchemaKind::Bengali => ValidatedOptions::Bengali(serde_json::from_value(merged)?),
        SchemaKind::Punjabi => ValidatedOptions::Punjabi(serde_json::from_value(merged)?),
        SchemaKind::Odia => ValidatedOptions::Odia(serde_json::from_value(merged)?),
    })
}

pub(crate) const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn nasals_modes_use_snake_case_literals() {
        assert_eq!(
            NasalsMode::values(),
            ["do_nothing", "to_anusvaara_strict", "to_anusvaara_relaxed", "to_nasal_consonants"]
        );
        assert!("To_Anusvaara_Strict".parse::<NasalsMode>().is_err());
    }

    #[test]
    fn extended_schemas_start_with_the_common_fields() {
        let names = SchemaKind::Punjabi.field_names();
        assert_eq!(&names[..5], SchemaKind::IndicCommon.field_names().as_slice());
        assert_eq!(&names[5..], ["canonicalize_addak", "canonicalize_tippi", "replace_vowel_bases"]);
        assert!(SchemaKind::NoOptions.field_names().is_empty());
    }

    #[test]
    fn basic_partial_options_are_defaulted() {
        let options = validate(SchemaKind::Basic, &object(json!({"remove_diacritics": true}))).unwrap();
        assert_eq!(
            options,
            ValidatedOptions::Basic(BasicOptions { remove_diacritics: true, split_letters: false })
        );
    }

    #[test]
    fn every_issue_is_reported_sorted() {
        let raw = object(json!({"zeta": 1, "tts_mode": "yes", "nasals_mode": "loud", "alpha": null}));
        let issues = validate(SchemaKind::IndicCommon, &raw).unwrap_err();
        let fields: Vec<_> = issues.iter().filter_map(OptionIssue::field).collect();
        assert_eq!(fields, ["alpha", "nasals_mode", "tts_mode", "zeta"]);
        assert!(matches!(issues[1], OptionIssue::InvalidValue { .. }));
        assert!(matches!(issues[2], OptionIssue::TypeMismatch { found: "string", .. }));
    }

    #[test]
    fn script_specific_fields_are_rejected_elsewhere() {
        let issues =
            validate(SchemaKind::IndicCommon, &object(json!({"remap_wa": true}))).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field(), Some("remap_wa"));

        let options = validate(SchemaKind::Odia, &object(json!({"remap_wa": true}))).unwrap();
        assert_eq!(
            options,
            ValidatedOptions::Odia(OdiaOptions { remap_wa: true, ..OdiaOptions::default() })
        );
    }

    #[test]
    fn flattened_options_serialize_flat() {
        let options = ValidatedOptions::Bengali(BengaliOptions {
            common: IndicCommonOptions { tts_mode: true, ..IndicCommonOptions::default() },
            remap_assamese_chars: true,
        });
        let map = options.to_map().unwrap();
        assert_eq!(map.len(), 6);
        assert_eq!(map["tts_mode"], json!(true));
        assert_eq!(map["nasals_mode"], json!("do_nothing"));
        assert_eq!(ValidatedOptions::NoOptions.to_map(), None);
    }

    #[test]
    fn defaults_match_the_typed_defaults() {
        for kind in SchemaKind::iter().filter(|k| k.accepts_options()) {
            let validated = validate(kind, &Map::new()).unwrap();
            assert_eq!(validated, ValidatedOptions::defaults(kind));
            assert_eq!(validated.to_map().unwrap(), kind.defaults());
        }
    }

    #[test]
    fn description_lists_allowed_nasals_modes() {
        let description = describe(SchemaKind::Bengali);
        assert!(description.accepts_options);
        assert_eq!(description.fields.len(), 6);
        let nasals = description.fields.iter().find(|f| f.name == "nasals_mode").unwrap();
        assert_eq!(nasals.default, json!("do_nothing"));
        assert_eq!(nasals.allowed_values.as_ref().map(Vec::len), Some(4));
        assert!(!describe(SchemaKind::NoOptions).accepts_options);
    }
}
