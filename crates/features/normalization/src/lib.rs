//! Language & options dispatch layer.
//!
//! A request names a language and optionally carries an untyped option map. The
//! dispatcher resolves the language in the static registry, validates the map
//! against the language's option schema, builds a configured normalizer and
//! applies it:
//!
//! ```rust
//! use lipi_normalization::normalize;
//! use serde_json::json;
//!
//! let result = normalize("Crème brûlée!", "basic", Some(&json!({"remove_diacritics": true})))
//!     .unwrap();
//! assert_eq!(result.normalized_text, "creme brulee");
//! assert_eq!(result.language_used.code(), "basic");
//! ```
//!
//! With the `server` feature the crate also exposes the HTTP handlers and their
//! `OpenAPI` router.

#[cfg(feature = "server")]
pub mod api;
pub mod dispatcher;
pub mod error;
pub mod language;
pub mod samples;
pub mod schema;
pub mod validator;

pub use crate::dispatcher::{
    NasalsModeSummary, NormalizationResult, ResolvedOptions, describe_options,
    list_nasals_modes, list_supported_languages, normalize, resolve_and_validate,
};
pub use crate::error::{NormalizationError, NormalizationErrorExt, OptionIssue};
pub use crate::language::{Capability, LanguageCode, LanguageEntry, LanguageSummary, resolve};
pub use crate::schema::{NasalsMode, SchemaDescription, SchemaKind, ValidatedOptions};
pub use crate::validator::validate_for_language;
