//! `OpenAPI` tags and other API-wide names.

pub const SYSTEM_TAG: &str = "System";
pub const NORMALIZATION_TAG: &str = "Normalization";
pub const LANGUAGES_TAG: &str = "Languages";

/// Greeting served at the API root.
pub const WELCOME_MESSAGE: &str = "Welcome to the Text Normalization API";

/// Environment variable prefix for configuration overrides (`LIPI__SERVER__PORT`).
pub const ENV_PREFIX: &str = "LIPI";
