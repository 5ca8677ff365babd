use config::{Config, Environment, File};
use lipi_domain::constants::ENV_PREFIX;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Errors raised while assembling the configuration.
#[lipi_derive::lipi_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from an optional file overlaid with environment overrides.
///
/// 1. **Base file**: `path` (default `"server"`, any extension the `config` crate
///    understands). A missing file is not an error; every field has a default.
/// 2. **Environment**: variables prefixed with `LIPI__`, nested with `__`
///    (`LIPI__SERVER__PORT=8080` maps to `server.port`).
///
/// # Errors
/// Returns [`ConfigError::Config`] when the file is malformed or a value does not
/// match the structure of `T`.
///
/// # Example
/// ```rust
/// use lipi_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     #[serde(default)]
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("does/not/exist")).unwrap();
/// assert_eq!(cfg.port, 0);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
