pub use crate::config::{ConfigError, ConfigErrorExt, load_config};
pub use lipi_domain::config::ApiConfig;

#[cfg(feature = "server")]
pub use crate::server::{ApiError, ApiState, ErrorBody};
