//! Kernel utilities shared across the service.
//! Keep this crate lightweight: configuration loading plus, behind `server`, the
//! API state, the health endpoint and the JSON error envelope.
//!
//! ## Config loading
//! ```rust,ignore
//! use lipi_kernel::config::load_config;
//! use lipi_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server")).unwrap();
//! ```

pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use lipi_domain as domain;
