//! Facade crate for the Lipi normalization service.
//! Re-exports domain/kernel primitives and the normalization feature, and aggregates
//! the HTTP routers. Keep this crate thin: it composes other crates and holds no
//! business logic.
//!
//! ## Usage
//! - Add `lipi` (with `server` for the HTTP surface).
//! - Mount `lipi::server::router::api_router` on the application router.

pub use lipi_domain as domain;
pub use lipi_kernel as kernel;
pub use lipi_normalization as normalization;
pub use lipi_scripts as scripts;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use lipi_kernel::server::router::system_router;
        pub use lipi_normalization::api::normalization_router;
        use lipi_kernel::prelude::ApiState;
        use utoipa_axum::router::OpenApiRouter;

        /// Every feature router merged under one state.
        #[must_use]
        pub fn api_router() -> OpenApiRouter<ApiState> {
            OpenApiRouter::new().merge(system_router()).merge(normalization_router())
        }
    }
}

/// Build-time enabled features (by Cargo feature).
pub mod features {
    pub const ENABLED: &[&str] = &[
        "normalization",
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}
