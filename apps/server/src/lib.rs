//! # Lipi Server
//!
//! Hosts the normalization API: the feature routers from the `lipi` facade,
//! request limits from `[server]`, and the Scalar reference at `/api`.
//!
//! ```no_run
//! use lipi::domain::config::ApiConfig;
//! use lipi_server::Server;
//!
//! # async fn start() -> anyhow::Result<()> {
//! Server::new(ApiConfig::default())?.serve().await
//! # }
//! ```

mod router;

use anyhow::{Context, Result, ensure};
use axum::Router;
use axum_server::Handle;
use axum_server::tls_rustls::RustlsConfig;
use lipi::domain::config::{ApiConfig, SslConfig};
use lipi::kernel::server::ApiState;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{info, warn};

/// In-flight requests get this long to finish once a stop signal arrives.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(30);

/// The normalization service bound to one listen address.
#[must_use = "call .serve().await to accept connections"]
#[derive(Debug)]
pub struct Server {
    address: SocketAddr,
    state: ApiState,
}

impl Server {
    /// Prepares the service from a loaded configuration.
    ///
    /// # Errors
    /// Fails when `server.ssl` names a certificate or key that does not exist.
    pub fn new(config: ApiConfig) -> Result<Self> {
        if let Some(ssl) = &config.server.ssl {
            check_tls_files(ssl)?;
        }

        let address = SocketAddr::new(config.server.address, config.server.port);
        info!(
            %address,
            tls = config.server.ssl.is_some(),
            max_text_chars = config.normalizer.max_text_chars,
            "Normalization service configured"
        );

        let state = ApiState::builder().config(config).build()?;
        Ok(Self { address, state })
    }

    #[must_use]
    pub const fn address(&self) -> SocketAddr {
        self.address
    }

    /// The complete application: feature routes, middleware and API docs.
    #[must_use]
    pub fn into_router(self) -> Router {
        router::init(self.state)
    }

    /// Accepts connections until Ctrl+C or SIGTERM, then drains.
    ///
    /// # Errors
    /// Fails when the address cannot be bound or the TLS material cannot be loaded.
    pub async fn serve(self) -> Result<()> {
        let address = self.address;
        let ssl = self.state.config.server.ssl.clone();
        let service = self.into_router().into_make_service();

        let handle = Handle::<SocketAddr>::new();
        tokio::spawn(drain_on_signal(handle.clone()));

        let served = match ssl {
            Some(ssl) => {
                let tls = RustlsConfig::from_pem_file(&ssl.cert, &ssl.key)
                    .await
                    .context("Loading TLS certificate and key")?;
                info!("Listening on https://{address}");
                axum_server::bind_rustls(address, tls).handle(handle).serve(service).await
            },
            None => {
                info!("Listening on http://{address}");
                axum_server::bind(address).handle(handle).serve(service).await
            },
        };
        served.with_context(|| format!("Serving on {address}"))?;

        info!("Normalization service stopped");
        Ok(())
    }
}

fn check_tls_files(ssl: &SslConfig) -> Result<()> {
    ensure!(ssl.cert.is_file(), "TLS certificate {} does not exist", ssl.cert.display());
    ensure!(ssl.key.is_file(), "TLS key {} does not exist", ssl.key.display());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = ssl.key.metadata()?.permissions().mode();
        if mode & 0o077 != 0 {
            warn!(key = %ssl.key.display(), "TLS key is readable by group or others");
        }
    }
    Ok(())
}

async fn drain_on_signal(handle: Handle<SocketAddr>) {
    match stop_requested().await {
        Ok(()) => info!("Stop requested, draining connections"),
        Err(err) => warn!("Signal listener failed, draining connections: {err:#}"),
    }
    handle.graceful_shutdown(Some(DRAIN_TIMEOUT));
}

async fn stop_requested() -> Result<()> {
    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Installing SIGTERM handler")?
            .recv()
            .await;
        Ok::<(), anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = signal::ctrl_c() => res.context("Waiting for Ctrl+C"),
        res = terminate => res,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lipi::domain::config::SslConfig;

    #[test]
    fn address_follows_config() {
        let mut config = ApiConfig::default();
        config.server.port = 8123;
        let server = Server::new(config).unwrap();
        assert_eq!(server.address().port(), 8123);
        assert!(server.address().ip().is_unspecified());
    }

    #[test]
    fn missing_tls_files_are_rejected() {
        let mut config = ApiConfig::default();
        config.server.ssl = Some(SslConfig {
            cert: "/nonexistent/lipi/cert.pem".into(),
            key: "/nonexistent/lipi/key.pem".into(),
        });
        let err = Server::new(config).unwrap_err();
        assert!(err.to_string().contains("TLS certificate"), "{err}");
    }
}
