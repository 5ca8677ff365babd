use anyhow::Context;
use lipi::kernel::config::load_config;
use lipi_logger::Logger;
use lipi_server::Server;

#[lipi_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let cfg = load_config(Some("server")).context("Critical: Configuration is malformed")?;

    Server::new(cfg)?.serve().await
}
