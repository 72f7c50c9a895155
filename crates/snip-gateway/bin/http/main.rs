mod cli;

use crate::cli::CLI;
use clap::Parser;
use snip_core::UrlStore;
use snip_gateway::{App, GatewaySettings};
use snip_storage::InMemoryStore;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CLI::parse();

    snip_telemetry::init(config.log_format.into())?;

    info!(
        listen_addr = %config.listen_addr,
        base_url = %config.base_url,
        log_format = %config.log_format,
        store_capacity = config.store_capacity,
        "starting snip gateway"
    );

    let store: Arc<dyn UrlStore> = Arc::new(InMemoryStore::with_capacity(config.store_capacity));
    let settings = GatewaySettings::builder()
        .listen_addr(config.listen_addr)
        .base_url(config.base_url)
        .build();

    App::serve(settings, store).await?;

    info!("gateway stopped");
    Ok(())
}
