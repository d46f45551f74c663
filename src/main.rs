//! Standalone sync daemon: keeps a published Domoticz snapshot fresh until
//! Ctrl-C. The assistant host embeds the library and reads that state
//! through `domoticz_assist::assistant::Extension`; this binary serves no
//! host surface of its own.

use std::sync::Arc;

use color_eyre::Result;
use domoticz_assist::{
    domoticz::{
        client::DomoticzClient,
        polling::{start_domoticz_sync_loop, Synchronizer},
    },
    published::Published,
    settings::read_settings,
};
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let filters = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    pretty_env_logger::formatted_builder()
        .parse_filters(&filters)
        .init();

    let settings = read_settings()?;
    info!(
        "Syncing from {} every {}s",
        settings.base_url, settings.poll_interval_seconds
    );

    let client = DomoticzClient::new(&settings)?;
    let published = Arc::new(Published::new());

    let sync_loop = start_domoticz_sync_loop(
        Synchronizer::new(client, published),
        settings.poll_interval(),
    );

    tokio::signal::ctrl_c().await?;
    sync_loop.stop().await;

    Ok(())
}
