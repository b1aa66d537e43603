//! CLI command implementations
//!
//! `serve` boots in a fixed order: templates, pool, router, listener.
//! A failure at any step aborts before the listener is bound.

use std::sync::Arc;

use tracing::info;

use crate::http_server::{GatewayState, HttpServer};
use crate::store::{PgQuoteStore, QuoteStore};
use crate::view::ViewRenderer;

use super::args::{Command, DatabaseArgs, ServeArgs};
use super::errors::CliResult;

/// Dispatch a parsed command
pub async fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve(args) => serve(args).await,
        Command::Ping(args) => ping(args).await,
    }
}

/// Run the gateway until shutdown
pub async fn serve(args: ServeArgs) -> CliResult<()> {
    let views = ViewRenderer::new()?;

    info!("Connecting to database");
    let store = PgQuoteStore::connect(&args.database.to_config()).await?;

    let state = GatewayState::new(Arc::new(store.clone()), views);
    let server = HttpServer::new(args.http_config(), state);

    info!("Binding to {}", server.socket_addr());
    server.start().await?;

    store.close().await;
    Ok(())
}

/// Verify the database is reachable
pub async fn ping(args: DatabaseArgs) -> CliResult<()> {
    let store = PgQuoteStore::connect(&args.to_config()).await?;
    store.ping().await?;
    store.close().await;

    println!("ok");
    Ok(())
}
