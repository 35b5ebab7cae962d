use std::sync::Arc;

use clap::Parser;
use tracing::info;

use crate::{
    application::http::server::http_server::{router, state, with_metrics},
    args::Args,
    logger::init_logger,
};

mod application;
mod args;
mod logger;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log)?;

    let app_state = state(args.clone()).await?;
    let router = with_metrics(router(app_state)?, &args.server.root_path);

    let addr = format!("{}:{}", args.server.host, args.server.port());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        service = ?args.server.service,
        "{} listening on http://{}{}",
        args.server.service.description(),
        addr,
        args.server.root_path
    );

    axum::serve(listener, router).await?;

    Ok(())
}
