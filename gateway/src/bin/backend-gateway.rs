use clap::Parser;
use concesionaria_gateway::{
    args::{LogArgs, ServerArgs},
    index::GatewayIndex,
    logger::init_logger,
    route::{Route, RouteTable},
    server::{GatewayState, serve},
};
use url::Url;

/// Forwards every `/api` request to the main backend.
#[derive(Debug, Parser)]
#[command(name = "backend-gateway", version, about)]
struct Args {
    #[command(flatten)]
    server: ServerArgs,

    #[arg(long, env = "BACKEND_URL", default_value = "http://localhost:4000")]
    backend_url: Url,

    #[command(flatten)]
    log: LogArgs,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    init_logger(&args.log)?;

    let index = GatewayIndex::backend(&args.backend_url);
    let routes = RouteTable::new(vec![Route::new("backend", "/api", args.backend_url)]);

    serve(
        GatewayState::new("Gateway Concesionaria", routes, index),
        &args.server,
    )
    .await
}
