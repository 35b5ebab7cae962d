use clap::Parser;
use concesionaria_gateway::{
    args::{LogArgs, ServerArgs},
    index::GatewayIndex,
    logger::init_logger,
    route::{Route, RouteTable},
    server::{GatewayState, serve},
};
use url::Url;

/// Single entry point for the filter services and the main backend.
#[derive(Debug, Parser)]
#[command(name = "filtros-gateway", version, about)]
struct Args {
    #[command(flatten)]
    server: ServerArgs,

    #[arg(long, env = "FILTROS_CITAS_URL", default_value = "http://localhost:3004")]
    filtros_citas_url: Url,

    #[arg(long, env = "FILTROS_REPUESTOS_URL", default_value = "http://localhost:3005")]
    filtros_repuestos_url: Url,

    #[arg(long, env = "FILTROS_SERVICIOS_URL", default_value = "http://localhost:3006")]
    filtros_servicios_url: Url,

    #[arg(long, env = "BACKEND_PRINCIPAL_URL", default_value = "http://localhost:3000")]
    backend_principal_url: Url,

    #[command(flatten)]
    log: LogArgs,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    init_logger(&args.log)?;

    let routes = RouteTable::new(vec![
        Route::new("filtros_citas", "/api/filtros-citas", args.filtros_citas_url),
        Route::new(
            "filtros_repuestos",
            "/api/filtros-repuestos",
            args.filtros_repuestos_url,
        ),
        Route::new(
            "filtros_servicios",
            "/api/filtros-servicios",
            args.filtros_servicios_url,
        ),
        Route::new(
            "backend_principal",
            "/api/backend-principal",
            args.backend_principal_url,
        ),
    ]);

    let index = GatewayIndex::filtros(&routes);

    serve(GatewayState::new("Gateway Filtros", routes, index), &args.server).await
}
