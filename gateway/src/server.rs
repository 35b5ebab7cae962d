use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Request, State},
    response::Response,
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, info_span};

use crate::{
    args::ServerArgs, error::GatewayError, index::GatewayIndex, proxy::Proxy, route::RouteTable,
};

#[derive(Debug, Clone)]
pub struct GatewayState {
    pub service: &'static str,
    pub proxy: Arc<Proxy>,
    pub index: Arc<GatewayIndex>,
}

impl GatewayState {
    pub fn new(service: &'static str, routes: RouteTable, index: GatewayIndex) -> Self {
        Self {
            service,
            proxy: Arc::new(Proxy::new(routes)),
            index: Arc::new(index),
        }
    }
}

async fn index(State(state): State<GatewayState>) -> Json<GatewayIndex> {
    Json(state.index.as_ref().clone())
}

async fn forward(
    State(state): State<GatewayState>,
    request: Request,
) -> Result<Response, GatewayError> {
    state.proxy.forward(request).await.map_err(|e| {
        error!("Gateway error: {}", e);
        e
    })
}

pub fn router(state: GatewayState) -> Router {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("gateway_request", method = ?request.method(), uri)
        },
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .fallback(forward)
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

pub async fn serve(state: GatewayState, args: &ServerArgs) -> Result<(), anyhow::Error> {
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("{} listening on http://{}", state.service, addr);
    for route in state.proxy.routes().routes() {
        info!("  {} -> {}", route.prefix, route.upstream);
    }

    axum::serve(listener, router(state)).await?;

    Ok(())
}
