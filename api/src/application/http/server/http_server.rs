use std::sync::Arc;

use axum::{Json, Router, handler::Handler, http::HeaderValue, routing::get};
use axum_prometheus::PrometheusMetricLayer;
use concesionaria_core::{
    domain::common::DatabaseConfig, infrastructure::db::postgres::Postgres,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info_span, warn};
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};

use crate::{
    application::http::{
        appointment::router::appointment_routes,
        index::index_routes,
        maintenance::router::maintenance_routes,
        server::{api_entities::api_error::ApiError, app_state::AppState, openapi::service_openapi},
        spare_part::router::spare_part_routes,
    },
    args::{Args, Service},
};

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let postgres = Postgres::new(&DatabaseConfig::from(&args.database)).await?;

    Ok(AppState::new(args, postgres.get_db()))
}

/// `GET` routes that also answer with a trailing slash.
pub trait GetRoute {
    fn get_route<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static;
}

impl GetRoute for Router<AppState> {
    fn get_route<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.route(path, get(handler.clone()))
            .route(&format!("{path}/"), get(handler))
    }
}

/// Any method and any request header; origins restricted only when configured.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid allowed origin {:?}: {}", origin, e);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", origins);

    cors.allow_origin(origins)
}

///  Returns the [`Router`] of the configured service.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let cors = cors_layer(&state.args.server.allowed_origins);
    let service = state.args.server.service;
    let root_path = state.args.server.root_path.clone();

    let mut openapi = service_openapi(service);
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();
    openapi.paths = paths;

    let api_docs_url = format!("{root_path}/openapi.json");

    let service_routes = match service {
        Service::Citas => appointment_routes(state.clone()),
        Service::Repuestos => spare_part_routes(state.clone()),
        Service::Servicios => maintenance_routes(state.clone()),
    };

    let router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{root_path}/scalar"),
            openapi.clone(),
        ))
        .merge(Redoc::with_url(format!("{root_path}/redoc"), openapi.clone()))
        .merge(RapiDoc::new(api_docs_url.clone()).path(format!("{root_path}/rapidoc")))
        .route(&api_docs_url, get(move || async move { Json(openapi) }))
        .merge(index_routes())
        .merge(service_routes)
        .fallback(|| async { ApiError::NotFound("Ruta no encontrada".to_string()) })
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);

    Ok(router)
}

/// Adds request metrics and exposes them at `<root>/metrics`.
pub fn with_metrics(router: Router, root_path: &str) -> Router {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    router
        .route(
            &format!("{root_path}/metrics"),
            get(|| async move { metric_handle.render() }),
        )
        .layer(prometheus_layer)
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use axum_test::TestServer;
    use clap::Parser;
    use concesionaria_core::infrastructure::db::DatabaseConnection;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::{Value as JsonValue, json};

    use super::*;
    use crate::application::http::server::test_support::{connect, test_server};

    fn empty_db() -> Arc<DatabaseConnection> {
        connect(MockDatabase::new(DatabaseBackend::Postgres))
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let server = test_server("servicios", empty_db());

        let response = server.get("/api/servicios/inexistente").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(
            response.json::<JsonValue>(),
            json!({
                "success": false,
                "error": "Ruta no encontrada",
                "message": "Ruta no encontrada"
            })
        );
    }

    #[tokio::test]
    async fn test_openapi_document_is_prefixed() {
        let server = test_server("servicios", empty_db());

        let response = server.get("/api/openapi.json").await;

        response.assert_status_ok();
        let document = response.json::<JsonValue>();
        assert!(document["paths"]["/api/servicios/rapidos"].is_object());
        assert!(document["paths"]["/api/citas/filtros"].is_null());
    }

    #[tokio::test]
    async fn test_any_origin_when_none_configured() {
        let server = test_server("citas", empty_db());

        let response = server
            .get("/")
            .add_header("origin", "http://localhost:5173")
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("access-control-allow-origin"), "*");
    }

    #[tokio::test]
    async fn test_preflight_accepts_custom_headers() {
        let server = test_server("citas", empty_db());

        let response = server
            .method(Method::OPTIONS, "/api/citas/filtros")
            .add_header("origin", "http://localhost:5173")
            .add_header("access-control-request-method", "GET")
            .add_header("access-control-request-headers", "authorization,x-request-id")
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("access-control-allow-origin"), "*");
        assert_eq!(response.header("access-control-allow-headers"), "*");
        assert_eq!(response.header("access-control-allow-methods"), "*");
    }

    #[tokio::test]
    async fn test_configured_origins_skip_invalid_entries() {
        let args = Args::parse_from([
            "concesionaria-api",
            "--service",
            "citas",
            "--allowed-origins",
            "http://localhost:5173,bad\norigin",
        ]);
        let app = router(AppState::new(Arc::new(args), empty_db())).unwrap();
        let server = TestServer::new(app).unwrap();

        let allowed = server
            .get("/")
            .add_header("origin", "http://localhost:5173")
            .await;
        assert_eq!(
            allowed.header("access-control-allow-origin"),
            "http://localhost:5173"
        );

        let foreign = server
            .get("/")
            .add_header("origin", "http://otro.example")
            .await;
        foreign.assert_status_ok();
        assert!(foreign.maybe_header("access-control-allow-origin").is_none());
    }
}
