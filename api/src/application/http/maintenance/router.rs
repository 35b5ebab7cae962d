use axum::Router;
use utoipa::OpenApi;

use super::handlers::{
    filter_services::{__path_filter_services, filter_services},
    get_maintenance_filter_options::{
        __path_get_maintenance_filter_options, get_maintenance_filter_options,
    },
    get_maintenance_stats::{__path_get_maintenance_stats, get_maintenance_stats},
    get_most_requested_services::{
        __path_get_most_requested_services, get_most_requested_services,
    },
    get_quick_services::{__path_get_quick_services, get_quick_services},
    get_services_by_category::{__path_get_services_by_category, get_services_by_category},
};
use crate::application::http::server::{app_state::AppState, http_server::GetRoute};

#[derive(OpenApi)]
#[openapi(paths(
    filter_services,
    get_maintenance_stats,
    get_services_by_category,
    get_most_requested_services,
    get_quick_services,
    get_maintenance_filter_options
))]
pub struct MaintenanceApiDoc;

pub fn maintenance_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .get_route(
            &format!("{}/servicios/filtros", state.args.server.root_path),
            filter_services,
        )
        .get_route(
            &format!("{}/servicios/estadisticas", state.args.server.root_path),
            get_maintenance_stats,
        )
        .get_route(
            &format!("{}/servicios/por-categoria", state.args.server.root_path),
            get_services_by_category,
        )
        .get_route(
            &format!("{}/servicios/mas-solicitados", state.args.server.root_path),
            get_most_requested_services,
        )
        .get_route(
            &format!("{}/servicios/rapidos", state.args.server.root_path),
            get_quick_services,
        )
        .get_route(
            &format!("{}/servicios/opciones-filtro", state.args.server.root_path),
            get_maintenance_filter_options,
        )
}
