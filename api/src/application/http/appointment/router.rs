use axum::Router;
use utoipa::OpenApi;

use super::handlers::{
    filter_appointments::{__path_filter_appointments, filter_appointments},
    get_appointment_filter_options::{
        __path_get_appointment_filter_options, get_appointment_filter_options,
    },
    get_appointment_stats::{__path_get_appointment_stats, get_appointment_stats},
    get_appointments_by_office::{__path_get_appointments_by_office, get_appointments_by_office},
};
use crate::application::http::server::{app_state::AppState, http_server::GetRoute};

#[derive(OpenApi)]
#[openapi(paths(
    filter_appointments,
    get_appointment_stats,
    get_appointments_by_office,
    get_appointment_filter_options
))]
pub struct AppointmentApiDoc;

pub fn appointment_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .get_route(
            &format!("{}/citas/filtros", state.args.server.root_path),
            filter_appointments,
        )
        .get_route(
            &format!("{}/citas/estadisticas", state.args.server.root_path),
            get_appointment_stats,
        )
        .get_route(
            &format!("{}/citas/por-oficina", state.args.server.root_path),
            get_appointments_by_office,
        )
        .get_route(
            &format!("{}/citas/opciones-filtro", state.args.server.root_path),
            get_appointment_filter_options,
        )
}
