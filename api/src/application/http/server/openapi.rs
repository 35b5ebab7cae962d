use utoipa::OpenApi;

use crate::{
    application::http::{
        appointment::router::AppointmentApiDoc, index::__path_index,
        maintenance::router::MaintenanceApiDoc, spare_part::router::SparePartApiDoc,
    },
    args::Service,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Concesionaria Filter API"
    ),
    paths(index)
)]
pub struct ApiDoc;

/// OpenAPI document of one service, paths relative to the root path.
pub fn service_openapi(service: Service) -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.info.description = Some(service.description().to_string());

    let nested = match service {
        Service::Citas => ("/citas", AppointmentApiDoc::openapi()),
        Service::Repuestos => ("/repuestos", SparePartApiDoc::openapi()),
        Service::Servicios => ("/servicios", MaintenanceApiDoc::openapi()),
    };

    openapi.nest(nested.0, nested.1)
}
