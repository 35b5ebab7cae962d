//! Bodies served at `GET /` by each gateway.

use std::collections::BTreeMap;

use serde::Serialize;
use url::Url;

use crate::route::RouteTable;

/// Filter services known to the filtros gateway, keyed by route name.
const FILTER_SERVICES: [(&str, &str, &[&str]); 3] = [
    (
        "filtros_citas",
        "Filtros de Citas",
        &[
            "/citas/filtros",
            "/citas/estadisticas",
            "/citas/por-oficina",
            "/citas/opciones-filtro",
        ],
    ),
    (
        "filtros_repuestos",
        "Filtros de Repuestos",
        &[
            "/repuestos/filtros",
            "/repuestos/estadisticas",
            "/repuestos/por-categoria",
            "/repuestos/bajo-stock",
            "/repuestos/opciones-filtro",
        ],
    ),
    (
        "filtros_servicios",
        "Filtros de Servicios",
        &[
            "/servicios/filtros",
            "/servicios/estadisticas",
            "/servicios/por-categoria",
            "/servicios/mas-solicitados",
            "/servicios/rapidos",
            "/servicios/opciones-filtro",
        ],
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GatewayIndex {
    Filtros(FiltrosIndex),
    Backend(BackendIndex),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FiltrosIndex {
    pub message: &'static str,
    pub endpoints: BTreeMap<String, String>,
    pub microservicios_disponibles: Vec<Microservicio>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Microservicio {
    pub nombre: &'static str,
    pub puerto: Option<u16>,
    pub url: String,
    pub rutas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackendIndex {
    pub service: &'static str,
    pub status: &'static str,
    pub backend: String,
}

fn display_url(url: &Url) -> String {
    url.as_str().trim_end_matches('/').to_string()
}

impl GatewayIndex {
    /// Every mounted prefix plus the catalogue of the filter services behind it.
    pub fn filtros(routes: &RouteTable) -> Self {
        let endpoints = routes
            .routes()
            .iter()
            .map(|route| (route.name.clone(), format!("{}/*", route.prefix)))
            .collect();

        let microservicios_disponibles = FILTER_SERVICES
            .iter()
            .filter_map(|(name, nombre, paths)| {
                let route = routes.routes().iter().find(|route| route.name == *name)?;

                Some(Microservicio {
                    nombre: *nombre,
                    puerto: route.upstream.port_or_known_default(),
                    url: display_url(&route.upstream),
                    rutas: paths
                        .iter()
                        .map(|path| format!("GET {}{}", route.prefix, path))
                        .collect(),
                })
            })
            .collect();

        GatewayIndex::Filtros(FiltrosIndex {
            message: "✅ Gateway funcionando correctamente",
            endpoints,
            microservicios_disponibles,
        })
    }

    pub fn backend(backend: &Url) -> Self {
        GatewayIndex::Backend(BackendIndex {
            service: "Gateway Concesionaria",
            status: "running",
            backend: display_url(backend),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Route;

    fn url(raw: &str) -> Url {
        Url::parse(raw).unwrap()
    }

    #[test]
    fn test_filtros_lists_mounted_services_only() {
        let routes = RouteTable::new(vec![
            Route::new("filtros_citas", "/api/filtros-citas", url("http://citas:3004/")),
            Route::new(
                "backend_principal",
                "/api/backend-principal",
                url("http://localhost:3000"),
            ),
        ]);

        let GatewayIndex::Filtros(index) = GatewayIndex::filtros(&routes) else {
            panic!("expected the filtros index");
        };

        assert_eq!(index.message, "✅ Gateway funcionando correctamente");
        assert_eq!(
            index.endpoints,
            BTreeMap::from([
                ("filtros_citas".to_string(), "/api/filtros-citas/*".to_string()),
                (
                    "backend_principal".to_string(),
                    "/api/backend-principal/*".to_string()
                ),
            ])
        );
        assert_eq!(
            index.microservicios_disponibles,
            vec![Microservicio {
                nombre: "Filtros de Citas",
                puerto: Some(3004),
                url: "http://citas:3004".to_string(),
                rutas: vec![
                    "GET /api/filtros-citas/citas/filtros".to_string(),
                    "GET /api/filtros-citas/citas/estadisticas".to_string(),
                    "GET /api/filtros-citas/citas/por-oficina".to_string(),
                    "GET /api/filtros-citas/citas/opciones-filtro".to_string(),
                ],
            }]
        );
    }

    #[test]
    fn test_backend_reports_upstream() {
        assert_eq!(
            GatewayIndex::backend(&url("http://localhost:4000")),
            GatewayIndex::Backend(BackendIndex {
                service: "Gateway Concesionaria",
                status: "running",
                backend: "http://localhost:4000".to_string(),
            })
        );
    }
}
