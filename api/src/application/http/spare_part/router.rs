use axum::Router;
use utoipa::OpenApi;

use super::handlers::{
    filter_spare_parts::{__path_filter_spare_parts, filter_spare_parts},
    get_low_stock_spare_parts::{__path_get_low_stock_spare_parts, get_low_stock_spare_parts},
    get_spare_part_filter_options::{
        __path_get_spare_part_filter_options, get_spare_part_filter_options,
    },
    get_spare_part_stats::{__path_get_spare_part_stats, get_spare_part_stats},
    get_spare_parts_by_category::{
        __path_get_spare_parts_by_category, get_spare_parts_by_category,
    },
};
use crate::application::http::server::{app_state::AppState, http_server::GetRoute};

#[derive(OpenApi)]
#[openapi(paths(
    filter_spare_parts,
    get_spare_part_stats,
    get_spare_parts_by_category,
    get_low_stock_spare_parts,
    get_spare_part_filter_options
))]
pub struct SparePartApiDoc;

pub fn spare_part_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .get_route(
            &format!("{}/repuestos/filtros", state.args.server.root_path),
            filter_spare_parts,
        )
        .get_route(
            &format!("{}/repuestos/estadisticas", state.args.server.root_path),
            get_spare_part_stats,
        )
        .get_route(
            &format!("{}/repuestos/por-categoria", state.args.server.root_path),
            get_spare_parts_by_category,
        )
        .get_route(
            &format!("{}/repuestos/bajo-stock", state.args.server.root_path),
            get_low_stock_spare_parts,
        )
        .get_route(
            &format!("{}/repuestos/opciones-filtro", state.args.server.root_path),
            get_spare_part_filter_options,
        )
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Value};
    use serde_json::{Value as JsonValue, json};

    use crate::application::http::server::test_support::{
        connect, logged_sql, mock_row, no_rows, test_server,
    };

    #[tokio::test]
    async fn test_filter_by_category_and_price_range() {
        let mock = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                mock_row([
                    ("id_repuesto", Value::Int(Some(1))),
                    ("nombre", Value::from("Pastillas delanteras")),
                ]),
                mock_row([
                    ("id_repuesto", Value::Int(Some(2))),
                    ("nombre", Value::from("Disco de freno")),
                ]),
            ]]);
        let db = connect(mock);
        let server = test_server("repuestos", db.clone());

        let response = server
            .get("/api/repuestos/filtros")
            .add_query_param("categoria", "frenos")
            .add_query_param("precio_min", "10")
            .add_query_param("precio_max", "50")
            .await;

        response.assert_status_ok();
        let body = response.json::<JsonValue>();
        assert_eq!(body["success"], true);
        assert_eq!(body["total"], 2);
        assert_eq!(body["repuestos"][1]["nombre"], "Disco de freno");

        let sql = logged_sql(server, db);
        assert!(sql.contains(
            "WHERE 1=1 AND categoria = $1 AND precio >= $2 AND precio <= $3 \
             ORDER BY fecha_ingreso DESC"
        ));
        assert!(sql.contains("Double(Some(10.0))"));
        assert!(sql.contains("Double(Some(50.0))"));
    }

    #[tokio::test]
    async fn test_brand_matches_parts_for_all_brands() {
        let mock = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([no_rows()]);
        let db = connect(mock);
        let server = test_server("repuestos", db.clone());

        let response = server
            .get("/api/repuestos/filtros")
            .add_query_param("marca", "Toyota")
            .add_query_param("precio_min", "barato")
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<JsonValue>(),
            json!({ "success": true, "total": 0, "repuestos": [] })
        );

        let sql = logged_sql(server, db);
        assert!(sql.contains(
            "WHERE 1=1 AND (marcas_compatibles ILIKE $1 OR marcas_compatibles = 'todas') ORDER BY"
        ));
        assert!(sql.contains("%Toyota%"));
    }

    #[tokio::test]
    async fn test_low_stock_limit_defaults_to_ten() {
        let mock = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([no_rows()])
            .append_query_results([no_rows()])
            .append_query_results([vec![mock_row([
                ("id_repuesto", Value::Int(Some(9))),
                ("stock", Value::Int(Some(1))),
            ])]]);
        let db = connect(mock);
        let server = test_server("repuestos", db.clone());

        server.get("/api/repuestos/bajo-stock").await.assert_status_ok();
        server
            .get("/api/repuestos/bajo-stock")
            .add_query_param("limite", "muchos")
            .await
            .assert_status_ok();
        let response = server
            .get("/api/repuestos/bajo-stock")
            .add_query_param("limite", "3")
            .await;

        assert_eq!(
            response.json::<JsonValue>(),
            json!({ "success": true, "total": 1, "repuestos": [{ "id_repuesto": 9, "stock": 1 }] })
        );

        let sql = logged_sql(server, db);
        assert_eq!(sql.matches("BigInt(Some(10))").count(), 2);
        assert_eq!(sql.matches("BigInt(Some(3))").count(), 1);
    }

    #[tokio::test]
    async fn test_stats_shape() {
        let mock = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![mock_row([("total", Value::BigInt(Some(6)))])]])
            .append_query_results([vec![mock_row([
                ("categoria", Value::from("frenos")),
                ("cantidad", Value::BigInt(Some(6))),
                ("stock_total", Value::BigInt(Some(25))),
            ])]])
            .append_query_results([vec![mock_row([
                ("estado", Value::from("disponible")),
                ("cantidad", Value::BigInt(Some(6))),
            ])]])
            .append_query_results([vec![mock_row([
                ("valor_total", Value::Double(Some(750.0))),
                ("precio_promedio", Value::Double(Some(30.0))),
            ])]])
            .append_query_results([vec![mock_row([("total", Value::BigInt(Some(2)))])]])
            .append_query_results([vec![mock_row([("total", Value::BigInt(Some(0)))])]]);
        let db = connect(mock);
        let server = test_server("repuestos", db);

        let response = server.get("/api/repuestos/estadisticas").await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<JsonValue>(),
            json!({
                "success": true,
                "total": 6,
                "por_categoria": [{ "categoria": "frenos", "cantidad": 6, "stock_total": 25 }],
                "por_estado": [{ "estado": "disponible", "cantidad": 6 }],
                "valor_total": "750.00",
                "precio_promedio": "30.00",
                "bajo_stock": 2,
                "agotados": 0
            })
        );
    }

    #[tokio::test]
    async fn test_filter_options_price_range_is_formatted() {
        let mock = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![mock_row([("value", Value::from("frenos"))])]])
            .append_query_results([vec![mock_row([("value", Value::from("disponible"))])]])
            .append_query_results([vec![mock_row([
                ("minimo", Value::Double(Some(4.5))),
                ("maximo", Value::Double(Some(120.0))),
            ])]]);
        let db = connect(mock);
        let server = test_server("repuestos", db);

        let response = server.get("/api/repuestos/opciones-filtro").await;

        assert_eq!(
            response.json::<JsonValue>(),
            json!({
                "success": true,
                "categorias": ["frenos"],
                "estados": ["disponible"],
                "rango_precios": { "minimo": "4.50", "maximo": "120.00" }
            })
        );
    }

    #[tokio::test]
    async fn test_by_category_failure() {
        let mock = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("timeout".into())]);
        let db = connect(mock);
        let server = test_server("repuestos", db);

        let response = server.get("/api/repuestos/por-categoria").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.json::<JsonValue>();
        assert_eq!(body["error"], "Error al obtener repuestos por categoría");
        assert!(body["message"].as_str().unwrap().contains("timeout"));
    }
}
