//! API routes module

pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Routes nested under `/api` by the shared router
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use crate::openapi::ApiDoc;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::{create_cors_layer, create_router_with_cors, parse_allowed_origins};
    use core_config::{app_info, server::ServerConfig};
    use database::postgres::PostgresConfig;
    use domain_products::entity;
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app(db: MockDatabase) -> Router {
        let state = AppState {
            config: Config {
                app: app_info!(),
                postgres: PostgresConfig::new("postgres://mock"),
                server: ServerConfig::default(),
                environment: Environment::Development,
                run_migrations: false,
            },
            db: db.into_connection(),
        };
        let cors = create_cors_layer(parse_allowed_origins("http://localhost:3000").unwrap());
        create_router_with_cors::<ApiDoc>(routes(&state), cors)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_products_are_served_under_api_prefix() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![
            entity::Model {
                id: 2,
                name: "Monitor".to_string(),
                price: 300.0,
                availability: true,
            },
        ]]);

        let (status, body) = get(app(db), "/api/products").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "data": [{ "id": 2, "name": "Monitor", "price": 300.0, "availability": true }] })
        );
    }

    #[tokio::test]
    async fn test_missing_product_through_full_stack() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()]);

        let (status, body) = get(app(db), "/api/products/7").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Producto No Encontrado" }));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (status, _) = get(app(MockDatabase::new(DatabaseBackend::Postgres)), "/products").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
