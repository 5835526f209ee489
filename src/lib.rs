pub mod config;
pub mod controllers;
pub mod database;
pub mod graphql;
pub mod models;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// Shared state for the whole application
#[derive(Clone)]
pub struct AppState {
    pub db: database::Database,
    pub schema: graphql::AppSchema,
    pub config: config::Config,
}

impl AppState {
    pub async fn new(config: config::Config) -> anyhow::Result<Arc<Self>> {
        let db = database::Database::new(&config.database.url, config.database.pool_size).await?;

        db.run_migrations().await?;

        let schema = graphql::build_schema(db.pool.clone());
        Ok(Arc::new(Self { db, schema, config }))
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Events API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .merge(controllers::routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    fn test_state() -> Arc<AppState> {
        let db = database::Database::connect_lazy("postgres://localhost/events_test").unwrap();
        let schema = graphql::build_schema(db.pool.clone());
        let config = config::Config {
            app: config::AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                rust_log: "events_api=debug".to_string(),
            },
            database: config::DatabaseConfig {
                url: "postgres://localhost/events_test".to_string(),
                pool_size: 1,
            },
        };
        Arc::new(AppState { db, schema, config })
    }

    #[tokio::test]
    async fn health_responds_without_touching_the_database() {
        let response = app(test_state())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn root_responds_ok() {
        let response = app(test_state())
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn graphiql_is_served_on_get() {
        let response = app(test_state())
            .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn malformed_document_is_200_with_errors_in_body() {
        let request = Request::post("/graphql")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"query": "{ events { "}"#))
            .unwrap();
        let response = app(test_state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
