use crate::routes;
use axum::routing::get;
use axum::{Extension, Router};
use axum_prometheus::PrometheusMetricLayerBuilder;
use http::{Method, header};
use sea_orm::DatabaseConnection;
use sentry_tower::NewSentryLayer;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

/// All routes with the database connection attached.
pub(crate) fn create_router(conn: DatabaseConnection) -> Router {
    Router::new()
        .merge(routes::swagger::create_router())
        .merge(routes::login::create_router())
        .nest("/api", routes::api::create_router())
        .layer(Extension(conn))
}

pub(crate) fn create_app(origins: &[String], conn: DatabaseConnection) -> anyhow::Result<Router> {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayerBuilder::new()
        .with_prefix("api")
        .with_default_metrics()
        .build_pair();

    let cors = CorsLayer::new()
        .allow_origin(
            origins
                .iter()
                .map(|origin| origin.parse())
                .collect::<Result<Vec<_>, _>>()?,
        )
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::AUTHORIZATION, header::ORIGIN])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .max_age(Duration::from_secs(3600));

    if origins.is_empty() {
        tracing::warn!("no cors origins configured, browsers on other origins are rejected");
    }

    let app = create_router(conn)
        .layer(cors)
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(
            // Router layers are called bottom to top
            // ServiceBuilder layers are called top to bottom
            ServiceBuilder::new()
                .layer(NewSentryLayer::new_from_top())
                .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
                .layer(prometheus_layer),
        );
    Ok(app)
}
