//! HTTP gateway (Axum) over [`RestaurantService`](crate::service::RestaurantService).
//!
//! This module is primarily used by the `nearbite` server binary.

pub mod error;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::{restaurants_handler, search_handler};
pub use state::{Clock, HandlerState, local_clock};

use crate::cache::{
    NEARBITE_STATUS_HEADER, NEARBITE_STATUS_HEALTHY, NEARBITE_STATUS_READY,
    NEARBITE_STATUS_UNAVAILABLE,
};
use crate::store::RestaurantStore;

pub fn create_router_with_state<S>(state: HandlerState<S>) -> Router
where
    S: RestaurantStore + 'static,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler::<S>))
        .route("/v1/restaurants", get(restaurants_handler::<S>))
        .route("/v1/restaurants/search", get(search_handler::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub cache: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        NEARBITE_STATUS_HEADER,
        HeaderValue::from_static(NEARBITE_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

/// Always 200: an unavailable cache only disables the write-through path.
#[tracing::instrument(skip(state))]
pub async fn ready_handler<S>(State(state): State<HandlerState<S>>) -> Response
where
    S: RestaurantStore + 'static,
{
    let cache_status = if state.service.finder().cache().is_available().await {
        NEARBITE_STATUS_READY
    } else {
        NEARBITE_STATUS_UNAVAILABLE
    };

    let components = ComponentStatus {
        http: NEARBITE_STATUS_READY,
        cache: cache_status,
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        NEARBITE_STATUS_HEADER,
        HeaderValue::from_static(NEARBITE_STATUS_READY),
    );

    (
        StatusCode::OK,
        headers,
        Json(ReadyResponse {
            status: "ok",
            components,
        }),
    )
        .into_response()
}
