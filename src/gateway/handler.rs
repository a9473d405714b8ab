use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, instrument};

use crate::cache::NEARBITE_CACHE_HEADER;
use crate::gateway::error::GatewayError;
use crate::gateway::state::HandlerState;
use crate::service::{GetRestaurantsRequest, GetRestaurantsResponse};
use crate::store::RestaurantStore;

/// `GET /v1/restaurants?latitude=&longitude=`
#[instrument(skip(state, query))]
pub async fn restaurants_handler<S>(
    State(state): State<HandlerState<S>>,
    query: Result<Query<GetRestaurantsRequest>, QueryRejection>,
) -> Result<Response, GatewayError>
where
    S: RestaurantStore + 'static,
{
    let Query(request) = query.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    let now = state.now();
    debug!(time = %now, "Proximity request");

    let response = state
        .service
        .find_all_restaurants_close_by(&request, now)
        .await?;

    Ok(make_response(response))
}

/// `GET /v1/restaurants/search?latitude=&longitude=&searchFor=`
#[instrument(skip(state, query))]
pub async fn search_handler<S>(
    State(state): State<HandlerState<S>>,
    query: Result<Query<GetRestaurantsRequest>, QueryRejection>,
) -> Result<Response, GatewayError>
where
    S: RestaurantStore + 'static,
{
    let Query(request) = query.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    let now = state.now();
    debug!(time = %now, "Search request");

    let response = state
        .service
        .find_restaurants_by_search_query(&request, now)
        .await?;

    Ok(make_response(response))
}

pub(crate) fn make_response(response: GetRestaurantsResponse) -> Response {
    let mut headers = HeaderMap::new();
    if let Some(status) = response.cache_status {
        headers.insert(
            NEARBITE_CACHE_HEADER,
            HeaderValue::from_static(status.as_header_value()),
        );
    }

    (StatusCode::OK, headers, Json(response)).into_response()
}
