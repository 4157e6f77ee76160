//! Trip query HTTP handlers

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::trips::{build_graph, nearby_cities, GraphData, DEFAULT_MAX_DISTANCE};
use crate::interfaces::http::common::ApiResponse;

use super::dto::*;

/// Application state for trip handlers.
///
/// Holds the dataset only; the graph itself is rebuilt per request.
#[derive(Clone)]
pub struct TripAppState {
    pub dataset: Arc<GraphData>,
}

#[utoipa::path(
    get,
    path = "/api/v1/trips/nearby-cities",
    tag = "Trips",
    params(NearbyCitiesParams),
    responses(
        (status = 200, description = "Cities within range, closest first; empty for an unknown destination", body = ApiResponse<Vec<NearbyCityDto>>)
    )
)]
pub async fn get_nearby_cities(
    State(state): State<TripAppState>,
    Query(params): Query<NearbyCitiesParams>,
) -> Result<
    Json<ApiResponse<Vec<NearbyCityDto>>>,
    (StatusCode, Json<ApiResponse<Vec<NearbyCityDto>>>),
> {
    let graph = build_graph(&state.dataset).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )
    })?;

    let max_distance = params.max_distance.unwrap_or(DEFAULT_MAX_DISTANCE);
    let matches: Vec<NearbyCityDto> = nearby_cities(&graph, &params.destination, max_distance)
        .into_iter()
        .map(NearbyCityDto::from)
        .collect();

    Ok(Json(ApiResponse::success(matches)))
}
