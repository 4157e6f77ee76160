//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::trips::GraphData;
use crate::application::ReservationService;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::{health, reservations, trips};
use crate::interfaces::http::modules::health::HealthState;
use crate::interfaces::http::modules::reservations::ReservationAppState;
use crate::interfaces::http::modules::trips::TripAppState;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Reservations
        reservations::list_reservations,
        reservations::get_reservation,
        reservations::create_reservation,
        reservations::update_reservation,
        reservations::cancel_reservation,
        // Trips
        trips::get_nearby_cities,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            // Reservations
            reservations::ReservationDto,
            reservations::ReservationPayload,
            // Trips
            trips::NearbyCityDto,
            // Health
            health::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Reservations", description = "Hotel reservation CRUD with lifecycle validation"),
        (name = "Trips", description = "Nearby-city lookups over the sample city graph"),
    ),
    info(
        title = "bookingmx Reservations API",
        version = "1.0.0",
        description = "REST API for hotel reservations and nearby-city trip queries",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    reservation_service: Arc<ReservationService>,
    trip_dataset: Arc<GraphData>,
) -> Router {
    let reservation_routes = Router::new()
        .route(
            "/",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        .route(
            "/{id}",
            get(reservations::get_reservation)
                .put(reservations::update_reservation)
                .delete(reservations::cancel_reservation),
        )
        .with_state(ReservationAppState {
            service: reservation_service,
        });

    let trip_routes = Router::new()
        .route("/nearby-cities", get(trips::get_nearby_cities))
        .with_state(TripAppState {
            dataset: trip_dataset,
        });

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(HealthState {
            started_at: Arc::new(Instant::now()),
        });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Health
        .merge(health_routes)
        // Reservations
        .nest("/api/v1/reservations", reservation_routes)
        // Trips
        .nest("/api/v1/trips", trip_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────
