//! # bookingmx Reservation Service
//!
//! Hotel reservation REST service with an in-memory store, plus a small
//! city-graph utility answering nearby-city queries.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, repository traits and errors
//! - **application**: Business logic (reservation lifecycle, trip queries)
//! - **infrastructure**: Storage backends (in-memory)
//! - **interfaces**: REST API with Swagger documentation
//! - **support**: Cross-cutting runtime concerns (graceful shutdown)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod support;

pub use config::{default_config_path, AppConfig};

// Re-export API router
pub use interfaces::create_api_router;
