//! # Tyche - Random Value Mock API
//!
//! Tyche is a small, stateless HTTP service that returns randomly generated
//! values for testing and development: integers, GUIDs, strings, topic-based
//! words, flight destinations, and synthetic user records.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tyche::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::new()?;
//!
//!     // Server will start on configured host:port
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: Request variants and the `User` record
//! - **Adapters**: Generators and HTTP handlers
//! - **Config**: Configuration management

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;

use crate::adapters::api_handler::{self, ApiState};
use crate::adapters::health_handler::HealthHandler;
use crate::adapters::random_generator::RandomGenerator;
use crate::adapters::user_generator::UserGenerator;
use axum::{routing::get, Router};
use std::sync::Arc;

/// Creates the Axum application router with all endpoints configured.
///
/// Generators are constructed once and shared across requests; they hold no
/// mutable state, so no locking is needed.
pub fn create_app() -> Router {
    let random = Arc::new(RandomGenerator::new());
    let users = Arc::new(UserGenerator::new(random.clone()));
    let health_handler = Arc::new(HealthHandler::new());

    let api_state = ApiState {
        random,
        users,
    };

    // REST endpoints under /api
    let api_router = Router::new()
        .route("/random", get(api_handler::get_random))
        .route("/random/user", get(api_handler::get_random_user))
        .route("/random/destination", get(api_handler::get_random_destination))
        .route("/time/utc", get(api_handler::get_utc_time))
        .with_state(api_state);

    let router = Router::new()
        // Health check endpoints
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .route("/health/live", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.live().await }
            }
        }))
        .nest("/api", api_router);

    router.layer(
        tower_http::cors::CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
    )
}
