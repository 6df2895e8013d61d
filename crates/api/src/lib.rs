//! # Gigbook API
//!
//! The API crate provides the web server for the gigbook booking directory.
//! It exposes JSON endpoints for listing, creating, editing, deleting and
//! searching venues and artists, and for booking shows.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Fetch rows through the store, run core logic, shape responses
//! - **Middleware**: Map booking errors onto HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! Handlers never touch SQL directly. They go through a
//! [`BookingStore`](gigbook_core::store::BookingStore), which in production is
//! a [`PgStore`](gigbook_db::PgStore) and in tests a mock.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement the directory's operations
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{Router, http::HeaderValue};
use eyre::{Result, WrapErr};
use gigbook_core::{availability::AvailabilityValidator, store::BookingStore};
use gigbook_db::{DbPool, PgStore};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Persistence handle used by every handler
    pub store: Arc<dyn BookingStore>,
    /// Booking rules, including the configured conflict buffer
    pub validator: AvailabilityValidator,
}

impl ApiState {
    pub fn new(store: Arc<dyn BookingStore>, validator: AvailabilityValidator) -> Self {
        Self { store, validator }
    }
}

/// Builds the application router with all routes attached to `state`.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Venue directory endpoints
        .merge(routes::venues::routes())
        // Artist directory endpoints
        .merge(routes::artists::routes())
        // Show booking endpoints
        .merge(routes::shows::routes())
        // Attach shared state to all routes
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Starts the API server with the provided configuration and database connection
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and other settings
/// * `db_pool` - PostgreSQL connection pool backing the booking store
pub async fn start_server(config: config::ApiConfig, db_pool: DbPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState::new(
        Arc::new(PgStore::new(db_pool)),
        AvailabilityValidator::with_buffer_hours(config.booking_buffer_hours),
    ));

    let app = router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .wrap_err("Invalid API_CORS_ORIGINS value")?;

        let cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(
        "Server listening on http://{} (booking buffer: {}h)",
        addr, config.booking_buffer_hours
    );
    axum::serve(listener, app).await?;

    Ok(())
}
