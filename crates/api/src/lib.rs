//! # Timetable API
//!
//! The API crate provides the web server for the timetable scheduling
//! service: creating, updating, rescheduling and deleting recurring class
//! entries, booking auditoriums, and the read-only listing endpoints.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement the scheduling operations (validation, conflict
//!   checks, commit)
//! - **Middleware**: Caller identity extraction and error-to-status mapping
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework and SQLx for database interactions.
//!
//! ## Write serialization
//!
//! Every conflict-checked mutation runs check-then-commit while holding
//! [`ApiState::write_lock`], so two concurrent requests cannot both pass the
//! conflict check against the pre-mutation state and then both commit. Read
//! queries take no lock.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement the scheduling operations
pub mod handlers;
/// Middleware for caller identity and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers.
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
    /// Serializes all conflict-checked mutations (see crate docs)
    pub write_lock: Mutex<()>,
}

impl ApiState {
    pub fn new(db_pool: PgPool) -> Self {
        Self {
            db_pool,
            write_lock: Mutex::new(()),
        }
    }
}

/// Starts the API server with the provided configuration and database
/// connection: initializes logging, builds the router, and serves until
/// shutdown.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState::new(db_pool));

    // Build the application router with all routes
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Timetable entry management endpoints
        .merge(routes::timetable::routes())
        // Professor-facing endpoints (own classes, reschedule)
        .merge(routes::professor::routes())
        // Auditorium booking endpoints
        .merge(routes::auditorium::routes())
        // Classroom administration endpoints
        .merge(routes::classroom::routes())
        // Notification listing endpoints
        .merge(routes::notification::routes())
        // Attach shared state to all routes
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(
                origins
                    .iter()
                    .map(|origin| origin.parse().unwrap())
                    .collect::<Vec<_>>(),
            )
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(tower_http::timeout::TimeoutLayer::new(
        std::time::Duration::from_secs(config.request_timeout),
    ));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
