use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/auditorium/book",
            post(handlers::auditorium::book_auditorium),
        )
        .route(
            "/api/auditorium/bookings",
            get(handlers::auditorium::list_bookings),
        )
}
