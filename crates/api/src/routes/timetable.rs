use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/timetable", get(handlers::timetable::list_entries))
        .route("/api/timetable", post(handlers::timetable::create_entry))
        .route(
            "/api/timetable/available-rooms",
            get(handlers::timetable::available_rooms),
        )
        .route("/api/timetable/:id", put(handlers::timetable::update_entry))
        .route(
            "/api/timetable/:id",
            delete(handlers::timetable::delete_entry),
        )
}
