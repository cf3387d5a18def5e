use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/professor/my-classes",
            get(handlers::professor::my_classes),
        )
        .route(
            "/api/professor/reschedule/:id",
            put(handlers::professor::reschedule_entry),
        )
}
