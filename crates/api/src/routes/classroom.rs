use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/classrooms", get(handlers::classroom::list_classrooms))
        .route(
            "/api/classrooms",
            post(handlers::classroom::create_classroom),
        )
}
