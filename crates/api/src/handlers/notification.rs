//! # Notification Handlers
//!
//! Read-only listing of recorded notifications. Rows are written by the
//! mutating handlers; delivery (sockets, email) belongs to collaborators.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use timetable_core::{
    errors::TimetableError, models::notification::ListNotificationsResponse,
};
use uuid::Uuid;

use crate::{
    middleware::{auth::Caller, error_handling::AppError},
    ApiState,
};

const DEFAULT_LIMIT: i64 = 20;

#[derive(Debug, Default, Deserialize)]
pub struct ListNotificationsQuery {
    pub department_id: Option<Uuid>,
    pub batch: Option<String>,
    pub limit: Option<i64>,
}

#[axum::debug_handler]
pub async fn list_notifications(
    State(state): State<Arc<ApiState>>,
    _caller: Caller,
    Query(query): Query<ListNotificationsQuery>,
) -> Result<Json<ListNotificationsResponse>, AppError> {
    let notifications = timetable_db::repositories::notification::list_notifications(
        &state.db_pool,
        query.department_id,
        query.batch.as_deref(),
        query.limit.unwrap_or(DEFAULT_LIMIT),
    )
    .await
    .map_err(TimetableError::Database)?
    .into_iter()
    .map(Into::into)
    .collect();

    Ok(Json(ListNotificationsResponse { notifications }))
}
