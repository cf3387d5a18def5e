//! # Classroom Handlers
//!
//! Thin administrative surface over rooms. The scheduler itself treats
//! rooms as read-only inputs; these endpoints exist so an admin can seed
//! and inspect them.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use timetable_core::{
    errors::TimetableError,
    models::{
        classroom::{Classroom, CreateClassroomRequest, ListClassroomsResponse, RoomType},
        entry::require_non_empty,
    },
};

use crate::{
    middleware::{
        auth::{Caller, Role},
        error_handling::{AppError, AppJson},
    },
    ApiState,
};

#[derive(Debug, Default, Deserialize)]
pub struct ListClassroomsQuery {
    pub room_type: Option<RoomType>,
}

#[axum::debug_handler]
pub async fn list_classrooms(
    State(state): State<Arc<ApiState>>,
    caller: Caller,
    Query(query): Query<ListClassroomsQuery>,
) -> Result<Json<ListClassroomsResponse>, AppError> {
    caller.require_any(&[Role::Admin, Role::Professor])?;

    let classrooms = timetable_db::repositories::classroom::list_classrooms(
        &state.db_pool,
        query.room_type.map(|room_type| room_type.as_str()),
    )
    .await
    .map_err(TimetableError::Database)?
    .into_iter()
    .map(TryInto::try_into)
    .collect::<Result<_, _>>()
    .map_err(TimetableError::Database)?;

    Ok(Json(ListClassroomsResponse { classrooms }))
}

#[axum::debug_handler]
pub async fn create_classroom(
    State(state): State<Arc<ApiState>>,
    caller: Caller,
    AppJson(payload): AppJson<CreateClassroomRequest>,
) -> Result<(StatusCode, Json<Classroom>), AppError> {
    caller.require(Role::Admin)?;
    require_non_empty("room_no", &payload.room_no)?;

    let existing = timetable_db::repositories::classroom::get_classroom_by_room_no(
        &state.db_pool,
        &payload.room_no,
    )
    .await
    .map_err(TimetableError::Database)?;
    if existing.is_some() {
        return Err(AppError(TimetableError::Validation(
            "Room number already exists".to_string(),
        )));
    }

    let classroom: Classroom = timetable_db::repositories::classroom::create_classroom(
        &state.db_pool,
        &payload.room_no,
        payload.capacity,
        payload.room_type.as_str(),
    )
    .await
    .map_err(TimetableError::Database)?
    .try_into()
    .map_err(TimetableError::Database)?;

    Ok((StatusCode::CREATED, Json(classroom)))
}
