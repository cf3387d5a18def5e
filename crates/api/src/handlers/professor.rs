//! # Professor Handlers
//!
//! A professor can list their own classes and reschedule them. Rescheduling
//! is the one mutation open to non-admins, and only against entries the
//! caller teaches; anyone else's entry answers NotFound rather than
//! revealing it exists.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use timetable_core::{
    errors::{TimetableError, TimetableResult},
    models::{
        classroom::{ensure_room_type, RoomType},
        entry::{validate_time_range, MyClassesResponse, RescheduleRequest, TimetableEntry},
        notification::ChangeKind,
    },
    time::day_of_week_from_date,
};
use uuid::Uuid;

use crate::{
    handlers::{check_slot_free, load_classroom, notify_students},
    middleware::{
        auth::{Caller, Role},
        error_handling::{AppError, AppJson},
    },
    ApiState,
};

#[derive(Debug, Default, Deserialize)]
pub struct MyClassesQuery {
    pub day_of_week: Option<u8>,
    /// Only classes whose slot changed after creation.
    #[serde(default)]
    pub rescheduled_only: bool,
}

#[axum::debug_handler]
pub async fn my_classes(
    State(state): State<Arc<ApiState>>,
    caller: Caller,
    Query(query): Query<MyClassesQuery>,
) -> Result<Json<MyClassesResponse>, AppError> {
    caller.require(Role::Professor)?;

    let classes = timetable_db::repositories::entry::entries_by_professor(
        &state.db_pool,
        caller.user_id,
        query.day_of_week.map(|day| day as i16),
        query.rescheduled_only,
    )
    .await
    .map_err(TimetableError::Database)?
    .into_iter()
    .map(Into::into)
    .collect();

    Ok(Json(MyClassesResponse { classes }))
}

/// Resolves the professor's own entry. Absent entries (including ones
/// deleted since the id was issued) and entries taught by someone else
/// answer the same NotFound, so the endpoint does not reveal which entries
/// exist.
pub fn own_entry(
    entry: Option<TimetableEntry>,
    professor_id: Uuid,
) -> TimetableResult<TimetableEntry> {
    match entry {
        Some(entry) if entry.professor_id == professor_id => Ok(entry),
        _ => Err(TimetableError::NotFound(
            "Class not found or not authorized".to_string(),
        )),
    }
}

#[axum::debug_handler]
pub async fn reschedule_entry(
    State(state): State<Arc<ApiState>>,
    caller: Caller,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<RescheduleRequest>,
) -> Result<Json<TimetableEntry>, AppError> {
    caller.require(Role::Professor)?;

    if payload.is_empty() {
        return Err(AppError(TimetableError::Validation(
            "Request body with reschedule data is required".to_string(),
        )));
    }

    let current = own_entry(
        timetable_db::repositories::entry::get_entry_by_id(&state.db_pool, id)
            .await
            .map_err(TimetableError::Database)?
            .map(Into::into),
        caller.user_id,
    )?;

    // The picked date converts to the recurring slot; absent fields keep
    // their current values.
    let day_of_week = payload
        .date
        .map(day_of_week_from_date)
        .unwrap_or(current.day_of_week);
    let start_time = payload.start_time.unwrap_or(current.start_time);
    let end_time = payload.end_time.unwrap_or(current.end_time);
    let classroom_id = payload.classroom_id.unwrap_or(current.classroom_id);

    validate_time_range(start_time, end_time)?;

    // Only classrooms can be selected for reschedule; auditoriums are not
    // valid targets even when free.
    let room = load_classroom(&state.db_pool, classroom_id).await?;
    ensure_room_type(&room, RoomType::Classroom)?;

    let _guard = state.write_lock.lock().await;
    check_slot_free(
        &state.db_pool,
        classroom_id,
        current.professor_id,
        day_of_week as i16,
        start_time,
        end_time,
        Some(id),
    )
    .await?;

    let updated: TimetableEntry = timetable_db::repositories::entry::update_entry_slot(
        &state.db_pool,
        id,
        day_of_week as i16,
        start_time,
        end_time,
        classroom_id,
    )
    .await
    .map_err(TimetableError::Database)?
    .into();
    drop(_guard);

    notify_students(state.db_pool.clone(), ChangeKind::Updated, updated.clone());

    Ok(Json(updated))
}
