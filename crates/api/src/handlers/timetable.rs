//! # Timetable Entry Handlers
//!
//! Admin-facing CRUD over recurring weekly entries plus the shared listing
//! and available-rooms lookups. Every mutating handler follows the same
//! sequence: field validation, room-type check, conflict checks under the
//! write lock, commit, then a fire-and-forget student notification.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use timetable_core::{
    errors::TimetableError,
    models::{
        classroom::{ensure_room_type, AvailableRoomsResponse, Classroom, RoomType},
        entry::{
            validate_day_of_week, validate_time_range, CreateEntryRequest, EntryFilters,
            ListEntriesResponse, TimetableEntry, UpdateEntryRequest,
        },
        notification::ChangeKind,
    },
    time::{day_of_week_from_date, overlaps},
};
use uuid::Uuid;

use crate::{
    handlers::{check_slot_free, load_classroom, notify_students, require_entry},
    middleware::{
        auth::{Caller, Role},
        error_handling::{AppError, AppJson},
    },
    ApiState,
};

#[axum::debug_handler]
pub async fn list_entries(
    State(state): State<Arc<ApiState>>,
    _caller: Caller,
    Query(filters): Query<EntryFilters>,
) -> Result<Json<ListEntriesResponse>, AppError> {
    let timetable = timetable_db::repositories::entry::list_entries(&state.db_pool, &filters)
        .await
        .map_err(TimetableError::Database)?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(ListEntriesResponse { timetable }))
}

#[axum::debug_handler]
pub async fn create_entry(
    State(state): State<Arc<ApiState>>,
    caller: Caller,
    AppJson(payload): AppJson<CreateEntryRequest>,
) -> Result<(StatusCode, Json<TimetableEntry>), AppError> {
    caller.require(Role::Admin)?;
    payload.validate()?;

    // The picked date only determines the recurring weekly slot.
    let day_of_week = day_of_week_from_date(payload.date);

    // Regular entries may only target rooms of type "classroom".
    let room = load_classroom(&state.db_pool, payload.classroom_id).await?;
    ensure_room_type(&room, RoomType::Classroom)?;

    // Check-then-insert must be atomic with respect to other writers.
    let _guard = state.write_lock.lock().await;
    check_slot_free(
        &state.db_pool,
        payload.classroom_id,
        payload.professor_id,
        day_of_week as i16,
        payload.start_time,
        payload.end_time,
        None,
    )
    .await?;

    let entry: TimetableEntry = timetable_db::repositories::entry::create_entry(
        &state.db_pool,
        &payload.subject,
        payload.department_id,
        &payload.batch,
        payload.professor_id,
        payload.classroom_id,
        day_of_week as i16,
        payload.start_time,
        payload.end_time,
    )
    .await
    .map_err(TimetableError::Database)?
    .into();
    drop(_guard);

    notify_students(state.db_pool.clone(), ChangeKind::Created, entry.clone());

    Ok((StatusCode::CREATED, Json(entry)))
}

#[axum::debug_handler]
pub async fn update_entry(
    State(state): State<Arc<ApiState>>,
    caller: Caller,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<UpdateEntryRequest>,
) -> Result<Json<TimetableEntry>, AppError> {
    caller.require(Role::Admin)?;

    if payload.is_empty() {
        return Err(AppError(TimetableError::Validation(
            "No fields to update".to_string(),
        )));
    }
    if let Some(day) = payload.day_of_week {
        validate_day_of_week(day)?;
    }

    let current = require_entry(
        timetable_db::repositories::entry::get_entry_by_id(&state.db_pool, id)
            .await
            .map_err(TimetableError::Database)?
            .map(Into::into),
    )?;

    // Absent patch fields keep their current values; the merged slot is
    // what gets validated and conflict-checked.
    let day_of_week = payload.day_of_week.unwrap_or(current.day_of_week);
    let start_time = payload.start_time.unwrap_or(current.start_time);
    let end_time = payload.end_time.unwrap_or(current.end_time);
    let classroom_id = payload.classroom_id.unwrap_or(current.classroom_id);

    validate_time_range(start_time, end_time)?;
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

#[axum::debug_handler]
pub async fn delete_entry(
    State(state): State<Arc<ApiState>>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    caller.require(Role::Admin)?;

    let entry = require_entry(
        timetable_db::repositories::entry::get_entry_by_id(&state.db_pool, id)
            .await
            .map_err(TimetableError::Database)?
            .map(Into::into),
    )?;

    let deleted = timetable_db::repositories::entry::delete_entry(&state.db_pool, id)
        .await
        .map_err(TimetableError::Database)?;
    if !deleted {
        return Err(AppError(TimetableError::NotFound(
            "Timetable entry not found".to_string(),
        )));
    }

    notify_students(state.db_pool.clone(), ChangeKind::Deleted, entry);

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, serde::Deserialize)]
pub struct AvailableRoomsQuery {
    pub day_of_week: u8,
    #[serde(with = "timetable_core::time::time_format")]
    pub start_time: chrono::NaiveTime,
    #[serde(with = "timetable_core::time::time_format")]
    pub end_time: chrono::NaiveTime,
}

/// Rooms with no overlapping entry on the given day and time range.
#[axum::debug_handler]
pub async fn available_rooms(
    State(state): State<Arc<ApiState>>,
    _caller: Caller,
    Query(query): Query<AvailableRoomsQuery>,
) -> Result<Json<AvailableRoomsResponse>, AppError> {
    validate_day_of_week(query.day_of_week)?;
    validate_time_range(query.start_time, query.end_time)?;

    let day_entries: Vec<TimetableEntry> =
        timetable_db::repositories::entry::entries_by_day(&state.db_pool, query.day_of_week as i16)
            .await
            .map_err(TimetableError::Database)?
            .into_iter()
            .map(Into::into)
            .collect();

    let mut rooms = Vec::new();
    for row in timetable_db::repositories::classroom::list_classrooms(&state.db_pool, None)
        .await
        .map_err(TimetableError::Database)?
    {
        let room = Classroom::try_from(row).map_err(TimetableError::Database)?;
        let busy = day_entries.iter().any(|entry| {
            entry.classroom_id == room.id
                && overlaps(entry.start_time, entry.end_time, query.start_time, query.end_time)
        });
        if !busy {
            rooms.push(room);
        }
    }

    Ok(Json(AvailableRoomsResponse { rooms }))
}
