//! # Auditorium Booking Handlers
//!
//! One-off auditorium reservations. Unlike timetable entries these are
//! keyed to a concrete calendar date, so the conflict check is scoped by
//! (room, date) rather than (room, weekday) -- an auditorium hosting an
//! event on one Monday stays free every other Monday.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use timetable_core::{
    conflict::check_booking_conflict,
    errors::TimetableError,
    models::{
        booking::{AuditoriumBooking, BookAuditoriumRequest, ListBookingsResponse},
        classroom::{ensure_room_type, RoomType},
    },
};

use crate::{
    handlers::load_classroom,
    middleware::{
        auth::{Caller, Role},
        error_handling::{AppError, AppJson},
    },
    ApiState,
};

#[axum::debug_handler]
pub async fn book_auditorium(
    State(state): State<Arc<ApiState>>,
    caller: Caller,
    AppJson(payload): AppJson<BookAuditoriumRequest>,
) -> Result<(StatusCode, Json<AuditoriumBooking>), AppError> {
    caller.require(Role::Admin)?;
    payload.validate()?;

    // Bookings may only target rooms of type "auditorium".
    let room = load_classroom(&state.db_pool, payload.classroom_id).await?;
    ensure_room_type(&room, RoomType::Auditorium)?;

    let _guard = state.write_lock.lock().await;
    let existing: Vec<AuditoriumBooking> =
        timetable_db::repositories::booking::bookings_by_room_and_date(
            &state.db_pool,
            payload.classroom_id,
            payload.booking_date,
        )
        .await
        .map_err(TimetableError::Database)?
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<_, _>>()
        .map_err(TimetableError::Database)?;
    check_booking_conflict(&existing, payload.start_time, payload.end_time)?;

    let booking: AuditoriumBooking = timetable_db::repositories::booking::create_booking(
        &state.db_pool,
        payload.classroom_id,
        caller.user_id,
        &payload.event_name,
        payload.booking_date,
        payload.start_time,
        payload.end_time,
    )
    .await
    .map_err(TimetableError::Database)?
    .try_into()
    .map_err(TimetableError::Database)?;
    drop(_guard);

    // Broadcast to everyone; failures are logged, never surfaced.
    let pool = state.db_pool.clone();
    let announced = booking.clone();
    let room_no = room.room_no.clone();
    tokio::spawn(async move {
        let content = format!(
            "Auditorium {} booked for '{}' on {} from {} to {}.",
            room_no,
            announced.event_name,
            announced.booking_date,
            announced.start_time.format("%H:%M"),
            announced.end_time.format("%H:%M"),
        );
        let result = timetable_db::repositories::notification::create_notification(
            &pool,
            None,
            None,
            "Auditorium Booking",
            &content,
            "auditorium_booking",
        )
        .await;

        if let Err(err) = result {
            tracing::warn!("Failed to record auditorium booking notification: {err:#}");
        }
    });

    Ok((StatusCode::CREATED, Json(booking)))
}

#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
    caller: Caller,
) -> Result<Json<ListBookingsResponse>, AppError> {
    caller.require(Role::Admin)?;

    let bookings = timetable_db::repositories::booking::list_bookings(&state.db_pool)
        .await
        .map_err(TimetableError::Database)?
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<_, _>>()
        .map_err(TimetableError::Database)?;

    Ok(Json(ListBookingsResponse { bookings }))
}
