use crate::models::DbAuditoriumBooking;
use chrono::{NaiveDate, NaiveTime};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_booking(
    pool: &Pool<Postgres>,
    classroom_id: Uuid,
    booked_by: Uuid,
    event_name: &str,
    booking_date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> Result<DbAuditoriumBooking> {
    let id = Uuid::new_v4();

    tracing::debug!(
        "Creating auditorium booking: id={}, room={}, date={}, event={}",
        id,
        classroom_id,
        booking_date,
        event_name
    );

    let booking = sqlx::query_as::<_, DbAuditoriumBooking>(
        r#"
        INSERT INTO auditorium_bookings
            (id, classroom_id, event_name, booking_date, start_time, end_time, booked_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, classroom_id, event_name, booking_date, start_time, end_time,
                  booked_by, status, created_at
        "#,
    )
    .bind(id)
    .bind(classroom_id)
    .bind(event_name)
    .bind(booking_date)
    .bind(start_time)
    .bind(end_time)
    .bind(booked_by)
    .fetch_one(pool)
    .await?;

    Ok(booking)
}

/// Candidate set for the auditorium conflict check: confirmed bookings for
/// that room on that exact calendar date.
pub async fn bookings_by_room_and_date(
    pool: &Pool<Postgres>,
    classroom_id: Uuid,
    booking_date: NaiveDate,
) -> Result<Vec<DbAuditoriumBooking>> {
    let bookings = sqlx::query_as::<_, DbAuditoriumBooking>(
        r#"
        SELECT id, classroom_id, event_name, booking_date, start_time, end_time,
               booked_by, status, created_at
        FROM auditorium_bookings
        WHERE classroom_id = $1
          AND booking_date = $2
          AND status = 'confirmed'
        "#,
    )
    .bind(classroom_id)
    .bind(booking_date)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn list_bookings(pool: &Pool<Postgres>) -> Result<Vec<DbAuditoriumBooking>> {
    let bookings = sqlx::query_as::<_, DbAuditoriumBooking>(
        r#"
        SELECT id, classroom_id, event_name, booking_date, start_time, end_time,
               booked_by, status, created_at
        FROM auditorium_bookings
        WHERE status = 'confirmed'
        ORDER BY booking_date, start_time
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}
