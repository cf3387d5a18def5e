pub mod auditorium;
pub mod classroom;
pub mod notification;
pub mod professor;
pub mod timetable;

use chrono::NaiveTime;
use sqlx::PgPool;
use timetable_core::{
    conflict::{check_professor_conflict, check_room_conflict},
    errors::{TimetableError, TimetableResult},
    models::{classroom::Classroom, entry::TimetableEntry, notification::ChangeKind},
};
use uuid::Uuid;

/// Resolves a fetched entry; ids that never existed or were deleted since
/// being issued answer NotFound.
pub fn require_entry(entry: Option<TimetableEntry>) -> TimetableResult<TimetableEntry> {
    entry.ok_or_else(|| TimetableError::NotFound("Timetable entry not found".to_string()))
}

/// Loads a classroom as its domain type; absent rooms answer NotFound.
pub(crate) async fn load_classroom(pool: &PgPool, id: Uuid) -> TimetableResult<Classroom> {
    let row = timetable_db::repositories::classroom::get_classroom_by_id(pool, id)
        .await
        .map_err(TimetableError::Database)?
        .ok_or_else(|| TimetableError::NotFound(format!("Classroom {id} not found")))?;

    Classroom::try_from(row).map_err(TimetableError::Database)
}

/// Runs both recurring-slot conflict checks for a proposed (room, day,
/// time range, professor). Must be called while holding the write lock so
/// the candidate sets cannot change before the commit.
pub(crate) async fn check_slot_free(
    pool: &PgPool,
    classroom_id: Uuid,
    professor_id: Uuid,
    day_of_week: i16,
    start_time: NaiveTime,
    end_time: NaiveTime,
    excluding: Option<Uuid>,
) -> TimetableResult<()> {
    let room_entries: Vec<TimetableEntry> =
        timetable_db::repositories::entry::entries_by_room_and_day(
            pool,
            classroom_id,
            day_of_week,
            excluding,
        )
        .await
        .map_err(TimetableError::Database)?
        .into_iter()
        .map(Into::into)
        .collect();
    check_room_conflict(&room_entries, start_time, end_time, excluding)?;

    let professor_entries: Vec<TimetableEntry> =
        timetable_db::repositories::entry::entries_by_professor_and_day(
            pool,
            professor_id,
            day_of_week,
            excluding,
        )
        .await
        .map_err(TimetableError::Database)?
        .into_iter()
        .map(Into::into)
        .collect();
    check_professor_conflict(&professor_entries, start_time, end_time, excluding)?;

    Ok(())
}

/// Records a student-facing notification for a timetable change.
/// Fire-and-forget: failures are logged, never surfaced to the caller.
pub(crate) fn notify_students(pool: PgPool, kind: ChangeKind, entry: TimetableEntry) {
    tokio::spawn(async move {
        let result = timetable_db::repositories::notification::create_notification(
            &pool,
            Some(entry.department_id),
            Some(entry.batch.as_str()),
            kind.title(),
            &kind.content(&entry.subject),
            kind.notification_type(),
        )
        .await;

        if let Err(err) = result {
            tracing::warn!("Failed to record timetable notification: {err:#}");
        }
    });
}
