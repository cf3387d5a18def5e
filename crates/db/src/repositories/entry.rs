use crate::models::DbTimetableEntry;
use chrono::NaiveTime;
use eyre::Result;
use sqlx::{Pool, Postgres};
use timetable_core::models::entry::EntryFilters;
use uuid::Uuid;

const ENTRY_COLUMNS: &str = "id, seq, subject, department_id, batch, professor_id, classroom_id, \
                             day_of_week, start_time, end_time, created_at, updated_at";

#[allow(clippy::too_many_arguments)]
pub async fn create_entry(
    pool: &Pool<Postgres>,
    subject: &str,
    department_id: Uuid,
    batch: &str,
    professor_id: Uuid,
    classroom_id: Uuid,
    day_of_week: i16,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> Result<DbTimetableEntry> {
    let id = Uuid::new_v4();

    tracing::debug!(
        "Creating timetable entry: id={}, subject={}, room={}, day={}",
        id,
        subject,
        classroom_id,
        day_of_week
    );

    let entry = sqlx::query_as::<_, DbTimetableEntry>(&format!(
        r#"
        INSERT INTO timetable_entries
            (id, subject, department_id, batch, professor_id, classroom_id,
             day_of_week, start_time, end_time)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING {ENTRY_COLUMNS}
        "#,
    ))
    .bind(id)
    .bind(subject)
    .bind(department_id)
    .bind(batch)
    .bind(professor_id)
    .bind(classroom_id)
    .bind(day_of_week)
    .bind(start_time)
    .bind(end_time)
    .fetch_one(pool)
    .await?;

    Ok(entry)
}

pub async fn get_entry_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbTimetableEntry>> {
    let entry = sqlx::query_as::<_, DbTimetableEntry>(&format!(
        r#"
        SELECT {ENTRY_COLUMNS}
        FROM timetable_entries
        WHERE id = $1
        "#,
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(entry)
}

/// Writes the merged slot values for an existing entry. Callers resolve the
/// patch against the current record first; this always writes all four slot
/// fields and bumps `updated_at`.
pub async fn update_entry_slot(
    pool: &Pool<Postgres>,
    id: Uuid,
    day_of_week: i16,
    start_time: NaiveTime,
    end_time: NaiveTime,
    classroom_id: Uuid,
) -> Result<DbTimetableEntry> {
    tracing::debug!(
        "Updating timetable entry slot: id={}, day={}, room={}",
        id,
        day_of_week,
        classroom_id
    );

    let entry = sqlx::query_as::<_, DbTimetableEntry>(&format!(
        r#"
        UPDATE timetable_entries
        SET day_of_week = $2, start_time = $3, end_time = $4, classroom_id = $5,
            updated_at = NOW()
        WHERE id = $1
        RETURNING {ENTRY_COLUMNS}
        "#,
    ))
    .bind(id)
    .bind(day_of_week)
    .bind(start_time)
    .bind(end_time)
    .bind(classroom_id)
    .fetch_one(pool)
    .await?;

    Ok(entry)
}

pub async fn delete_entry(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM timetable_entries
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Lists entries matching the ANDed filters; absent filters are wildcards.
/// Rows come back in insertion order; display sorting is a caller concern.
pub async fn list_entries(
    pool: &Pool<Postgres>,
    filters: &EntryFilters,
) -> Result<Vec<DbTimetableEntry>> {
    let entries = sqlx::query_as::<_, DbTimetableEntry>(&format!(
        r#"
        SELECT {ENTRY_COLUMNS}
        FROM timetable_entries
        WHERE ($1::uuid IS NULL OR department_id = $1)
          AND ($2::varchar IS NULL OR batch = $2)
          AND ($3::smallint IS NULL OR day_of_week = $3)
          AND ($4::uuid IS NULL OR professor_id = $4)
        ORDER BY seq
        "#,
    ))
    .bind(filters.department_id)
    .bind(filters.batch.as_deref())
    .bind(filters.day_of_week.map(|day| day as i16))
    .bind(filters.professor_id)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

/// Candidate set for the room conflict check: every entry in the room on
/// that day, optionally excluding the entry being moved.
pub async fn entries_by_room_and_day(
    pool: &Pool<Postgres>,
    classroom_id: Uuid,
    day_of_week: i16,
    excluding: Option<Uuid>,
) -> Result<Vec<DbTimetableEntry>> {
    let entries = sqlx::query_as::<_, DbTimetableEntry>(&format!(
        r#"
        SELECT {ENTRY_COLUMNS}
        FROM timetable_entries
        WHERE classroom_id = $1
          AND day_of_week = $2
          AND ($3::uuid IS NULL OR id != $3)
        ORDER BY seq
        "#,
    ))
    .bind(classroom_id)
    .bind(day_of_week)
    .bind(excluding)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

/// Candidate set for the professor conflict check: every entry the
/// professor teaches on that day, across all rooms and departments.
pub async fn entries_by_professor_and_day(
    pool: &Pool<Postgres>,
    professor_id: Uuid,
    day_of_week: i16,
    excluding: Option<Uuid>,
) -> Result<Vec<DbTimetableEntry>> {
    let entries = sqlx::query_as::<_, DbTimetableEntry>(&format!(
        r#"
        SELECT {ENTRY_COLUMNS}
        FROM timetable_entries
        WHERE professor_id = $1
          AND day_of_week = $2
          AND ($3::uuid IS NULL OR id != $3)
        ORDER BY seq
        "#,
    ))
    .bind(professor_id)
    .bind(day_of_week)
    .bind(excluding)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

/// All entries on a given day, used by the available-rooms lookup.
pub async fn entries_by_day(
    pool: &Pool<Postgres>,
    day_of_week: i16,
) -> Result<Vec<DbTimetableEntry>> {
    let entries = sqlx::query_as::<_, DbTimetableEntry>(&format!(
        r#"
        SELECT {ENTRY_COLUMNS}
        FROM timetable_entries
        WHERE day_of_week = $1
        ORDER BY seq
        "#,
    ))
    .bind(day_of_week)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

/// Professor's own classes, optionally narrowed to one day. With
/// `rescheduled_only` set, returns only classes whose slot changed after
/// creation.
pub async fn entries_by_professor(
    pool: &Pool<Postgres>,
    professor_id: Uuid,
    day_of_week: Option<i16>,
    rescheduled_only: bool,
) -> Result<Vec<DbTimetableEntry>> {
    let entries = sqlx::query_as::<_, DbTimetableEntry>(&format!(
        r#"
        SELECT {ENTRY_COLUMNS}
        FROM timetable_entries
        WHERE professor_id = $1
          AND ($2::smallint IS NULL OR day_of_week = $2)
          AND (NOT $3 OR updated_at > created_at)
        ORDER BY seq
        "#,
    ))
    .bind(professor_id)
    .bind(day_of_week)
    .bind(rescheduled_only)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}
