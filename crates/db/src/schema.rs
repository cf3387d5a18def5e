use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create classrooms table. Rooms are administered elsewhere; the
    // scheduler only reads them, but owns the table definition.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS classrooms (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            room_no VARCHAR(64) NOT NULL UNIQUE,
            capacity INTEGER NULL,
            room_type VARCHAR(32) NOT NULL
                CHECK (room_type IN ('classroom', 'auditorium', 'lab'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create timetable_entries table. `seq` preserves insertion order for
    // list queries; the CHECK constraints back up the validation done in
    // the scheduling layer.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS timetable_entries (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            seq BIGSERIAL,
            subject VARCHAR(255) NOT NULL,
            department_id UUID NOT NULL,
            batch VARCHAR(64) NOT NULL,
            professor_id UUID NOT NULL,
            classroom_id UUID NOT NULL REFERENCES classrooms(id),
            day_of_week SMALLINT NOT NULL CHECK (day_of_week BETWEEN 0 AND 6),
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create auditorium_bookings table. One-off reservations keyed by
    // concrete calendar date, append-only.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS auditorium_bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            classroom_id UUID NOT NULL REFERENCES classrooms(id),
            event_name VARCHAR(255) NOT NULL,
            booking_date DATE NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            booked_by UUID NOT NULL,
            status VARCHAR(32) NOT NULL DEFAULT 'confirmed'
                CHECK (status IN ('confirmed', 'cancelled')),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_booking_time_range CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create notifications table. Audience scoped by department and batch;
    // both NULL means broadcast.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS notifications (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            department_id UUID NULL,
            batch VARCHAR(64) NULL,
            title VARCHAR(255) NOT NULL,
            content TEXT NOT NULL,
            notification_type VARCHAR(64) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes matching the conflict-check and listing access paths.
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_entries_room_day ON timetable_entries(classroom_id, day_of_week);
        CREATE INDEX IF NOT EXISTS idx_entries_professor_day ON timetable_entries(professor_id, day_of_week);
        CREATE INDEX IF NOT EXISTS idx_entries_department_batch ON timetable_entries(department_id, batch);
        CREATE INDEX IF NOT EXISTS idx_bookings_room_date ON auditorium_bookings(classroom_id, booking_date);
        CREATE INDEX IF NOT EXISTS idx_notifications_department_batch ON notifications(department_id, batch);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
