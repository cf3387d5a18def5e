use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use eyre::eyre;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use timetable_core::models::{
    booking::AuditoriumBooking,
    classroom::Classroom,
    entry::TimetableEntry,
    notification::Notification,
};
use uuid::Uuid;

/// Row shape for `timetable_entries`. `seq` records insertion order and is
/// not exposed past this crate.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTimetableEntry {
    pub id: Uuid,
    pub seq: i64,
    pub subject: String,
    pub department_id: Uuid,
    pub batch: String,
    pub professor_id: Uuid,
    pub classroom_id: Uuid,
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbTimetableEntry> for TimetableEntry {
    fn from(row: DbTimetableEntry) -> Self {
        TimetableEntry {
            id: row.id,
            subject: row.subject,
            department_id: row.department_id,
            batch: row.batch,
            professor_id: row.professor_id,
            classroom_id: row.classroom_id,
            day_of_week: row.day_of_week as u8,
            start_time: row.start_time,
            end_time: row.end_time,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClassroom {
    pub id: Uuid,
    pub room_no: String,
    pub capacity: Option<i32>,
    pub room_type: String,
}

impl TryFrom<DbClassroom> for Classroom {
    type Error = eyre::Report;

    fn try_from(row: DbClassroom) -> Result<Self, Self::Error> {
        let room_type = row
            .room_type
            .parse()
            .map_err(|err: String| eyre!(err))?;
        Ok(Classroom {
            id: row.id,
            room_no: row.room_no,
            capacity: row.capacity,
            room_type,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAuditoriumBooking {
    pub id: Uuid,
    pub classroom_id: Uuid,
    pub event_name: String,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub booked_by: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbAuditoriumBooking> for AuditoriumBooking {
    type Error = eyre::Report;

    fn try_from(row: DbAuditoriumBooking) -> Result<Self, Self::Error> {
        let status = row.status.parse().map_err(|err: String| eyre!(err))?;
        Ok(AuditoriumBooking {
            id: row.id,
            classroom_id: row.classroom_id,
            event_name: row.event_name,
            booking_date: row.booking_date,
            start_time: row.start_time,
            end_time: row.end_time,
            booked_by: row.booked_by,
            status,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbNotification {
    pub id: Uuid,
    pub department_id: Option<Uuid>,
    pub batch: Option<String>,
    pub title: String,
    pub content: String,
    pub notification_type: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbNotification> for Notification {
    fn from(row: DbNotification) -> Self {
        Notification {
            id: row.id,
            department_id: row.department_id,
            batch: row.batch,
            title: row.title,
            content: row.content,
            notification_type: row.notification_type,
            created_at: row.created_at,
        }
    }
}
