use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{TimetableError, TimetableResult};

/// A recurring weekly class assignment. Recurs every week on `day_of_week`
/// (0 = Monday .. 6 = Sunday) indefinitely; there is no per-date instance.
///
/// Subject, professor, department and batch are fixed at creation; only the
/// slot (day, times, room) can change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableEntry {
    pub id: Uuid,
    pub subject: String,
    pub department_id: Uuid,
    pub batch: String,
    pub professor_id: Uuid,
    pub classroom_id: Uuid,
    pub day_of_week: u8,
    #[serde(with = "crate::time::time_format")]
    pub start_time: NaiveTime,
    #[serde(with = "crate::time::time_format")]
    pub end_time: NaiveTime,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a timetable entry. The recurring `day_of_week` is
/// derived from `date`, never submitted directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEntryRequest {
    pub subject: String,
    pub department_id: Uuid,
    pub batch: String,
    pub professor_id: Uuid,
    pub classroom_id: Uuid,
    pub date: NaiveDate,
    #[serde(with = "crate::time::time_format")]
    pub start_time: NaiveTime,
    #[serde(with = "crate::time::time_format")]
    pub end_time: NaiveTime,
}

impl CreateEntryRequest {
    /// Field-level checks that need no database access. Conflict checks and
    /// room-type checks happen at the scheduling boundary.
    pub fn validate(&self) -> TimetableResult<()> {
        require_non_empty("subject", &self.subject)?;
        require_non_empty("batch", &self.batch)?;
        validate_time_range(self.start_time, self.end_time)
    }
}

/// Admin patch for an existing entry. Absent fields keep their current
/// values; subject/professor/department/batch are not patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEntryRequest {
    pub classroom_id: Option<Uuid>,
    pub day_of_week: Option<u8>,
    #[serde(default, with = "crate::time::opt_time_format")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "crate::time::opt_time_format")]
    pub end_time: Option<NaiveTime>,
}

impl UpdateEntryRequest {
    pub fn is_empty(&self) -> bool {
        self.classroom_id.is_none()
            && self.day_of_week.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
    }
}

/// Professor-facing reschedule of their own class. The new day is picked as
/// a calendar date and converted to a recurring slot; absent fields keep
/// their current values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RescheduleRequest {
    pub date: Option<NaiveDate>,
    #[serde(default, with = "crate::time::opt_time_format")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "crate::time::opt_time_format")]
    pub end_time: Option<NaiveTime>,
    pub classroom_id: Option<Uuid>,
}

impl RescheduleRequest {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.classroom_id.is_none()
    }
}

/// ANDed filters for listing entries; absent fields are wildcards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryFilters {
    pub department_id: Option<Uuid>,
    pub batch: Option<String>,
    pub day_of_week: Option<u8>,
    pub professor_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEntriesResponse {
    pub timetable: Vec<TimetableEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyClassesResponse {
    pub classes: Vec<TimetableEntry>,
}

pub fn require_non_empty(field: &str, value: &str) -> TimetableResult<()> {
    if value.trim().is_empty() {
        return Err(TimetableError::Validation(format!("{field} is required")));
    }
    Ok(())
}

pub fn validate_time_range(start: NaiveTime, end: NaiveTime) -> TimetableResult<()> {
    if end <= start {
        return Err(TimetableError::Validation(
            "end_time must be after start_time".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_day_of_week(day: u8) -> TimetableResult<()> {
    if day > 6 {
        return Err(TimetableError::Validation(
            "day_of_week must be between 0 and 6".to_string(),
        ));
    }
    Ok(())
}
