use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::TimetableResult;
use crate::models::entry::{require_non_empty, validate_time_range};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(format!("invalid booking status: {other}")),
        }
    }
}

/// A one-off auditorium reservation on a concrete calendar date. Unlike
/// timetable entries these do not recur, so conflicts are checked against
/// the exact date rather than the weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditoriumBooking {
    pub id: Uuid,
    pub classroom_id: Uuid,
    pub event_name: String,
    pub booking_date: NaiveDate,
    #[serde(with = "crate::time::time_format")]
    pub start_time: NaiveTime,
    #[serde(with = "crate::time::time_format")]
    pub end_time: NaiveTime,
    pub booked_by: Uuid,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAuditoriumRequest {
    pub classroom_id: Uuid,
    pub event_name: String,
    pub booking_date: NaiveDate,
    #[serde(with = "crate::time::time_format")]
    pub start_time: NaiveTime,
    #[serde(with = "crate::time::time_format")]
    pub end_time: NaiveTime,
}

impl BookAuditoriumRequest {
    pub fn validate(&self) -> TimetableResult<()> {
        require_non_empty("event_name", &self.event_name)?;
        validate_time_range(self.start_time, self.end_time)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListBookingsResponse {
    pub bookings: Vec<AuditoriumBooking>,
}
