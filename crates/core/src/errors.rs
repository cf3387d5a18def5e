use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which shared resource a rejected operation collided on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictResource {
    Room,
    Professor,
    Auditorium,
}

impl fmt::Display for ConflictResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictResource::Room => write!(f, "room"),
            ConflictResource::Professor => write!(f, "professor"),
            ConflictResource::Auditorium => write!(f, "auditorium"),
        }
    }
}

/// Detail attached to a scheduling conflict: which resource collided and
/// what already occupies the slot, so callers can show an actionable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictDetail {
    pub resource: ConflictResource,
    /// Subject of the colliding entry, or event name for auditorium bookings.
    pub occupied_by: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl fmt::Display for ConflictDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is already booked by \"{}\" from {} to {}",
            self.resource,
            self.occupied_by,
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M"),
        )
    }
}

#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Scheduling conflict: {0}")]
    Conflict(ConflictDetail),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type TimetableResult<T> = Result<T, TimetableError>;
