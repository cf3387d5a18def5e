//! Pure conflict decisions over already-scoped record slices.
//!
//! Callers fetch the candidate set first (all entries for a room and day, or
//! all entries for a professor and day, or all confirmed bookings for a room
//! and date) and hand it to these functions. Recurring entries are scoped by
//! day-of-week because they recur every week; auditorium bookings are scoped
//! by concrete date because they are one-off events. The two must never be
//! collapsed into one check.

use chrono::NaiveTime;
use uuid::Uuid;

use crate::errors::{ConflictDetail, ConflictResource, TimetableError, TimetableResult};
use crate::models::booking::AuditoriumBooking;
use crate::models::entry::TimetableEntry;
use crate::time::overlaps;

fn find_overlapping<'a>(
    existing: &'a [TimetableEntry],
    start: NaiveTime,
    end: NaiveTime,
    excluding: Option<Uuid>,
) -> Option<&'a TimetableEntry> {
    existing
        .iter()
        .filter(|entry| excluding != Some(entry.id))
        .find(|entry| overlaps(entry.start_time, entry.end_time, start, end))
}

/// Returns the entry already occupying the room during `[start, end)`, if
/// any. `existing` must be scoped to one room and one day-of-week;
/// `excluding` lets an update skip the entry being moved.
pub fn find_room_conflict<'a>(
    existing: &'a [TimetableEntry],
    start: NaiveTime,
    end: NaiveTime,
    excluding: Option<Uuid>,
) -> Option<&'a TimetableEntry> {
    find_overlapping(existing, start, end, excluding)
}

/// Returns the entry the professor is already teaching during `[start, end)`,
/// if any. `existing` must be scoped to one professor and one day-of-week;
/// the professor is busy regardless of which room the other class is in.
pub fn find_professor_conflict<'a>(
    existing: &'a [TimetableEntry],
    start: NaiveTime,
    end: NaiveTime,
    excluding: Option<Uuid>,
) -> Option<&'a TimetableEntry> {
    find_overlapping(existing, start, end, excluding)
}

/// Returns the booking already occupying the auditorium during
/// `[start, end)`, if any. `existing` must be scoped to one room and one
/// concrete calendar date.
pub fn find_booking_conflict<'a>(
    existing: &'a [AuditoriumBooking],
    start: NaiveTime,
    end: NaiveTime,
) -> Option<&'a AuditoriumBooking> {
    existing
        .iter()
        .find(|booking| overlaps(booking.start_time, booking.end_time, start, end))
}

/// Room conflict check that produces the typed rejection directly.
pub fn check_room_conflict(
    existing: &[TimetableEntry],
    start: NaiveTime,
    end: NaiveTime,
    excluding: Option<Uuid>,
) -> TimetableResult<()> {
    match find_room_conflict(existing, start, end, excluding) {
        Some(hit) => Err(TimetableError::Conflict(ConflictDetail {
            resource: ConflictResource::Room,
            occupied_by: hit.subject.clone(),
            start_time: hit.start_time,
            end_time: hit.end_time,
        })),
        None => Ok(()),
    }
}

/// Professor conflict check that produces the typed rejection directly.
pub fn check_professor_conflict(
    existing: &[TimetableEntry],
    start: NaiveTime,
    end: NaiveTime,
    excluding: Option<Uuid>,
) -> TimetableResult<()> {
    match find_professor_conflict(existing, start, end, excluding) {
        Some(hit) => Err(TimetableError::Conflict(ConflictDetail {
            resource: ConflictResource::Professor,
            occupied_by: hit.subject.clone(),
            start_time: hit.start_time,
            end_time: hit.end_time,
        })),
        None => Ok(()),
    }
}

/// Auditorium conflict check that produces the typed rejection directly.
pub fn check_booking_conflict(
    existing: &[AuditoriumBooking],
    start: NaiveTime,
    end: NaiveTime,
) -> TimetableResult<()> {
    match find_booking_conflict(existing, start, end) {
        Some(hit) => Err(TimetableError::Conflict(ConflictDetail {
            resource: ConflictResource::Auditorium,
            occupied_by: hit.event_name.clone(),
            start_time: hit.start_time,
            end_time: hit.end_time,
        })),
        None => Ok(()),
    }
}
