use std::error::Error;

use chrono::NaiveTime;
use timetable_core::errors::{
    ConflictDetail, ConflictResource, TimetableError, TimetableResult,
};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_error_display() {
    let not_found = TimetableError::NotFound("Timetable entry not found".to_string());
    let validation = TimetableError::Validation("subject is required".to_string());
    let authentication = TimetableError::Authentication("Missing identity".to_string());
    let authorization = TimetableError::Authorization("admin role required".to_string());
    let database = TimetableError::Database(eyre::eyre!("connection refused"));
    let internal = TimetableError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "internal error",
    )));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: Timetable entry not found"
    );
    assert_eq!(
        validation.to_string(),
        "Validation error: subject is required"
    );
    assert_eq!(
        authentication.to_string(),
        "Authentication error: Missing identity"
    );
    assert_eq!(
        authorization.to_string(),
        "Authorization error: admin role required"
    );
    assert!(database.to_string().contains("Database error:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_conflict_detail_display() {
    let detail = ConflictDetail {
        resource: ConflictResource::Room,
        occupied_by: "Math".to_string(),
        start_time: t(9, 0),
        end_time: t(9, 55),
    };
    let err = TimetableError::Conflict(detail);

    assert_eq!(
        err.to_string(),
        "Scheduling conflict: room is already booked by \"Math\" from 09:00 to 09:55"
    );
}

#[test]
fn test_conflict_resource_display() {
    assert_eq!(ConflictResource::Room.to_string(), "room");
    assert_eq!(ConflictResource::Professor.to_string(), "professor");
    assert_eq!(ConflictResource::Auditorium.to_string(), "auditorium");
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let err = TimetableError::Internal(Box::new(io_error));

    assert!(err.source().is_some());
}

#[test]
fn test_timetable_result() {
    let result: TimetableResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: TimetableResult<i32> =
        Err(TimetableError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_eyre_report() {
    let report = eyre::eyre!("query failed");
    let err: TimetableError = report.into();

    assert!(matches!(err, TimetableError::Database(_)));
}
