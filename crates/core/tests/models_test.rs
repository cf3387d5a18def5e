use chrono::{NaiveDate, NaiveTime, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, from_value, json, to_string, to_value};
use timetable_core::errors::TimetableError;
use timetable_core::models::{
    booking::{BookAuditoriumRequest, BookingStatus},
    classroom::{Classroom, CreateClassroomRequest, RoomType},
    entry::{CreateEntryRequest, RescheduleRequest, TimetableEntry, UpdateEntryRequest},
    notification::ChangeKind,
};
use uuid::Uuid;

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_entry_serialization_roundtrip() {
    let now = Utc::now();
    let entry = TimetableEntry {
        id: Uuid::new_v4(),
        subject: "Data Structures".to_string(),
        department_id: Uuid::new_v4(),
        batch: "2025".to_string(),
        professor_id: Uuid::new_v4(),
        classroom_id: Uuid::new_v4(),
        day_of_week: 2,
        start_time: t(9, 0),
        end_time: t(9, 55),
        created_at: now,
        updated_at: now,
    };

    let json = to_string(&entry).expect("Failed to serialize entry");
    assert!(json.contains("\"09:00:00\""));
    assert!(json.contains("\"09:55:00\""));

    let deserialized: TimetableEntry = from_str(&json).expect("Failed to deserialize entry");
    assert_eq!(deserialized, entry);
}

#[test]
fn test_create_request_accepts_short_times() {
    let value = json!({
        "subject": "Algorithms",
        "department_id": Uuid::new_v4(),
        "batch": "2026",
        "professor_id": Uuid::new_v4(),
        "classroom_id": Uuid::new_v4(),
        "date": "2025-09-01",
        "start_time": "10:00",
        "end_time": "10:55",
    });

    let request: CreateEntryRequest = from_value(value).expect("Failed to deserialize request");
    assert_eq!(request.start_time, t(10, 0));
    assert_eq!(request.end_time, t(10, 55));
    assert_eq!(
        request.date,
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    );
    assert!(request.validate().is_ok());
}

#[rstest]
#[case("", "2025")] // blank subject
#[case("   ", "2025")] // whitespace subject
#[case("Algorithms", "")] // blank batch
fn test_create_request_rejects_blank_fields(#[case] subject: &str, #[case] batch: &str) {
    let request = CreateEntryRequest {
        subject: subject.to_string(),
        department_id: Uuid::new_v4(),
        batch: batch.to_string(),
        professor_id: Uuid::new_v4(),
        classroom_id: Uuid::new_v4(),
        date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        start_time: t(9, 0),
        end_time: t(10, 0),
    };

    assert!(matches!(
        request.validate(),
        Err(TimetableError::Validation(_))
    ));
}

#[test]
fn test_create_request_rejects_inverted_times() {
    let request = CreateEntryRequest {
        subject: "Algorithms".to_string(),
        department_id: Uuid::new_v4(),
        batch: "2025".to_string(),
        professor_id: Uuid::new_v4(),
        classroom_id: Uuid::new_v4(),
        date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        start_time: t(10, 0),
        end_time: t(9, 30),
    };

    assert!(matches!(
        request.validate(),
        Err(TimetableError::Validation(_))
    ));
}

#[test]
fn test_update_request_partial_deserialization() {
    let request: UpdateEntryRequest =
        from_str(r#"{"start_time": "11:00"}"#).expect("Failed to deserialize patch");

    assert_eq!(request.start_time, Some(t(11, 0)));
    assert_eq!(request.end_time, None);
    assert_eq!(request.classroom_id, None);
    assert_eq!(request.day_of_week, None);
    assert!(!request.is_empty());

    let empty: UpdateEntryRequest = from_str("{}").expect("Failed to deserialize empty patch");
    assert!(empty.is_empty());
}

#[test]
fn test_reschedule_request_empty_body_is_flagged() {
    // An empty body deserializes with every field absent and must be
    // detectable, so the reschedule endpoint can reject it instead of
    // silently rewriting the identical slot.
    let empty: RescheduleRequest = from_str("{}").expect("Failed to deserialize empty body");
    assert!(empty.is_empty());
    assert_eq!(empty.date, None);
    assert_eq!(empty.start_time, None);
    assert_eq!(empty.end_time, None);
    assert_eq!(empty.classroom_id, None);

    let partial: RescheduleRequest =
        from_str(r#"{"start_time": "10:00"}"#).expect("Failed to deserialize partial body");
    assert!(!partial.is_empty());
}

#[test]
fn test_reschedule_request_defaults() {
    let request: RescheduleRequest =
        from_str(r#"{"date": "2025-09-03", "classroom_id": null}"#)
            .expect("Failed to deserialize reschedule");

    assert_eq!(
        request.date,
        Some(NaiveDate::from_ymd_opt(2025, 9, 3).unwrap())
    );
    assert_eq!(request.start_time, None);
    assert_eq!(request.classroom_id, None);
}

#[rstest]
#[case(RoomType::Classroom, "classroom")]
#[case(RoomType::Auditorium, "auditorium")]
#[case(RoomType::Lab, "lab")]
fn test_room_type_serde_lowercase(#[case] room_type: RoomType, #[case] expected: &str) {
    assert_eq!(to_value(room_type).unwrap(), json!(expected));
    assert_eq!(room_type.as_str(), expected);
    assert_eq!(expected.parse::<RoomType>().unwrap(), room_type);
}

#[test]
fn test_room_type_rejects_unknown() {
    assert!("lecture-hall".parse::<RoomType>().is_err());
    assert!(from_value::<RoomType>(json!("hall")).is_err());
}

#[test]
fn test_create_classroom_defaults_to_classroom() {
    let request: CreateClassroomRequest =
        from_str(r#"{"room_no": "R101"}"#).expect("Failed to deserialize classroom");

    assert_eq!(request.room_type, RoomType::Classroom);
    assert_eq!(request.capacity, None);
}

#[test]
fn test_classroom_serialization() {
    let classroom = Classroom {
        id: Uuid::new_v4(),
        room_no: "AUD-1".to_string(),
        capacity: Some(400),
        room_type: RoomType::Auditorium,
    };

    let json = to_string(&classroom).expect("Failed to serialize classroom");
    let deserialized: Classroom = from_str(&json).expect("Failed to deserialize classroom");
    assert_eq!(deserialized, classroom);
}

#[test]
fn test_booking_request_validation() {
    let mut request = BookAuditoriumRequest {
        classroom_id: Uuid::new_v4(),
        event_name: "Orientation".to_string(),
        booking_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        start_time: t(14, 0),
        end_time: t(17, 0),
    };
    assert!(request.validate().is_ok());

    request.event_name = " ".to_string();
    assert!(matches!(
        request.validate(),
        Err(TimetableError::Validation(_))
    ));
}

#[test]
fn test_booking_status_parse() {
    assert_eq!(
        "confirmed".parse::<BookingStatus>().unwrap(),
        BookingStatus::Confirmed
    );
    assert_eq!(
        "cancelled".parse::<BookingStatus>().unwrap(),
        BookingStatus::Cancelled
    );
    assert!("pending".parse::<BookingStatus>().is_err());
}

#[test]
fn test_change_kind_messages() {
    assert_eq!(ChangeKind::Created.title(), "New Class Added");
    assert_eq!(ChangeKind::Updated.title(), "Class Rescheduled");
    assert_eq!(ChangeKind::Deleted.title(), "Class Removed");

    assert_eq!(
        ChangeKind::Updated.content("DBMS"),
        "Class DBMS has been rescheduled."
    );
    assert_eq!(ChangeKind::Created.notification_type(), "timetable_created");
}
