use chrono::{NaiveDate, NaiveTime, Utc};
use pretty_assertions::assert_eq;
use timetable_core::models::{
    booking::{AuditoriumBooking, BookingStatus},
    classroom::{Classroom, RoomType},
    entry::TimetableEntry,
};
use timetable_db::mock::repositories::MockEntryRepo;
use timetable_db::models::{DbAuditoriumBooking, DbClassroom, DbTimetableEntry};
use uuid::Uuid;

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn db_entry() -> DbTimetableEntry {
    let now = Utc::now();
    DbTimetableEntry {
        id: Uuid::new_v4(),
        seq: 1,
        subject: "Operating Systems".to_string(),
        department_id: Uuid::new_v4(),
        batch: "2025".to_string(),
        professor_id: Uuid::new_v4(),
        classroom_id: Uuid::new_v4(),
        day_of_week: 3,
        start_time: t(11, 0),
        end_time: t(11, 55),
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_entry_row_conversion() {
    let row = db_entry();
    let entry: TimetableEntry = row.clone().into();

    assert_eq!(entry.id, row.id);
    assert_eq!(entry.subject, row.subject);
    assert_eq!(entry.day_of_week, 3u8);
    assert_eq!(entry.start_time, row.start_time);
    assert_eq!(entry.end_time, row.end_time);
}

#[test]
fn test_classroom_row_conversion() {
    let row = DbClassroom {
        id: Uuid::new_v4(),
        room_no: "AUD-1".to_string(),
        capacity: Some(400),
        room_type: "auditorium".to_string(),
    };

    let classroom = Classroom::try_from(row).expect("Failed to convert classroom row");
    assert_eq!(classroom.room_type, RoomType::Auditorium);
}

#[test]
fn test_classroom_row_conversion_rejects_bad_type() {
    let row = DbClassroom {
        id: Uuid::new_v4(),
        room_no: "X".to_string(),
        capacity: None,
        room_type: "gazebo".to_string(),
    };

    assert!(Classroom::try_from(row).is_err());
}

#[test]
fn test_booking_row_conversion() {
    let row = DbAuditoriumBooking {
        id: Uuid::new_v4(),
        classroom_id: Uuid::new_v4(),
        event_name: "Convocation".to_string(),
        booking_date: NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
        start_time: t(10, 0),
        end_time: t(13, 0),
        booked_by: Uuid::new_v4(),
        status: "confirmed".to_string(),
        created_at: Utc::now(),
    };

    let booking = AuditoriumBooking::try_from(row).expect("Failed to convert booking row");
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.event_name, "Convocation");
}

#[tokio::test]
async fn test_mock_entry_repo() {
    let mut repo = MockEntryRepo::new();
    let row = db_entry();
    let id = row.id;

    repo.expect_get_entry_by_id()
        .withf(move |queried| *queried == id)
        .returning(move |_| Ok(Some(row.clone())));
    repo.expect_delete_entry().returning(|_| Ok(true));

    let fetched = repo.get_entry_by_id(id).await.unwrap();
    assert_eq!(fetched.map(|e| e.id), Some(id));
    assert!(repo.delete_entry(id).await.unwrap());
}
