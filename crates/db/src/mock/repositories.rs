use chrono::{NaiveDate, NaiveTime};
use mockall::mock;
use timetable_core::models::entry::EntryFilters;
use uuid::Uuid;

use crate::models::{DbAuditoriumBooking, DbClassroom, DbNotification, DbTimetableEntry};

// Mock repositories for testing
mock! {
    pub EntryRepo {
        pub async fn create_entry(
            &self,
            subject: &'static str,
            department_id: Uuid,
            batch: &'static str,
            professor_id: Uuid,
            classroom_id: Uuid,
            day_of_week: i16,
            start_time: NaiveTime,
            end_time: NaiveTime,
        ) -> eyre::Result<DbTimetableEntry>;

        pub async fn get_entry_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbTimetableEntry>>;

        pub async fn update_entry_slot(
            &self,
            id: Uuid,
            day_of_week: i16,
            start_time: NaiveTime,
            end_time: NaiveTime,
            classroom_id: Uuid,
        ) -> eyre::Result<DbTimetableEntry>;

        pub async fn delete_entry(&self, id: Uuid) -> eyre::Result<bool>;

        pub async fn list_entries(
            &self,
            filters: EntryFilters,
        ) -> eyre::Result<Vec<DbTimetableEntry>>;

        pub async fn entries_by_room_and_day(
            &self,
            classroom_id: Uuid,
            day_of_week: i16,
            excluding: Option<Uuid>,
        ) -> eyre::Result<Vec<DbTimetableEntry>>;

        pub async fn entries_by_professor_and_day(
            &self,
            professor_id: Uuid,
            day_of_week: i16,
            excluding: Option<Uuid>,
        ) -> eyre::Result<Vec<DbTimetableEntry>>;
    }
}

mock! {
    pub ClassroomRepo {
        pub async fn get_classroom_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbClassroom>>;

        pub async fn list_classrooms(
            &self,
            room_type: Option<&'static str>,
        ) -> eyre::Result<Vec<DbClassroom>>;

        pub async fn create_classroom(
            &self,
            room_no: &'static str,
            capacity: Option<i32>,
            room_type: &'static str,
        ) -> eyre::Result<DbClassroom>;
    }
}

mock! {
    pub BookingRepo {
        pub async fn create_booking(
            &self,
            classroom_id: Uuid,
            booked_by: Uuid,
            event_name: &'static str,
            booking_date: NaiveDate,
            start_time: NaiveTime,
            end_time: NaiveTime,
        ) -> eyre::Result<DbAuditoriumBooking>;

        pub async fn bookings_by_room_and_date(
            &self,
            classroom_id: Uuid,
            booking_date: NaiveDate,
        ) -> eyre::Result<Vec<DbAuditoriumBooking>>;

        pub async fn list_bookings(&self) -> eyre::Result<Vec<DbAuditoriumBooking>>;
    }
}

mock! {
    pub NotificationRepo {
        pub async fn create_notification(
            &self,
            department_id: Option<Uuid>,
            batch: Option<&'static str>,
            title: &'static str,
            content: &'static str,
            notification_type: &'static str,
        ) -> eyre::Result<DbNotification>;

        pub async fn list_notifications(
            &self,
            department_id: Option<Uuid>,
            batch: Option<&'static str>,
            limit: i64,
        ) -> eyre::Result<Vec<DbNotification>>;
    }
}
