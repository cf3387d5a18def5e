pub mod auditorium;
pub mod classroom;
pub mod health;
pub mod notification;
pub mod professor;
pub mod timetable;
