pub mod booking;
pub mod classroom;
pub mod entry;
pub mod notification;
