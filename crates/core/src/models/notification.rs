use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A notification record written after a successful mutation. Audience is
/// scoped by department and batch; a row with neither set is a broadcast
/// (auditorium bookings). Delivery is a collaborator's concern; this core
/// only appends and lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub department_id: Option<Uuid>,
    pub batch: Option<String>,
    pub title: String,
    pub content: String,
    pub notification_type: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListNotificationsResponse {
    pub notifications: Vec<Notification>,
}

/// The kind of timetable change being announced to students.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
}

impl ChangeKind {
    pub fn title(&self) -> &'static str {
        match self {
            ChangeKind::Created => "New Class Added",
            ChangeKind::Updated => "Class Rescheduled",
            ChangeKind::Deleted => "Class Removed",
        }
    }

    pub fn content(&self, subject: &str) -> String {
        match self {
            ChangeKind::Created => {
                format!("New class {subject} has been added to your timetable.")
            }
            ChangeKind::Updated => format!("Class {subject} has been rescheduled."),
            ChangeKind::Deleted => {
                format!("Class {subject} has been removed from your timetable.")
            }
        }
    }

    pub fn notification_type(&self) -> &'static str {
        match self {
            ChangeKind::Created => "timetable_created",
            ChangeKind::Updated => "timetable_updated",
            ChangeKind::Deleted => "timetable_deleted",
        }
    }
}
