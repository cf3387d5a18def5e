use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{TimetableError, TimetableResult};

/// Room kinds. Regular timetable entries may only target `Classroom` rooms;
/// auditorium bookings may only target `Auditorium` rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Classroom,
    Auditorium,
    Lab,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Classroom => "classroom",
            RoomType::Auditorium => "auditorium",
            RoomType::Lab => "lab",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "classroom" => Ok(RoomType::Classroom),
            "auditorium" => Ok(RoomType::Auditorium),
            "lab" => Ok(RoomType::Lab),
            other => Err(format!("invalid room type: {other}")),
        }
    }
}

/// A physical room. Rooms are administered outside the scheduling core and
/// are read-only inputs to conflict checking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    pub id: Uuid,
    pub room_no: String,
    pub capacity: Option<i32>,
    pub room_type: RoomType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClassroomRequest {
    pub room_no: String,
    pub capacity: Option<i32>,
    #[serde(default = "default_room_type")]
    pub room_type: RoomType,
}

fn default_room_type() -> RoomType {
    RoomType::Classroom
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListClassroomsResponse {
    pub classrooms: Vec<Classroom>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableRoomsResponse {
    pub rooms: Vec<Classroom>,
}

/// Enforces the room-type partition at the room-selection boundary. Rejects
/// with a validation error when the room is not of the expected kind.
pub fn ensure_room_type(room: &Classroom, expected: RoomType) -> TimetableResult<()> {
    if room.room_type != expected {
        return Err(TimetableError::Validation(format!(
            "Room {} is a {}, not a {}",
            room.room_no, room.room_type, expected
        )));
    }
    Ok(())
}
