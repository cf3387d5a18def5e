//! Time model: half-open interval overlap and the Monday-first day-of-week
//! convention.
//!
//! Every caller that converts a picked calendar date into a recurring weekly
//! slot must go through [`day_of_week_from_date`]; it is the single source of
//! truth for the `0 = Monday .. 6 = Sunday` convention.

use chrono::{Datelike, NaiveDate, NaiveTime};

/// Returns true iff the half-open intervals `[a_start, a_end)` and
/// `[b_start, b_end)` overlap. Touching endpoints (one slot ending exactly
/// when the next starts) do not count as overlap.
pub fn overlaps(
    a_start: NaiveTime,
    a_end: NaiveTime,
    b_start: NaiveTime,
    b_end: NaiveTime,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Converts a calendar date to its recurring weekly slot, Monday-first:
/// `(calendar_weekday + 6) mod 7` where calendar weekday is 0 = Sunday.
pub fn day_of_week_from_date(date: NaiveDate) -> u8 {
    ((date.weekday().num_days_from_sunday() + 6) % 7) as u8
}

/// Parses a time-of-day as either `HH:MM` or `HH:MM:SS`. The HTML time
/// inputs upstream submit `HH:MM`; the database hands back `HH:MM:SS`.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

/// Serde adapter for required time-of-day fields: serializes as `HH:MM:SS`,
/// accepts `HH:MM` or `HH:MM:SS`.
pub mod time_format {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M:%S").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid time of day: {raw}")))
    }
}

/// Serde adapter for optional time-of-day fields (patch requests).
pub mod opt_time_format {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(time) => super::time_format::serialize(time, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => super::parse_time(&raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid time of day: {raw}"))),
            None => Ok(None),
        }
    }
}
