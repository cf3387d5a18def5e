//! Domain layer for the timetable scheduling service.
//!
//! This crate holds everything that can be decided without touching the
//! database: the time model (interval overlap, date to day-of-week
//! conversion), the typed records and per-operation request shapes, the
//! conflict checker, and the error taxonomy. The `timetable-db` and
//! `timetable-api` crates build on top of it.

pub mod conflict;
pub mod errors;
pub mod models;
pub mod time;
