use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use rstest::rstest;
use timetable_core::time::{day_of_week_from_date, overlaps, parse_time};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[rstest]
#[case(t(9, 0), t(10, 0), t(9, 30), t(10, 30), true)] // partial overlap
#[case(t(9, 0), t(10, 0), t(9, 15), t(9, 45), true)] // containment
#[case(t(9, 0), t(10, 0), t(9, 0), t(10, 0), true)] // identical
#[case(t(9, 0), t(10, 0), t(10, 0), t(11, 0), false)] // touching endpoints
#[case(t(9, 0), t(10, 0), t(11, 0), t(12, 0), false)] // disjoint
fn test_overlap_cases(
    #[case] a_start: NaiveTime,
    #[case] a_end: NaiveTime,
    #[case] b_start: NaiveTime,
    #[case] b_end: NaiveTime,
    #[case] expected: bool,
) {
    assert_eq!(overlaps(a_start, a_end, b_start, b_end), expected);
    // Overlap is symmetric in the two intervals.
    assert_eq!(overlaps(b_start, b_end, a_start, a_end), expected);
}

#[test]
fn test_day_of_week_is_monday_first() {
    // 2024-01-01 was a Monday.
    let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let wednesday = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
    let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();

    assert_eq!(day_of_week_from_date(monday), 0);
    assert_eq!(day_of_week_from_date(wednesday), 2);
    assert_eq!(day_of_week_from_date(sunday), 6);
}

#[rstest]
#[case("2025-09-01", 0)] // Monday
#[case("2025-09-02", 1)]
#[case("2025-09-05", 4)]
#[case("2025-09-06", 5)]
#[case("2025-09-07", 6)] // Sunday
fn test_day_of_week_full_week(#[case] date: &str, #[case] expected: u8) {
    let date = date.parse::<NaiveDate>().unwrap();
    assert_eq!(day_of_week_from_date(date), expected);
}

#[test]
fn test_parse_time_accepts_both_formats() {
    assert_eq!(parse_time("09:00"), Some(t(9, 0)));
    assert_eq!(parse_time("09:00:00"), Some(t(9, 0)));
    assert_eq!(parse_time("23:59"), Some(t(23, 59)));
    assert_eq!(parse_time("16:55:00"), Some(t(16, 55)));
}

#[test]
fn test_parse_time_rejects_garbage() {
    assert_eq!(parse_time("25:00"), None);
    assert_eq!(parse_time("9am"), None);
    assert_eq!(parse_time(""), None);
    assert_eq!(parse_time("12:60"), None);
}
