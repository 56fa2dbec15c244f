//! Golden values for DualCalendarDate mutation and derivation.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use taqvim_rs::{CalendarDate, DualCalendarDate, Weekday};

fn civil(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

fn fields(d: &DualCalendarDate) -> (i32, u32, u32) {
    (d.year(), d.month(), d.day())
}

#[test]
fn civil_day_maps_to_persian() {
    let d = DualCalendarDate::new(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
    assert_eq!(fields(&d), (1405, 6, 26));
    assert_eq!(d.to_string(), "1405/07/26");
    assert_eq!(d.weekday(), Weekday::Sunday);
}

#[test]
fn month_past_end_carries_into_year() {
    let mut d = DualCalendarDate::from_persian(1403, 0, 1);
    d.set_month(13);
    assert_eq!(fields(&d), (1404, 1, 1));
    assert_eq!(d.gregorian_date(), CalendarDate::new(2025, 4, 20));

    let mut d = DualCalendarDate::from_persian(1403, 11, 1);
    d.set_month(12);
    assert_eq!(fields(&d), (1404, 0, 1));
    assert_eq!(d.gregorian_date(), CalendarDate::new(2025, 3, 20));
}

#[test]
fn negative_month_borrows_from_year() {
    let mut d = DualCalendarDate::from_persian(1403, 0, 1);
    d.set_month(-1);
    assert_eq!(fields(&d), (1402, 11, 1));
    assert_eq!(d.gregorian_date(), CalendarDate::new(2024, 2, 20));
}

#[test]
fn day_past_month_end_spills_forward() {
    // Esfand 1403 has 29 days
    let mut d = DualCalendarDate::from_persian(1403, 11, 1);
    assert_eq!(d.days_in_month(), 29);
    d.set_date(31);
    assert_eq!(fields(&d), (1404, 0, 2));
    assert_eq!(d.gregorian_date(), CalendarDate::new(2025, 3, 21));
}

#[test]
fn fields_roundtrip_through_civil_timestamp() {
    let mut d = DualCalendarDate::from_persian(1400, 5, 17);
    d.set_month(13);
    let again = DualCalendarDate::new(d.to_civil_timestamp());
    assert_eq!(fields(&again), fields(&d));
    assert_eq!(again.to_civil_timestamp(), d.to_civil_timestamp());
}

#[test]
fn rederivation_is_stable() {
    let mut d = DualCalendarDate::new(civil(2024, 3, 20, 17));
    let first = d;
    d.set_civil_timestamp(first);
    d.set_civil_timestamp(&first);
    assert_eq!(d, first);

    let mut p = DualCalendarDate::from_persian(1403, 3, 10);
    let before = fields(&p);
    p.set_year(p.year());
    p.set_year(p.year());
    assert_eq!(fields(&p), before);
    assert_eq!(p.time_of_day_components(), (2, 0, 0));
}

#[test]
fn restoring_held_timestamp_keeps_date() {
    // 20:30 is stored as 22:30; moving it again would cross midnight
    let mut d = DualCalendarDate::new(civil(2024, 3, 19, 20).with_minute(30).unwrap());
    let before = (fields(&d), d.to_civil_timestamp());
    assert_eq!(before.0, (1402, 11, 29));
    assert_eq!(d.time_of_day_components(), (22, 30, 0));

    for _ in 0..3 {
        d.set_civil_timestamp(d.to_civil_timestamp());
        assert_eq!((fields(&d), d.to_civil_timestamp()), before);
    }
    d.set_timestamp_millis(d.timestamp_millis());
    assert_eq!((fields(&d), d.to_civil_timestamp()), before);
}

#[test]
fn new_timestamp_still_moved_off_midnight() {
    let mut d = DualCalendarDate::new(civil(2024, 3, 19, 20));
    d.set_civil_timestamp(civil(2024, 3, 19, 23));
    assert_eq!(d.gregorian_date(), CalendarDate::new(2024, 3, 20));
    assert_eq!(d.time_of_day_components(), (1, 0, 0));
}

#[test]
fn hour_moved_off_midnight_once() {
    let d = DualCalendarDate::new(civil(2024, 3, 20, 0));
    assert_eq!(d.time_of_day_components(), (2, 0, 0));
    let d = DualCalendarDate::new(civil(2024, 3, 20, 13));
    assert_eq!(d.time_of_day_components(), (15, 0, 0));
    // reads do not move the stored value
    assert_eq!(d.time_of_day_components(), (15, 0, 0));
}

#[test]
fn garbage_input_falls_back_to_now() {
    let d = DualCalendarDate::new("not a date");
    assert!(d.year() >= 1400, "year {}", d.year());
    assert!(DualCalendarDate::try_parse("not a date").is_err());
    assert!(DualCalendarDate::try_parse("2024-03-20 10:00:00").is_ok());
}

#[test]
fn gregorian_setter() {
    let mut d = DualCalendarDate::from_persian(1403, 0, 1);
    d.set_gregorian_date(2024, 1, 29);
    assert_eq!(d.gregorian_date(), CalendarDate::new(2024, 2, 29));
    // 2024-02-29 is 1402-12-10
    assert_eq!(fields(&d), (1402, 11, 10));
}

#[test]
fn timestamp_millis_setter() {
    let mut d = DualCalendarDate::now();
    d.set_timestamp_millis(1_710_892_800_000);
    assert_eq!(d.gregorian_date(), CalendarDate::new(2024, 3, 20));
    assert_eq!(d.timestamp_millis(), 1_710_900_000_000);
}

#[test]
fn ordered_by_civil_time() {
    let mut dates = [
        DualCalendarDate::from_persian(1403, 5, 1),
        DualCalendarDate::from_persian(1402, 11, 29),
        DualCalendarDate::from_persian(1403, 0, 1),
    ];
    dates.sort();
    let years: Vec<_> = dates.iter().map(fields).collect();
    assert_eq!(years, vec![(1402, 11, 29), (1403, 0, 1), (1403, 5, 1)]);
}
