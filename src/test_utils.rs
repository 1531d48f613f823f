//! Date fixtures shared by the unit tests.

use chrono::NaiveDate;

use crate::{ChronoAdapter, ChronoDate};

pub fn ymd_hms(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> ChronoDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, second))
        .map(ChronoDate::Valid)
        .expect("test fixture date should be valid")
}

pub fn ymd(year: i32, month: u32, day: u32) -> ChronoDate {
    ymd_hms(year, month, day, 0, 0, 0)
}

/// An adapter whose "now" is noon on the given day
pub fn adapter_at(year: i32, month: u32, day: u32) -> ChronoAdapter {
    let now = ymd_hms(year, month, day, 12, 0, 0)
        .as_naive()
        .expect("test fixture date should be valid");
    ChronoAdapter::frozen_at(now)
}
