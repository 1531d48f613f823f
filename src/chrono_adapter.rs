//! [`CalendarAdapter`] implementation over `chrono`'s naive date-times.

use std::str::FromStr;

use chrono::{Datelike, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    CalendarAdapter, DATE_TIME_SEPARATOR, ISO_DATE_FORMAT, ISO_DATE_TIME_FORMAT, ParseError,
    consts::{JANUARY, MIN_DAY},
    prelude::*,
};

/// A wall-clock date-time that may be invalid.
///
/// `Invalid` is what unparseable input and out-of-range arithmetic produce.
/// Structural equality (`==`) treats two invalid values as equal; calendar
/// equality goes through [`CalendarAdapter::is_equal`], which does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ChronoDate {
    #[display(fmt = "{}", "_0.format(crate::ISO_DATE_TIME_FORMAT)")]
    Valid(NaiveDateTime),
    #[display(fmt = "{}", "crate::INVALID_DATE_LABEL")]
    Invalid,
}

impl ChronoDate {
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns the underlying date-time, or `None` when invalid
    pub const fn as_naive(&self) -> Option<NaiveDateTime> {
        match *self {
            Self::Valid(value) => Some(value),
            Self::Invalid => None,
        }
    }

    fn and_then(self, f: impl FnOnce(NaiveDateTime) -> Option<NaiveDateTime>) -> Self {
        self.as_naive().and_then(f).map_or(Self::Invalid, Self::Valid)
    }
}

impl From<NaiveDateTime> for ChronoDate {
    fn from(value: NaiveDateTime) -> Self {
        Self::Valid(value)
    }
}

impl From<NaiveDate> for ChronoDate {
    fn from(value: NaiveDate) -> Self {
        Self::Valid(value.and_time(NaiveTime::MIN))
    }
}

impl FromStr for ChronoDate {
    type Err = ParseError;

    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` and `YYYY-MM-DDTHH:MM:SS.fff`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parsed = if trimmed.contains(DATE_TIME_SEPARATOR) {
            NaiveDateTime::parse_from_str(trimmed, ISO_DATE_TIME_FORMAT)
        } else {
            NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT).map(|date| date.and_time(NaiveTime::MIN))
        };

        parsed
            .map(Self::Valid)
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl Serialize for ChronoDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ChronoDate {
    /// Unparseable strings become `Invalid` rather than failing, the same way
    /// [`ChronoAdapter::parse`] treats them.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or(Self::Invalid))
    }
}

/// Calendar adapter over [`ChronoDate`].
///
/// "Now" comes from the local clock unless the adapter was built with
/// [`ChronoAdapter::frozen_at`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChronoAdapter {
    now: Option<NaiveDateTime>,
}

impl ChronoAdapter {
    /// Creates an adapter reading the local clock
    pub const fn new() -> Self {
        Self { now: None }
    }

    /// Creates an adapter whose `date()` always returns `now`
    pub const fn frozen_at(now: NaiveDateTime) -> Self {
        Self { now: Some(now) }
    }

    /// Parses user input, mapping anything unparseable to [`ChronoDate::Invalid`]
    pub fn parse(input: &str) -> ChronoDate {
        input.parse().unwrap_or_else(|err: ParseError| {
            debug!(%err, "unparseable date input");
            ChronoDate::Invalid
        })
    }
}

/// Moves `value` so its clock field reads `target` instead of `current`,
/// letting out-of-range targets carry into the larger fields.
fn shift_field(
    value: NaiveDateTime,
    current: u32,
    target: u32,
    unit: fn(i64) -> Option<TimeDelta>,
) -> Option<NaiveDateTime> {
    let delta = unit(i64::from(target) - i64::from(current))?;
    value.checked_add_signed(delta)
}

impl CalendarAdapter for ChronoAdapter {
    type Date = ChronoDate;

    fn date(&self) -> ChronoDate {
        ChronoDate::Valid(self.now.unwrap_or_else(|| Local::now().naive_local()))
    }

    fn is_valid(&self, value: &ChronoDate) -> bool {
        value.is_valid()
    }

    fn is_before(&self, value: &ChronoDate, comparing: &ChronoDate) -> bool {
        matches!((value, comparing), (ChronoDate::Valid(a), ChronoDate::Valid(b)) if a < b)
    }

    fn is_after(&self, value: &ChronoDate, comparing: &ChronoDate) -> bool {
        matches!((value, comparing), (ChronoDate::Valid(a), ChronoDate::Valid(b)) if a > b)
    }

    fn is_equal(&self, value: Option<&ChronoDate>, comparing: Option<&ChronoDate>) -> bool {
        match (value, comparing) {
            (None, None) => true,
            (Some(ChronoDate::Valid(a)), Some(ChronoDate::Valid(b))) => a == b,
            _ => false,
        }
    }

    fn add_days(&self, value: &ChronoDate, amount: i64) -> ChronoDate {
        value.and_then(|v| v.checked_add_signed(TimeDelta::try_days(amount)?))
    }

    fn add_months(&self, value: &ChronoDate, amount: i32) -> ChronoDate {
        let months = Months::new(amount.unsigned_abs());
        value.and_then(|v| {
            if amount < 0 {
                v.checked_sub_months(months)
            } else {
                v.checked_add_months(months)
            }
        })
    }

    fn start_of_day(&self, value: &ChronoDate) -> ChronoDate {
        value.and_then(|v| Some(v.date().and_time(NaiveTime::MIN)))
    }

    fn start_of_year(&self, value: &ChronoDate) -> ChronoDate {
        value.and_then(|v| NaiveDate::from_ymd_opt(v.year(), JANUARY, MIN_DAY).map(|d| d.and_time(NaiveTime::MIN)))
    }

    fn get_hours(&self, value: &ChronoDate) -> u32 {
        value.as_naive().map_or(0, |v| v.hour())
    }

    fn get_minutes(&self, value: &ChronoDate) -> u32 {
        value.as_naive().map_or(0, |v| v.minute())
    }

    fn get_seconds(&self, value: &ChronoDate) -> u32 {
        value.as_naive().map_or(0, |v| v.second())
    }

    fn set_hours(&self, value: &ChronoDate, hours: u32) -> ChronoDate {
        value.and_then(|v| shift_field(v, v.hour(), hours, TimeDelta::try_hours))
    }

    fn set_minutes(&self, value: &ChronoDate, minutes: u32) -> ChronoDate {
        value.and_then(|v| shift_field(v, v.minute(), minutes, TimeDelta::try_minutes))
    }

    fn set_seconds(&self, value: &ChronoDate, seconds: u32) -> ChronoDate {
        value.and_then(|v| shift_field(v, v.second(), seconds, TimeDelta::try_seconds))
    }
}
