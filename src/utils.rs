//! Normalization helpers over a [`CalendarAdapter`].

use std::iter;

use crate::{CalendarAdapter, FieldValueType, MONTHS_IN_YEAR, consts::MONTH_STEP};

/// Pins `value` into `[min_date, max_date]`. An in-range value is returned as is.
pub fn clamp<A: CalendarAdapter>(adapter: &A, value: A::Date, min_date: A::Date, max_date: A::Date) -> A::Date {
    if adapter.is_before(&value, &min_date) {
        return min_date;
    }
    if adapter.is_after(&value, &max_date) {
        return max_date;
    }
    value
}

/// Maps absent and invalid dates to `None`
pub fn replace_invalid_date_by_null<A: CalendarAdapter>(adapter: &A, value: Option<A::Date>) -> Option<A::Date> {
    value.filter(|v| adapter.is_valid(v))
}

/// Falls back to `default_value` when `value` is absent or invalid
pub fn apply_default_date<A: CalendarAdapter>(adapter: &A, value: Option<A::Date>, default_value: A::Date) -> A::Date {
    replace_invalid_date_by_null(adapter, value).unwrap_or(default_value)
}

/// Compares two optional dates.
///
/// Two present but invalid dates are equal. Every other combination,
/// including a single invalid date, is decided by [`CalendarAdapter::is_equal`].
pub fn are_dates_equal<A: CalendarAdapter>(adapter: &A, a: Option<&A::Date>, b: Option<&A::Date>) -> bool {
    let both_invalid = matches!((a, b), (Some(a), Some(b)) if !adapter.is_valid(a) && !adapter.is_valid(b));
    if both_invalid {
        return true;
    }

    adapter.is_equal(a, b)
}

/// Returns the first instant of each month of the year containing `year`, in order
pub fn get_months_in_year<A: CalendarAdapter>(adapter: &A, year: &A::Date) -> Vec<A::Date> {
    iter::successors(Some(adapter.start_of_year(year)), |prev| {
        Some(adapter.add_months(prev, MONTH_STEP))
    })
    .take(MONTHS_IN_YEAR)
    .collect()
}

/// Takes the calendar day from `date_part` and the hour, minute and second from
/// `time_part`.
///
/// Setters run in the order hour, minute, second on the progressively updated
/// value, so adapters that roll over out-of-range fields see the same sequence
/// of intermediate values every time.
pub fn merge_date_and_time<A: CalendarAdapter>(adapter: &A, date_part: &A::Date, time_part: &A::Date) -> A::Date {
    let merged = adapter.set_hours(date_part, adapter.get_hours(time_part));
    let merged = adapter.set_minutes(&merged, adapter.get_minutes(time_part));
    adapter.set_seconds(&merged, adapter.get_seconds(time_part))
}

/// Returns "today" as seen by a field editing `value_type` values: the start of
/// the day for dates, the current instant otherwise
pub fn get_today_date<A: CalendarAdapter>(adapter: &A, value_type: FieldValueType) -> A::Date {
    match value_type {
        FieldValueType::Date => adapter.start_of_day(&adapter.date()),
        FieldValueType::Time | FieldValueType::DateTime => adapter.date(),
    }
}
