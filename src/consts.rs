/// Number of months produced by `get_months_in_year`
pub const MONTHS_IN_YEAR: usize = 12;

/// Day step used by the closest enabled date search
pub(crate) const SEARCH_STEP_DAYS: i64 = 1;

/// Month step used when enumerating the months of a year
pub(crate) const MONTH_STEP: i32 = 1;

/// Calendar date format (ISO 8601)
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
/// Date-time format (ISO 8601). Fractional seconds are written only when
/// nonzero, in 3, 6 or 9 digits, and are optional when parsing.
pub const ISO_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Date/time separator in ISO 8601 date-time strings
pub const DATE_TIME_SEPARATOR: char = 'T';

/// Text rendered for, and parsed back into, an invalid date
pub const INVALID_DATE_LABEL: &str = "Invalid Date";

/// January, as used for `start_of_year`
pub(crate) const JANUARY: u32 = 1;
/// First day of a month
pub(crate) const MIN_DAY: u32 = 1;
