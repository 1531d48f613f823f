//! Calendar-agnostic date helpers for date pickers.
//!
//! Every helper is a free function taking a [`CalendarAdapter`], so the same
//! logic runs over any date library. [`ChronoAdapter`] covers `chrono`.
//!
//! ```
//! use picker_date_utils::{ChronoAdapter, ClosestDateParams, DisablePolicy, find_closest_enabled_date};
//!
//! let adapter = ChronoAdapter::new();
//! let closest = find_closest_enabled_date(
//!     &adapter,
//!     ClosestDateParams {
//!         date:             ChronoAdapter::parse("2024-01-15"),
//!         min_date:         ChronoAdapter::parse("2024-01-10"),
//!         max_date:         ChronoAdapter::parse("2024-01-20"),
//!         policy:           DisablePolicy::default(),
//!         is_date_disabled: |d: &picker_date_utils::ChronoDate| d.to_string().starts_with("2024-01-15"),
//!     },
//! );
//! assert_eq!(closest, Some(ChronoAdapter::parse("2024-01-16")));
//! ```

mod adapter;
mod chrono_adapter;
mod consts;
mod prelude;
mod search;
mod types;
mod utils;

#[cfg(test)]
mod test_utils;

pub use adapter::CalendarAdapter;
pub use chrono_adapter::{ChronoAdapter, ChronoDate};
pub use consts::*;
pub use search::{ClosestDateParams, DisablePolicy, find_closest_enabled_date};
pub use types::{DateOrTimeView, DateView, FieldValueType, TimeView, is_date_picker_view};
pub use utils::{
    apply_default_date, are_dates_equal, clamp, get_months_in_year, get_today_date, merge_date_and_time,
    replace_invalid_date_by_null,
};

/// Error type for parsing dates, views and value types from strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Unknown view: {0}")]
    UnknownView(String),
    #[error("Unknown value type: {0}")]
    UnknownValueType(String),
    #[error("Empty date string")]
    EmptyInput,
}
