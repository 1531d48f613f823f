//! The calendar capability every helper in this crate is generic over.

/// Comparison, arithmetic and field access over an opaque date type.
///
/// Implementations decide what a date is (a `chrono` value, a wrapper around
/// another calendar library, a test double). The helpers in this crate never
/// look inside a [`CalendarAdapter::Date`]; they only go through these methods.
///
/// A date may be *invalid*. Implementations must not panic on invalid input:
/// comparisons involving an invalid value report `false`, and arithmetic on
/// an invalid value returns an invalid value.
pub trait CalendarAdapter {
    /// The opaque date representation.
    type Date: Clone;

    /// Returns the current instant. Always valid.
    fn date(&self) -> Self::Date;

    /// Returns whether `value` represents a real point in time.
    fn is_valid(&self, value: &Self::Date) -> bool;

    /// Returns whether `value` is strictly before `comparing`.
    fn is_before(&self, value: &Self::Date, comparing: &Self::Date) -> bool;

    /// Returns whether `value` is strictly after `comparing`.
    fn is_after(&self, value: &Self::Date, comparing: &Self::Date) -> bool;

    /// Returns whether two optional dates denote the same instant.
    ///
    /// Two absent values are equal. An absent value never equals a present
    /// one, and an invalid value never equals anything.
    fn is_equal(&self, value: Option<&Self::Date>, comparing: Option<&Self::Date>) -> bool;

    /// Moves `value` by `amount` calendar days; `amount` may be negative.
    fn add_days(&self, value: &Self::Date, amount: i64) -> Self::Date;

    /// Moves `value` by `amount` calendar months; `amount` may be negative.
    fn add_months(&self, value: &Self::Date, amount: i32) -> Self::Date;

    fn start_of_day(&self, value: &Self::Date) -> Self::Date;

    fn start_of_year(&self, value: &Self::Date) -> Self::Date;

    fn get_hours(&self, value: &Self::Date) -> u32;

    fn get_minutes(&self, value: &Self::Date) -> u32;

    fn get_seconds(&self, value: &Self::Date) -> u32;

    /// Sets the hour field. Out-of-range values may roll over into the day.
    fn set_hours(&self, value: &Self::Date, hours: u32) -> Self::Date;

    /// Sets the minute field. Out-of-range values may roll over into the hour.
    fn set_minutes(&self, value: &Self::Date, minutes: u32) -> Self::Date;

    /// Sets the second field. Out-of-range values may roll over into the minute.
    fn set_seconds(&self, value: &Self::Date, seconds: u32) -> Self::Date;
}
