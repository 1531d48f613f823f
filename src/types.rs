use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ParseError, prelude::*};

/// What kind of value a picker field edits.
/// Decides whether "today" is a calendar day or the current instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldValueType {
    #[display(fmt = "date")]
    Date,
    #[display(fmt = "time")]
    Time,
    #[display(fmt = "date-time")]
    DateTime,
}

impl FromStr for FieldValueType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "date" => Ok(Self::Date),
            "time" => Ok(Self::Time),
            "date-time" => Ok(Self::DateTime),
            other => Err(ParseError::UnknownValueType(other.to_owned())),
        }
    }
}

/// A calendar view of a picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateView {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

/// A clock view of a picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeView {
    #[display(fmt = "hours")]
    Hours,
    #[display(fmt = "minutes")]
    Minutes,
    #[display(fmt = "seconds")]
    Seconds,
}

/// Any view a picker can show, including the AM/PM selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateOrTimeView {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "hours")]
    Hours,
    #[display(fmt = "minutes")]
    Minutes,
    #[display(fmt = "seconds")]
    Seconds,
    #[display(fmt = "meridiem")]
    Meridiem,
}

impl FromStr for DateOrTimeView {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "year" => Ok(Self::Year),
            "month" => Ok(Self::Month),
            "day" => Ok(Self::Day),
            "hours" => Ok(Self::Hours),
            "minutes" => Ok(Self::Minutes),
            "seconds" => Ok(Self::Seconds),
            "meridiem" => Ok(Self::Meridiem),
            other => Err(ParseError::UnknownView(other.to_owned())),
        }
    }
}

impl From<DateView> for DateOrTimeView {
    fn from(view: DateView) -> Self {
        match view {
            DateView::Year => Self::Year,
            DateView::Month => Self::Month,
            DateView::Day => Self::Day,
        }
    }
}

impl From<TimeView> for DateOrTimeView {
    fn from(view: TimeView) -> Self {
        match view {
            TimeView::Hours => Self::Hours,
            TimeView::Minutes => Self::Minutes,
            TimeView::Seconds => Self::Seconds,
        }
    }
}

impl TryFrom<DateOrTimeView> for DateView {
    type Error = DateOrTimeView;

    /// Narrows to a calendar view, handing the view back when it is a clock view
    fn try_from(view: DateOrTimeView) -> Result<Self, Self::Error> {
        match view {
            DateOrTimeView::Year => Ok(Self::Year),
            DateOrTimeView::Month => Ok(Self::Month),
            DateOrTimeView::Day => Ok(Self::Day),
            DateOrTimeView::Hours | DateOrTimeView::Minutes | DateOrTimeView::Seconds | DateOrTimeView::Meridiem => {
                Err(view)
            },
        }
    }
}

/// Returns whether `view` belongs to the date part of a picker (year, month or day)
pub fn is_date_picker_view(view: DateOrTimeView) -> bool {
    DateView::try_from(view).is_ok()
}
