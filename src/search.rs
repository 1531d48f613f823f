//! Nearest selectable date search.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{CalendarAdapter, consts::SEARCH_STEP_DAYS};

/// Whether dates before or after the start of today are selectable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DisablePolicy {
    pub disable_past:   bool,
    pub disable_future: bool,
}

/// Inputs of [`find_closest_enabled_date`].
///
/// `min_date` and `max_date` are expected to be valid with
/// `min_date <= max_date`; this is not checked.
#[derive(Debug, Clone)]
pub struct ClosestDateParams<D, F> {
    /// Where the search starts. May lie outside the range.
    pub date:             D,
    pub min_date:         D,
    pub max_date:         D,
    pub policy:           DisablePolicy,
    /// Called at most once per candidate per cursor step; `true` means not
    /// selectable. An in-range start date is tested by both cursors in the
    /// first round.
    pub is_date_disabled: F,
}

/// Finds the enabled date closest to `params.date`, in calendar days.
///
/// The range is first tightened to the start of today according to the
/// policy. Two cursors then walk outward one day at a time; at equal distance
/// the later date wins because the forward cursor is tested first. Returns
/// `None` when every date in the effective range is disabled, or when the
/// tightened range is empty.
///
/// A cursor the adapter reports invalid is dropped rather than tested. An
/// invalid `params.date` therefore yields `None` even if `is_date_disabled`
/// would accept it, and day arithmetic that overflows the adapter's range
/// ends that direction of the search.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(
        disable_past = params.policy.disable_past,
        disable_future = params.policy.disable_future
    )
)]
pub fn find_closest_enabled_date<A, F>(adapter: &A, params: ClosestDateParams<A::Date, F>) -> Option<A::Date>
where
    A: CalendarAdapter,
    F: FnMut(&A::Date) -> bool,
{
    let ClosestDateParams {
        date,
        mut min_date,
        mut max_date,
        policy,
        mut is_date_disabled,
    } = params;

    let today = adapter.start_of_day(&adapter.date());

    if policy.disable_past && adapter.is_before(&min_date, &today) {
        min_date = today.clone();
    }

    if policy.disable_future && adapter.is_after(&max_date, &today) {
        max_date = today;
    }

    let before_min = adapter.is_before(&date, &min_date);
    let after_max = adapter.is_after(&date, &max_date);

    let mut forward = Some(date.clone());
    let mut backward = Some(date);

    if before_min {
        trace!("start is before the minimum, abandoning backward cursor");
        forward = Some(min_date.clone());
        backward = None;
    }

    if after_max {
        trace!("start is after the maximum, abandoning forward cursor");
        if backward.is_some() {
            backward = Some(max_date.clone());
        }
        forward = None;
    }

    let mut steps: u64 = 0;
    while forward.is_some() || backward.is_some() {
        if forward
            .as_ref()
            .is_some_and(|d| !adapter.is_valid(d) || adapter.is_after(d, &max_date))
        {
            forward = None;
        }
        if backward
            .as_ref()
            .is_some_and(|d| !adapter.is_valid(d) || adapter.is_before(d, &min_date))
        {
            backward = None;
        }

        if let Some(candidate) = forward.take() {
            if !is_date_disabled(&candidate) {
                trace!(steps, "found enabled date moving forward");
                return Some(candidate);
            }
            forward = Some(adapter.add_days(&candidate, SEARCH_STEP_DAYS));
        }

        if let Some(candidate) = backward.take() {
            if !is_date_disabled(&candidate) {
                trace!(steps, "found enabled date moving backward");
                return Some(candidate);
            }
            backward = Some(adapter.add_days(&candidate, -SEARCH_STEP_DAYS));
        }

        steps += 1;
    }

    debug!(steps, "no enabled date in range");
    None
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{
        ChronoDate,
        test_utils::{adapter_at, ymd},
    };

    fn params<F>(
        date: ChronoDate,
        min_date: ChronoDate,
        max_date: ChronoDate,
        is_date_disabled: F,
    ) -> ClosestDateParams<ChronoDate, F>
    where
        F: FnMut(&ChronoDate) -> bool,
    {
        ClosestDateParams {
            date,
            min_date,
            max_date,
            policy: DisablePolicy::default(),
            is_date_disabled,
        }
    }

    fn disabled_set(dates: &[ChronoDate]) -> impl Fn(&ChronoDate) -> bool + use<> {
        let set: HashSet<ChronoDate> = dates.iter().copied().collect();
        move |d| set.contains(d)
    }

    #[test]
    fn test_enabled_date_is_returned_as_is() {
        let adapter = adapter_at(2024, 6, 1);
        let result = find_closest_enabled_date(
            &adapter,
            params(ymd(2024, 1, 15), ymd(2024, 1, 10), ymd(2024, 1, 20), |_| false),
        );
        assert_eq!(result, Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn test_forward_wins_equal_distance() {
        let adapter = adapter_at(2024, 6, 1);
        let disabled = disabled_set(&[ymd(2024, 1, 14), ymd(2024, 1, 15), ymd(2024, 1, 16)]);
        let result = find_closest_enabled_date(
            &adapter,
            params(ymd(2024, 1, 15), ymd(2024, 1, 10), ymd(2024, 1, 20), disabled),
        );
        assert_eq!(result, Some(ymd(2024, 1, 17)));
    }

    #[test]
    fn test_backward_when_closer() {
        let adapter = adapter_at(2024, 6, 1);
        let disabled = disabled_set(&[ymd(2024, 1, 15), ymd(2024, 1, 16), ymd(2024, 1, 17)]);
        let result = find_closest_enabled_date(
            &adapter,
            params(ymd(2024, 1, 15), ymd(2024, 1, 10), ymd(2024, 1, 20), disabled),
        );
        assert_eq!(result, Some(ymd(2024, 1, 14)));
    }

    #[test]
    fn test_forward_exhausted_falls_back_to_backward() {
        let adapter = adapter_at(2024, 6, 1);
        let disabled = disabled_set(&[ymd(2024, 1, 18), ymd(2024, 1, 19), ymd(2024, 1, 20)]);
        let result = find_closest_enabled_date(
            &adapter,
            params(ymd(2024, 1, 19), ymd(2024, 1, 10), ymd(2024, 1, 20), disabled),
        );
        assert_eq!(result, Some(ymd(2024, 1, 17)));
    }

    #[test]
    fn test_all_disabled_returns_none() {
        let adapter = adapter_at(2024, 6, 1);
        let result = find_closest_enabled_date(
            &adapter,
            params(ymd(2024, 1, 15), ymd(2024, 1, 10), ymd(2024, 1, 20), |_| true),
        );
        assert_eq!(result, None);
    }

    #[test]
    fn test_out_of_range_cases() {
        struct TestCase {
            date:        ChronoDate,
            expected:    ChronoDate,
            description: &'static str,
        }

        let cases = [
            TestCase {
                date:        ymd(2023, 12, 1),
                expected:    ymd(2024, 1, 10),
                description: "before the minimum pins to the minimum",
            },
            TestCase {
                date:        ymd(2024, 2, 1),
                expected:    ymd(2024, 1, 20),
                description: "after the maximum pins to the maximum",
            },
            TestCase {
                date:        ymd(2024, 1, 10),
                expected:    ymd(2024, 1, 10),
                description: "on the minimum",
            },
            TestCase {
                date:        ymd(2024, 1, 20),
                expected:    ymd(2024, 1, 20),
                description: "on the maximum",
            },
        ];

        let adapter = adapter_at(2024, 6, 1);
        for case in &cases {
            let result = find_closest_enabled_date(
                &adapter,
                params(case.date, ymd(2024, 1, 10), ymd(2024, 1, 20), |_| false),
            );
            assert_eq!(result, Some(case.expected), "{}", case.description);
        }
    }

    #[test]
    fn test_before_minimum_only_searches_forward() {
        let adapter = adapter_at(2024, 6, 1);
        let disabled = disabled_set(&[ymd(2024, 1, 10), ymd(2024, 1, 11)]);
        let result = find_closest_enabled_date(
            &adapter,
            params(ymd(2023, 12, 1), ymd(2024, 1, 10), ymd(2024, 1, 20), disabled),
        );
        assert_eq!(result, Some(ymd(2024, 1, 12)));
    }

    #[test]
    fn test_after_maximum_only_searches_backward() {
        let adapter = adapter_at(2024, 6, 1);
        let disabled = disabled_set(&[ymd(2024, 1, 20), ymd(2024, 1, 19)]);
        let result = find_closest_enabled_date(
            &adapter,
            params(ymd(2024, 3, 1), ymd(2024, 1, 10), ymd(2024, 1, 20), disabled),
        );
        assert_eq!(result, Some(ymd(2024, 1, 18)));
    }

    #[test]
    fn test_single_day_range() {
        let adapter = adapter_at(2024, 6, 1);
        let day = ymd(2024, 1, 10);

        let enabled = find_closest_enabled_date(&adapter, params(day, day, day, |_| false));
        assert_eq!(enabled, Some(day));

        let disabled = find_closest_enabled_date(&adapter, params(day, day, day, |_| true));
        assert_eq!(disabled, None);
    }

    #[test]
    fn test_disable_past_raises_minimum_to_today() {
        let adapter = adapter_at(2024, 6, 1);
        let result = find_closest_enabled_date(
            &adapter,
            ClosestDateParams {
                date:             ymd(2024, 3, 1),
                min_date:         ymd(2024, 1, 1),
                max_date:         ymd(2024, 12, 31),
                policy:           DisablePolicy {
                    disable_past:   true,
                    disable_future: false,
                },
                is_date_disabled: |_: &ChronoDate| false,
            },
        );
        assert_eq!(result, Some(ymd(2024, 6, 1)));
    }

    #[test]
    fn test_disable_future_lowers_maximum_to_today() {
        let adapter = adapter_at(2024, 6, 1);
        let result = find_closest_enabled_date(
            &adapter,
            ClosestDateParams {
                date:             ymd(2024, 9, 1),
                min_date:         ymd(2024, 1, 1),
                max_date:         ymd(2024, 12, 31),
                policy:           DisablePolicy {
                    disable_past:   false,
                    disable_future: true,
                },
                is_date_disabled: |_: &ChronoDate| false,
            },
        );
        assert_eq!(result, Some(ymd(2024, 6, 1)));
    }

    #[test]
    fn test_disable_past_keeps_later_minimum() {
        let adapter = adapter_at(2024, 6, 1);
        let result = find_closest_enabled_date(
            &adapter,
            ClosestDateParams {
                date:             ymd(2024, 7, 1),
                min_date:         ymd(2024, 8, 1),
                max_date:         ymd(2024, 12, 31),
                policy:           DisablePolicy {
                    disable_past:   true,
                    disable_future: false,
                },
                is_date_disabled: |_: &ChronoDate| false,
            },
        );
        assert_eq!(result, Some(ymd(2024, 8, 1)));
    }

    #[test]
    fn test_policy_emptying_range_returns_none() {
        let adapter = adapter_at(2024, 6, 1);
        let mut calls = 0;
        let result = find_closest_enabled_date(
            &adapter,
            ClosestDateParams {
                date:             ymd(2024, 3, 1),
                min_date:         ymd(2024, 1, 1),
                max_date:         ymd(2024, 4, 1),
                policy:           DisablePolicy {
                    disable_past:   true,
                    disable_future: false,
                },
                is_date_disabled: |_: &ChronoDate| {
                    calls += 1;
                    false
                },
            },
        );
        assert_eq!(result, None);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_all_disabled_visits_every_day() {
        let adapter = adapter_at(2024, 6, 1);
        let mut seen = Vec::new();
        let result = find_closest_enabled_date(
            &adapter,
            params(ymd(2024, 1, 15), ymd(2024, 1, 10), ymd(2024, 1, 20), |d: &ChronoDate| {
                seen.push(*d);
                true
            }),
        );
        assert_eq!(result, None);
        // both cursors test the start date in the first round
        assert_eq!(seen.len(), 12);

        let unique: HashSet<ChronoDate> = seen.iter().copied().collect();
        assert_eq!(unique.len(), 11);
    }

    #[test]
    fn test_visits_alternate_forward_then_backward() {
        let adapter = adapter_at(2024, 6, 1);
        let mut seen = Vec::new();
        let _ = find_closest_enabled_date(
            &adapter,
            params(ymd(2024, 1, 15), ymd(2024, 1, 13), ymd(2024, 1, 16), |d: &ChronoDate| {
                seen.push(*d);
                true
            }),
        );
        assert_eq!(
            seen,
            vec![
                ymd(2024, 1, 15),
                ymd(2024, 1, 15),
                ymd(2024, 1, 16),
                ymd(2024, 1, 14),
                ymd(2024, 1, 13),
            ]
        );
    }

    #[test]
    fn test_invalid_start_returns_none() {
        let adapter = adapter_at(2024, 6, 1);
        let result = find_closest_enabled_date(
            &adapter,
            params(ChronoDate::Invalid, ymd(2024, 1, 10), ymd(2024, 1, 20), |_| false),
        );
        assert_eq!(result, None);
    }

    #[test]
    fn test_disable_policy_deserializes_with_defaults() {
        let policy: DisablePolicy = serde_json::from_str("{}").expect("empty object should deserialize");
        assert_eq!(policy, DisablePolicy::default());

        let policy: DisablePolicy =
            serde_json::from_str(r#"{"disable_past":true}"#).expect("partial object should deserialize");
        assert!(policy.disable_past);
        assert!(!policy.disable_future);
    }
}
