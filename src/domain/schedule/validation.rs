use std::fmt::Display;

use itertools::Itertools;

use crate::helpers::time::MINUTES_PER_DAY;

use super::configuration::MusterConfiguration;

/// The first problem found in a schedule.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    EmptyDays,
    Overlap { first: String, second: String },
}

impl Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::EmptyDays => {
                write!(f, "Please select at least one day for each muster window.")
            }
            Violation::Overlap { first, second } => write!(
                f,
                "Muster window {} overlaps with muster window {}.",
                first, second
            ),
        }
    }
}

/// Half-open `[start, start + duration)` on a 24h wall clock.
#[derive(Clone, Copy, Debug)]
struct WallClockInterval {
    start: u32,
    duration: u32,
}

impl WallClockInterval {
    fn of(muster: &MusterConfiguration) -> Self {
        Self {
            start: muster.start_minute(),
            duration: muster.duration_minutes,
        }
    }

    fn intersects(&self, other: &WallClockInterval) -> bool {
        if self.duration >= MINUTES_PER_DAY || other.duration >= MINUTES_PER_DAY {
            return self.duration > 0 && other.duration > 0;
        }
        let ahead = (other.start + MINUTES_PER_DAY - self.start) % MINUTES_PER_DAY;
        let behind = (self.start + MINUTES_PER_DAY - other.start) % MINUTES_PER_DAY;
        ahead < self.duration || behind < other.duration
    }
}

/// Checks a whole schedule and reports the first violation.
///
/// Empty day sets win over everything else. Overlaps are only looked for
/// between windows sharing a day and compare local wall-clock values as
/// written, so windows declared in different zones are never normalized to
/// a common clock. Pairs are visited in list order.
pub fn validate(musters: &[MusterConfiguration]) -> Option<Violation> {
    if musters.iter().any(|muster| muster.days.is_empty()) {
        return Some(Violation::EmptyDays);
    }

    musters
        .iter()
        .tuple_combinations()
        .find(|(a, b)| {
            a.days.intersects(b.days)
                && WallClockInterval::of(a).intersects(&WallClockInterval::of(b))
        })
        .map(|(a, b)| Violation::Overlap {
            first: a.time_range(),
            second: b.time_range(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schedule::days::DaysOfTheWeek;
    use crate::helpers::time::parse_start_time;

    fn window(days: DaysOfTheWeek, start: &str, minutes: u32) -> MusterConfiguration {
        window_in(days, start, minutes, "America/New_York")
    }

    fn window_in(
        days: DaysOfTheWeek,
        start: &str,
        minutes: u32,
        timezone: &str,
    ) -> MusterConfiguration {
        MusterConfiguration {
            days,
            start_time: parse_start_time(start).unwrap(),
            timezone: timezone.to_string(),
            duration_minutes: minutes,
        }
    }

    #[test]
    fn it_should_accept_an_empty_schedule() {
        assert_eq!(validate(&[]), None);
    }

    #[test]
    fn it_should_accept_well_formed_windows_that_do_not_overlap() {
        let musters = vec![
            window(DaysOfTheWeek::WEEKDAYS, "8:00", 60),
            window(DaysOfTheWeek::WEEKDAYS, "13:00", 120),
            window(DaysOfTheWeek::WEEKENDS, "8:00", 600),
        ];

        assert_eq!(validate(&musters), None);
    }

    #[test]
    fn it_should_report_empty_days_before_anything_else() {
        let musters = vec![
            window(DaysOfTheWeek::MONDAY, "9:00", 60),
            window(DaysOfTheWeek::MONDAY, "9:30", 30),
            window(DaysOfTheWeek::NONE, "12:00", 60),
        ];

        assert_eq!(validate(&musters), Some(Violation::EmptyDays));
    }

    #[test]
    fn it_should_report_overlapping_windows_on_a_shared_day() {
        let musters = vec![
            window(DaysOfTheWeek::MONDAY, "9:00", 60),
            window(DaysOfTheWeek::MONDAY, "9:30", 30),
        ];

        assert_eq!(
            validate(&musters),
            Some(Violation::Overlap {
                first: "9:00-10:00 (America/New_York)".to_string(),
                second: "9:30-10:00 (America/New_York)".to_string(),
            })
        );
    }

    #[test]
    fn it_should_accept_adjacent_windows() {
        let musters = vec![
            window(DaysOfTheWeek::MONDAY, "9:00", 60),
            window(DaysOfTheWeek::MONDAY, "10:00", 60),
        ];

        assert_eq!(validate(&musters), None);
    }

    #[test]
    fn it_should_ignore_overlapping_times_on_different_days() {
        let musters = vec![
            window(DaysOfTheWeek::MONDAY, "9:00", 60),
            window(DaysOfTheWeek::TUESDAY, "9:00", 60),
        ];

        assert_eq!(validate(&musters), None);
    }

    #[test]
    fn it_should_report_windows_that_wrap_past_midnight() {
        let musters = vec![
            window(DaysOfTheWeek::FRIDAY, "23:00", 120),
            window(DaysOfTheWeek::FRIDAY, "0:30", 30),
        ];

        assert!(matches!(
            validate(&musters),
            Some(Violation::Overlap { .. })
        ));
    }

    #[test]
    fn it_should_report_the_first_overlapping_pair_in_list_order() {
        let musters = vec![
            window(DaysOfTheWeek::MONDAY, "6:00", 60),
            window(DaysOfTheWeek::MONDAY, "12:00", 60),
            window(DaysOfTheWeek::MONDAY, "12:30", 60),
            window(DaysOfTheWeek::MONDAY, "6:30", 60),
        ];

        match validate(&musters) {
            Some(Violation::Overlap { first, second }) => {
                assert_eq!(first, "6:00-7:00 (America/New_York)");
                assert_eq!(second, "6:30-7:30 (America/New_York)");
            }
            other => unreachable!("expected an overlap, got {:?}", other),
        }
    }

    #[test]
    fn it_should_report_an_overlap_for_the_largest_duration() {
        let musters = vec![
            window(DaysOfTheWeek::MONDAY, "9:00", u32::MAX),
            window(DaysOfTheWeek::MONDAY, "10:00", 30),
        ];

        match validate(&musters) {
            Some(Violation::Overlap { first, second }) => {
                assert_eq!(first, "9:00-13:15 (America/New_York)");
                assert_eq!(second, "10:00-10:30 (America/New_York)");
            }
            other => unreachable!("expected an overlap, got {:?}", other),
        }
    }

    #[test]
    fn it_should_report_a_full_day_window_against_any_other() {
        let musters = vec![
            window(DaysOfTheWeek::SUNDAY, "0:00", 24 * 60),
            window(DaysOfTheWeek::SUNDAY, "15:00", 30),
        ];

        assert!(validate(&musters).is_some());
    }

    // Known gap: 9:00 in New York and 14:00 in Lisbon are the same instant in
    // winter, but the comparison is on local wall-clock only.
    #[test]
    fn it_should_not_normalize_windows_across_timezones() {
        let musters = vec![
            window_in(DaysOfTheWeek::MONDAY, "9:00", 60, "America/New_York"),
            window_in(DaysOfTheWeek::MONDAY, "14:00", 60, "Europe/Lisbon"),
        ];

        assert_eq!(validate(&musters), None);
    }

    #[test]
    fn it_should_compare_wall_clock_values_even_in_different_timezones() {
        let musters = vec![
            window_in(DaysOfTheWeek::MONDAY, "9:00", 60, "America/New_York"),
            window_in(DaysOfTheWeek::MONDAY, "9:15", 30, "Asia/Tokyo"),
        ];

        assert!(validate(&musters).is_some());
    }

    #[test]
    fn it_should_render_human_readable_messages() {
        assert_eq!(
            Violation::EmptyDays.to_string(),
            "Please select at least one day for each muster window."
        );
        assert_eq!(
            Violation::Overlap {
                first: "a".to_string(),
                second: "b".to_string()
            }
            .to_string(),
            "Muster window a overlaps with muster window b."
        );
    }
}
