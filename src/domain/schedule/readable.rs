use chrono::Weekday;
use itertools::Itertools;

use crate::helpers::time;

use super::configuration::MusterConfiguration;
use super::days::DaysOfTheWeek;

/// Renders a window for the "current requirements" panel, e.g.
/// `Weekdays at 9:00 for 2 hours (America/New_York)`.
pub fn describe(muster: &MusterConfiguration) -> String {
    format!(
        "{} at {} for {} ({})",
        describe_days(muster.days),
        time::format_start_time(&muster.start_time),
        describe_duration(muster.duration_minutes),
        muster.timezone
    )
}

pub fn describe_days(days: DaysOfTheWeek) -> String {
    match days {
        DaysOfTheWeek::NONE => "No days".to_string(),
        DaysOfTheWeek::ALL => "Every day".to_string(),
        DaysOfTheWeek::WEEKDAYS => "Weekdays".to_string(),
        DaysOfTheWeek::WEEKENDS => "Weekends".to_string(),
        _ => days.days().map(abbreviation).join(", "),
    }
}

fn describe_duration(minutes: u32) -> String {
    let (hours, minutes) = (minutes / 60, minutes % 60);
    let hours = match hours {
        0 => None,
        1 => Some("1 hour".to_string()),
        n => Some(format!("{} hours", n)),
    };
    let minutes = match minutes {
        0 => None,
        1 => Some("1 minute".to_string()),
        n => Some(format!("{} minutes", n)),
    };
    match (hours, minutes) {
        (Some(hours), Some(minutes)) => format!("{} {}", hours, minutes),
        (Some(hours), None) => hours,
        (None, Some(minutes)) => minutes,
        (None, None) => "0 minutes".to_string(),
    }
}

fn abbreviation(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Su",
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
    }
}
