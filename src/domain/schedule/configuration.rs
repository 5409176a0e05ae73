use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use serde_trim::string_trim;

use crate::helpers::time::{self, start_time, MINUTES_PER_DAY};

use super::days::DaysOfTheWeek;

pub const MINIMUM_DURATION_MINUTES: u32 = 30;
pub const DEFAULT_DURATION_MINUTES: u32 = 120;
/// One week; anything longer covers every day on its own.
pub const MAXIMUM_DURATION_MINUTES: u32 = 7 * MINUTES_PER_DAY;

/// One weekly recurring muster window.
///
/// Persisted verbatim as
/// `{days, startTime: "H:mm", timezone, durationMinutes}`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MusterConfiguration {
    pub days: DaysOfTheWeek,
    #[serde(with = "start_time")]
    pub start_time: NaiveTime,
    #[serde(deserialize_with = "string_trim")]
    pub timezone: String,
    pub duration_minutes: u32,
}

impl MusterConfiguration {
    pub fn start_minute(&self) -> u32 {
        time::minute_of_day(&self.start_time)
    }

    /// Minute of the day the window ends on, wrapping past midnight.
    pub fn end_minute(&self) -> u32 {
        let end = u64::from(self.start_minute()) + u64::from(self.duration_minutes);
        (end % u64::from(MINUTES_PER_DAY)) as u32
    }

    /// Wall-clock range label such as `9:00-10:30 (America/Chicago)`.
    pub fn time_range(&self) -> String {
        format!(
            "{}-{} ({})",
            time::format_start_time(&self.start_time),
            time::format_minute_of_day(self.end_minute()),
            self.timezone
        )
    }
}
