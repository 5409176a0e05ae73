use chrono::{NaiveTime, Timelike};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parses a wall-clock start time written as `H:mm` or `HH:mm`.
pub fn parse_start_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}

/// Formats a wall-clock start time as `H:mm`, the persisted shape.
pub fn format_start_time(time: &NaiveTime) -> String {
    time.format("%-H:%M").to_string()
}

pub fn minute_of_day(time: &NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Formats a minute offset from midnight, wrapping past the end of the day.
pub fn format_minute_of_day(minute: u32) -> String {
    let minute = minute % MINUTES_PER_DAY;
    format!("{}:{:02}", minute / 60, minute % 60)
}

pub mod start_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_start_time(time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        super::parse_start_time(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid start time: {}", value)))
    }
}
