use std::fmt::Display;
use std::str::FromStr;

use chrono::{Offset, Utc};
use chrono_tz::{Tz, TZ_VARIANTS};
use once_cell::sync::Lazy;
use serde::Serialize;

static NAMES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut names: Vec<&'static str> = TZ_VARIANTS.iter().map(|tz| tz.name()).collect();
    names.sort_unstable();
    names
});

/// A recognized IANA time zone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timezone(Tz);

#[derive(Serialize, Debug, PartialEq)]
pub struct TimezoneOption {
    label: String,
    value: String,
}

impl Timezone {
    pub const UTC: Timezone = Timezone(Tz::UTC);

    pub fn parse(name: &str) -> Option<Self> {
        Tz::from_str(name.trim()).ok().map(Timezone)
    }

    /// Every recognized zone name, sorted.
    pub fn names() -> &'static [&'static str] {
        &NAMES
    }

    pub fn options() -> Vec<TimezoneOption> {
        Self::names()
            .iter()
            .filter_map(|name| Self::parse(name))
            .map(Timezone::option)
            .collect()
    }

    /// The zone of the running process as told by `TZ`, or UTC.
    pub fn guess() -> Self {
        Self::guess_from(
            std::env::var("TZ")
                .inspect_err(|err| log::trace!("could not read local time zone: {:?}", err))
                .ok(),
        )
    }

    /// Reads a `TZ` style value, which may carry a leading `:`.
    pub fn guess_from(value: Option<String>) -> Self {
        value
            .and_then(|name| Self::parse(name.trim_start_matches(':')))
            .unwrap_or(Self::UTC)
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    pub fn tz(&self) -> Tz {
        self.0
    }

    pub fn option(self) -> TimezoneOption {
        TimezoneOption {
            label: format!("{} ({})", self.name(), self.current_offset()),
            value: self.into(),
        }
    }

    /// Offset from GMT right now, e.g. `GMT-5:00` or `GMT+5:30`.
    fn current_offset(&self) -> String {
        let seconds = Utc::now()
            .with_timezone(&self.0)
            .offset()
            .fix()
            .local_minus_utc();
        let sign = if seconds < 0 { '-' } else { '+' };
        let minutes = seconds.abs() / 60;
        format!("GMT{}{}:{:02}", sign, minutes / 60, minutes % 60)
    }
}

impl Display for Timezone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Timezone> for String {
    fn from(value: Timezone) -> Self {
        value.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_recognize_iana_names() {
        assert_eq!(
            Timezone::parse("America/New_York").map(|tz| tz.tz()),
            Some(chrono_tz::America::New_York)
        );
        assert_eq!(Timezone::parse(" UTC "), Some(Timezone::UTC));
    }

    #[test]
    fn it_should_not_recognize_unknown_names() {
        assert_eq!(Timezone::parse("Mars/Olympus_Mons"), None);
        assert_eq!(Timezone::parse(""), None);
    }

    #[test]
    fn it_should_list_sorted_names() {
        let names = Timezone::names();

        assert!(names.contains(&"Europe/Lisbon"));
        assert!(names.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn it_should_label_options_with_the_offset() {
        let option = Timezone::UTC.option();

        assert_eq!(
            option,
            TimezoneOption {
                label: "UTC (GMT+0:00)".to_string(),
                value: "UTC".to_string(),
            }
        );
        assert_eq!(Timezone::options().len(), Timezone::names().len());
    }

    #[test]
    fn it_should_guess_the_zone_from_a_tz_value() {
        assert_eq!(
            Timezone::guess_from(Some(":Asia/Tokyo".to_string())).name(),
            "Asia/Tokyo"
        );
        assert_eq!(
            Timezone::guess_from(Some("Europe/Lisbon".to_string())).name(),
            "Europe/Lisbon"
        );
    }

    #[test]
    fn it_should_fall_back_to_utc_when_guessing() {
        assert_eq!(
            Timezone::guess_from(Some("Nowhere/Special".to_string())),
            Timezone::UTC
        );
        assert_eq!(Timezone::guess_from(None), Timezone::UTC);
    }
}
