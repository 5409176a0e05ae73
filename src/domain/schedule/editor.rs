use async_trait::async_trait;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use rand::{distributions::Alphanumeric, Rng};

use crate::domain::timezone::Timezone;
use crate::helpers::time::parse_start_time;

use super::configuration::{
    MusterConfiguration, DEFAULT_DURATION_MINUTES, MAXIMUM_DURATION_MINUTES,
};
use super::days::DaysOfTheWeek;
use super::{readable, validation};

pub type RowKey = String;

const ROW_KEY_LENGTH: usize = 16;
const MINIMUM_DURATION_HOURS: f64 = 0.5;
const MAXIMUM_DURATION_HOURS: f64 = MAXIMUM_DURATION_MINUTES as f64 / 60.0;

/// Persists a whole schedule on behalf of the editor.
///
/// On failure the implementation returns the message to show to the user.
#[async_trait]
pub trait MusterSaver: Send + Sync {
    async fn save(&self, musters: Vec<MusterConfiguration>) -> Result<(), String>;
}

/// A window being edited, with the view-only fields the form binds to.
#[derive(Clone, Debug)]
pub struct MusterRow {
    pub key: RowKey,
    pub muster: MusterConfiguration,
    pub duration_hours: f64,
    pub start_time_date: NaiveDateTime,
}

impl MusterRow {
    fn new(muster: MusterConfiguration, today: NaiveDate) -> Self {
        Self {
            key: new_row_key(),
            duration_hours: muster.duration_minutes as f64 / 60.0,
            start_time_date: today.and_time(muster.start_time),
            muster,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DayState {
    On,
    Off,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Status {
    Editing,
    Closed,
}

#[derive(Debug, PartialEq)]
pub enum SaveError {
    Invalid(String),
    Failed(String),
    Closed,
}

/// Editing session over one owner's schedule.
///
/// `save` borrows the session mutably for the whole request, so no edit can
/// land while it is in flight. After a successful save the session is closed
/// and every mutation becomes a no-op.
pub struct MusterEditor {
    original: Vec<MusterConfiguration>,
    rows: Vec<MusterRow>,
    local_timezone: String,
    today: NaiveDate,
    error_message: Option<String>,
    status: Status,
}

impl MusterEditor {
    /// Loads the session with new windows defaulting to the process time zone.
    pub fn open(musters: Vec<MusterConfiguration>) -> Self {
        Self::load(musters, Timezone::guess())
    }

    pub fn load(musters: Vec<MusterConfiguration>, local_timezone: impl Into<String>) -> Self {
        Self::load_on(musters, local_timezone, Local::now().date_naive())
    }

    /// Loads the session binding start times to `today` for the time picker.
    pub fn load_on(
        musters: Vec<MusterConfiguration>,
        local_timezone: impl Into<String>,
        today: NaiveDate,
    ) -> Self {
        let rows = musters
            .iter()
            .cloned()
            .map(|muster| MusterRow::new(muster, today))
            .collect();
        Self {
            original: musters,
            rows,
            local_timezone: local_timezone.into(),
            today,
            error_message: None,
            status: Status::Editing,
        }
    }

    pub fn rows(&self) -> &[MusterRow] {
        &self.rows
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// The current windows without any view fields, in row order.
    pub fn configuration(&self) -> Vec<MusterConfiguration> {
        self.rows.iter().map(|row| row.muster.clone()).collect()
    }

    pub fn add_window(&mut self) -> Option<RowKey> {
        if self.status == Status::Closed {
            return None;
        }
        let muster = MusterConfiguration {
            days: DaysOfTheWeek::NONE,
            start_time: NaiveTime::MIN,
            timezone: self.local_timezone.clone(),
            duration_minutes: DEFAULT_DURATION_MINUTES,
        };
        let row = MusterRow::new(muster, self.today);
        let key = row.key.clone();
        self.rows.push(row);
        Some(key)
    }

    pub fn remove_window(&mut self, key: &str) {
        if self.status == Status::Closed {
            return;
        }
        self.rows.retain(|row| row.key != key);
    }

    pub fn set_days(&mut self, key: &str, day: Weekday) {
        let Some(row) = self.row_mut(key) else {
            return;
        };
        row.muster.days = row.muster.days.toggle(day);
        if !self.rows.iter().any(|row| row.muster.days.is_empty()) {
            self.error_message = None;
        }
    }

    /// Ignores a missing or unparseable time.
    pub fn set_start_time(&mut self, key: &str, time: Option<&str>) {
        let Some(time) = time.and_then(parse_start_time) else {
            return;
        };
        let today = self.today;
        let Some(row) = self.row_mut(key) else {
            return;
        };
        row.muster.start_time = time;
        row.start_time_date = today.and_time(time);
        self.error_message = None;
    }

    /// Takes the raw hours input, reading its leading number so `1.5h` is
    /// 1.5. Anything unparseable becomes half an hour and the result is
    /// kept between half an hour and one week.
    pub fn set_duration(&mut self, key: &str, hours: &str) {
        let hours = match parse_leading_number(hours) {
            Some(hours) if hours.is_finite() => {
                hours.clamp(MINIMUM_DURATION_HOURS, MAXIMUM_DURATION_HOURS)
            }
            _ => MINIMUM_DURATION_HOURS,
        };
        let Some(row) = self.row_mut(key) else {
            return;
        };
        row.duration_hours = hours;
        row.muster.duration_minutes = (hours * 60.0).round() as u32;
        self.error_message = None;
    }

    pub fn set_timezone(&mut self, key: &str, timezone: &str) {
        let Some(row) = self.row_mut(key) else {
            return;
        };
        row.muster.timezone = timezone.to_string();
        self.error_message = None;
    }

    pub fn has_changes(&self) -> bool {
        self.original != self.configuration()
    }

    /// Runs the validator and keeps its message for display.
    pub fn validate(&mut self) -> bool {
        match validation::validate(&self.configuration()) {
            Some(violation) => {
                self.error_message = Some(violation.to_string());
                false
            }
            None => true,
        }
    }

    pub fn can_save(&self) -> bool {
        self.status == Status::Editing
            && validation::validate(&self.configuration()).is_none()
            && self.has_changes()
    }

    pub fn day_state(&self, key: &str, day: Weekday) -> Option<DayState> {
        let row = self.rows.iter().find(|row| row.key == key)?;
        Some(if self.error_message.is_some() && row.muster.days.is_empty() {
            DayState::Error
        } else if row.muster.days.contains(day) {
            DayState::On
        } else {
            DayState::Off
        })
    }

    pub fn summary(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| readable::describe(&row.muster))
            .collect()
    }

    /// Validates, then replaces the owner's schedule through `saver`.
    ///
    /// A failed request leaves the session open so the user can retry.
    pub async fn save(&mut self, saver: &dyn MusterSaver) -> Result<(), SaveError> {
        if self.status == Status::Closed {
            return Err(SaveError::Closed);
        }
        if !self.validate() {
            return Err(SaveError::Invalid(
                self.error_message.clone().unwrap_or_default(),
            ));
        }

        let musters = self.configuration();
        log::debug!("saving {} muster windows", musters.len());

        match saver.save(musters.clone()).await {
            Ok(()) => {
                log::trace!("muster configuration saved");
                self.original = musters;
                self.status = Status::Closed;
                Ok(())
            }
            Err(message) => {
                log::warn!("could not save muster configuration: {}", message);
                Err(SaveError::Failed(message))
            }
        }
    }

    fn row_mut(&mut self, key: &str) -> Option<&mut MusterRow> {
        if self.status == Status::Closed {
            return None;
        }
        self.rows.iter_mut().find(|row| row.key == key)
    }
}

/// The longest prefix of `value` that reads as a number.
fn parse_leading_number(value: &str) -> Option<f64> {
    let value = value.trim_start();
    value
        .char_indices()
        .map(|(index, c)| index + c.len_utf8())
        .rev()
        .find_map(|end| value[..end].parse::<f64>().ok())
}

fn new_row_key() -> RowKey {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ROW_KEY_LENGTH)
        .map(char::from)
        .collect()
}
