use crate::domain::schedule::configuration::{
    MAXIMUM_DURATION_MINUTES, MINIMUM_DURATION_MINUTES,
};
use crate::domain::schedule::{validation, MusterConfiguration};
use crate::domain::timezone::Timezone;

/// Checks a schedule received from a client before it replaces the stored
/// one. Field rules come first, then the same validator the editor runs.
pub fn check_musters(musters: &[MusterConfiguration]) -> Result<(), String> {
    for muster in musters.iter() {
        if !muster.days.is_valid() {
            return Err(format!(
                "Muster days must only include the days of the week, got {}.",
                muster.days.bits()
            ));
        }
        if muster.duration_minutes < MINIMUM_DURATION_MINUTES {
            return Err(format!(
                "Muster duration must be at least {} minutes.",
                MINIMUM_DURATION_MINUTES
            ));
        }
        if muster.duration_minutes > MAXIMUM_DURATION_MINUTES {
            return Err(format!(
                "Muster duration must be at most {} minutes.",
                MAXIMUM_DURATION_MINUTES
            ));
        }
        if Timezone::parse(&muster.timezone).is_none() {
            return Err(format!("Unknown time zone: {}.", muster.timezone));
        }
    }

    match validation::validate(musters) {
        Some(violation) => Err(violation.to_string()),
        None => Ok(()),
    }
}
