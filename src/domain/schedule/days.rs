use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Set of weekdays packed into the low 7 bits, Sunday first.
///
/// This is also the persisted and wire representation, so it serializes as
/// a bare integer.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct DaysOfTheWeek(u8);

impl DaysOfTheWeek {
    pub const NONE: DaysOfTheWeek = DaysOfTheWeek(0);
    pub const SUNDAY: DaysOfTheWeek = DaysOfTheWeek(1 << 0);
    pub const MONDAY: DaysOfTheWeek = DaysOfTheWeek(1 << 1);
    pub const TUESDAY: DaysOfTheWeek = DaysOfTheWeek(1 << 2);
    pub const WEDNESDAY: DaysOfTheWeek = DaysOfTheWeek(1 << 3);
    pub const THURSDAY: DaysOfTheWeek = DaysOfTheWeek(1 << 4);
    pub const FRIDAY: DaysOfTheWeek = DaysOfTheWeek(1 << 5);
    pub const SATURDAY: DaysOfTheWeek = DaysOfTheWeek(1 << 6);
    pub const WEEKDAYS: DaysOfTheWeek = DaysOfTheWeek(0b0111110);
    pub const WEEKENDS: DaysOfTheWeek = DaysOfTheWeek(0b1000001);
    pub const ALL: DaysOfTheWeek = DaysOfTheWeek(0b1111111);

    pub fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// False when bits outside of the seven days are set.
    pub fn is_valid(self) -> bool {
        self.0 & !Self::ALL.0 == 0
    }

    pub fn contains(self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    pub fn intersects(self, other: DaysOfTheWeek) -> bool {
        self.0 & other.0 != 0
    }

    /// Flips membership of `day`; toggling twice restores the original set.
    pub fn toggle(self, day: Weekday) -> Self {
        Self(self.0 ^ Self::bit(day))
    }

    /// The days in the set, Sunday first.
    pub fn days(self) -> impl Iterator<Item = Weekday> {
        [
            Weekday::Sun,
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ]
        .into_iter()
        .filter(move |day| self.contains(*day))
    }

    fn bit(day: Weekday) -> u8 {
        1 << day.num_days_from_sunday()
    }
}

impl From<Weekday> for DaysOfTheWeek {
    fn from(day: Weekday) -> Self {
        Self(Self::bit(day))
    }
}

impl FromIterator<Weekday> for DaysOfTheWeek {
    fn from_iter<T: IntoIterator<Item = Weekday>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::NONE, |days, day| Self(days.0 | Self::bit(day)))
    }
}
