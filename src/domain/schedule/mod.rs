pub mod configuration;
pub mod days;
pub mod editor;
pub mod readable;
pub mod validation;

pub use configuration::*;
pub use days::DaysOfTheWeek;
pub use editor::{MusterEditor, MusterSaver};
pub use validation::{validate, Violation};
