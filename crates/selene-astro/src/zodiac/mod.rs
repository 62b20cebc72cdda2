//! Tropical zodiac signs and the calendar-date mapping.

pub mod calendar;
pub mod types;

pub use calendar::sign_for_date;
pub use types::{Element, ZodiacSign};
