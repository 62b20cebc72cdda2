//! Lunar phase engine.
//!
//! Phase and illumination are derived from the moon's age: the elapsed time
//! since a reference new moon, folded into the synodic month. Both functions
//! are pure and periodic with the synodic month.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean length of the synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530588853;

lazy_static::lazy_static! {
    /// The first new moon of 2000 (2000-01-06 18:14 UTC), used as the phase
    /// origin.
    pub static ref REFERENCE_NEW_MOON: DateTime<Utc> =
        Utc.with_ymd_and_hms(2000, 1, 6, 18, 14, 0).unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoonPhase {
    New,
    Waxing,
    Full,
    Waning,
}

impl MoonPhase {
    pub fn name(&self) -> &'static str {
        match self {
            MoonPhase::New => "New Moon",
            MoonPhase::Waxing => "Waxing",
            MoonPhase::Full => "Full Moon",
            MoonPhase::Waning => "Waning",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Days since the last new moon, in [0, SYNODIC_MONTH).
pub fn age_days(at: DateTime<Utc>) -> f64 {
    let elapsed_ms = at.signed_duration_since(*REFERENCE_NEW_MOON).num_milliseconds();
    let elapsed_days = elapsed_ms as f64 / 86_400_000.0;
    elapsed_days.rem_euclid(SYNODIC_MONTH)
}

/// Discrete phase bucket for an instant. The cycle is split into eighths of
/// the synodic month: the eighth around each quarter point is merged into
/// the four named phases, and the two new-moon eighths join across the wrap.
pub fn phase_at(at: DateTime<Utc>) -> MoonPhase {
    let age = age_days(at);
    let eighth = SYNODIC_MONTH / 8.0;
    if age < eighth {
        MoonPhase::New
    } else if age < 3.0 * eighth {
        MoonPhase::Waxing
    } else if age < 5.0 * eighth {
        MoonPhase::Full
    } else if age < 7.0 * eighth {
        MoonPhase::Waning
    } else {
        MoonPhase::New
    }
}

/// Illuminated fraction as an integer percentage: 0 at new moon, 100 at full,
/// symmetric about the full-moon point.
pub fn illumination_at(at: DateTime<Utc>) -> u8 {
    let angle = (age_days(at) / SYNODIC_MONTH) * std::f64::consts::TAU;
    (50.0 * (1.0 - angle.cos())).round() as u8
}

/// Phase for the current instant.
pub fn phase() -> MoonPhase {
    phase_at(Utc::now())
}

/// Illumination for the current instant.
pub fn illumination() -> u8 {
    illumination_at(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn days(d: f64) -> Duration {
        Duration::milliseconds((d * 86_400_000.0) as i64)
    }

    #[test]
    fn test_reference_instant_is_a_dark_new_moon() {
        assert_eq!(phase_at(*REFERENCE_NEW_MOON), MoonPhase::New);
        assert_eq!(illumination_at(*REFERENCE_NEW_MOON), 0);
    }

    #[test]
    fn test_age_wraps_at_the_synodic_month() {
        let age = age_days(*REFERENCE_NEW_MOON + days(SYNODIC_MONTH));
        // The truncation to whole milliseconds can land the age just under
        // the wrap point, so measure the distance to it from either side.
        let distance_to_wrap = age.min(SYNODIC_MONTH - age);
        assert!(distance_to_wrap < 0.001);
    }

    #[test]
    fn test_quarter_buckets() {
        assert_eq!(phase_at(*REFERENCE_NEW_MOON + days(5.0)), MoonPhase::Waxing);
        assert_eq!(phase_at(*REFERENCE_NEW_MOON + days(SYNODIC_MONTH / 2.0)), MoonPhase::Full);
        assert_eq!(phase_at(*REFERENCE_NEW_MOON + days(22.0)), MoonPhase::Waning);
        assert_eq!(phase_at(*REFERENCE_NEW_MOON + days(28.5)), MoonPhase::New);
    }
}
