//! Lunar phase and illumination.

pub mod phase;

pub use phase::{
    age_days, illumination, illumination_at, phase, phase_at, MoonPhase, REFERENCE_NEW_MOON,
    SYNODIC_MONTH,
};
