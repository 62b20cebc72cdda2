//! Astrological computation core: zodiac signs from birth data and the
//! current lunar phase. Location resolution and planetary positions come in
//! through collaborator traits; the resulting chart goes out to the profile
//! store as a serializable `ChartResult`.

pub mod chart;
pub mod config;
pub mod ephemeris;
pub mod geo;
pub mod lunar;
pub mod zodiac;

pub use chart::{
    fetch_birth_chart, sun_sign_fallback, BirthChartResolver, BirthInput, ChartError, ChartResult,
    ResolveError,
};
pub use config::{load_resolver_settings, ResolverSettings};
pub use ephemeris::{
    julian_day, AnalyticAdapter, BodyPositions, EphemerisError, GeoLocation, PositionProvider,
};
pub use geo::{Gazetteer, GeocodeError, LocationResolver};
pub use lunar::{MoonPhase, SYNODIC_MONTH};
pub use zodiac::{Element, ZodiacSign};

use chrono::{DateTime, Utc};

/// Sun sign for an ISO `YYYY-MM-DD` birth date.
pub fn calculate_sun_sign(date: &str) -> Result<ZodiacSign, ChartError> {
    let input = BirthInput::parse(date, None, None)?;
    Ok(zodiac::sign_for_date(input.date))
}

/// Discrete lunar phase; defaults to now.
pub fn calculate_moon_phase(at: Option<DateTime<Utc>>) -> MoonPhase {
    lunar::phase_at(at.unwrap_or_else(Utc::now))
}

/// Lunar illumination percentage (0-100); defaults to now.
pub fn moon_illumination(at: Option<DateTime<Utc>>) -> u8 {
    lunar::illumination_at(at.unwrap_or_else(Utc::now))
}
