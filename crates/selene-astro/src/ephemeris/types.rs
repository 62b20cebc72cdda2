use serde::{Deserialize, Serialize};

/// Geographic location coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Geocentric ecliptic longitudes in degrees, [0, 360).
///
/// Sun and moon are always present; the inner planets are optional because a
/// provider may not supply them, in which case the chart omits those signs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyPositions {
    pub sun: f64,
    pub moon: f64,
    pub mercury: Option<f64>,
    pub venus: Option<f64>,
    pub mars: Option<f64>,
}
