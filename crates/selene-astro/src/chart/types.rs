//! Birth chart request and result types.

use crate::ephemeris::types::GeoLocation;
use crate::zodiac::ZodiacSign;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input errors: malformed request strings, rejected before any computation.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("invalid birth date {value:?} (expected YYYY-MM-DD): {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },
    #[error("invalid birth time {value:?} (expected HH:MM): {source}")]
    InvalidTime {
        value: String,
        source: chrono::ParseError,
    },
}

/// One birth chart request. Supplied per call and not retained by the core.
#[derive(Debug, Clone, Deserialize)]
pub struct BirthInput {
    pub date: NaiveDate,
    /// Clock time of birth, minute precision. Absent time skips the rising
    /// sign entirely.
    pub time: Option<NaiveTime>,
    /// Free-text birthplace, resolved through the location collaborator.
    pub city: Option<String>,
    /// Direct coordinates; when present the city is never looked up.
    pub coordinates: Option<GeoLocation>,
}

impl BirthInput {
    /// Parse request strings. Malformed values are rejected here, never
    /// coerced.
    pub fn parse(
        date: &str,
        time: Option<&str>,
        city: Option<&str>,
    ) -> Result<Self, ChartError> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|source| {
            ChartError::InvalidDate {
                value: date.to_string(),
                source,
            }
        })?;
        let time = match time {
            Some(raw) => Some(NaiveTime::parse_from_str(raw, "%H:%M").map_err(|source| {
                ChartError::InvalidTime {
                    value: raw.to_string(),
                    source,
                }
            })?),
            None => None,
        };
        Ok(Self {
            date,
            time,
            city: city.map(str::to_string),
            coordinates: None,
        })
    }
}

/// The computed chart, handed to the profile store for persistence. Fields
/// whose preconditions were not met are omitted rather than guessed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartResult {
    pub sun: ZodiacSign,
    pub moon: ZodiacSign,
    pub rising: Option<ZodiacSign>,
    pub mercury: Option<ZodiacSign>,
    pub venus: Option<ZodiacSign>,
    pub mars: Option<ZodiacSign>,
    /// True when the chart was computed against the default reference
    /// location or via the sun-sign fallback.
    #[serde(rename = "approximateLocation")]
    pub approximate_location: bool,
}
