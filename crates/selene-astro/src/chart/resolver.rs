//! Full birth chart resolution.
//!
//! The resolver runs two network-bound stages in sequence (coordinates, then
//! planetary positions), each under its own timeout. Failures split two ways:
//! anything that prevents the sun and moon signs (no usable location input,
//! geocoder or ephemeris failure, timeout) fails the whole call and the entry
//! point serves the sun-sign fallback; a missing rising sign or missing inner
//! planets only omits those fields.

use crate::chart::fallback::sun_sign_fallback;
use crate::chart::types::{BirthInput, ChartError, ChartResult};
use crate::config::ResolverSettings;
use crate::ephemeris::adapter::{AnalyticAdapter, EphemerisError, PositionProvider};
use crate::ephemeris::angles::{ascendant, mean_obliquity};
use crate::ephemeris::time::{julian_day, local_sidereal_time};
use crate::ephemeris::types::GeoLocation;
use crate::geo::gazetteer::Gazetteer;
use crate::geo::resolver::{GeocodeError, LocationResolver};
use crate::zodiac::ZodiacSign;
use chrono::NaiveTime;
use log::{debug, warn};
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;

/// Resolution errors. Every variant hard-fails the chart; the caller is
/// expected to fall back to the sun-sign path.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("no city or coordinates supplied")]
    MissingLocation,
    #[error("location lookup failed: {0}")]
    Geocode(#[from] GeocodeError),
    #[error("planetary position lookup failed: {0}")]
    Ephemeris(#[from] EphemerisError),
    #[error("{stage} lookup exceeded {timeout_ms} ms")]
    Timeout { stage: &'static str, timeout_ms: u64 },
}

pub struct BirthChartResolver<L, P> {
    locations: L,
    positions: P,
    settings: ResolverSettings,
}

impl BirthChartResolver<Gazetteer, AnalyticAdapter> {
    /// Default wiring: offline gazetteer and analytic ephemeris.
    pub fn with_defaults() -> Self {
        Self::new(Gazetteer::new(), AnalyticAdapter::new(), ResolverSettings::default())
    }
}

impl<L, P> BirthChartResolver<L, P>
where
    L: LocationResolver,
    P: PositionProvider,
{
    pub fn new(locations: L, positions: P, settings: ResolverSettings) -> Self {
        Self {
            locations,
            positions,
            settings,
        }
    }

    /// Resolve a full chart. Holds no state across calls; aborting the
    /// returned future mid-flight discards everything.
    pub async fn resolve(&self, input: &BirthInput) -> Result<ChartResult, ResolveError> {
        let (location, approximate) = self.resolve_location(input).await?;

        let (clock, have_exact_time) = match input.time {
            Some(time) => (time, true),
            // Noon substitute keeps the sun and moon close to their birth-day
            // positions; the rising sign stays unavailable for this request.
            None => (NaiveTime::from_hms_opt(12, 0, 0).unwrap(), false),
        };

        let jd = julian_day(input.date, clock);
        let timeout_ms = self.settings.ephemeris_timeout_ms;
        let positions = timeout(
            Duration::from_millis(timeout_ms),
            self.positions.positions_at(jd),
        )
        .await
        .map_err(|_| ResolveError::Timeout {
            stage: "ephemeris",
            timeout_ms,
        })??;

        let rising = if have_exact_time {
            let lst = local_sidereal_time(jd, location.lon);
            let asc = ascendant(lst, location.lat, mean_obliquity(jd));
            Some(ZodiacSign::from_longitude(asc))
        } else {
            None
        };

        Ok(ChartResult {
            sun: ZodiacSign::from_longitude(positions.sun),
            moon: ZodiacSign::from_longitude(positions.moon),
            rising,
            mercury: positions.mercury.map(ZodiacSign::from_longitude),
            venus: positions.venus.map(ZodiacSign::from_longitude),
            mars: positions.mars.map(ZodiacSign::from_longitude),
            approximate_location: approximate,
        })
    }

    /// Stage 1: coordinates. Returns the location and whether it is the
    /// approximate default rather than the requested place.
    async fn resolve_location(
        &self,
        input: &BirthInput,
    ) -> Result<(GeoLocation, bool), ResolveError> {
        if let Some(coords) = &input.coordinates {
            return Ok((coords.clone(), false));
        }
        let city = match &input.city {
            Some(city) => city,
            None => return Err(ResolveError::MissingLocation),
        };

        let timeout_ms = self.settings.geocode_timeout_ms;
        let matches = timeout(
            Duration::from_millis(timeout_ms),
            self.locations.search(city),
        )
        .await
        .map_err(|_| ResolveError::Timeout {
            stage: "location",
            timeout_ms,
        })??;

        match matches.into_iter().next() {
            Some(hit) => {
                debug!("resolved {city:?} to {:.4}, {:.4}", hit.lat, hit.lon);
                Ok((hit, false))
            }
            None => {
                warn!("no coordinates found for {city:?}; using default reference location");
                Ok((self.settings.default_location.clone(), true))
            }
        }
    }
}

/// Orchestration entry point. Input strings are validated strictly; any
/// resolution failure degrades to the sun-sign fallback, so a valid date
/// never produces a hard error.
pub async fn fetch_birth_chart<L, P>(
    resolver: &BirthChartResolver<L, P>,
    date: &str,
    time: Option<&str>,
    city: Option<&str>,
) -> Result<ChartResult, ChartError>
where
    L: LocationResolver,
    P: PositionProvider,
{
    let input = BirthInput::parse(date, time, city)?;
    match resolver.resolve(&input).await {
        Ok(chart) => Ok(chart),
        Err(err) => {
            warn!("birth chart resolution failed ({err}); serving sun-sign fallback");
            Ok(sun_sign_fallback(input.date))
        }
    }
}
