//! Built-in analytic position provider.
//!
//! Supplies geocentric ecliptic longitudes with no I/O: low-precision series
//! for the sun and moon, and J2000 Keplerian mean elements with secular rates
//! for Mercury, Venus and Mars. Accuracy is well inside one sign, which is
//! the resolution the chart needs; observatory-grade ephemerides stay behind
//! the `PositionProvider` trait for hosts that have one.

use crate::ephemeris::time::normalize_degrees;
use crate::ephemeris::types::BodyPositions;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while producing planetary positions.
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("failed to calculate position for {body} at JD {jd}: {message}")]
    CalculationFailed {
        body: String,
        jd: f64,
        message: String,
    },
    #[error("position provider error: {0}")]
    Provider(String),
}

/// Source of geocentric ecliptic longitudes for a Julian Day. Implementations
/// may be network-bound; errors are treated as fatal for the whole lookup.
#[async_trait]
pub trait PositionProvider: Send + Sync {
    async fn positions_at(&self, jd: f64) -> Result<BodyPositions, EphemerisError>;
}

/// J2000 mean orbital elements and their secular rates per Julian century.
/// Semi-major axis in AU, angles in degrees.
struct OrbitalElements {
    a: f64,
    e: f64,
    i: f64,
    l: f64,
    long_peri: f64,
    long_node: f64,
    a_rate: f64,
    e_rate: f64,
    i_rate: f64,
    l_rate: f64,
    long_peri_rate: f64,
    long_node_rate: f64,
}

const MERCURY: OrbitalElements = OrbitalElements {
    a: 0.387_099_27,
    e: 0.205_635_93,
    i: 7.004_979_02,
    l: 252.250_323_50,
    long_peri: 77.457_796_28,
    long_node: 48.330_765_93,
    a_rate: 0.000_000_37,
    e_rate: 0.000_019_06,
    i_rate: -0.005_947_49,
    l_rate: 149_472.674_111_75,
    long_peri_rate: 0.160_476_89,
    long_node_rate: -0.125_340_81,
};

const VENUS: OrbitalElements = OrbitalElements {
    a: 0.723_335_66,
    e: 0.006_776_72,
    i: 3.394_676_05,
    l: 181.979_099_50,
    long_peri: 131.602_467_18,
    long_node: 76.679_842_55,
    a_rate: 0.000_003_90,
    e_rate: -0.000_041_07,
    i_rate: -0.000_788_90,
    l_rate: 58_517.815_387_29,
    long_peri_rate: 0.002_683_29,
    long_node_rate: -0.277_694_18,
};

const EARTH_MOON_BARYCENTER: OrbitalElements = OrbitalElements {
    a: 1.000_002_61,
    e: 0.016_711_23,
    i: -0.000_015_31,
    l: 100.464_571_66,
    long_peri: 102.937_681_93,
    long_node: 0.0,
    a_rate: 0.000_005_62,
    e_rate: -0.000_043_92,
    i_rate: -0.012_946_68,
    l_rate: 35_999.372_449_81,
    long_peri_rate: 0.323_273_64,
    long_node_rate: 0.0,
};

const MARS: OrbitalElements = OrbitalElements {
    a: 1.523_710_34,
    e: 0.093_394_10,
    i: 1.849_691_42,
    l: -4.553_432_05,
    long_peri: -23.943_629_59,
    long_node: 49.559_538_91,
    a_rate: 0.000_018_47,
    e_rate: 0.000_078_82,
    i_rate: -0.008_131_31,
    l_rate: 19_140.302_684_99,
    long_peri_rate: 0.444_410_88,
    long_node_rate: -0.292_573_43,
};

const MAX_KEPLER_ITERATIONS: usize = 30;

fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// Geocentric ecliptic longitude of the sun, low-precision series.
fn sun_longitude(jd: f64) -> f64 {
    let n = jd - 2_451_545.0;
    let mean_longitude = 280.460 + 0.985_647_4 * n;
    let mean_anomaly = (357.528 + 0.985_600_3 * n).to_radians();
    normalize_degrees(
        mean_longitude + 1.915 * mean_anomaly.sin() + 0.020 * (2.0 * mean_anomaly).sin(),
    )
}

/// Geocentric ecliptic longitude of the moon, low-precision series with the
/// principal evection, variation and annual-equation terms.
fn moon_longitude(jd: f64) -> f64 {
    let t = (jd - 2_451_545.0) / 36_525.0;
    normalize_degrees(
        218.316 + 481_267.881_3 * t
            + 6.29 * sin_deg(134.9 + 477_198.85 * t)
            - 1.27 * sin_deg(259.2 - 413_335.38 * t)
            + 0.66 * sin_deg(235.7 + 890_534.23 * t)
            + 0.21 * sin_deg(269.9 + 954_397.70 * t)
            - 0.19 * sin_deg(357.5 + 35_999.05 * t)
            - 0.11 * sin_deg(186.6 + 966_404.05 * t),
    )
}

/// Solve Kepler's equation `E - e sin E = M` by Newton iteration.
fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> Option<f64> {
    let mut ecc_anomaly = mean_anomaly + eccentricity * mean_anomaly.sin();
    for _ in 0..MAX_KEPLER_ITERATIONS {
        let delta = (mean_anomaly - (ecc_anomaly - eccentricity * ecc_anomaly.sin()))
            / (1.0 - eccentricity * ecc_anomaly.cos());
        ecc_anomaly += delta;
        if delta.abs() < 1e-8 {
            return Some(ecc_anomaly);
        }
    }
    None
}

/// Heliocentric ecliptic rectangular coordinates in AU.
fn heliocentric_position(
    elements: &OrbitalElements,
    body: &str,
    jd: f64,
) -> Result<[f64; 3], EphemerisError> {
    let t = (jd - 2_451_545.0) / 36_525.0;
    let a = elements.a + elements.a_rate * t;
    let e = elements.e + elements.e_rate * t;
    let i = (elements.i + elements.i_rate * t).to_radians();
    let l = elements.l + elements.l_rate * t;
    let long_peri = elements.long_peri + elements.long_peri_rate * t;
    let long_node = elements.long_node + elements.long_node_rate * t;

    let mean_anomaly = normalize_degrees(l - long_peri).to_radians();
    let ecc_anomaly =
        solve_kepler(mean_anomaly, e).ok_or_else(|| EphemerisError::CalculationFailed {
            body: body.to_string(),
            jd,
            message: "Kepler's equation did not converge".to_string(),
        })?;

    // Position in the orbital plane, x toward perihelion.
    let xp = a * (ecc_anomaly.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

    // Rotate by argument of perihelion, inclination and node into the
    // ecliptic frame.
    let arg_peri = (long_peri - long_node).to_radians();
    let (cw, sw) = (arg_peri.cos(), arg_peri.sin());
    let (co, so) = (long_node.to_radians().cos(), long_node.to_radians().sin());
    let (ci, si) = (i.cos(), i.sin());

    let x = (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp;
    let y = (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp;
    let z = (sw * si) * xp + (cw * si) * yp;
    Ok([x, y, z])
}

/// Analytic adapter: pure computation, no files, no network.
pub struct AnalyticAdapter;

impl AnalyticAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Compute all body longitudes for a Julian Day. Synchronous core of the
    /// provider; also what the benchmarks exercise.
    pub fn compute_positions(&self, jd: f64) -> Result<BodyPositions, EphemerisError> {
        let mercury = self.geocentric_longitude(&MERCURY, "mercury", jd)?;
        let venus = self.geocentric_longitude(&VENUS, "venus", jd)?;
        let mars = self.geocentric_longitude(&MARS, "mars", jd)?;
        Ok(BodyPositions {
            sun: sun_longitude(jd),
            moon: moon_longitude(jd),
            mercury: Some(mercury),
            venus: Some(venus),
            mars: Some(mars),
        })
    }

    fn geocentric_longitude(
        &self,
        elements: &OrbitalElements,
        body: &str,
        jd: f64,
    ) -> Result<f64, EphemerisError> {
        let planet = heliocentric_position(elements, body, jd)?;
        let earth = heliocentric_position(&EARTH_MOON_BARYCENTER, "earth", jd)?;
        let dx = planet[0] - earth[0];
        let dy = planet[1] - earth[1];
        Ok(normalize_degrees(dy.atan2(dx).to_degrees()))
    }
}

impl Default for AnalyticAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PositionProvider for AnalyticAdapter {
    async fn positions_at(&self, jd: f64) -> Result<BodyPositions, EphemerisError> {
        self.compute_positions(jd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zodiac::ZodiacSign;

    const J2000: f64 = 2_451_545.0;

    fn angle_between(a: f64, b: f64) -> f64 {
        let diff = (a - b).rem_euclid(360.0);
        diff.min(360.0 - diff)
    }

    #[test]
    fn test_sun_longitude_at_j2000() {
        let lon = sun_longitude(J2000);
        assert!((lon - 280.4).abs() < 0.5, "got {lon}");
        assert_eq!(ZodiacSign::from_longitude(lon), ZodiacSign::Capricorn);
    }

    #[test]
    fn test_moon_longitude_at_j2000() {
        let lon = moon_longitude(J2000);
        assert!((lon - 223.3).abs() < 2.0, "got {lon}");
        assert_eq!(ZodiacSign::from_longitude(lon), ZodiacSign::Scorpio);
    }

    #[test]
    fn test_moon_meets_sun_at_the_reference_new_moon() {
        // 2000-01-06 18:14 UTC, the lunar module's phase origin.
        let jd = 2_451_550.26;
        assert!(angle_between(moon_longitude(jd), sun_longitude(jd)) < 1.5);
    }

    #[test]
    fn test_kepler_solution_satisfies_the_equation() {
        for (m, e) in [(0.3, 0.2056), (2.9, 0.0934), (5.8, 0.0167)] {
            let ecc = solve_kepler(m, e).unwrap();
            assert!((ecc - e * ecc.sin() - m).abs() < 1e-7);
        }
    }

    #[test]
    fn test_inner_planets_stay_near_the_sun() {
        let adapter = AnalyticAdapter::new();
        // Mercury's max elongation is ~28 degrees, Venus's ~48.
        for jd in [J2000, 2_455_197.5, 2_459_580.5] {
            let pos = adapter.compute_positions(jd).unwrap();
            assert!(angle_between(pos.mercury.unwrap(), pos.sun) < 29.5);
            assert!(angle_between(pos.venus.unwrap(), pos.sun) < 49.5);
        }
    }

    #[test]
    fn test_longitudes_are_normalized() {
        let adapter = AnalyticAdapter::new();
        let pos = adapter.compute_positions(2_448_058.104).unwrap();
        for lon in [pos.sun, pos.moon, pos.mercury.unwrap(), pos.venus.unwrap(), pos.mars.unwrap()]
        {
            assert!((0.0..360.0).contains(&lon));
        }
    }
}
