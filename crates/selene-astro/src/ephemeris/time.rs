//! Julian Day and sidereal time.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let mut normalized = value % 360.0;
    if normalized < 0.0 {
        normalized += 360.0;
    }
    normalized
}

/// Julian Day for a Gregorian calendar date and clock time, treated as
/// universal time. The integer day number is the standard Gregorian formula;
/// the day fraction shifts the origin from noon to the given time.
pub fn julian_day(date: NaiveDate, time: NaiveTime) -> f64 {
    let year = date.year() as i64;
    let month = date.month() as i64;
    let day = date.day() as i64;

    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    let jdn = day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045;

    let day_fraction = time.num_seconds_from_midnight() as f64 / 86_400.0 - 0.5;
    jdn as f64 + day_fraction
}

/// Greenwich mean sidereal time in degrees.
pub fn gmst_degrees(jd: f64) -> f64 {
    let d = jd - 2_451_545.0;
    let t = d / 36_525.0;
    normalize_degrees(280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t)
}

/// Local sidereal time in degrees for an east-positive longitude.
pub fn local_sidereal_time(jd: f64, longitude_east: f64) -> f64 {
    normalize_degrees(gmst_degrees(jd) + longitude_east)
}
