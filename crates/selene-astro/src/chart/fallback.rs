//! Degraded sun-sign-only chart.

use crate::chart::types::ChartResult;
use crate::zodiac::calendar::sign_for_date;
use chrono::NaiveDate;

/// Build the fallback chart from the calendar date alone: moon mirrors the
/// sun sign, rising and planets are absent. No network, no failure modes.
pub fn sun_sign_fallback(date: NaiveDate) -> ChartResult {
    let sun = sign_for_date(date);
    ChartResult {
        sun,
        moon: sun,
        rising: None,
        mercury: None,
        venus: None,
        mars: None,
        approximate_location: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zodiac::ZodiacSign;

    #[test]
    fn test_fallback_mirrors_sun_into_moon() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let chart = sun_sign_fallback(date);
        assert_eq!(chart.sun, ZodiacSign::Capricorn);
        assert_eq!(chart.moon, ZodiacSign::Capricorn);
        assert_eq!(chart.rising, None);
        assert_eq!(chart.mercury, None);
        assert!(chart.approximate_location);
    }
}
