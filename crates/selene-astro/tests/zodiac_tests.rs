use chrono::NaiveDate;
use selene_astro::zodiac::{sign_for_date, ZodiacSign};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_every_date_maps_to_exactly_one_sign() {
    // Walk a leap year and a common year day by day.
    for year in [2000, 2001] {
        let mut day = date(year, 1, 1);
        let end = date(year, 12, 31);
        let mut counts = std::collections::HashMap::new();
        while day <= end {
            *counts.entry(sign_for_date(day)).or_insert(0u32) += 1;
            day = day.succ_opt().unwrap();
        }
        assert_eq!(counts.len(), 12);
        for (_, count) in counts {
            assert!(count >= 28);
        }
    }
}

#[test]
fn test_all_cusp_boundaries() {
    // (month, day) of each sign's first day, in calendar order from Aquarius.
    let starts = [
        (1, 20, ZodiacSign::Aquarius),
        (2, 19, ZodiacSign::Pisces),
        (3, 21, ZodiacSign::Aries),
        (4, 20, ZodiacSign::Taurus),
        (5, 21, ZodiacSign::Gemini),
        (6, 21, ZodiacSign::Cancer),
        (7, 23, ZodiacSign::Leo),
        (8, 23, ZodiacSign::Virgo),
        (9, 23, ZodiacSign::Libra),
        (10, 23, ZodiacSign::Scorpio),
        (11, 22, ZodiacSign::Sagittarius),
        (12, 22, ZodiacSign::Capricorn),
    ];
    for (month, day, sign) in starts {
        let cusp = date(1995, month, day);
        let day_before = cusp.pred_opt().unwrap();
        assert_eq!(sign_for_date(cusp), sign, "cusp day {cusp}");
        assert_ne!(sign_for_date(day_before), sign, "day before {cusp}");
    }
}

#[test]
fn test_known_birthdays() {
    assert_eq!(sign_for_date(date(1990, 6, 15)), ZodiacSign::Gemini);
    assert_eq!(sign_for_date(date(2000, 1, 1)), ZodiacSign::Capricorn);
    assert_eq!(sign_for_date(date(1984, 8, 5)), ZodiacSign::Leo);
    assert_eq!(sign_for_date(date(1969, 11, 10)), ZodiacSign::Scorpio);
}

#[test]
fn test_sign_metadata() {
    assert_eq!(ZodiacSign::Leo.ruler(), "sun");
    assert_eq!(ZodiacSign::Cancer.ruler(), "moon");
    assert_eq!(ZodiacSign::Gemini.element(), selene_astro::Element::Air);
    assert_eq!(ZodiacSign::Capricorn.to_string(), "Capricorn");
}

#[test]
fn test_calendar_partition_matches_longitude_partition() {
    // Both mappings carve the circle into the same 12 ordered segments.
    for (index, sign) in selene_astro::zodiac::types::SIGN_ORDER.iter().enumerate() {
        let mid_segment = index as f64 * 30.0 + 15.0;
        assert_eq!(ZodiacSign::from_longitude(mid_segment), *sign);
    }
}
