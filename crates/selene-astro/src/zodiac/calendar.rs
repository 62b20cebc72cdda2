//! Calendar-date lookup for sun signs.
//!
//! The date is interpreted as the local birth date with no UTC conversion.
//! Cusp rule: a boundary date belongs to the LATER sign, i.e. the cusp day is
//! the first day of the new sign (Mar 21 is already Aries, Apr 20 already
//! Taurus). Every call site shares this single table.

use crate::zodiac::types::ZodiacSign;
use chrono::{Datelike, NaiveDate};

/// First (month, day) of each sign's date range. Capricorn wraps the year
/// boundary (Dec 22 - Jan 19), so it is the value carried into January.
const SIGN_STARTS: &[(u32, u32, ZodiacSign)] = &[
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

/// Return the sun sign for a calendar date. Total: every valid date maps to
/// exactly one sign.
pub fn sign_for_date(date: NaiveDate) -> ZodiacSign {
    let key = (date.month(), date.day());
    let mut sign = ZodiacSign::Capricorn;
    for &(month, day, start_sign) in SIGN_STARTS {
        if key >= (month, day) {
            sign = start_sign;
        }
    }
    sign
}
