//! Solar/lunar date conversion for the traditional Korean lunar calendar.
//!
//! The chart engine works on lunar dates; solar input is normalized here
//! before any calculation. Conversion is table-driven over the compiled-in
//! year data in [`table`], which covers lunar years 1900-2050.

mod table;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use table::{BASE_YEAR, EPOCH_JDN, YEAR_TABLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub is_intercalation: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("solar date {year:04}-{month:02}-{day:02} is outside the supported calendar range")]
    UnsupportedSolarDate { year: i32, month: i32, day: i32 },
    #[error("lunar date {year:04}-{month:02}-{day:02} is outside the supported calendar range")]
    UnsupportedLunarDate { year: i32, month: i32, day: i32 },
}

fn jdn_from_solar(year: i64, month: i64, day: i64) -> i64 {
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

fn solar_from_jdn(jdn: i64) -> SolarDate {
    let a = jdn + 32044;
    let b = (4 * a + 3) / 146097;
    let c = a - 146097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    SolarDate {
        year: (100 * b + d - 4800 + m / 10) as i32,
        month: (m + 3 - 12 * (m / 10)) as i32,
        day: (e - (153 * m + 2) / 5 + 1) as i32,
    }
}

fn year_bits(year: i32) -> u32 {
    YEAR_TABLE[(year - BASE_YEAR) as usize]
}

/// Intercalation month number of the given lunar year, 0 when it has none.
fn intercalation_month(year: i32) -> i32 {
    ((year_bits(year) >> 12) & 0xF) as i32
}

fn month_days(year: i32, month: i32) -> i64 {
    if year_bits(year) & (1 << (month - 1)) != 0 {
        30
    } else {
        29
    }
}

fn intercalation_days(year: i32) -> i64 {
    if intercalation_month(year) == 0 {
        0
    } else if year_bits(year) & (1 << 16) != 0 {
        30
    } else {
        29
    }
}

fn year_days(year: i32) -> i64 {
    (1..=12).map(|m| month_days(year, m)).sum::<i64>() + intercalation_days(year)
}

fn last_table_year() -> i32 {
    BASE_YEAR + YEAR_TABLE.len() as i32 - 1
}

/// Converts a solar (Gregorian) date to its Korean lunar equivalent.
pub fn solar_to_lunar(year: i32, month: i32, day: i32) -> Result<LunarDate, CalendarError> {
    let out_of_range = CalendarError::UnsupportedSolarDate { year, month, day };

    let jdn = jdn_from_solar(year as i64, month as i64, day as i64);
    // The day/month arithmetic is total, so a non-date like Feb 31 maps onto
    // a later real day. Rejecting on the round trip catches that.
    if solar_from_jdn(jdn) != (SolarDate { year, month, day }) {
        return Err(out_of_range);
    }

    let mut offset = jdn - EPOCH_JDN;
    if offset < 0 {
        return Err(out_of_range);
    }

    let mut lunar_year = BASE_YEAR;
    loop {
        if lunar_year > last_table_year() {
            return Err(out_of_range);
        }
        let days = year_days(lunar_year);
        if offset < days {
            break;
        }
        offset -= days;
        lunar_year += 1;
    }

    let mut lunar_month = 1;
    let mut in_intercalation = false;
    loop {
        let days = if in_intercalation {
            intercalation_days(lunar_year)
        } else {
            month_days(lunar_year, lunar_month)
        };
        if offset < days {
            break;
        }
        offset -= days;
        if !in_intercalation && intercalation_month(lunar_year) == lunar_month {
            in_intercalation = true;
        } else {
            lunar_month += 1;
            in_intercalation = false;
        }
    }

    Ok(LunarDate {
        year: lunar_year,
        month: lunar_month,
        day: (offset + 1) as i32,
        is_intercalation: in_intercalation,
    })
}

/// Converts a Korean lunar date back to solar. Exposed for round-trip
/// verification; the analysis path itself never needs it.
pub fn lunar_to_solar(
    year: i32,
    month: i32,
    day: i32,
    is_intercalation: bool,
) -> Result<SolarDate, CalendarError> {
    let out_of_range = CalendarError::UnsupportedLunarDate { year, month, day };

    if year < BASE_YEAR || year > last_table_year() || !(1..=12).contains(&month) {
        return Err(out_of_range);
    }
    if is_intercalation && intercalation_month(year) != month {
        return Err(out_of_range);
    }
    let limit = if is_intercalation {
        intercalation_days(year)
    } else {
        month_days(year, month)
    };
    if day < 1 || day as i64 > limit {
        return Err(out_of_range);
    }

    let mut offset: i64 = (BASE_YEAR..year).map(year_days).sum();
    for m in 1..month {
        offset += month_days(year, m);
        if intercalation_month(year) == m {
            offset += intercalation_days(year);
        }
    }
    if is_intercalation {
        offset += month_days(year, month);
    }

    Ok(solar_from_jdn(EPOCH_JDN + offset + day as i64 - 1))
}

/// Normalizes birth input to a lunar date. Lunar input is taken verbatim,
/// intercalation flag included, without checking it against real month
/// bounds for that year; solar input goes through [`solar_to_lunar`].
pub fn normalize(
    year: i32,
    month: i32,
    day: i32,
    is_lunar: bool,
    is_intercalation: bool,
) -> Result<LunarDate, CalendarError> {
    if is_lunar {
        return Ok(LunarDate {
            year,
            month,
            day,
            is_intercalation,
        });
    }
    solar_to_lunar(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_new_year_dates() {
        assert_eq!(
            solar_to_lunar(2020, 1, 25).unwrap(),
            LunarDate {
                year: 2020,
                month: 1,
                day: 1,
                is_intercalation: false
            }
        );
        assert_eq!(
            solar_to_lunar(1984, 2, 2).unwrap(),
            LunarDate {
                year: 1984,
                month: 1,
                day: 1,
                is_intercalation: false
            }
        );
        // A day later than the Chinese calendar: the 1988 new moon fell just
        // past midnight Korean time.
        assert_eq!(
            solar_to_lunar(1988, 2, 18).unwrap(),
            LunarDate {
                year: 1988,
                month: 1,
                day: 1,
                is_intercalation: false
            }
        );
    }

    #[test]
    fn round_trips_through_lunar() {
        let lunar = solar_to_lunar(2020, 1, 25).unwrap();
        let solar =
            lunar_to_solar(lunar.year, lunar.month, lunar.day, lunar.is_intercalation).unwrap();
        assert_eq!(
            solar,
            SolarDate {
                year: 2020,
                month: 1,
                day: 25
            }
        );
    }

    #[test]
    fn detects_intercalation_months() {
        // Lunar 2020 intercalates month 4; the leap month began on solar
        // 2020-05-23.
        let lunar = solar_to_lunar(2020, 5, 23).unwrap();
        assert_eq!(
            lunar,
            LunarDate {
                year: 2020,
                month: 4,
                day: 1,
                is_intercalation: true
            }
        );
        assert_eq!(
            lunar_to_solar(2020, 4, 1, true).unwrap(),
            SolarDate {
                year: 2020,
                month: 5,
                day: 23
            }
        );
    }

    #[test]
    fn rejects_dates_outside_the_table() {
        assert!(solar_to_lunar(1899, 6, 1).is_err());
        assert!(solar_to_lunar(2052, 1, 1).is_err());
        assert!(lunar_to_solar(1899, 1, 1, false).is_err());
        assert!(lunar_to_solar(2051, 1, 1, false).is_err());
    }

    #[test]
    fn rejects_invalid_solar_dates() {
        assert!(solar_to_lunar(2020, 2, 31).is_err());
        assert!(solar_to_lunar(2020, 13, 1).is_err());
    }

    #[test]
    fn rejects_mismatched_intercalation() {
        // 2020 intercalates month 4, not month 5.
        assert!(lunar_to_solar(2020, 5, 1, true).is_err());
    }

    #[test]
    fn epoch_boundaries_are_exact() {
        // First supported day: lunar 1900-01-01.
        assert_eq!(
            solar_to_lunar(1900, 1, 31).unwrap(),
            LunarDate {
                year: 1900,
                month: 1,
                day: 1,
                is_intercalation: false
            }
        );
        assert!(solar_to_lunar(1900, 1, 30).is_err());
        // Last supported day: lunar 2050-12-29 = solar 2051-02-10.
        assert_eq!(
            solar_to_lunar(2051, 2, 10).unwrap(),
            LunarDate {
                year: 2050,
                month: 12,
                day: 29,
                is_intercalation: false
            }
        );
        assert!(solar_to_lunar(2051, 2, 11).is_err());
    }

    #[test]
    fn normalize_passes_lunar_input_through() {
        let lunar = normalize(1984, 1, 1, true, false).unwrap();
        assert_eq!(
            lunar,
            LunarDate {
                year: 1984,
                month: 1,
                day: 1,
                is_intercalation: false
            }
        );
        // Lunar input is trusted verbatim, even day 30 in a 29-day month.
        let permissive = normalize(2020, 12, 30, true, true).unwrap();
        assert_eq!(permissive.day, 30);
        assert!(permissive.is_intercalation);
    }

    #[test]
    fn table_years_have_plausible_lengths() {
        for year in super::table::BASE_YEAR..=last_table_year() {
            let days = year_days(year);
            if intercalation_month(year) == 0 {
                assert!((353..=355).contains(&days), "year {year}: {days} days");
            } else {
                assert!((383..=385).contains(&days), "year {year}: {days} days");
            }
        }
    }
}
