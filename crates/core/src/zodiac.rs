//! Western tropical zodiac sign derivation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Matches the `YYYY-MM-DD` prefix of a birthday string, capturing month and day.
#[allow(clippy::unwrap_used)] // literal pattern, cannot fail to compile
static BIRTHDAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-(\d{2})-(\d{2})").unwrap());

/// One of the twelve fixed zodiac labels assigned by calendar date ranges,
/// independent of year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum ZodiacSign {
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
}

impl ZodiacSign {
    /// The sign's display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a (day, month) pair to its zodiac sign.
///
/// Boundaries follow the standard Western tropical table. Months outside
/// 1..=12 yield `None`; days are not range-checked beyond the boundary
/// comparisons, matching the lookup's use downstream of a digit-only regex.
#[must_use]
pub const fn sign_for(day: u32, month: u32) -> Option<ZodiacSign> {
    match month {
        1 => Some(if day <= 19 {
            ZodiacSign::Capricorn
        } else {
            ZodiacSign::Aquarius
        }),
        2 => Some(if day <= 18 {
            ZodiacSign::Aquarius
        } else {
            ZodiacSign::Pisces
        }),
        3 => Some(if day <= 20 {
            ZodiacSign::Pisces
        } else {
            ZodiacSign::Aries
        }),
        4 => Some(if day <= 19 {
            ZodiacSign::Aries
        } else {
            ZodiacSign::Taurus
        }),
        5 => Some(if day <= 20 {
            ZodiacSign::Taurus
        } else {
            ZodiacSign::Gemini
        }),
        6 => Some(if day <= 20 {
            ZodiacSign::Gemini
        } else {
            ZodiacSign::Cancer
        }),
        7 => Some(if day <= 22 {
            ZodiacSign::Cancer
        } else {
            ZodiacSign::Leo
        }),
        8 => Some(if day <= 22 {
            ZodiacSign::Leo
        } else {
            ZodiacSign::Virgo
        }),
        9 => Some(if day <= 22 {
            ZodiacSign::Virgo
        } else {
            ZodiacSign::Libra
        }),
        10 => Some(if day <= 22 {
            ZodiacSign::Libra
        } else {
            ZodiacSign::Scorpio
        }),
        11 => Some(if day <= 21 {
            ZodiacSign::Scorpio
        } else {
            ZodiacSign::Sagittarius
        }),
        12 => Some(if day <= 21 {
            ZodiacSign::Sagittarius
        } else {
            ZodiacSign::Capricorn
        }),
        _ => None,
    }
}

/// Derive the zodiac sign from a birthday string.
///
/// The string must start with `YYYY-MM-DD`; anything else produces no sign.
/// Month and day are taken from the capture groups with a total integer
/// coercion (a failed parse counts as 0 and falls out of every range).
#[must_use]
pub fn sign_for_birthday(birthday: &str) -> Option<ZodiacSign> {
    let caps = BIRTHDAY_PATTERN.captures(birthday)?;
    let month = caps[1].parse::<u32>().unwrap_or(0);
    let day = caps[2].parse::<u32>().unwrap_or(0);
    sign_for(day, month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_birthdays() {
        assert_eq!(sign_for_birthday("1984-02-19"), Some(ZodiacSign::Pisces));
        assert_eq!(sign_for_birthday("2000-01-01"), Some(ZodiacSign::Capricorn));
        assert_eq!(sign_for_birthday("2000-03-21"), Some(ZodiacSign::Aries));
    }

    #[test]
    fn test_sign_boundaries() {
        assert_eq!(sign_for(19, 1), Some(ZodiacSign::Capricorn));
        assert_eq!(sign_for(20, 1), Some(ZodiacSign::Aquarius));
        assert_eq!(sign_for(18, 2), Some(ZodiacSign::Aquarius));
        assert_eq!(sign_for(19, 2), Some(ZodiacSign::Pisces));
        assert_eq!(sign_for(20, 3), Some(ZodiacSign::Pisces));
        assert_eq!(sign_for(21, 3), Some(ZodiacSign::Aries));
        assert_eq!(sign_for(19, 4), Some(ZodiacSign::Aries));
        assert_eq!(sign_for(20, 4), Some(ZodiacSign::Taurus));
        assert_eq!(sign_for(20, 5), Some(ZodiacSign::Taurus));
        assert_eq!(sign_for(21, 5), Some(ZodiacSign::Gemini));
        assert_eq!(sign_for(20, 6), Some(ZodiacSign::Gemini));
        assert_eq!(sign_for(21, 6), Some(ZodiacSign::Cancer));
        assert_eq!(sign_for(22, 7), Some(ZodiacSign::Cancer));
        assert_eq!(sign_for(23, 7), Some(ZodiacSign::Leo));
        assert_eq!(sign_for(22, 8), Some(ZodiacSign::Leo));
        assert_eq!(sign_for(23, 8), Some(ZodiacSign::Virgo));
        assert_eq!(sign_for(22, 9), Some(ZodiacSign::Virgo));
        assert_eq!(sign_for(23, 9), Some(ZodiacSign::Libra));
        assert_eq!(sign_for(22, 10), Some(ZodiacSign::Libra));
        assert_eq!(sign_for(23, 10), Some(ZodiacSign::Scorpio));
        assert_eq!(sign_for(21, 11), Some(ZodiacSign::Scorpio));
        assert_eq!(sign_for(22, 11), Some(ZodiacSign::Sagittarius));
        assert_eq!(sign_for(21, 12), Some(ZodiacSign::Sagittarius));
        assert_eq!(sign_for(22, 12), Some(ZodiacSign::Capricorn));
    }

    #[test]
    fn test_all_valid_dates_map_to_a_sign() {
        for month in 1..=12 {
            for day in 1..=31 {
                assert!(sign_for(day, month).is_some(), "no sign for {month}-{day}");
            }
        }
    }

    #[test]
    fn test_out_of_range_month() {
        assert_eq!(sign_for(15, 0), None);
        assert_eq!(sign_for(15, 13), None);
    }

    #[test]
    fn test_non_matching_birthday_strings() {
        assert_eq!(sign_for_birthday(""), None);
        assert_eq!(sign_for_birthday("Feb 19, 1984"), None);
        assert_eq!(sign_for_birthday("84-02-19"), None);
        assert_eq!(sign_for_birthday("1984/02/19"), None);
    }

    #[test]
    fn test_prefix_match_is_enough() {
        // Only the YYYY-MM-DD prefix is consulted, trailing text is ignored
        assert_eq!(
            sign_for_birthday("1984-02-19T00:00:00Z"),
            Some(ZodiacSign::Pisces)
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ZodiacSign::Sagittarius.to_string(), "Sagittarius");
        assert_eq!(ZodiacSign::Pisces.as_str(), "Pisces");
    }
}
