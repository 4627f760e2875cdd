//! Calendar-independant date.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::Error;

/// Converts a proleptic Gregorian date into a Julian day number (JDN).
///
/// Integer arithmetic with floor division throughout, carried out in `i64` so
/// that every `i32` input has a result. Month and day are not validated:
/// out-of-range values just run through the arithmetic.
///
/// # Example
///
/// ```
/// use tongshu::date::to_jdn;
///
/// assert_eq!(2451545, to_jdn(2000, 1, 1));
/// assert_eq!(2415051, to_jdn(1900, 1, 31));
/// assert_eq!(784_354_017_000, to_jdn(i32::MAX, 1, 1));
/// ```
pub const fn to_jdn(year: i32, month: i32, day: i32) -> i64 {
    let (year, month, day) = (year as i64, month as i64, day as i64);
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Earliest Gregorian year a [`Date`] can hold.
pub const MIN_YEAR: i32 = -999_999_999;
/// Latest Gregorian year a [`Date`] can hold.
pub const MAX_YEAR: i32 = 999_999_999;

const MIN_JDN: i64 = to_jdn(MIN_YEAR, 1, 1);
const MAX_JDN: i64 = to_jdn(MAX_YEAR, 12, 31);

/// A calendar-independant date, stored as its Julian day number.
///
/// Dates saturate at [`Date::MIN`] and [`Date::MAX`] (the first day of
/// [`MIN_YEAR`] and the last day of [`MAX_YEAR`]), so date arithmetic never
/// overflows.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: i64,
}

impl Date {
    /// January 1st of [`MIN_YEAR`].
    pub const MIN: Date = Date { jdn: MIN_JDN };
    /// December 31st of [`MAX_YEAR`].
    pub const MAX: Date = Date { jdn: MAX_JDN };

    /// Creates a `Date` with a Julian day number (JDN), saturating at
    /// [`Date::MIN`] and [`Date::MAX`].
    pub const fn from_jdn(jdn: i64) -> Self {
        let jdn = if jdn < MIN_JDN {
            MIN_JDN
        } else if jdn > MAX_JDN {
            MAX_JDN
        } else {
            jdn
        };
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub const fn jdn(&self) -> i64 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc. Inputs are not validated, see [`to_jdn`]; years
    /// outside [`MIN_YEAR`]`..=`[`MAX_YEAR`] saturate.
    ///
    /// # Example
    ///
    /// ```
    /// use tongshu::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1);
    /// assert_eq!(2451545, date.jdn());
    /// ```
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Self {
        Self::from_jdn(to_jdn(year, month as i32, day as i32))
    }

    /// Parses an ISO 8601 calendar date (`YYYY-MM-DD`), rejecting dates that
    /// do not exist in the Gregorian calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use tongshu::Date;
    ///
    /// let date = Date::parse_iso("2024-02-10").unwrap();
    /// assert_eq!((2024, 2, 10), date.gregorian());
    /// assert!(Date::parse_iso("2023-02-29").is_err());
    /// ```
    pub fn parse_iso(s: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidDate(s.to_owned());
        let mut it = s.trim().splitn(3, '-');
        let mut next = || it.next().ok_or_else(invalid);
        let year: i32 = next()?.parse().map_err(|_| invalid())?;
        let month: u32 = next()?.parse().map_err(|_| invalid())?;
        let day: u32 = next()?.parse().map_err(|_| invalid())?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&year)
            || !(1..=12).contains(&month)
            || day == 0
            || day > days_in_month(year, month)
        {
            return Err(invalid());
        }
        Ok(Self::from_gregorian(year, month, day))
    }

    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use tongshu::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, u32, u32) {
        let jdn = self.jdn;
        let f = jdn + 1401 + (((4 * jdn + 274277).div_euclid(146097)) * 3).div_euclid(4) - 38;
        let e = 4 * f + 3;
        let g = e.rem_euclid(1461).div_euclid(4);
        let h = 5 * g + 2;
        let day = h.rem_euclid(153).div_euclid(5) + 1;
        let month = (h.div_euclid(153) + 2).rem_euclid(12) + 1;
        let year = e.div_euclid(1461) - 4716 + (12 + 2 - month).div_euclid(12);
        // jdn is clamped to MIN_JDN..=MAX_JDN, so the year fits
        (year as i32, month as u32, day as u32)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use tongshu::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1);
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use tongshu::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1);
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> u32 {
        self.jdn.rem_euclid(7) as u32 + 1
    }
    /// Returns the Chinese name of the weekday: 「一」 to 「六」 for Monday
    /// through Saturday, 「日」 for Sunday.
    pub fn weekday_name(&self) -> &'static str {
        const NAMES: &[&str] = &["一", "二", "三", "四", "五", "六", "日"];
        NAMES[self.day_of_week() as usize - 1]
    }
}

impl Add<i64> for Date {
    type Output = Date;
    fn add(self, rhs: i64) -> Self::Output {
        Date::from_jdn(self.jdn.saturating_add(rhs))
    }
}
impl Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn - rhs.jdn
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_gregorian())
    }
}

impl FromStr for Date {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_iso(s)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.iso_gregorian())
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// Fails with [`Error::YearOutOfRange`] outside [`MIN_YEAR`]`..=`[`MAX_YEAR`].
pub(crate) fn check_year(year: i32) -> Result<(), Error> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(Error::YearOutOfRange { year })
    }
}

/// Number of days in a Gregorian month, `0` if `month` is not in `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + YearType::from_gregorian(year).is_leap() as u32,
        _ => 0,
    }
}
