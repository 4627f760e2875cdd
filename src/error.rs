//! Error types for the tongshu crate.

/// Error type for all fallible operations in the tongshu crate.
///
/// The calendar conversions themselves are total; these variants cover the
/// lookups and formatters that index into fixed-size name tables, checked
/// construction of lunar dates, and parsing of the string forms.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Returned when a sexagenary cycle index is outside `0..=59`.
    #[error("sexagenary index out of range: {index} (must be 0..=59)")]
    IndexOutOfRange {
        /// The invalid index that was provided.
        index: i64,
    },

    /// Returned when a year is outside the range a `Date` can hold.
    #[error("year out of range: {year} (must be -999999999..=999999999)")]
    YearOutOfRange {
        /// The invalid year that was provided.
        year: i32,
    },

    /// Returned when a month number is outside `1..=12`.
    #[error("month out of range: {month} (must be 1..=12)")]
    MonthOutOfRange {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a lunar day exceeds the length of its month.
    #[error("day out of range: {day} (must be 1..={max})")]
    DayOutOfRange {
        /// The invalid day number that was provided.
        day: u32,
        /// The largest valid day in this context.
        max: u32,
    },

    /// Returned when a leap month is requested in a year that has no such
    /// leap month.
    #[error("lunar year {year} has no leap month {month}")]
    NoLeapMonth {
        /// The lunar year.
        year: i32,
        /// The requested leap month.
        month: u32,
    },

    /// Returned when a string is not one of the sixty stem-branch names.
    #[error("not a stem-branch name: {0:?}")]
    InvalidStemBranch(String),

    /// Returned when a string is not a lunar `MM-DD` key.
    #[error("not a lunar month-day key: {0:?} (expected MM-DD)")]
    InvalidMonthDay(String),

    /// Returned when a string is not a valid `YYYY-MM-DD` civil date.
    #[error("not a valid date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_index_out_of_range() {
        let err = Error::IndexOutOfRange { index: 60 };
        assert_eq!(
            err.to_string(),
            "sexagenary index out of range: 60 (must be 0..=59)"
        );
    }

    #[test]
    fn error_year_out_of_range() {
        let err = Error::YearOutOfRange { year: i32::MAX };
        assert_eq!(
            err.to_string(),
            "year out of range: 2147483647 (must be -999999999..=999999999)"
        );
    }

    #[test]
    fn error_day_out_of_range() {
        let err = Error::DayOutOfRange { day: 30, max: 29 };
        assert_eq!(err.to_string(), "day out of range: 30 (must be 1..=29)");
    }

    #[test]
    fn error_no_leap_month() {
        let err = Error::NoLeapMonth {
            year: 2024,
            month: 6,
        };
        assert_eq!(err.to_string(), "lunar year 2024 has no leap month 6");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<Error>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<Error>();
    }
}
