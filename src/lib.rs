//! 通書：日干支、農曆、拜拜吉凶日與神明聖誕。
//!
//! 公曆日期以儒略日數表示（[`Date`]），日干支直接由儒略日數求得，農曆則由
//! 1900 至 2100 年的逐年編碼表推算。表外年份改用固定的近似年長，換算仍然
//! 可逆，只是不再準確。
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use tongshu::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1);
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! 日干支與吉凶：
//!
//! ```
//! use tongshu::{Date, StemBranch, fortune};
//!
//! let sb = StemBranch::for_date(Date::from_gregorian(2024, 2, 10));
//! assert_eq!("甲辰", sb.name());
//! assert_eq!("不宜拜拜", fortune::status(sb).status.text());
//! ```
//!
//! 農曆：
//!
//! ```
//! use tongshu::{Date, lunar};
//! use tongshu::lunar::Month::*;
//!
//! let date = lunar::solar_to_lunar(2000, 1, 1);
//! assert_eq!((1999, Common(11), 25), (date.year(), date.month(), date.day()));
//! assert_eq!(Date::from_gregorian(2000, 1, 1), date.to_date());
//! ```

pub mod almanac;
pub mod date;
pub mod deity;
mod error;
pub mod fortune;
pub mod lunar;
pub mod sexagenary;

pub use almanac::{DayRecord, Statistics};
pub use date::{Date, YearType};
pub use deity::{Deity, DeityKind};
pub use error::Error;
pub use fortune::{Fortune, FortuneStatus};
pub use lunar::{LunarDate, MonthDay};
pub use sexagenary::{DayBoundary, StemBranch};
