//! 農曆（查表法）
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 以 [`table`] 中 1900 至 2100 年的月份大小表推算：公曆 1900 年 1 月 31 日為農曆
//! 1900 年正月初一，由此逐年、逐月累加日數即得任一日期的農曆年月日，反之亦然。
//!
//! 資料表範圍外的年份不報錯，改用固定 354 日、無閏月的近似年（見
//! [`YearInfo::APPROXIMATE`]），結果精度隨之下降。近似年等長，故範圍外的年份一步算出，
//! 不逐年累加。

use std::fmt as std_fmt;
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::{debug, trace};

use crate::date::{self, Date};
use crate::error::Error;
use crate::sexagenary::StemBranch;

pub mod fmt;
pub mod table;

pub use table::YearInfo;

/// 資料表起點：公曆 1900 年 1 月 31 日，即農曆 1900 年正月初一。
pub const EPOCH: Date = Date::from_jdn(2415051);

/// 近似年的日數。
const APPROXIMATE_DAYS: i64 = 354;

/// 生肖，以鼠為首。
pub const ZODIAC: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龍", "蛇", "馬", "羊", "猴", "雞", "狗", "豬",
];

/// 月名，`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名的文本形式，十一、十二月稱「冬月」「臘月」。
    pub fn name(&self) -> Result<String, Error> {
        fmt::month(*self)
    }
    /// 在一年中的先後次序，閏月排在同序號平月之後。
    fn order_key(&self) -> (u32, bool) {
        (self.num(), self.is_leap())
    }
}

/// 月首信息
#[derive(Debug, Copy, Clone)]
pub struct NewMoon {
    /// 月名
    pub month: Month,
    /// 月首所在日期
    pub date: Date,
}

/// 農曆一年，自正月初一至次年正月初一前一日。
///
/// # 用例
///
/// ```
/// use tongshu::Date;
/// use tongshu::lunar::{LunarYear, Month::*};
///
/// let year = LunarYear::new(2017);
/// assert_eq!(Some(6), year.leap_month());
/// assert_eq!(384, year.days());
/// assert_eq!(Some(Date::from_gregorian(2017, 7, 23)), year.month_start(Leap(6)));
/// ```
#[derive(Debug, Clone)]
pub struct LunarYear {
    /// 農曆年序號，與其正月初一所在公元年相同
    pub year: i32,
    /// 該年的月份大小資料
    pub info: &'static YearInfo,
    /// 全部月首，包括次年正月以標記本年最末日
    pub months: Vec<NewMoon>,
}

impl LunarYear {
    /// 取得農曆 `year` 年。
    ///
    /// 所得日期超出 [`Date`] 範圍時飽和於 [`Date::MIN`] 或 [`Date::MAX`]。
    pub fn new(year: i32) -> Self {
        let start = if year < table::FIRST_YEAR {
            let back = i64::from(table::FIRST_YEAR) - i64::from(year);
            EPOCH + -(APPROXIMATE_DAYS * back)
        } else if year > table::LAST_YEAR {
            let ahead = i64::from(year) - i64::from(table::LAST_YEAR) - 1;
            table_end() + APPROXIMATE_DAYS * ahead
        } else {
            EPOCH + (table::FIRST_YEAR..year).map(year_len).sum::<i64>()
        };
        Self::with_start(year, start)
    }

    /// 依特定日期取得其所在農曆年。
    ///
    /// 資料表內自 1900 年正月初一起逐年扣除全年日數，直至餘數不足一年；表外的日期則以近似年
    /// 日數整除，一步定出年份。
    ///
    /// # 用例
    ///
    /// ```
    /// use tongshu::Date;
    /// use tongshu::lunar::LunarYear;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1);
    /// assert_eq!(1999, LunarYear::from_date(date).year);
    /// ```
    pub fn from_date(date: Date) -> Self {
        let end = table_end();
        let (year, start) = if date < EPOCH {
            let back = (EPOCH - date + APPROXIMATE_DAYS - 1) / APPROXIMATE_DAYS;
            let year = i64::from(table::FIRST_YEAR) - back;
            (year, EPOCH + -(APPROXIMATE_DAYS * back))
        } else if date >= end {
            let ahead = (date - end) / APPROXIMATE_DAYS;
            let year = i64::from(table::LAST_YEAR) + 1 + ahead;
            (year, end + APPROXIMATE_DAYS * ahead)
        } else {
            let mut year = table::FIRST_YEAR;
            let mut start = EPOCH;
            while start + year_len(year) <= date {
                start = start + year_len(year);
                year += 1;
            }
            (i64::from(year), start)
        };
        trace!(year, offset = date - start, "located lunar year");
        // Date 限於 date::MIN_YEAR..=date::MAX_YEAR，農曆年約為其 1.03 倍，仍在 i32 內
        Self::with_start(year as i32, start)
    }

    fn with_start(year: i32, start: Date) -> Self {
        let info = match YearInfo::get(year) {
            Some(info) => info,
            None => {
                debug!(year, "year outside the lunar table, using the approximate year model");
                &YearInfo::APPROXIMATE
            }
        };
        let mut months = Vec::with_capacity(14);
        let mut date = start;
        for (month, len) in month_slots(info) {
            months.push(NewMoon { month, date });
            date = date + i64::from(len);
        }
        months.push(NewMoon {
            month: Month::Common(1),
            date,
        });
        LunarYear { year, info, months }
    }

    /// 正月初一所在日期。
    pub fn start(&self) -> Date {
        self.months[0].date
    }
    /// 次年正月初一所在日期，即本年最末日的次日。
    pub fn end(&self) -> Date {
        self.months[self.months.len() - 1].date
    }
    /// 全年日數。
    pub fn days(&self) -> i64 {
        self.end() - self.start()
    }
    /// 是否有閏月，若有則返回其月序號。
    pub fn leap_month(&self) -> Option<u32> {
        Some(self.info.leap_month).filter(|&m| m != 0)
    }
    /// 是否屬資料表內的年份。範圍外年份以近似年推算。
    pub fn is_encoded(&self) -> bool {
        YearInfo::get(self.year).is_some()
    }

    /// 依序列出本年各月（不含次年正月）的月名與日數。
    pub fn month_lengths(&self) -> impl Iterator<Item = (Month, u32)> + '_ {
        self.months
            .windows(2)
            .map(|w| (w[0].month, (w[1].date - w[0].date) as u32))
    }

    /// 某月的月首日期，該年無此月則返回 `None`。
    pub fn month_start(&self, month: Month) -> Option<Date> {
        let last = self.months.len() - 1;
        self.months[..last]
            .iter()
            .find(|m| m.month == month)
            .map(|m| m.date)
    }

    /// 某月的日數，該年無此月則返回 `None`。
    pub fn month_len(&self, month: Month) -> Option<u32> {
        self.month_lengths()
            .find(|&(m, _)| m == month)
            .map(|(_, len)| len)
    }

    /// 取得給定日期在該年的農曆日期。
    ///
    /// 若所給日期不在該年，則回報 `Err` 並指出該日期在該年之前還是之後。
    ///
    /// # 用例
    ///
    /// ```
    /// use tongshu::Date;
    /// use tongshu::lunar::{LunarYear, Month::*, OtherYear};
    ///
    /// let year = LunarYear::new(2017);
    /// let date = year.ymd_for(Date::from_gregorian(2017, 7, 23)).unwrap();
    /// assert_eq!((2017, Leap(6), 1), (date.year(), date.month(), date.day()));
    /// assert_eq!(Err(OtherYear::Before), year.ymd_for(Date::from_gregorian(2017, 1, 27)));
    /// ```
    pub fn ymd_for(&self, date: Date) -> Result<LunarDate, OtherYear> {
        if date < self.start() {
            return Err(OtherYear::Before);
        } else if date >= self.end() {
            return Err(OtherYear::After);
        }
        Ok(self.locate(date))
    }

    /// `date` 須在本年範圍內。
    fn locate(&self, date: Date) -> LunarDate {
        let m = self
            .months
            .iter()
            .take_while(|m| m.date <= date)
            .last()
            .unwrap_or(&self.months[0]);
        LunarDate {
            year: self.year,
            month: m.month,
            day: (date - m.date) as u32 + 1,
        }
    }

    /// 本年某月某日的日期，按月序累加，不檢查日數是否超出該月。
    ///
    /// 若要求閏月而該月無閏，則按平月計。月序超出 `1..=12` 時照樣累加：0 月即正月之前，
    /// 13 月即次年正月。
    pub fn date_of(&self, month: u32, day: u32, is_leap: bool) -> Date {
        let leap = is_leap && self.info.leap_month == month;
        let target = (month, leap);
        let before: u32 = self
            .month_lengths()
            .filter(|(m, _)| m.order_key() < target)
            .map(|(_, len)| len)
            .sum();
        self.start() + (i64::from(before) + i64::from(day) - 1)
    }
}

/// 表示給定日期不在該年，並指出其在前還是在後。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OtherYear {
    Before,
    After,
}

fn year_len(year: i32) -> i64 {
    YearInfo::get_or_approximate(year).year_len().into()
}

/// 資料表最末年的次年正月初一。
fn table_end() -> Date {
    EPOCH + (table::FIRST_YEAR..=table::LAST_YEAR).map(year_len).sum::<i64>()
}

fn month_slots(info: &'static YearInfo) -> impl Iterator<Item = (Month, u32)> {
    (1..=12).flat_map(move |m| {
        let common = (Month::Common(m), info.month_len(m));
        let leap = (info.leap_month == m).then(|| (Month::Leap(m), info.leap_len()));
        std::iter::once(common).chain(leap)
    })
}

/// 農曆日期。
///
/// 日數不超過所在月的日數；僅在該年閏月上才可能為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LunarDate {
    year: i32,
    month: Month,
    day: u32,
}

impl LunarDate {
    /// 以農曆年月日建立日期，並檢查該月存在、日數不超過該月日數。
    ///
    /// # 用例
    ///
    /// ```
    /// use tongshu::LunarDate;
    /// use tongshu::lunar::Month::*;
    ///
    /// assert!(LunarDate::new(2017, Leap(6), 30).is_ok());
    /// assert!(LunarDate::new(2018, Leap(6), 1).is_err());
    /// assert!(LunarDate::new(2024, Common(1), 30).is_err()); // 小月
    /// ```
    pub fn new(year: i32, month: Month, day: u32) -> Result<Self, Error> {
        date::check_year(year)?;
        let num = month.num();
        if !(1..=12).contains(&num) {
            return Err(Error::MonthOutOfRange { month: num });
        }
        let ly = LunarYear::new(year);
        let len = ly.month_len(month).ok_or(Error::NoLeapMonth { year, month: num })?;
        if day == 0 || day > len {
            return Err(Error::DayOutOfRange { day, max: len });
        }
        Ok(LunarDate { year, month, day })
    }

    /// 公曆日期轉農曆。
    ///
    /// # 用例
    ///
    /// ```
    /// use tongshu::{Date, LunarDate};
    /// use tongshu::lunar::Month::*;
    ///
    /// let date = LunarDate::from_date(Date::from_gregorian(1900, 1, 31));
    /// assert_eq!((1900, Common(1), 1), (date.year(), date.month(), date.day()));
    /// ```
    pub fn from_date(date: Date) -> Self {
        LunarYear::from_date(date).locate(date)
    }

    /// 以公曆年月日轉農曆，見 [`LunarDate::from_date`]。
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Self {
        Self::from_date(Date::from_gregorian(year, month, day))
    }

    /// 農曆轉公曆日期。
    pub fn to_date(&self) -> Date {
        LunarYear::new(self.year).date_of(self.month.num(), self.day, self.month.is_leap())
    }

    /// 農曆年
    pub fn year(&self) -> i32 {
        self.year
    }
    /// 月名
    pub fn month(&self) -> Month {
        self.month
    }
    /// 日，自 1 起
    pub fn day(&self) -> u32 {
        self.day
    }
    /// 是否為閏月
    pub fn is_leap(&self) -> bool {
        self.month.is_leap()
    }

    /// 月日索引，不分平閏，用以查詢每年固定的農曆節日。
    pub fn month_day(&self) -> MonthDay {
        MonthDay {
            month: self.month.num(),
            day: self.day,
        }
    }
    /// 年干支
    pub fn year_stem_branch(&self) -> StemBranch {
        StemBranch::for_year(self.year)
    }
    /// 生肖
    pub fn zodiac(&self) -> &'static str {
        zodiac(self.year)
    }
}

impl std_fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        match fmt::format_lunar_date(self) {
            Ok(text) => f.write_str(&text),
            // 名稱表以外的月日，以數字輸出
            Err(_) => {
                let leap = if self.is_leap() { "閏" } else { "" };
                write!(f, "{leap}{}月{}日", self.month.num(), self.day)
            }
        }
    }
}

impl Serialize for LunarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("LunarDate", 5)?;
        s.serialize_field("year", &self.year)?;
        s.serialize_field("month", &self.month.num())?;
        s.serialize_field("day", &self.day)?;
        s.serialize_field("is_leap", &self.is_leap())?;
        s.serialize_field("text", &fmt::format_lunar_date(self).ok())?;
        s.end()
    }
}

/// 公曆年月日轉農曆。
pub fn solar_to_lunar(year: i32, month: u32, day: u32) -> LunarDate {
    LunarDate::from_gregorian(year, month, day)
}

/// 農曆年月日轉公曆。
///
/// 不檢查輸入：要求閏月而該年該月無閏時按平月計，日數超出該月則順延。
///
/// # 用例
///
/// ```
/// use tongshu::lunar::lunar_to_solar;
///
/// assert_eq!((2024, 2, 10), lunar_to_solar(2024, 1, 1, false).gregorian());
/// assert_eq!((2017, 7, 23), lunar_to_solar(2017, 6, 1, true).gregorian());
/// assert_eq!((2017, 6, 24), lunar_to_solar(2017, 6, 1, false).gregorian());
/// ```
pub fn lunar_to_solar(year: i32, month: u32, day: u32, is_leap: bool) -> Date {
    LunarYear::new(year).date_of(month, day, is_leap)
}

/// 農曆年的生肖。
///
/// # 用例
///
/// ```
/// use tongshu::lunar::zodiac;
///
/// assert_eq!("鼠", zodiac(1900));
/// assert_eq!("龍", zodiac(2024));
/// ```
pub fn zodiac(year: i32) -> &'static str {
    ZODIAC[(i64::from(year) - 1900).rem_euclid(12) as usize]
}

/// 農曆年的干支，如 2024 年為「甲辰」。
pub fn ganzhi_year(year: i32) -> StemBranch {
    StemBranch::for_year(year)
}

/// 該日是否為農曆某月某日（不分平閏）。
pub fn is_lunar_date(date: Date, month: u32, day: u32) -> bool {
    let lunar = LunarDate::from_date(date);
    lunar.month.num() == month && lunar.day == day
}

/// 農曆 `year` 年某月某日（平月）節日所在的公曆日期。
pub fn festival_date(year: i32, month: u32, day: u32) -> Date {
    lunar_to_solar(year, month, day, false)
}

/// 農曆月日，以 `MM-DD` 形式作為每年固定節日、誕辰的索引。
///
/// # 用例
///
/// ```
/// use tongshu::lunar::MonthDay;
///
/// let key: MonthDay = "03-23".parse().unwrap();
/// assert_eq!((3, 23), (key.month, key.day));
/// assert_eq!("03-23", key.to_string());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct MonthDay {
    /// 月序號 `1..=12`
    pub month: u32,
    /// 日 `1..=30`
    pub day: u32,
}

impl MonthDay {
    /// 以月日建立索引，月須在 `1..=12`，日須在 `1..=30`。
    pub fn new(month: u32, day: u32) -> Result<Self, Error> {
        if !(1..=12).contains(&month) {
            return Err(Error::MonthOutOfRange { month });
        }
        if !(1..=30).contains(&day) {
            return Err(Error::DayOutOfRange { day, max: 30 });
        }
        Ok(MonthDay { month, day })
    }
}

impl std_fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidMonthDay(s.to_owned());
        let (m, d) = s.split_once('-').ok_or_else(invalid)?;
        if m.len() != 2 || d.len() != 2 {
            return Err(invalid());
        }
        let month = m.parse().map_err(|_| invalid())?;
        let day = d.parse().map_err(|_| invalid())?;
        MonthDay::new(month, day).map_err(|_| invalid())
    }
}

impl Serialize for MonthDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch() {
        let date = LunarDate::from_gregorian(1900, 1, 31);
        assert_eq!((1900, Month::Common(1), 1), (date.year, date.month, date.day));
        assert_eq!(EPOCH, LunarYear::new(1900).start());
    }

    #[test]
    fn from_date() {
        let dataset = [
            (2016, (2017, 1, 27)),
            (2017, (2017, 1, 28)),
            (2017, (2018, 2, 15)),
            (2018, (2018, 2, 16)),
            (1899, (1900, 1, 30)),
        ];
        for (std, (y, m, d)) in dataset {
            assert_eq!(
                std,
                LunarYear::from_date(Date::from_gregorian(y, m, d)).year,
                "{y:04}-{m:02}-{d:02}"
            );
        }
    }

    #[test]
    fn leap_months() {
        let stds = [
            (1, "2017-01-28"),
            (2, "2017-02-26"),
            (3, "2017-03-28"),
            (4, "2017-04-26"),
            (5, "2017-05-26"),
            (6, "2017-06-24"),
            (-6, "2017-07-23"),
            (7, "2017-08-22"),
            (8, "2017-09-20"),
            (9, "2017-10-20"),
            (10, "2017-11-18"),
            (11, "2017-12-18"),
        ];
        let year = LunarYear::new(2017);
        for (std, month) in stds.iter().zip(&year.months) {
            let std_month = if std.0 > 0 {
                Month::Common(std.0 as u32)
            } else {
                Month::Leap(-std.0 as u32)
            };
            assert_eq!(
                (std_month, std.1.into()),
                (month.month, month.date.iso_gregorian())
            );
        }
        // 十二月與次年正月
        assert_eq!(stds.len() + 2, year.months.len());
    }

    #[test]
    fn dates() {
        use Month::*;
        use OtherYear::*;
        let data = [
            ((2017, 1, 28), Ok((2017, Common(1), 1))),
            ((2017, 7, 22), Ok((2017, Common(6), 29))),
            ((2017, 7, 23), Ok((2017, Leap(6), 1))),
            ((2017, 8, 21), Ok((2017, Leap(6), 30))),
            ((2017, 8, 22), Ok((2017, Common(7), 1))),
            ((2017, 1, 27), Err(Before)),
            ((2018, 2, 16), Err(After)),
        ];
        let year = LunarYear::new(2017);
        for ((y, m, d), std) in data {
            let got = year
                .ymd_for(Date::from_gregorian(y, m, d))
                .map(|l| (l.year, l.month, l.day));
            assert_eq!(std, got, "{y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn to_solar_counts_earlier_leap_month() {
        // 閏六月在八月之前，須計入
        assert_eq!((2017, 9, 20), lunar_to_solar(2017, 8, 1, false).gregorian());
        // 要求閏月而該月無閏，按平月計
        assert_eq!(
            lunar_to_solar(2024, 2, 1, false),
            lunar_to_solar(2024, 2, 1, true)
        );
        // 13 月即次年正月
        assert_eq!(
            lunar_to_solar(2024, 1, 1, false) + 354,
            lunar_to_solar(2024, 13, 1, false)
        );
    }

    #[test]
    fn checked_construction() {
        use Month::*;
        assert_eq!(
            Err(Error::NoLeapMonth {
                year: 2024,
                month: 6
            }),
            LunarDate::new(2024, Leap(6), 1)
        );
        assert_eq!(
            Err(Error::MonthOutOfRange { month: 13 }),
            LunarDate::new(2024, Common(13), 1)
        );
        assert_eq!(
            Err(Error::DayOutOfRange { day: 0, max: 30 }),
            LunarDate::new(2017, Leap(6), 0)
        );
        let date = LunarDate::new(2017, Leap(6), 1).unwrap();
        assert_eq!(Date::from_gregorian(2017, 7, 23), date.to_date());
    }

    #[test]
    fn out_of_table_years_degrade_without_error() {
        let year = LunarYear::new(2101);
        assert!(!year.is_encoded());
        assert_eq!(354, year.days());
        assert_eq!(None, year.leap_month());
        let year = LunarYear::new(1899);
        assert_eq!(EPOCH, year.end());
        assert_eq!(354, year.days());

        let date = LunarDate::from_gregorian(1899, 12, 31);
        assert_eq!((1899, Month::Common(11), 29), (date.year, date.month, date.day));
        let date = LunarDate::from_gregorian(2101, 6, 1);
        assert_eq!((2101, Month::Common(5), 6), (date.year, date.month, date.day));
    }

    #[test]
    fn far_years_are_computed_in_one_step() {
        assert_eq!(APPROXIMATE_DAYS, i64::from(YearInfo::APPROXIMATE.year_len()));
        let year = LunarYear::new(1_000_000);
        assert_eq!(table_end() + 354 * (1_000_000 - 2101), year.start());
        assert_eq!(1_000_000, LunarYear::from_date(year.start()).year);
        assert_eq!(999_999, LunarYear::from_date(year.start() + -1).year);
        let date = year.start() + 100;
        assert_eq!(date, LunarDate::from_date(date).to_date());

        let year = LunarYear::new(-1_000_000);
        assert_eq!(EPOCH + -(354 * (1900 + 1_000_000)), year.start());
        assert_eq!(-1_000_000, LunarYear::from_date(year.start()).year);
        let date = year.end() + -1;
        assert_eq!(date, LunarDate::from_date(date).to_date());
    }

    #[test]
    fn years_beyond_the_date_range_saturate() {
        assert_eq!(Date::MAX, lunar_to_solar(2_000_000_000, 1, 1, false));
        assert_eq!(Date::MAX, lunar_to_solar(i32::MAX, 12, 30, false));
        assert_eq!(Date::MIN, lunar_to_solar(i32::MIN, 1, 1, false));
        assert_eq!(
            Err(Error::YearOutOfRange {
                year: 2_000_000_000
            }),
            LunarDate::new(2_000_000_000, Month::Common(1), 1)
        );
        assert!(LunarDate::from_date(Date::MAX).year() > date::MAX_YEAR);
        assert!(LunarDate::from_date(Date::MIN).year() < date::MIN_YEAR);
        assert_eq!("鼠", zodiac(i32::MIN));
    }

    #[test]
    fn display() {
        assert_eq!("冬月廿五", LunarDate::from_gregorian(2000, 1, 1).to_string());
        assert_eq!("閏二月初一", LunarDate::from_gregorian(2023, 3, 22).to_string());
        let unnamed = LunarDate {
            year: 2024,
            month: Month::Leap(13),
            day: 31,
        };
        assert_eq!("閏13月31日", unnamed.to_string());
    }

    #[test]
    fn year_names() {
        assert_eq!("庚子", ganzhi_year(1900).name());
        assert_eq!("甲辰", ganzhi_year(2024).name());
        assert_eq!("豬", zodiac(1899));
        assert_eq!("蛇", zodiac(2025));
    }

    #[test]
    fn month_day_keys() {
        let date = LunarDate::from_gregorian(2024, 2, 10);
        assert_eq!("01-01", date.month_day().to_string());
        for bad in ["1-1", "13-01", "01-31", "00-10", "0101", "ab-cd"] {
            assert_eq!(
                Err(Error::InvalidMonthDay(bad.into())),
                bad.parse::<MonthDay>()
            );
        }
        assert!(is_lunar_date(Date::from_gregorian(2024, 2, 10), 1, 1));
        assert_eq!((2025, 1, 29), festival_date(2025, 1, 1).gregorian());
    }
}
