//! 格式化農曆日期相關功能

use super::{LunarDate, Month};
use crate::error::Error;

/// 漢數字，第 `1..=9` 項分別為「一」到「九」。為便於格式化日期，第 0 項為「十」。
pub const NUM_CHINESE: &[&str] = &["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 取得月名（含「月」字）。十一、十二月稱「冬月」「臘月」，閏月前加「閏」。
///
/// 若月序號不在 `1..=12` 間則回報 [`Error::MonthOutOfRange`]。
///
/// # 用例
///
/// ```
/// use tongshu::lunar::{self, Month::*};
///
/// assert_eq!("冬月", lunar::fmt::month(Common(11)).unwrap());
/// assert_eq!("閏正月", lunar::fmt::month(Leap(1)).unwrap());
/// assert!(lunar::fmt::month(Common(13)).is_err());
/// ```
pub fn month(m: Month) -> Result<String, Error> {
    let mut rt = String::new();
    if m.is_leap() {
        rt += "閏";
    }
    let num = m.num();
    rt += match num {
        1 => "正",
        2..=9 => NUM_CHINESE[num as usize],
        10 => "十",
        11 => "冬",
        12 => "臘",
        _ => return Err(Error::MonthOutOfRange { month: num }),
    };
    rt += "月";
    Ok(rt)
}

/// 取得日名，前十日為「初一」到「初十」，第 21 至 29 日為「廿一」到「廿九」。
///
/// 若日序號不在 `1..=30` 間則回報 [`Error::DayOutOfRange`]。
///
/// # 用例
///
/// ```
/// use tongshu::lunar;
///
/// assert_eq!("初十", lunar::fmt::day(10).unwrap());
/// assert_eq!("廿五", lunar::fmt::day(25).unwrap());
/// assert_eq!("三十", lunar::fmt::day(30).unwrap());
/// ```
pub fn day(d: u32) -> Result<String, Error> {
    let prefix = match d {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => return Err(Error::DayOutOfRange { day: d, max: 30 }),
    };
    Ok(prefix.to_owned() + NUM_CHINESE[(d % 10) as usize])
}

/// 農曆月日的文本形式，如「閏六月初一」。
///
/// # 用例
///
/// ```
/// use tongshu::{Date, LunarDate, lunar};
///
/// let date = LunarDate::from_date(Date::from_gregorian(2017, 7, 23));
/// assert_eq!("閏六月初一", lunar::fmt::format_lunar_date(&date).unwrap());
/// ```
pub fn format_lunar_date(date: &LunarDate) -> Result<String, Error> {
    Ok(month(date.month())? + &day(date.day())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month() {
        use Month::*;
        for (std, m) in [
            ("正月", Common(1)),
            ("二月", Common(2)),
            ("九月", Common(9)),
            ("十月", Common(10)),
            ("臘月", Common(12)),
            ("閏六月", Leap(6)),
        ] {
            assert_eq!(Ok(std.to_owned()), month(m));
        }
        assert_eq!(Err(Error::MonthOutOfRange { month: 0 }), month(Common(0)));
        assert_eq!(Err(Error::MonthOutOfRange { month: 13 }), month(Leap(13)));
    }

    #[test]
    fn test_day() {
        for (std, d) in [
            ("初一", 1),
            ("初十", 10),
            ("十一", 11),
            ("十九", 19),
            ("二十", 20),
            ("廿一", 21),
            ("三十", 30),
        ] {
            assert_eq!(Ok(std.to_owned()), day(d));
        }
        assert_eq!(Err(Error::DayOutOfRange { day: 0, max: 30 }), day(0));
        assert_eq!(Err(Error::DayOutOfRange { day: 31, max: 30 }), day(31));
    }
}
