//! 干支（六十甲子）
//!
//! 日干支以儒略日數直接求得：天干序號為 `(jdn + 9) mod 10`，地支序號為
//! `(jdn + 1) mod 12`，兩者合為六十甲子中的一項。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::date::Date;
use crate::error::Error;

/// 十天干，甲至癸。
pub const STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
/// 十二地支，子至亥。
pub const BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const STEM_PINYIN: [&str; 10] = [
    "Jiǎ", "Yǐ", "Bǐng", "Dīng", "Wù", "Jǐ", "Gēng", "Xīn", "Rén", "Guǐ",
];
const BRANCH_PINYIN: [&str; 12] = [
    "Zǐ", "Chǒu", "Yín", "Mǎo", "Chén", "Sì", "Wǔ", "Wèi", "Shēn", "Yǒu", "Xū", "Hài",
];
const STEM_ELEMENTS: [&str; 5] = ["Wood", "Fire", "Earth", "Metal", "Water"];
const BRANCH_ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

/// 子時歸屬：決定夜間 23 時以後屬當日還是次日。
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayBoundary {
    /// 民用日界，以午夜換日。
    Midnight,
    /// 傳統日界，23 時起（子時）即屬次日。
    #[default]
    ZiHour,
}

impl DayBoundary {
    /// 依此日界，將某日某時歸入的日期。
    ///
    /// 僅 23 時（含）以後會移至次日；0 時本已在次日，不另調整。
    pub fn resolve(self, date: Date, hour: Option<u32>) -> Date {
        match (self, hour) {
            (DayBoundary::ZiHour, Some(h)) if h >= 23 => date + 1,
            _ => date,
        }
    }
}

/// 六十甲子之一，以序號 `0..=59`（甲子為 0，癸亥為 59）表示。
///
/// 天干序號為 `index % 10`，地支序號為 `index % 12`，故十干十二支只有 60
/// 種組合會出現。
///
/// # 用例
///
/// ```
/// use tongshu::{Date, StemBranch};
///
/// let sb = StemBranch::for_date(Date::from_gregorian(2000, 1, 1));
/// assert_eq!("戊午", sb.name());
/// assert_eq!(54, sb.index());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct StemBranch(u8);

impl StemBranch {
    /// 以序號取得干支，序號須在 `0..=59`，否則回報 [`Error::IndexOutOfRange`]。
    ///
    /// # 用例
    ///
    /// ```
    /// use tongshu::StemBranch;
    ///
    /// assert_eq!("庚子", StemBranch::from_index(36).unwrap().name());
    /// assert!(StemBranch::from_index(60).is_err());
    /// assert!(StemBranch::from_index(-1).is_err());
    /// ```
    pub fn from_index(index: i64) -> Result<Self, Error> {
        if (0..60).contains(&index) {
            Ok(Self(index as u8))
        } else {
            Err(Error::IndexOutOfRange { index })
        }
    }

    /// 以天干、地支序號合成干支，兩者奇偶須相同。
    fn from_parts(stem: u32, branch: u32) -> Self {
        debug_assert_eq!(stem % 2, branch % 2);
        // stem ≡ branch (mod 2), so 5·branch ≡ 5·stem (mod 10) and
        // 6·stem ≡ 6·branch (mod 12): the result is ≡ stem (mod 10), ≡ branch (mod 12)
        Self((6 * stem as i32 - 5 * branch as i32).rem_euclid(60) as u8)
    }

    /// 儒略日數對應的日干支。
    pub fn for_jdn(jdn: i64) -> Self {
        let stem = (jdn + 9).rem_euclid(10) as u32;
        let branch = (jdn + 1).rem_euclid(12) as u32;
        Self::from_parts(stem, branch)
    }

    /// 給定日期（以午夜換日）的日干支。
    pub fn for_date(date: Date) -> Self {
        Self::for_jdn(date.jdn())
    }

    /// 給定日期與時辰的日干支。`hour` 為 `0..=23` 的鐘點，`None` 表示不計時辰。
    ///
    /// # 用例
    ///
    /// ```
    /// use tongshu::{Date, DayBoundary, StemBranch};
    ///
    /// let date = Date::from_gregorian(2000, 1, 1);
    /// let late = StemBranch::for_day(date, Some(23), DayBoundary::ZiHour);
    /// assert_eq!("己未", late.name());
    /// let civil = StemBranch::for_day(date, Some(23), DayBoundary::Midnight);
    /// assert_eq!("戊午", civil.name());
    /// ```
    pub fn for_day(date: Date, hour: Option<u32>, boundary: DayBoundary) -> Self {
        Self::for_date(boundary.resolve(date, hour))
    }

    /// 公元年（以正月為首的農曆年）的年干支。
    ///
    /// # 用例
    ///
    /// ```
    /// use tongshu::StemBranch;
    ///
    /// assert_eq!("庚子", StemBranch::for_year(1900).name());
    /// assert_eq!("甲辰", StemBranch::for_year(2024).name());
    /// ```
    pub fn for_year(year: i32) -> Self {
        Self((i64::from(year) - 4).rem_euclid(60) as u8)
    }

    /// 序號，甲子為 0。
    pub fn index(&self) -> u32 {
        self.0 as u32
    }
    /// 天干序號，甲為 0。
    pub fn stem(&self) -> u32 {
        self.index() % 10
    }
    /// 地支序號，子為 0。
    pub fn branch(&self) -> u32 {
        self.index() % 12
    }
    /// 次一干支，癸亥之後為甲子。
    pub fn succ(&self) -> Self {
        Self((self.0 + 1) % 60)
    }

    /// 干支的文本形式。
    pub fn name(&self) -> String {
        STEMS[self.stem() as usize].to_owned() + BRANCHES[self.branch() as usize]
    }
    /// 漢語拼音，如 `Jiǎ Zǐ`。
    pub fn pinyin(&self) -> String {
        format!(
            "{} {}",
            STEM_PINYIN[self.stem() as usize],
            BRANCH_PINYIN[self.branch() as usize]
        )
    }
    /// 英文五行與生肖，如 `Wood Rat`。
    pub fn english(&self) -> String {
        format!(
            "{} {}",
            STEM_ELEMENTS[self.stem() as usize / 2],
            BRANCH_ANIMALS[self.branch() as usize]
        )
    }

    /// 依序列出全部六十甲子。
    pub fn all() -> impl Iterator<Item = Self> {
        (0..60).map(Self)
    }
}

impl fmt::Display for StemBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(STEMS[self.stem() as usize])?;
        f.write_str(BRANCHES[self.branch() as usize])
    }
}

impl FromStr for StemBranch {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidStemBranch(s.to_owned());
        let mut chars = s.chars().map(|c| c.to_string());
        let (Some(stem), Some(branch), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let stem = STEMS.iter().position(|&x| x == stem).ok_or_else(invalid)?;
        let branch = BRANCHES.iter().position(|&x| x == branch).ok_or_else(invalid)?;
        if stem % 2 != branch % 2 {
            return Err(invalid());
        }
        Ok(Self::from_parts(stem as u32, branch as u32))
    }
}

impl Serialize for StemBranch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}
