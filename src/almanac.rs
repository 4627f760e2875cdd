//! 通書彙編：逐日記錄、月表、六十甲子表與自我校驗。

use serde::Serialize;
use tracing::info;

use crate::date::{self, Date, days_in_month};
use crate::error::Error;
use crate::fortune::{self, Fortune, FortuneStatus};
use crate::lunar::LunarDate;
use crate::sexagenary::{DayBoundary, StemBranch};

/// 一日的通書記錄。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    pub date: Date,
    /// 星期，「一」至「日」
    pub weekday: &'static str,
    pub lunar: LunarDate,
    pub stem_branch: StemBranch,
    pub status: FortuneStatus,
    pub status_text: &'static str,
    pub description: &'static str,
}

impl DayRecord {
    /// 某日某時的記錄。`hour` 只影響干支與吉凶；農曆仍依公曆日期。
    pub fn new(date: Date, hour: Option<u32>, boundary: DayBoundary) -> Self {
        let Fortune {
            stem_branch,
            status,
            description,
        } = Fortune::for_date(date, hour, boundary);
        DayRecord {
            date,
            weekday: date.weekday_name(),
            lunar: LunarDate::from_date(date),
            stem_branch,
            status,
            status_text: status.text(),
            description,
        }
    }
}

/// 公曆某年某月每日的記錄。
///
/// # 用例
///
/// ```
/// use tongshu::almanac;
///
/// let days = almanac::month_table(2024, 2).unwrap();
/// assert_eq!(29, days.len());
/// assert_eq!("甲辰", days[9].stem_branch.name());
/// assert!(almanac::month_table(2024, 13).is_err());
/// assert!(almanac::month_table(i32::MAX, 1).is_err());
/// ```
#[tracing::instrument]
pub fn month_table(year: i32, month: u32) -> Result<Vec<DayRecord>, Error> {
    date::check_year(year)?;
    let len = days_in_month(year, month);
    if len == 0 {
        return Err(Error::MonthOutOfRange { month });
    }
    let first = Date::from_gregorian(year, month, 1);
    let days: Vec<_> = (0..i64::from(len))
        .map(|i| DayRecord::new(first + i, None, DayBoundary::Midnight))
        .collect();
    info!(days = days.len(), "built month table");
    Ok(days)
}

/// 某一吉凶的計數與百分比（取一位小數）。
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Tally {
    pub count: u32,
    pub percentage: f64,
}

/// 吉凶統計
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total: u32,
    pub good: Tally,
    pub neutral: Tally,
    pub bad: Tally,
}

impl Statistics {
    pub fn from_statuses<I: IntoIterator<Item = FortuneStatus>>(statuses: I) -> Self {
        let (mut good, mut neutral, mut bad) = (0, 0, 0);
        for s in statuses {
            match s {
                FortuneStatus::Good => good += 1,
                FortuneStatus::Neutral => neutral += 1,
                FortuneStatus::Bad => bad += 1,
            }
        }
        let total = good + neutral + bad;
        let tally = |count: u32| Tally {
            count,
            percentage: if total == 0 {
                0.0
            } else {
                (count as f64 * 1000.0 / total as f64).round() / 10.0
            },
        };
        Statistics {
            total,
            good: tally(good),
            neutral: tally(neutral),
            bad: tally(bad),
        }
    }

    pub fn for_days(days: &[DayRecord]) -> Self {
        Self::from_statuses(days.iter().map(|d| d.status))
    }
}

/// 六十甲子表的一行。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleRow {
    pub index: u32,
    pub pinyin: String,
    pub english: String,
    pub status_text: &'static str,
    #[serde(flatten)]
    pub fortune: Fortune,
}

/// 六十甲子吉凶表，自甲子至癸亥。
pub fn cycle_table() -> Vec<CycleRow> {
    fortune::all()
        .map(|fortune| CycleRow {
            index: fortune.stem_branch.index(),
            pinyin: fortune.stem_branch.pinyin(),
            english: fortune.stem_branch.english(),
            status_text: fortune.status.text(),
            fortune,
        })
        .collect()
}

/// 一項校驗
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Check {
    pub date: Date,
    pub expected: String,
    pub calculated: String,
    pub passed: bool,
    pub note: &'static str,
}

/// 校驗報告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<Check>,
}

impl CheckReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// 以已知日干支與六十日循環校驗日干支計算。
pub fn self_check() -> CheckReport {
    let reference = [
        ((1900, 1, 31), "甲辰", "曆表起點"),
        ((1900, 2, 1), "乙巳", "起點後一日"),
        ((1900, 2, 2), "丙午", "起點後二日"),
        ((2000, 1, 1), "戊午", "J2000.0"),
    ];
    let mut results: Vec<_> = reference
        .into_iter()
        .map(|((y, m, d), expected, note)| {
            let date = Date::from_gregorian(y, m, d);
            let calculated = StemBranch::for_date(date).name();
            Check {
                date,
                passed: calculated == expected,
                expected: expected.to_owned(),
                calculated,
                note,
            }
        })
        .collect();

    let base = Date::from_gregorian(1900, 1, 31);
    let expected = StemBranch::for_date(base).name();
    let calculated = StemBranch::for_date(base + 60).name();
    results.push(Check {
        date: base + 60,
        passed: calculated == expected,
        expected,
        calculated,
        note: "六十日循環",
    });

    let passed = results.iter().filter(|c| c.passed).count();
    CheckReport {
        total: results.len(),
        passed,
        failed: results.len() - passed,
        results,
    }
}
