//! 神明聖誕
//!
//! 聖誕以農曆月日為鍵，每年同一農曆月日重現，與公元年及農曆年無關。
//! 資料取自 `data/deities.toml`，首次查詢時解析。

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::date::{self, Date, days_in_month};
use crate::error::Error;
use crate::lunar::{LunarDate, MonthDay};

/// 神明類別：佛、道、民間神祇。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum DeityKind {
    #[serde(rename = "佛")]
    Buddhist,
    #[serde(rename = "道")]
    Taoist,
    #[serde(rename = "神")]
    Folk,
}

impl DeityKind {
    /// 類別的單字標記。
    pub fn label(&self) -> &'static str {
        match self {
            DeityKind::Buddhist => "佛",
            DeityKind::Taoist => "道",
            DeityKind::Folk => "神",
        }
    }
    /// 類別的圖示，用於文字輸出。
    pub fn icon(&self) -> &'static str {
        match self {
            DeityKind::Buddhist => "🙏",
            DeityKind::Taoist => "☯️",
            DeityKind::Folk => "🏮",
        }
    }
}

/// 一條聖誕記錄。
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Deity {
    pub name: String,
    pub kind: DeityKind,
    /// 別名或節日名，可為空
    #[serde(default)]
    pub note: String,
}

impl fmt::Display for Deity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.icon(), self.name)?;
        if !self.note.is_empty() {
            write!(f, " ({})", self.note)?;
        }
        Ok(())
    }
}

static RAW_DATA: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/deities.toml"));

static TABLE: LazyLock<BTreeMap<MonthDay, Vec<Deity>>> = LazyLock::new(|| {
    parse_raw_data(RAW_DATA).unwrap_or_else(|e| panic!("error parsing deity data: {e}"))
});

#[derive(Debug, thiserror::Error)]
enum RawDataError {
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Key(#[from] Error),
}

fn parse_raw_data(raw: &str) -> Result<BTreeMap<MonthDay, Vec<Deity>>, RawDataError> {
    let by_key: BTreeMap<String, Vec<Deity>> = toml::from_str(raw)?;
    let mut res = BTreeMap::new();
    for (key, list) in by_key {
        res.insert(key.parse()?, list);
    }
    Ok(res)
}

/// 某農曆月日聖誕的神明，依資料順序；無則為空。
///
/// # 用例
///
/// ```
/// use tongshu::deity;
///
/// let list = deity::deities("01-09".parse().unwrap());
/// assert_eq!("玉皇上帝", list[0].name);
/// assert!(deity::deities("01-02".parse().unwrap()).is_empty());
/// ```
pub fn deities(key: MonthDay) -> &'static [Deity] {
    TABLE.get(&key).map(Vec::as_slice).unwrap_or(&[])
}

/// 某公曆日期聖誕的神明。閏月沿用同序號平月的聖誕。
pub fn deities_on(date: Date) -> &'static [Deity] {
    deities(LunarDate::from_date(date).month_day())
}

/// 整張聖誕表，依農曆月日排列。
pub fn table() -> impl Iterator<Item = (MonthDay, &'static [Deity])> {
    TABLE.iter().map(|(k, v)| (*k, v.as_slice()))
}

/// 搜尋結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub month_day: MonthDay,
    pub deity: &'static Deity,
}

/// 名稱或附註含有 `term` 的記錄，依農曆月日排列。
///
/// 同一神明可能有多個聖誕（如成道日、出家日），各自成為一條結果。
pub fn search(term: &str) -> Vec<SearchHit> {
    table()
        .flat_map(move |(month_day, list)| {
            list.iter()
                .filter(move |d| d.name.contains(term) || d.note.contains(term))
                .map(move |deity| SearchHit { month_day, deity })
        })
        .collect()
}

/// 有聖誕的一天。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observance {
    pub date: Date,
    pub weekday: &'static str,
    pub lunar: LunarDate,
    pub deities: &'static [Deity],
}

impl Observance {
    fn on(date: Date) -> Option<Self> {
        let lunar = LunarDate::from_date(date);
        let deities = deities(lunar.month_day());
        (!deities.is_empty()).then(|| Observance {
            date,
            weekday: date.weekday_name(),
            lunar,
            deities,
        })
    }
}

/// 自 `from` 起（含當日）往後 `days` 日內的聖誕，至 [`Date::MAX`] 為止。
pub fn upcoming(from: Date, days: u32) -> Vec<Observance> {
    let last = (from + i64::from(days)) - from;
    (0..=last)
        .filter_map(|i| Observance::on(from + i))
        .collect()
}

/// 公曆某年某月內的聖誕。
pub fn monthly(year: i32, month: u32) -> Result<Vec<Observance>, Error> {
    date::check_year(year)?;
    let len = days_in_month(year, month);
    if len == 0 {
        return Err(Error::MonthOutOfRange { month });
    }
    let first = Date::from_gregorian(year, month, 1);
    Ok((0..i64::from(len))
        .filter_map(|i| Observance::on(first + i))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> MonthDay {
        s.parse().unwrap()
    }

    #[test]
    fn data_parses() {
        assert_eq!(102, table().count());
        assert_eq!(144, table().map(|(_, v)| v.len()).sum::<usize>());
        for (k, list) in table() {
            assert!(!list.is_empty(), "{k}");
        }
    }

    #[test]
    fn lookup_by_key() {
        let list = deities(key("01-15"));
        assert_eq!(6, list.len());
        assert_eq!("上元天官", list[0].name);
        assert_eq!(DeityKind::Taoist, list[0].kind);
        assert_eq!("上元節", list[0].note);
        assert_eq!("", list[1].note);
        assert!(deities(key("12-30")).is_empty());
    }

    #[test]
    fn same_list_every_lunar_year() {
        // 2024-02-10 與 2025-01-29 皆為正月初一
        let a = deities_on(Date::from_gregorian(2024, 2, 10));
        let b = deities_on(Date::from_gregorian(2025, 1, 29));
        assert_eq!(deities(key("01-01")), a);
        assert!(std::ptr::eq(a, b));
        assert_eq!("彌勒佛", a[0].name);
    }

    #[test]
    fn leap_month_uses_ordinary_key() {
        // 2023-03-22 為閏二月初一
        assert_eq!(
            deities(key("02-01")),
            deities_on(Date::from_gregorian(2023, 3, 22))
        );
    }

    #[test]
    fn aliases_appear_under_each_date() {
        for (name, dates) in [
            ("觀音菩薩", ["02-19", "06-19"]),
            ("關聖帝君", ["05-13", "06-23"]),
            ("釋迦文佛", ["02-08", "04-08"]),
        ] {
            let hits: Vec<_> = search(name)
                .into_iter()
                .filter(|h| h.deity.name == name)
                .map(|h| h.month_day.to_string())
                .collect();
            assert_eq!(dates.to_vec(), hits, "{name}");
        }
    }

    #[test]
    fn search_covers_notes_and_sorts() {
        let hits = search("許真君");
        let keys: Vec<_> = hits.iter().map(|h| h.month_day.to_string()).collect();
        assert_eq!(vec!["07-21", "08-01"], keys);
        assert!(search("不存在的神").is_empty());
    }

    #[test]
    fn display() {
        let list = deities(key("01-09"));
        assert_eq!("☯️ 玉皇上帝 (天公生)", list[0].to_string());
        let list = deities(key("01-03"));
        assert_eq!("☯️ 孫真人", list[0].to_string());
        assert_eq!("神", DeityKind::Folk.label());
        assert_eq!("🏮", DeityKind::Folk.icon());
    }

    #[test]
    fn upcoming_window_is_inclusive() {
        let from = Date::from_gregorian(2025, 1, 29);
        let days: Vec<_> = upcoming(from, 7)
            .iter()
            .map(|o| o.date - from)
            .collect();
        assert_eq!(vec![0, 2, 5, 7], days);
    }

    #[test]
    fn upcoming_days_do_not_wrap() {
        // u32 values past i32::MAX once wrapped negative and came back empty
        let from = Date::MAX + -400;
        let hits = upcoming(from, 3_000_000_000);
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|o| o.date >= from && o.date <= Date::MAX));
        assert_eq!(upcoming(from, 400), hits);
    }

    #[test]
    fn monthly_view() {
        let days: Vec<_> = monthly(2025, 2)
            .unwrap()
            .iter()
            .map(|o| o.date.gregorian().2)
            .collect();
        assert_eq!(vec![3, 5, 6, 10, 12, 16, 28], days);
        assert_eq!(Err(Error::MonthOutOfRange { month: 13 }), monthly(2025, 13));
        assert_eq!(
            Err(Error::YearOutOfRange { year: i32::MAX }),
            monthly(i32::MAX, 1)
        );
    }

    #[test]
    fn bad_data_is_rejected() {
        assert!(parse_raw_data("\"13-01\" = []").is_err());
        assert!(parse_raw_data("\"01-01\" = [{ name = \"x\", kind = \"仙\" }]").is_err());
    }
}
