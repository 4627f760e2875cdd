//! 拜拜吉凶日
//!
//! 六十甲子日各有一則固定的祭祀吉凶，依日干支查表，與年月無關。

use std::fmt;

use serde::Serialize;

use crate::date::Date;
use crate::sexagenary::{DayBoundary, StemBranch};
use FortuneStatus::{Bad, Good, Neutral};

/// 祭祀吉凶
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FortuneStatus {
    Good,
    Neutral,
    Bad,
}

impl FortuneStatus {
    /// 簡短說明：宜拜拜、謹慎拜拜、不宜拜拜。
    pub fn text(&self) -> &'static str {
        match self {
            FortuneStatus::Good => "宜拜拜",
            FortuneStatus::Neutral => "謹慎拜拜",
            FortuneStatus::Bad => "不宜拜拜",
        }
    }
}

impl fmt::Display for FortuneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// 一個干支日的吉凶記錄。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fortune {
    pub stem_branch: StemBranch,
    pub status: FortuneStatus,
    pub description: &'static str,
}

impl Fortune {
    /// 某日某時的吉凶，日干支依 `boundary` 決定子時歸屬。
    ///
    /// # 用例
    ///
    /// ```
    /// use tongshu::{Date, DayBoundary, Fortune, FortuneStatus};
    ///
    /// // 2000-01-01 為戊午日
    /// let f = Fortune::for_date(Date::from_gregorian(2000, 1, 1), None, DayBoundary::ZiHour);
    /// assert_eq!(FortuneStatus::Bad, f.status);
    /// ```
    pub fn for_date(date: Date, hour: Option<u32>, boundary: DayBoundary) -> Fortune {
        status(StemBranch::for_day(date, hour, boundary))
    }
}

/// 查詢干支日的吉凶。
pub fn status(stem_branch: StemBranch) -> Fortune {
    let (name, status, description) = TABLE[stem_branch.index() as usize];
    debug_assert_eq!(name, stem_branch.name());
    Fortune {
        stem_branch,
        status,
        description,
    }
}

/// 全部六十則吉凶記錄，自甲子至癸亥。
pub fn all() -> impl Iterator<Item = Fortune> {
    StemBranch::all().map(status)
}

#[rustfmt::skip]
const TABLE: [(&str, FortuneStatus, &str); 60] = [
    ("甲子", Good, "諸神在地，求福設醮，收福十倍，大吉之兆"),
    ("乙丑", Good, "諸神在地，求福設醮，收福十倍，大吉之兆"),
    ("丙寅", Bad, "諸神在天，求福還願返受其殃，大凶"),
    ("丁卯", Good, "諸神在地，求福拜表，收福十倍，大吉利"),
    ("戊辰", Good, "諸神在地，求福拜表，收福十倍，大吉利"),
    ("己巳", Good, "諸神在地，求福拜表，收福十倍，大吉利"),
    ("庚午", Bad, "諸神在天，求福祭祀主人疾病，大凶"),
    ("辛未", Bad, "諸神在天，求福祭祀主人疾病，大凶"),
    ("壬申", Good, "諸神在天止於地府，求福祭祀收福十倍，大吉利"),
    ("癸酉", Neutral, "祭祀河泊水官大吉，其餘求福者凶"),
    ("甲戌", Bad, "諸神在天不在人間，小求福卻受其殃"),
    ("乙亥", Bad, "諸神在天不在人間，小求福卻受其殃"),
    ("丙子", Bad, "諸神破，天曹追上門，求福返諸橫禍，大凶"),
    ("丁丑", Bad, "諸神破，天曹追上門，求福返諸橫禍，大凶"),
    ("戊寅", Bad, "諸神破，天曹追上門，求福返諸橫禍，大凶"),
    ("己卯", Good, "諸神下地府，求福利益子孫榮華富貴，大吉"),
    ("庚辰", Good, "諸神下地府，求福利益子孫榮華富貴，大吉"),
    ("辛巳", Bad, "諸神在天運石土塔，求福即死三代，大凶"),
    ("壬午", Bad, "諸神在天，求福主人死田蚤不收，大凶"),
    ("癸未", Bad, "諸神在天，求福主人死田蚤不收，大凶"),
    ("甲申", Good, "諸神降下地府人間，求福祭祀收福十倍，大吉利"),
    ("乙酉", Good, "諸神降下地府人間，求福祭祀收福十倍，大吉利"),
    ("丙戌", Good, "諸神降下地府人間，求福祭祀，大吉"),
    ("丁亥", Good, "諸神降下地府人間，求福祭祀，大吉"),
    ("戊子", Good, "諸神在地府，求福祭祀了願酬恩，大吉"),
    ("己丑", Good, "諸神在地府，求福祭祀了願酬恩，大吉"),
    ("庚寅", Bad, "諸神在天會筭簿案，求福令人落水，大凶"),
    ("辛卯", Neutral, "諸神在地府，小小立願召魂代命，平吉利"),
    ("壬辰", Bad, "諸神在天勘會生死文簿，求福主疾病，大凶"),
    ("癸巳", Bad, "諸神在天勘會生死文簿，求福主疾病，大凶"),
    ("甲午", Good, "諸神普降人間，求福收福大利十倍，大吉利"),
    ("乙未", Neutral, "諸神在天，作福不得，小吉"),
    ("丙申", Bad, "諸神在天玉帝殿前造死文簿，求福祭祀大凶"),
    ("丁酉", Bad, "諸神在天玉帝殿前造死文簿，求福祭祀大凶"),
    ("戊戌", Bad, "諸神在天玉帝殿前造死文簿，求福祭祀大凶"),
    ("己亥", Good, "諸神從玉皇差降人問地府，祭祀求福主人壽長，大吉利"),
    ("庚子", Bad, "諸神在天，求福祭祀主見疾病瘟疫，大凶"),
    ("辛丑", Bad, "諸神在天，求福祭祀主見疾病瘟疫，大凶"),
    ("壬寅", Good, "記會之簿，求福許願謝天地，百事大吉"),
    ("癸卯", Good, "記會之簿，求福許願謝天地，百事大吉"),
    ("甲辰", Bad, "諸神在天宮，求福大凶"),
    ("乙巳", Good, "諸神在人間地府，求福祭祀收福十倍，大吉"),
    ("丙午", Bad, "諸神在天不在人間，求福大凶"),
    ("丁未", Good, "諸神在地府，求福了願拜章，大吉"),
    ("戊申", Bad, "諸神在天不在人間地府，求福損家長，大凶"),
    ("己酉", Good, "上界天赦，求福進田蠶，大吉"),
    ("庚戌", Neutral, "諸神在天上，小小祈福半吉，上章拜表大凶"),
    ("辛亥", Neutral, "諸神在天上，小小祈福半吉，上章拜表大凶"),
    ("壬子", Bad, "諸神在天宮，求福了願主殺人口，大凶"),
    ("癸丑", Bad, "諸神在天宮，求福了願主殺人口，大凶"),
    ("甲寅", Good, "諸神在人間地府，求福上章延生度厄，大吉"),
    ("乙卯", Good, "諸神在人間地府，求福上章延生度厄，大吉"),
    ("丙辰", Bad, "諸神在天，求福祭祀招禍損六畜，大凶"),
    ("丁巳", Bad, "諸神在天，求福祭祀招禍損六畜，大凶"),
    ("戊午", Bad, "諸神在天，求福祭祀招禍損六畜，大凶"),
    ("己未", Bad, "諸神在天，求福祭祀招禍損六畜，大凶"),
    ("庚申", Good, "五福開道，天門開，作福祭祀，大吉"),
    ("辛酉", Bad, "諸神從玉帝差降人間地府，求福大凶"),
    ("壬戌", Bad, "六神窮日，人間祈福主孤寡貧窮，大凶"),
    ("癸亥", Bad, "六神窮日，人間祈福主孤寡貧窮，大凶"),
];
