//! Subcommand handlers: each renders either a text view or JSON.

use anyhow::{Context as _, Result, bail};
use chrono::{Datelike, Timelike, Utc};
use serde::Serialize;
use tracing::{info, info_span};

use tongshu::almanac::{self, DayRecord, Statistics};
use tongshu::deity::{self, Observance};
use tongshu::lunar::Month;
use tongshu::{Date, DayBoundary, Deity, LunarDate, StemBranch};

use crate::cli::{DayArgs, DeityCommand, LunarArgs, MonthArgs};
use crate::config::TongshuConfig;

/// Settings shared by every command.
pub struct Context {
    pub config: TongshuConfig,
    pub json: bool,
}

impl Context {
    /// Today's date and the current hour at the configured UTC offset.
    fn now(&self) -> Result<(Date, u32)> {
        let now = Utc::now().with_timezone(&self.config.offset()?);
        let date = Date::from_gregorian(now.year(), now.month(), now.day());
        Ok((date, now.hour()))
    }

    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<()> {
        if self.json {
            let out = serde_json::to_string_pretty(value).context("failed to serialise output")?;
            println!("{out}");
        } else {
            print!("{}", text());
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct DayView {
    #[serde(flatten)]
    record: DayRecord,
    year_stem_branch: StemBranch,
    zodiac: &'static str,
    deities: &'static [Deity],
}

pub fn day(ctx: &Context, args: DayArgs) -> Result<()> {
    let _cmd = info_span!("day").entered();
    let (date, hour) = match args.date {
        Some(date) => (date, args.hour),
        None => {
            let (today, hour) = ctx.now()?;
            (today, args.hour.or(Some(hour)))
        }
    };
    let boundary = if args.midnight {
        DayBoundary::Midnight
    } else {
        ctx.config.day_boundary
    };
    info!(%date, ?hour, ?boundary, "looking up day");
    let record = DayRecord::new(date, hour, boundary);
    let view = DayView {
        year_stem_branch: record.lunar.year_stem_branch(),
        zodiac: record.lunar.zodiac(),
        deities: deity::deities(record.lunar.month_day()),
        record,
    };
    ctx.emit(&view, || render_day(&view))
}

fn render_day(view: &DayView) -> String {
    let r = &view.record;
    let mut out = format!("{} (週{})\n", r.date, r.weekday);
    out += &format!(
        "農曆 {}年 {} ({}年 屬{})\n",
        r.lunar.year(),
        r.lunar,
        view.year_stem_branch,
        view.zodiac
    );
    out += &format!(
        "干支 {}日 · {} · {}\n",
        r.stem_branch,
        r.stem_branch.pinyin(),
        r.stem_branch.english()
    );
    out += &format!("{}：{}\n", r.status_text, r.description);
    if !view.deities.is_empty() {
        out += "神明聖誕：\n";
        for d in view.deities {
            out += &format!("  {d}\n");
        }
    }
    out
}

#[derive(Serialize)]
struct MonthView {
    year: i32,
    month: u32,
    statistics: Statistics,
    days: Vec<DayRecord>,
}

pub fn month(ctx: &Context, args: MonthArgs) -> Result<()> {
    let _cmd = info_span!("month").entered();
    let days = almanac::month_table(args.year, args.month)?;
    let view = MonthView {
        year: args.year,
        month: args.month,
        statistics: Statistics::for_days(&days),
        days,
    };
    ctx.emit(&view, || {
        let mut out = format!("{}年{}月\n", view.year, view.month);
        for d in &view.days {
            out += &format!(
                "{} 週{} {} {:<4} 農曆{}\n",
                d.date, d.weekday, d.stem_branch, d.status_text, d.lunar
            );
        }
        out + &render_statistics(&view.statistics)
    })
}

fn render_statistics(s: &Statistics) -> String {
    format!(
        "宜 {} ({:.1}%)  謹慎 {} ({:.1}%)  不宜 {} ({:.1}%)\n",
        s.good.count,
        s.good.percentage,
        s.neutral.count,
        s.neutral.percentage,
        s.bad.count,
        s.bad.percentage
    )
}

pub fn lunar(ctx: &Context, args: LunarArgs) -> Result<()> {
    let _cmd = info_span!("lunar").entered();
    let month = if args.leap {
        Month::Leap(args.month)
    } else {
        Month::Common(args.month)
    };
    let lunar = LunarDate::new(args.year, month, args.day)
        .with_context(|| format!("no such lunar date in {}", args.year))?;
    let record = DayRecord::new(lunar.to_date(), None, ctx.config.day_boundary);
    let view = DayView {
        year_stem_branch: lunar.year_stem_branch(),
        zodiac: lunar.zodiac(),
        deities: deity::deities(lunar.month_day()),
        record,
    };
    ctx.emit(&view, || render_day(&view))
}

#[derive(Serialize)]
struct TableView {
    statistics: Statistics,
    table: Vec<almanac::CycleRow>,
}

pub fn table(ctx: &Context) -> Result<()> {
    let table = almanac::cycle_table();
    let view = TableView {
        statistics: Statistics::from_statuses(table.iter().map(|r| r.fortune.status)),
        table,
    };
    ctx.emit(&view, || {
        let mut out = String::new();
        for row in &view.table {
            out += &format!(
                "{:>2} {} {:<12} {:<4} {}\n",
                row.index, row.fortune.stem_branch, row.pinyin, row.status_text, row.fortune.description
            );
        }
        out + &render_statistics(&view.statistics)
    })
}

pub fn deity(ctx: &Context, command: DeityCommand) -> Result<()> {
    let _cmd = info_span!("deity").entered();
    match command {
        DeityCommand::Search { term } => {
            let hits = deity::search(&term);
            info!(%term, hits = hits.len(), "deity search");
            ctx.emit(&hits, || {
                if hits.is_empty() {
                    return format!("找不到「{term}」\n");
                }
                hits.iter()
                    .map(|h| {
                        format!(
                            "農曆{}月{}日 {}\n",
                            h.month_day.month, h.month_day.day, h.deity
                        )
                    })
                    .collect()
            })
        }
        DeityCommand::Upcoming { days } => {
            let (today, _) = ctx.now()?;
            let days = days.unwrap_or(ctx.config.upcoming_days);
            let list = deity::upcoming(today, days);
            ctx.emit(&list, || {
                render_observances(&list, |o| match o.date - today {
                    0 => "今天".to_owned(),
                    1 => "明天".to_owned(),
                    n => format!("{n}天後"),
                })
            })
        }
        DeityCommand::Monthly { year, month } => {
            let list = deity::monthly(year, month)?;
            ctx.emit(&list, || render_observances(&list, |o| o.date.to_string()))
        }
    }
}

fn render_observances(list: &[Observance], label: impl Fn(&Observance) -> String) -> String {
    let mut out = String::new();
    for o in list {
        out += &format!("{} (週{}) 農曆{}\n", label(o), o.weekday, o.lunar);
        for d in o.deities {
            out += &format!("  {d}\n");
        }
    }
    out
}

pub fn check(ctx: &Context) -> Result<()> {
    let report = almanac::self_check();
    ctx.emit(&report, || {
        let mut out = String::new();
        for c in &report.results {
            let mark = if c.passed { "✓" } else { "✗" };
            out += &format!(
                "{mark} {} 預期 {} 計算 {} ({})\n",
                c.date, c.expected, c.calculated, c.note
            );
        }
        out + &format!("{}/{} passed\n", report.passed, report.total)
    })?;
    if !report.all_passed() {
        bail!("{} of {} checks failed", report.failed, report.total);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_view_text() {
        let date = Date::from_gregorian(2025, 1, 29);
        let record = DayRecord::new(date, None, DayBoundary::ZiHour);
        let view = DayView {
            year_stem_branch: record.lunar.year_stem_branch(),
            zodiac: record.lunar.zodiac(),
            deities: deity::deities(record.lunar.month_day()),
            record,
        };
        let text = render_day(&view);
        assert!(text.starts_with("2025-01-29 (週三)\n農曆 2025年 正月初一 (乙巳年 屬蛇)\n"));
        assert!(text.contains("🙏 彌勒佛 (天臘之辰)"));

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!("2025-01-29", json["date"]);
        assert_eq!("乙巳", json["year_stem_branch"]);
        assert_eq!("彌勒佛", json["deities"][0]["name"]);
    }

    #[test]
    fn statistics_line() {
        let stats = Statistics::from_statuses(
            almanac::cycle_table().iter().map(|r| r.fortune.status),
        );
        assert_eq!(
            "宜 24 (40.0%)  謹慎 5 (8.3%)  不宜 31 (51.7%)\n",
            render_statistics(&stats)
        );
    }
}
