use tongshu::almanac::{self, DayRecord, Statistics};
use tongshu::{Date, DayBoundary, FortuneStatus, MonthDay, StemBranch, deity, fortune};

#[test]
fn month_table_follows_the_day_cycle() {
    for (year, month, len) in [(1900, 2, 28), (2000, 2, 29), (2025, 12, 31), (2101, 3, 31)] {
        let days = almanac::month_table(year, month).unwrap();
        assert_eq!(len, days.len(), "{year}-{month}");
        for (i, rec) in days.iter().enumerate() {
            assert_eq!(Date::from_gregorian(year, month, i as u32 + 1), rec.date);
            assert_eq!(StemBranch::for_date(rec.date), rec.stem_branch);
            assert_eq!(fortune::status(rec.stem_branch).status, rec.status);
        }
        let stats = Statistics::for_days(&days);
        assert_eq!(len as u32, stats.total);
        assert_eq!(
            stats.total,
            stats.good.count + stats.neutral.count + stats.bad.count
        );
    }
}

#[test]
fn fortune_lookup_for_known_days() {
    // 2000-01-01 戊午, 2024-01-01 甲子, 2025-01-01 庚午
    for ((y, m, d), status) in [
        ((2000, 1, 1), FortuneStatus::Bad),
        ((2024, 1, 1), FortuneStatus::Good),
        ((2025, 1, 1), FortuneStatus::Bad),
    ] {
        let rec = DayRecord::new(Date::from_gregorian(y, m, d), None, DayBoundary::ZiHour);
        assert_eq!(status, rec.status, "{}", rec.date);
    }
}

#[test]
fn deity_birthdays_recur_on_the_lunar_key() {
    let key: MonthDay = "01-09".parse().unwrap();
    let expected = deity::deities(key);
    assert_eq!("玉皇上帝", expected[0].name);
    for year in [1950, 2000, 2024, 2050] {
        let date = tongshu::lunar::festival_date(year, 1, 9);
        assert_eq!(expected, deity::deities_on(date), "{year}");
    }
}

#[test]
fn self_check_report() {
    let report = almanac::self_check();
    assert!(report.all_passed());
    assert_eq!(report.total, report.passed);
    assert!(report.results.iter().all(|c| c.expected == c.calculated));
}

#[test]
fn records_serialise_to_json() {
    let rec = DayRecord::new(Date::from_gregorian(2024, 2, 10), None, DayBoundary::ZiHour);
    let json = serde_json::to_value(&rec).unwrap();
    assert_eq!("2024-02-10", json["date"]);
    assert_eq!("甲辰", json["stem_branch"]);
    assert_eq!("bad", json["status"]);
    assert_eq!("不宜拜拜", json["status_text"]);
    assert_eq!(2024, json["lunar"]["year"]);
    assert_eq!(1, json["lunar"]["month"]);
    assert_eq!(false, json["lunar"]["is_leap"]);
    assert_eq!("正月初一", json["lunar"]["text"]);

    let row = &almanac::cycle_table()[0];
    let json = serde_json::to_value(row).unwrap();
    assert_eq!("甲子", json["stem_branch"]);
    assert_eq!("good", json["status"]);
    assert_eq!(0, json["index"]);
}
