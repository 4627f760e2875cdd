//! 農曆年資料表（1900 至 2100 年）
//!
//! 每年以一個整數編碼，自高位至低位：
//!
//! - 第 16 位：閏月是否為大月（30 日）
//! - 第 15 至 4 位：正月至十二月依序各佔一位，1 為大月，0 為小月（29 日）
//! - 第 3 至 0 位：閏月月序，0 表示該年無閏月
//!
//! 原始編碼僅在此處出現，於編譯期解碼為 [`YearInfo`]，其餘程式只讀解碼後的資料。

/// 資料表首年，其正月初一為公曆 1900 年 1 月 31 日。
pub const FIRST_YEAR: i32 = 1900;
/// 資料表末年。
pub const LAST_YEAR: i32 = 2100;

#[rustfmt::skip]
const ENCODED: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520,                                                                                   // 2100
];

/// 一年的月份大小與閏月資料。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct YearInfo {
    /// 閏月月序，0 表示無閏月
    pub leap_month: u32,
    /// 閏月是否為大月
    pub leap_is_long: bool,
    /// 正月至十二月是否為大月
    pub long_months: [bool; 12],
}

impl YearInfo {
    /// 資料表範圍外年份所用的近似年：無閏月，單月大、雙月小，共 354 日。
    pub const APPROXIMATE: YearInfo = YearInfo {
        leap_month: 0,
        leap_is_long: false,
        long_months: [
            true, false, true, false, true, false, true, false, true, false, true, false,
        ],
    };

    const fn decode(bits: u32) -> Self {
        let mut long_months = [false; 12];
        let mut m = 0;
        while m < 12 {
            long_months[m] = bits & (0x8000 >> m) != 0;
            m += 1;
        }
        YearInfo {
            leap_month: bits & 0xf,
            leap_is_long: bits & 0x10000 != 0,
            long_months,
        }
    }

    /// 取得農曆 `year` 年的資料，範圍外則返回 `None`。
    pub fn get(year: i32) -> Option<&'static Self> {
        if (FIRST_YEAR..=LAST_YEAR).contains(&year) {
            Some(&DECODED[(year - FIRST_YEAR) as usize])
        } else {
            None
        }
    }

    /// 取得農曆 `year` 年的資料，範圍外則以 [`YearInfo::APPROXIMATE`] 代替。
    pub fn get_or_approximate(year: i32) -> &'static Self {
        Self::get(year).unwrap_or(&Self::APPROXIMATE)
    }

    /// 平月 `month`（`1..=12`）的日數。
    pub fn month_len(&self, month: u32) -> u32 {
        if self.long_months[month as usize - 1] { 30 } else { 29 }
    }

    /// 閏月日數，無閏月則為 0。
    pub fn leap_len(&self) -> u32 {
        match (self.leap_month, self.leap_is_long) {
            (0, _) => 0,
            (_, true) => 30,
            (_, false) => 29,
        }
    }

    /// 全年日數：十二個小月共 348 日，每個大月加一日，再加閏月。
    pub fn year_len(&self) -> u32 {
        348 + self.long_months.iter().filter(|&&l| l).count() as u32 + self.leap_len()
    }
}

static DECODED: [YearInfo; 201] = {
    let mut out = [YearInfo::APPROXIMATE; 201];
    let mut i = 0;
    while i < ENCODED.len() {
        out[i] = YearInfo::decode(ENCODED[i]);
        i += 1;
    }
    out
};
