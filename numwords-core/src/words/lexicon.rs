//! 词典模块
//!
//! 个位、十几、整十和数级（hundred / thousand / lakh / crore）词表

use serde::{Deserialize, Serialize};

/// 个位词表，下标即数字（0 无对应词）
const ONES: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// 11 ~ 19，下标为 n - 11
///
/// 注意：14 沿用旧拼写 "forteen"，这是历史遗留的拼写错误
const TEENS_LEGACY: [&str; 9] = [
    "eleven", "twelve", "thirteen", "forteen", "fifteen",
    "sixteen", "seventeen", "eighteen", "nineteen",
];

/// 整十词表，下标为十位数字
const TENS: [&str; 10] = [
    "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// 拼写模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spelling {
    /// 兼容旧输出：14 → "forteen"
    #[default]
    Legacy,
    /// 修正拼写：14 → "fourteen"
    Corrected,
}

/// 词典
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lexicon {
    spelling: Spelling,
}

impl Lexicon {
    pub const fn new(spelling: Spelling) -> Self {
        Self { spelling }
    }

    pub fn spelling(&self) -> Spelling {
        self.spelling
    }

    /// 1 ~ 9
    pub fn ones(&self, n: u32) -> Option<&'static str> {
        match n {
            1..=9 => Some(ONES[n as usize]),
            _ => None,
        }
    }

    /// 11 ~ 19
    pub fn teen(&self, n: u32) -> Option<&'static str> {
        match (n, self.spelling) {
            (14, Spelling::Corrected) => Some("fourteen"),
            (11..=19, _) => Some(TEENS_LEGACY[(n - 11) as usize]),
            _ => None,
        }
    }

    /// 10, 20, ..., 90
    pub fn tens(&self, n: u32) -> Option<&'static str> {
        match n {
            10..=90 if n % 10 == 0 => Some(TENS[(n / 10) as usize]),
            _ => None,
        }
    }

    /// 按剩余位数取数级词
    ///
    /// 3 → hundred, 4~5 → thousand, 6~7 → lakh, 8~9 → crore
    pub fn grade(&self, digits: usize) -> Option<&'static str> {
        match digits {
            3 => Some("hundred"),
            4 | 5 => Some("thousand"),
            6 | 7 => Some("lakh"),
            8 | 9 => Some("crore"),
            _ => None,
        }
    }
}
