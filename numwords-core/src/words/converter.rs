//! 数字转英文单词
//!
//! 印度计数法：按 hundred / thousand / lakh / crore 分级，
//! thousand 之后每两位一级。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::NumwordsConfig;
use crate::error::{NumwordsError, NumwordsResult};
use crate::words::input::{digit_count, parse_integer, MAX_DIGITS, MAX_VALUE};
use crate::words::lexicon::{Lexicon, Spelling};

/// 0 的输出策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroPolicy {
    /// 输出 "Zero"
    #[default]
    Word,
    /// 输出空串（旧行为）
    Empty,
}

/// 转换结果
///
/// 无法转换的输入原样返回，两种情况折叠后都是同一个字符串。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// 转换成功
    Words(String),
    /// 非整数或超出范围，原始输入
    Unchanged(String),
}

impl Conversion {
    pub fn is_words(&self) -> bool {
        matches!(self, Self::Words(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Words(s) | Self::Unchanged(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Self::Words(s) | Self::Unchanged(s) => s,
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Conversion> for String {
    fn from(c: Conversion) -> Self {
        c.into_string()
    }
}

/// 数字转单词转换器
///
/// 无内部状态，可跨线程共享。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberWords {
    lexicon: Lexicon,
    zero: ZeroPolicy,
}

impl NumberWords {
    /// 默认配置：旧拼写，0 → "Zero"
    pub const fn new() -> Self {
        Self {
            lexicon: Lexicon::new(Spelling::Legacy),
            zero: ZeroPolicy::Word,
        }
    }

    pub fn with_config(config: &NumwordsConfig) -> Self {
        Self {
            lexicon: Lexicon::new(config.spelling),
            zero: config.zero,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// 转换任意可显示的类整数值
    ///
    /// 失败时返回 `Conversion::Unchanged`，内容为原始输入文本。
    pub fn convert<T: fmt::Display>(&self, number: T) -> Conversion {
        let text = number.to_string();
        match self.try_convert_text(&text) {
            Ok(words) => Conversion::Words(words),
            Err(e) => {
                tracing::debug!("输入原样返回: {}", e);
                Conversion::Unchanged(e.into_input().unwrap_or(text))
            }
        }
    }

    /// 严格版本：失败时返回错误
    pub fn try_convert<T: fmt::Display>(&self, number: T) -> NumwordsResult<String> {
        self.try_convert_text(&number.to_string())
    }

    fn try_convert_text(&self, text: &str) -> NumwordsResult<String> {
        let value = parse_integer(text)?;
        self.words(value)
    }

    /// 将数值转换为单词
    ///
    /// # 示例
    /// ```
    /// # use numwords_core::NumberWords;
    /// let words = NumberWords::new().words(123_456_789).unwrap();
    /// assert_eq!(words, "Twelve crore thirty four lakh fifty six thousand seven hundred eighty nine");
    /// ```
    pub fn words(&self, value: u32) -> NumwordsResult<String> {
        if value > MAX_VALUE {
            return Err(NumwordsError::OutOfRange {
                input: value.to_string(),
                digits: digit_count(u64::from(value)),
            });
        }

        if value == 0 {
            return Ok(match self.zero {
                ZeroPolicy::Word => "Zero".to_string(),
                ZeroPolicy::Empty => String::new(),
            });
        }

        let mut out = Vec::with_capacity(16);
        self.collect(value, &mut out);
        Ok(capitalize(&out.join(" ")))
    }

    /// 递归分解，深度不超过 5
    fn collect(&self, n: u32, out: &mut Vec<&'static str>) {
        let digits = digit_count(u64::from(n));
        debug_assert!(digits <= MAX_DIGITS);

        if digits < 3 {
            self.below_hundred(n, out);
            return;
        }

        // 5、7、9 位取前两位，其余取首位
        let divisor = if digits % 2 == 1 && digits > 4 {
            10u32.pow(digits as u32 - 2)
        } else {
            10u32.pow(digits as u32 - 1)
        };
        let (lead, rem) = (n / divisor, n % divisor);

        tracing::trace!(digits, lead, rem, "grade step");

        self.below_hundred(lead, out);
        out.extend(self.lexicon.grade(digits));
        self.collect(rem, out);
    }

    /// 0 ~ 99；0 不输出任何词
    fn below_hundred(&self, n: u32, out: &mut Vec<&'static str>) {
        let lex = &self.lexicon;
        match n {
            0 => {}
            1..=9 => out.extend(lex.ones(n)),
            11..=19 => out.extend(lex.teen(n)),
            _ if n % 10 == 0 => out.extend(lex.tens(n)),
            _ => {
                out.extend(lex.tens(n - n % 10));
                out.extend(lex.ones(n % 10));
            }
        }
    }
}

/// 首字母大写，其余小写
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
