//! 输入解析
//!
//! 把任意"类整数"文本解析为可转换的数值

use std::num::IntErrorKind;

use crate::error::{NumwordsError, NumwordsResult};

/// 可转换的最大值（9 位）
pub const MAX_VALUE: u32 = 999_999_999;

/// 最大位数
pub const MAX_DIGITS: usize = 9;

/// 十进制位数，0 视为 1 位
pub fn digit_count(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// 解析类整数文本
///
/// 允许首尾空白和前导 `+`；负数、超过 9 位、非整数都返回错误，
/// 错误中保留原始文本。
pub fn parse_integer(text: &str) -> NumwordsResult<u32> {
    let trimmed = text.trim();

    let value: i64 = match trimmed.parse() {
        Ok(v) => v,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow => NumwordsError::OutOfRange {
                    input: text.to_string(),
                    digits: trimmed.chars().filter(char::is_ascii_digit).count(),
                },
                IntErrorKind::NegOverflow => NumwordsError::Negative {
                    input: text.to_string(),
                },
                _ => NumwordsError::NotAnInteger {
                    input: text.to_string(),
                },
            });
        }
    };

    if value < 0 {
        return Err(NumwordsError::Negative {
            input: text.to_string(),
        });
    }

    let digits = digit_count(value.unsigned_abs());
    if digits > MAX_DIGITS {
        return Err(NumwordsError::OutOfRange {
            input: text.to_string(),
            digits,
        });
    }

    // digits <= 9 保证不会溢出 u32
    u32::try_from(value).map_err(|_| NumwordsError::OutOfRange {
        input: text.to_string(),
        digits,
    })
}
