//! 数字转单词模块
//!
//! 将 1 ~ 999,999,999 的整数转换为英文单词（印度计数法）

pub mod lexicon;
pub mod input;
pub mod converter;

// 导出核心类型
pub use lexicon::{Lexicon, Spelling};
pub use input::{parse_integer, MAX_VALUE};
pub use converter::{Conversion, NumberWords, ZeroPolicy};
