//! numwords core
//!
//! 整数转英文单词，使用印度计数法（hundred, thousand, lakh, crore）
//!
//! ```
//! assert_eq!(numwords_core::convert(47), "Forty seven");
//! assert_eq!(numwords_core::n2w(100), "One hundred");
//! // 无法转换的输入原样返回
//! assert_eq!(numwords_core::convert("abc"), "abc");
//! ```

#![warn(rust_2018_idioms)]

pub mod words;
pub mod config;
pub mod error;

use std::fmt::Display;

// Re-export key types
pub use error::{NumwordsError, NumwordsResult};
pub use config::NumwordsConfig;
pub use words::{Conversion, Lexicon, NumberWords, Spelling, ZeroPolicy};

/// 转换为英文单词，失败时原样返回输入
pub fn convert<T: Display>(number: T) -> String {
    NumberWords::new().convert(number).into_string()
}

/// `convert` 的简写
pub fn n2w<T: Display>(number: T) -> String {
    convert(number)
}

/// 严格版本：非整数、负数或超过 9 位时返回错误
pub fn try_convert<T: Display>(number: T) -> NumwordsResult<String> {
    NumberWords::new().try_convert(number)
}

/// 初始化日志系统
///
/// 生产模式: 不启用日志
/// 调试模式 (--features debug-logs): 按 NUMWORDS_LOG 过滤，默认 warn
///
/// 注意: 此函数可以安全地多次调用
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("NUMWORDS_LOG")
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // 重复初始化时 try_init 返回错误，忽略即可
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }
}
