use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumwordsError {
    // 转换错误
    #[error("Not an integer: {input:?}")]
    NotAnInteger { input: String },

    #[error("Out of range: {input} has {digits} digits (max 9)")]
    OutOfRange { input: String, digits: usize },

    #[error("Negative number not supported: {input}")]
    Negative { input: String },

    // 配置错误
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config serialize error: {0}")]
    ConfigSerialize(String),

    #[error("Config directory unavailable")]
    ConfigDirUnavailable,

    // 其他错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NumwordsError {
    /// 转换错误对应的原始输入
    ///
    /// 配置类错误返回 `None`
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::NotAnInteger { input }
            | Self::OutOfRange { input, .. }
            | Self::Negative { input } => Some(input),
            _ => None,
        }
    }

    /// 将转换错误折叠为原始输入（透传策略）
    pub(crate) fn into_input(self) -> Option<String> {
        self.input().map(str::to_owned)
    }
}

pub type NumwordsResult<T> = Result<T, NumwordsError>;
