//! numwords 配置模块
//!
//! 从 ~/.config/numwords/config.toml 加载，可用 NUMWORDS_CONFIG 覆盖路径

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NumwordsError, NumwordsResult};
use crate::words::{Spelling, ZeroPolicy};

/// 配置路径环境变量
pub const CONFIG_ENV: &str = "NUMWORDS_CONFIG";

/// 转换配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NumwordsConfig {
    /// 拼写模式（14 是否使用旧拼写 "forteen"）
    pub spelling: Spelling,
    /// 0 的输出策略
    pub zero: ZeroPolicy,
}

impl NumwordsConfig {
    /// 加载配置文件，不存在时使用默认配置
    pub fn load() -> NumwordsResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> NumwordsResult<Self> {
        if !path.exists() {
            tracing::info!("配置文件不存在，使用默认配置: {:?}", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| NumwordsError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!(
            "加载配置成功: {:?} (spelling={:?}, zero={:?})",
            path,
            config.spelling,
            config.zero
        );
        Ok(config)
    }

    /// 保存配置文件
    pub fn save(&self) -> NumwordsResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> NumwordsResult<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| NumwordsError::ConfigSerialize(e.to_string()))?;
        std::fs::write(path, content)?;

        tracing::info!("保存配置成功: {:?}", path);
        Ok(())
    }

    /// 获取配置文件路径
    pub fn config_path() -> NumwordsResult<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_dir = dirs::config_dir().ok_or(NumwordsError::ConfigDirUnavailable)?;
        Ok(config_dir.join("numwords").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = NumwordsConfig::default();
        assert_eq!(config.spelling, Spelling::Legacy);
        assert_eq!(config.zero, ZeroPolicy::Word);
    }

    #[test]
    fn test_parse_toml() {
        let config: NumwordsConfig = toml::from_str(
            r#"
            spelling = "corrected"
            zero = "empty"
            "#,
        )
        .unwrap();
        assert_eq!(config.spelling, Spelling::Corrected);
        assert_eq!(config.zero, ZeroPolicy::Empty);

        // 缺省字段使用默认值
        let partial: NumwordsConfig = toml::from_str(r#"zero = "empty""#).unwrap();
        assert_eq!(partial.spelling, Spelling::Legacy);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "spelling = \"legacy\"\ncolour = \"red\"\n").unwrap();

        match NumwordsConfig::load_from(&path) {
            Err(NumwordsError::ConfigParse { path: p, .. }) => {
                assert!(p.ends_with("config.toml"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = NumwordsConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, NumwordsConfig::default());
    }

    // 唯一修改 NUMWORDS_CONFIG 的测试，其余测试只用 load_from/save_to
    #[test]
    fn test_env_override_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("override").join("config.toml");
        std::env::set_var(CONFIG_ENV, &path);

        assert_eq!(NumwordsConfig::config_path().unwrap(), path);

        // 文件不存在时使用默认配置
        assert_eq!(NumwordsConfig::load().unwrap(), NumwordsConfig::default());

        let config = NumwordsConfig {
            spelling: Spelling::Corrected,
            zero: ZeroPolicy::Empty,
        };
        config.save().unwrap();
        assert!(path.exists());
        assert_eq!(NumwordsConfig::load().unwrap(), config);

        std::env::remove_var(CONFIG_ENV);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = NumwordsConfig {
            spelling: Spelling::Corrected,
            zero: ZeroPolicy::Empty,
        };
        config.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("spelling = \"corrected\""));

        assert_eq!(NumwordsConfig::load_from(&path).unwrap(), config);
    }
}
