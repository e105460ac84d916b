//! 游戏设置模块
//!
//! 提供设置数据结构与 JSON 持久化

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use ttt_ai::{AiConfig, SearchStrategy};

/// 覆盖设置文件路径的环境变量
pub const SETTINGS_ENV: &str = "TICTACTOE_SETTINGS";

/// 游戏设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// AI 名义思考时间（毫秒）
    pub time_budget_ms: u64,
    /// 等待 AI 的硬超时（毫秒），到期后通知搜索停止
    pub hard_timeout_ms: u64,
    /// 搜索策略名称：negamax / minimax
    pub strategy: String,
    pub max_depth: u8,
    pub scale_budget: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        let ai = AiConfig::default();
        Self {
            time_budget_ms: ai.time_budget_ms,
            hard_timeout_ms: 5000,
            strategy: ai.strategy.to_string(),
            max_depth: ai.max_depth,
            scale_budget: ai.scale_budget,
        }
    }
}

impl GameSettings {
    /// 获取设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(SETTINGS_ENV) {
            return Some(PathBuf::from(path));
        }

        dirs::config_dir().map(|mut path| {
            path.push("tictactoe");
            path.push("settings.json");
            path
        })
    }

    /// 从默认位置加载设置
    pub fn load() -> Result<Self> {
        let Some(path) = Self::settings_path() else {
            tracing::warn!("无法获取配置目录，使用默认设置");
            return Ok(Self::default());
        };

        // 首次运行时写出默认设置，便于用户修改
        if !path.exists() {
            let settings = Self::default();
            if let Err(e) = settings.save(&path) {
                tracing::warn!("写出默认设置失败: {:#}", e);
            }
            return Ok(settings);
        }

        Self::load_from(&path)
    }

    /// 从文件加载设置
    ///
    /// 文件缺失或格式无效时使用默认设置；策略名称无法识别时返回错误。
    pub fn load_from(path: &Path) -> Result<Self> {
        let settings = if !path.exists() {
            tracing::info!("设置文件不存在，使用默认设置");
            Self::default()
        } else {
            match std::fs::read_to_string(path) {
                Ok(content) => match serde_json::from_str::<Self>(&content) {
                    Ok(settings) => {
                        tracing::info!("已加载设置: {:?}", path);
                        settings
                    }
                    Err(e) => {
                        tracing::warn!("设置文件格式无效: {}，使用默认设置", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    tracing::warn!("无法读取设置文件: {}，使用默认设置", e);
                    Self::default()
                }
            }
        };

        settings
            .ai_config()
            .with_context(|| format!("设置文件 {:?} 中的搜索策略无效", path))?;
        Ok(settings)
    }

    /// 保存设置到文件
    pub fn save(&self, path: &Path) -> Result<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("无法创建配置目录")?;
        }

        let content = serde_json::to_string_pretty(self).context("序列化设置失败")?;
        std::fs::write(path, content).context("写入设置文件失败")?;

        tracing::info!("设置已保存: {:?}", path);
        Ok(())
    }

    /// 转换为引擎配置
    pub fn ai_config(&self) -> Result<AiConfig, ttt_ai::EngineError> {
        Ok(AiConfig {
            strategy: self.strategy.parse::<SearchStrategy>()?,
            time_budget_ms: self.time_budget_ms,
            max_depth: self.max_depth,
            scale_budget: self.scale_budget,
        })
    }

    pub fn hard_timeout(&self) -> Duration {
        Duration::from_millis(self.hard_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = GameSettings::default();
        assert_eq!(settings.time_budget_ms, 5000);
        assert_eq!(settings.hard_timeout(), Duration::from_secs(5));
        assert_eq!(settings.strategy, "negamax");

        let config = settings.ai_config().unwrap();
        assert_eq!(config, AiConfig::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: GameSettings = serde_json::from_str(r#"{"strategy":"minimax"}"#).unwrap();
        assert_eq!(settings.strategy, "minimax");
        assert_eq!(settings.max_depth, 9);
        assert_eq!(settings.ai_config().unwrap().strategy, SearchStrategy::Minimax);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = GameSettings {
            time_budget_ms: 250,
            hard_timeout_ms: 1000,
            strategy: "minimax".to_string(),
            max_depth: 4,
            scale_budget: false,
        };
        settings.save(&path).unwrap();

        let loaded = GameSettings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let loaded = GameSettings::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, GameSettings::default());
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let loaded = GameSettings::load_from(&path).unwrap();
        assert_eq!(loaded, GameSettings::default());
    }

    #[test]
    fn test_unknown_strategy_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"strategy":"mcts","max_depth":9}"#).unwrap();

        let err = GameSettings::load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Unknown search strategy: mcts"));
    }
}
