// ==========================================
// 拨号器报表 - 配置管理器
// ==========================================
// 存储: 扁平 JSON 键值文件（可选），缺失键回落默认值
// 默认位置: <config_dir>/dialer-report/config.json
// ==========================================

use crate::config::classifier_config_trait::{CampaignPolicy, ClassifierConfigReader};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// 配置键常量
pub mod config_keys {
    pub const COMPLETED_MARKER: &str = "completed_marker";
    pub const PREFIX_MARKER: &str = "prefix_marker";
    pub const MOBILE_FLAG_COLUMN: &str = "mobile_flag_column";
    pub const MOBILE_FLAG_VALUE: &str = "mobile_flag_value";
    pub const STRAY_HEADER_LITERAL: &str = "stray_header_literal";
    pub const CAMPAIGN_POLICY: &str = "campaign_policy";

    pub const ALL: [&str; 6] = [
        COMPLETED_MARKER,
        PREFIX_MARKER,
        MOBILE_FLAG_COLUMN,
        MOBILE_FLAG_VALUE,
        STRAY_HEADER_LITERAL,
        CAMPAIGN_POLICY,
    ];
}

/// 默认值
pub mod config_defaults {
    pub const COMPLETED_MARKER: &str = "-Completed";
    pub const PREFIX_MARKER: &str = "PSE-";
    pub const MOBILE_FLAG_COLUMN: &str = "Number Type.1";
    pub const MOBILE_FLAG_VALUE: &str = "mobile_number";
    pub const STRAY_HEADER_LITERAL: &str = "ID";
}

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {message}")]
    ConfigReadError { path: String, message: String },

    #[error("配置文件格式错误: {0}")]
    ConfigParseError(String),

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ConfigValueError {
        key: String,
        value: String,
        message: String,
    },
}

// ==========================================
// ConfigManager
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: HashMap<String, String>,
    campaign_policy: CampaignPolicy,
}

impl ConfigManager {
    /// 使用全部默认值
    pub fn new() -> Self {
        Self::default()
    }

    /// 默认配置文件路径
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dialer-report").join("config.json"))
    }

    /// 加载默认位置的配置文件；文件不存在时使用默认值
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("未找到默认配置文件，使用默认配置");
                Ok(Self::new())
            }
        }
    }

    /// 从 JSON 文件加载
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::ConfigReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let manager = Self::from_json_str(&raw)?;
        info!(path = %path.display(), keys = manager.values.len(), "配置文件加载完成");
        Ok(manager)
    }

    /// 从 JSON 文本加载（顶层必须为对象，值必须为字符串）
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let parsed: Value =
            serde_json::from_str(raw).map_err(|e| ConfigError::ConfigParseError(e.to_string()))?;
        let object = parsed.as_object().ok_or_else(|| {
            ConfigError::ConfigParseError("顶层必须是 JSON 对象".to_string())
        })?;

        let mut manager = Self::new();
        for (key, value) in object {
            let text = value.as_str().ok_or_else(|| ConfigError::ConfigValueError {
                key: key.clone(),
                value: value.to_string(),
                message: "配置值必须是字符串".to_string(),
            })?;
            manager.set_config_value(key, text)?;
        }
        Ok(manager)
    }

    /// 写入单个配置值（带校验）
    pub fn set_config_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        if !config_keys::ALL.contains(&key) {
            return Err(ConfigError::ConfigValueError {
                key: key.to_string(),
                value: value.to_string(),
                message: "未知配置键".to_string(),
            });
        }

        match key {
            config_keys::CAMPAIGN_POLICY => {
                self.campaign_policy =
                    value
                        .parse()
                        .map_err(|message| ConfigError::ConfigValueError {
                            key: key.to_string(),
                            value: value.to_string(),
                            message,
                        })?;
            }
            // 前缀允许为空（不剥离前缀），其余标记不允许为空
            config_keys::PREFIX_MARKER => {}
            _ if value.is_empty() => {
                return Err(ConfigError::ConfigValueError {
                    key: key.to_string(),
                    value: value.to_string(),
                    message: "配置值不能为空".to_string(),
                });
            }
            _ => {}
        }

        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// 读取配置值
    pub fn get_config_value(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    /// 读取配置值，带默认值
    fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.get_config_value(key)
            .unwrap_or_else(|| default.to_string())
    }
}

impl ClassifierConfigReader for ConfigManager {
    fn get_completed_marker(&self) -> String {
        self.get_config_or_default(config_keys::COMPLETED_MARKER, config_defaults::COMPLETED_MARKER)
    }

    fn get_prefix_marker(&self) -> String {
        self.get_config_or_default(config_keys::PREFIX_MARKER, config_defaults::PREFIX_MARKER)
    }

    fn get_mobile_flag_column(&self) -> String {
        self.get_config_or_default(
            config_keys::MOBILE_FLAG_COLUMN,
            config_defaults::MOBILE_FLAG_COLUMN,
        )
    }

    fn get_mobile_flag_value(&self) -> String {
        self.get_config_or_default(
            config_keys::MOBILE_FLAG_VALUE,
            config_defaults::MOBILE_FLAG_VALUE,
        )
    }

    fn get_stray_header_literal(&self) -> String {
        self.get_config_or_default(
            config_keys::STRAY_HEADER_LITERAL,
            config_defaults::STRAY_HEADER_LITERAL,
        )
    }

    fn get_campaign_policy(&self) -> CampaignPolicy {
        self.campaign_policy
    }
}
