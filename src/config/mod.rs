// ==========================================
// 拨号器报表 - 配置层
// ==========================================
// 职责: 分类器配置（文件名标记 / 行判别字面值 / 活动标签策略）
// ==========================================

pub mod classifier_config_trait;
pub mod config_manager;

// 重导出核心配置管理器
pub use classifier_config_trait::{CampaignPolicy, ClassifierConfigReader};
pub use config_manager::{config_defaults, config_keys, ConfigError, ConfigManager};
