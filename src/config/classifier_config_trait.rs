// ==========================================
// 拨号器报表 - 分类器配置读取接口
// ==========================================
// 职责: 定义记录分类器所需的配置项读取方法
// 实现者: ConfigManager
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// CampaignPolicy - 文件名缺少标记时的处理策略
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignPolicy {
    /// 文件名缺少完成标记 → InputFormatError
    #[default]
    Strict,
    /// 文件名缺少完成标记 → 使用原始文件名（去前缀）作为活动标签
    Fallback,
}

impl CampaignPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignPolicy::Strict => "strict",
            CampaignPolicy::Fallback => "fallback",
        }
    }
}

impl fmt::Display for CampaignPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(CampaignPolicy::Strict),
            "fallback" => Ok(CampaignPolicy::Fallback),
            other => Err(format!("未知的活动标签策略: {}（可选 strict / fallback）", other)),
        }
    }
}

// ==========================================
// ClassifierConfigReader Trait
// ==========================================
pub trait ClassifierConfigReader: Send + Sync {
    /// 文件名中活动标签的结束标记（默认 "-Completed"）
    fn get_completed_marker(&self) -> String;

    /// 文件名前缀标记，派生时移除（默认 "PSE-"）
    fn get_prefix_marker(&self) -> String;

    /// 手机号标记列（默认 "Number Type.1"）
    fn get_mobile_flag_column(&self) -> String;

    /// 手机号标记值（默认 "mobile_number"）
    fn get_mobile_flag_value(&self) -> String;

    /// 文件中夹带的表头行在 Time 列上的字面值（默认 "ID"）
    fn get_stray_header_literal(&self) -> String;

    /// 活动标签派生策略
    fn get_campaign_policy(&self) -> CampaignPolicy;
}
