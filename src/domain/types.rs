// ==========================================
// 拨号器报表 - 领域类型定义
// ==========================================
// 职责: 拨号结果枚举 / 活动标签
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// DialResult - 拨号结果
// ==========================================
// 导出文件中的取值形如 "C-Completed"，前缀字母为结果大类
// 未识别的取值原样保留，不做丢弃
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DialResult {
    Completed, // C-Completed
    Failed,    // F-Failed
    Abandon,   // R-Abandon
    NoAnswer,  // R-No Answer
    Other(String),
}

impl DialResult {
    pub const COMPLETED: &'static str = "C-Completed";
    pub const FAILED: &'static str = "F-Failed";
    pub const ABANDON: &'static str = "R-Abandon";
    pub const NO_ANSWER: &'static str = "R-No Answer";

    /// 从导出原始字符串解析（大小写敏感，与导出文件逐字匹配）
    pub fn from_raw(value: &str) -> Self {
        match value {
            Self::COMPLETED => DialResult::Completed,
            Self::FAILED => DialResult::Failed,
            Self::ABANDON => DialResult::Abandon,
            Self::NO_ANSWER => DialResult::NoAnswer,
            other => DialResult::Other(other.to_string()),
        }
    }

    /// 导出文件中的原始字符串
    pub fn as_str(&self) -> &str {
        match self {
            DialResult::Completed => Self::COMPLETED,
            DialResult::Failed => Self::FAILED,
            DialResult::Abandon => Self::ABANDON,
            DialResult::NoAnswer => Self::NO_ANSWER,
            DialResult::Other(raw) => raw,
        }
    }
}

impl fmt::Display for DialResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for DialResult {
    fn from(value: String) -> Self {
        DialResult::from_raw(&value)
    }
}

impl From<DialResult> for String {
    fn from(value: DialResult) -> Self {
        value.as_str().to_string()
    }
}

// ==========================================
// Campaign - 活动标签
// ==========================================
// 每次上传从文件名派生一次，附加到两类记录的每一行
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Campaign(String);

impl Campaign {
    pub fn new(label: impl Into<String>) -> Self {
        Campaign(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Campaign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
