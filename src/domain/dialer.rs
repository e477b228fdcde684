// ==========================================
// 拨号器报表 - 呼叫记录领域模型
// ==========================================
// 两类派生记录:
// - OutcomeRecord: 每次拨号尝试的结果（Number Type.1 == mobile_number）
// - CdrRecord: 每条底层话路的时长/状态明细（ID 为空的错位行）
// ==========================================

use crate::domain::types::{Campaign, DialResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// OutcomeRecord - 呼叫结果记录
// ==========================================
// 缺失值统一为空字符串，不出现 None
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    pub id: String,
    pub time: String, // 原始时间字符串，按字典序排序
    pub number_type: String,
    pub agent: String,
    pub call_disposition: String,
    pub dial_result: DialResult,
    pub campaign: Campaign,

    // 厂商透传列（保持表头顺序）
    pub passthrough: Vec<(String, String)>,
}

impl OutcomeRecord {
    /// 读取透传列
    pub fn passthrough_value(&self, column: &str) -> Option<&str> {
        self.passthrough
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }
}

// ==========================================
// CdrRecord - 话单明细
// ==========================================
// 录音文件列在映射阶段丢弃，不进入模型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdrRecord {
    pub id: String,
    pub time: String,
    pub call_duration: u64, // 秒
    pub ring_duration: u64, // 秒
    pub talk_duration: u64, // 秒
    pub status: String,
    pub reason: String,
    pub outbound_caller_id: String,
    pub campaign: Campaign,
}

// ==========================================
// ClassificationStats - 行分区统计
// ==========================================
// 不变式: outcome + cdr + stray_header + discarded == total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationStats {
    pub total_rows: usize,
    pub outcome_rows: usize,
    pub cdr_rows: usize,
    pub stray_header_rows: usize,
    pub discarded_rows: usize,
}

impl ClassificationStats {
    pub fn is_balanced(&self) -> bool {
        self.outcome_rows + self.cdr_rows + self.stray_header_rows + self.discarded_rows
            == self.total_rows
    }
}

// ==========================================
// ClassifiedExport - 一次上传的完整分类结果
// ==========================================
// 会话上下文中整体替换，不做原地修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedExport {
    pub upload_id: Uuid,
    pub source_file: String,
    pub campaign: Campaign,
    pub imported_at: DateTime<Utc>,
    pub outcomes: Vec<OutcomeRecord>,
    pub cdrs: Vec<CdrRecord>,
    pub stats: ClassificationStats,
}
