// ==========================================
// 拨号器报表 - 领域层
// ==========================================
// 职责: 原始导出模型 / 派生记录 / 领域类型
// ==========================================

pub mod dialer;
pub mod raw_export;
pub mod types;

// 重导出核心类型
pub use dialer::{CdrRecord, ClassificationStats, ClassifiedExport, OutcomeRecord};
pub use raw_export::{RawExport, RawRow};
pub use types::{Campaign, DialResult};
