// ==========================================
// 拨号器报表 - 导入层（记录分类器）
// ==========================================
// 职责: 拨号器导出文件 → 结果记录集 + 话单记录集
// 支持: CSV
// ==========================================

// 模块声明
pub mod campaign;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod record_classifier;
pub mod record_classifier_trait;
pub mod row_classifier;

// 重导出核心类型
pub use campaign::derive_campaign;
pub use error::{ImportError, ImportResult};
pub use field_mapper::{CdrColumn, FieldMapper};
pub use file_parser::CsvParser;
pub use record_classifier::{ClassifiedRecords, RecordClassifier};
pub use row_classifier::DialerRowClassifier;

// 重导出 Trait 接口
pub use record_classifier_trait::{FileParser, RowClassifier, RowKind};
