// ==========================================
// 拨号器报表 - 行类别判别器
// ==========================================
// 判别顺序（每行恰好一类）:
// 1. 手机号标记列 == mobile_number           → Outcome
// 2. ID 为空 且 Time == "ID"                  → StrayHeader
// 3. ID 为空                                  → CallDetail
// 4. 其他                                      → Discarded
// ==========================================

use crate::config::ClassifierConfigReader;
use crate::domain::{RawExport, RawRow};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::record_classifier_trait::{RowClassifier, RowKind};

/// 结果行与话单行共用的必需列
pub const REQUIRED_ID_COLUMN: &str = "ID";
pub const REQUIRED_TIME_COLUMN: &str = "Time";

pub struct DialerRowClassifier {
    id_idx: usize,
    time_idx: usize,
    mobile_flag_idx: usize,
    mobile_flag_value: String,
    stray_header_literal: String,
}

impl DialerRowClassifier {
    /// 根据表头解析判别所需列位置
    ///
    /// # 返回
    /// - Err(SchemaMismatchError): ID / Time / 手机号标记列缺失
    pub fn new<C: ClassifierConfigReader + ?Sized>(
        export: &RawExport,
        config: &C,
    ) -> ImportResult<Self> {
        let mobile_flag_column = config.get_mobile_flag_column();
        let columns = [REQUIRED_ID_COLUMN, REQUIRED_TIME_COLUMN, mobile_flag_column.as_str()];

        let missing: Vec<&str> = columns
            .iter()
            .copied()
            .filter(|c| export.column_index(c).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ImportError::SchemaMismatchError(format!(
                "缺少必需列: {}",
                missing.join(", ")
            )));
        }

        let index_of = |name: &str| {
            export.column_index(name).ok_or_else(|| {
                ImportError::SchemaMismatchError(format!("缺少必需列: {}", name))
            })
        };

        Ok(Self {
            id_idx: index_of(REQUIRED_ID_COLUMN)?,
            time_idx: index_of(REQUIRED_TIME_COLUMN)?,
            mobile_flag_idx: index_of(mobile_flag_column.as_str())?,
            mobile_flag_value: config.get_mobile_flag_value(),
            stray_header_literal: config.get_stray_header_literal(),
        })
    }

    /// 手机号结果行
    pub fn is_outcome_row(&self, row: &RawRow) -> bool {
        row.cell(self.mobile_flag_idx) == self.mobile_flag_value
    }

    /// 文件中间夹带的表头行
    pub fn is_stray_header_row(&self, row: &RawRow) -> bool {
        row.is_blank(self.id_idx) && row.cell(self.time_idx) == self.stray_header_literal
    }

    /// 话单行: ID 为空且不是夹带表头
    pub fn is_call_detail_row(&self, row: &RawRow) -> bool {
        row.is_blank(self.id_idx) && !self.is_stray_header_row(row)
    }
}

impl RowClassifier for DialerRowClassifier {
    fn classify_row(&self, row: &RawRow) -> RowKind {
        if self.is_outcome_row(row) {
            RowKind::Outcome
        } else if self.is_stray_header_row(row) {
            RowKind::StrayHeader
        } else if self.is_call_detail_row(row) {
            RowKind::CallDetail
        } else {
            RowKind::Discarded
        }
    }
}
