// ==========================================
// 拨号器报表 - 字段映射器实现
// ==========================================
// 职责: 原始行 → 结果记录 / 话单记录 + 类型转换
// 话单行按位置重映射: 去掉空的 ID 列后，其余列依次对应话单字段
// ==========================================

use crate::config::ClassifierConfigReader;
use crate::domain::{Campaign, CdrRecord, DialResult, OutcomeRecord, RawExport, RawRow};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::row_classifier::{REQUIRED_ID_COLUMN, REQUIRED_TIME_COLUMN};

pub const AGENT_COLUMN: &str = "Agent";
pub const CALL_DISPOSITION_COLUMN: &str = "Call Disposition";
pub const DIAL_RESULT_COLUMN: &str = "Dial Result";
pub const CAMPAIGN_COLUMN: &str = "Campaign";

// ==========================================
// CdrColumn - 话单字段（按源位置顺序）
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CdrColumn {
    Id,
    Time,
    CallDuration,
    RingDuration,
    TalkDuration,
    Status,
    Reason,
    OutboundCallerId,
    RecordingFile,
}

impl CdrColumn {
    /// 源行去掉 ID 列后的位置顺序
    pub const SOURCE_LAYOUT: [CdrColumn; 9] = [
        CdrColumn::Id,
        CdrColumn::Time,
        CdrColumn::CallDuration,
        CdrColumn::RingDuration,
        CdrColumn::TalkDuration,
        CdrColumn::Status,
        CdrColumn::Reason,
        CdrColumn::OutboundCallerId,
        CdrColumn::RecordingFile,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            CdrColumn::Id => "ID",
            CdrColumn::Time => "Time",
            CdrColumn::CallDuration => "Call Duration",
            CdrColumn::RingDuration => "Ring Duration",
            CdrColumn::TalkDuration => "Talk Duration",
            CdrColumn::Status => "Status",
            CdrColumn::Reason => "Reason",
            CdrColumn::OutboundCallerId => "Outbound Caller ID",
            CdrColumn::RecordingFile => "Recording File",
        }
    }
}

// ==========================================
// FieldMapper
// ==========================================
pub struct FieldMapper {
    // 结果行列位置
    id_idx: usize,
    time_idx: usize,
    mobile_flag_idx: usize,
    agent_idx: usize,
    disposition_idx: usize,
    dial_result_idx: usize,
    passthrough: Vec<(usize, String)>,

    // 话单行: CdrColumn::SOURCE_LAYOUT[i] 取自源位置 cdr_sources[i]
    cdr_sources: Vec<usize>,
    width: usize,
}

impl FieldMapper {
    /// 根据表头构建映射
    ///
    /// # 返回
    /// - Err(SchemaMismatchError): 结果行必需列缺失
    pub fn new<C: ClassifierConfigReader + ?Sized>(
        export: &RawExport,
        config: &C,
    ) -> ImportResult<Self> {
        let mobile_flag_column = config.get_mobile_flag_column();
        let required = [
            REQUIRED_ID_COLUMN,
            REQUIRED_TIME_COLUMN,
            mobile_flag_column.as_str(),
            AGENT_COLUMN,
            CALL_DISPOSITION_COLUMN,
            DIAL_RESULT_COLUMN,
        ];

        let mut indices = Vec::with_capacity(required.len());
        let mut missing = Vec::new();
        for name in required {
            match export.column_index(name) {
                Some(idx) => indices.push(idx),
                None => missing.push(name),
            }
        }
        if !missing.is_empty() {
            return Err(ImportError::SchemaMismatchError(format!(
                "缺少必需列: {}",
                missing.join(", ")
            )));
        }

        let passthrough = export
            .headers()
            .iter()
            .enumerate()
            .filter(|(idx, name)| !indices.contains(idx) && name.as_str() != CAMPAIGN_COLUMN)
            .map(|(idx, name)| (idx, name.clone()))
            .collect();

        let id_idx = indices[0];
        let cdr_sources = (0..export.width())
            .filter(|idx| *idx != id_idx)
            .take(CdrColumn::SOURCE_LAYOUT.len())
            .collect();

        Ok(Self {
            id_idx,
            time_idx: indices[1],
            mobile_flag_idx: indices[2],
            agent_idx: indices[3],
            disposition_idx: indices[4],
            dial_result_idx: indices[5],
            passthrough,
            cdr_sources,
            width: export.width(),
        })
    }

    /// 表头宽度是否足以容纳话单布局（ID + 9 列）
    pub fn ensure_cdr_layout(&self) -> ImportResult<()> {
        if self.cdr_sources.len() < CdrColumn::SOURCE_LAYOUT.len() {
            return Err(ImportError::SchemaMismatchError(format!(
                "话单行需要至少 {} 列，表头仅有 {} 列",
                CdrColumn::SOURCE_LAYOUT.len() + 1,
                self.width
            )));
        }
        Ok(())
    }

    /// 映射结果行（缺失值为空字符串）
    pub fn map_outcome(&self, row: &RawRow, campaign: &Campaign) -> OutcomeRecord {
        OutcomeRecord {
            id: row.cell(self.id_idx).to_string(),
            time: row.cell(self.time_idx).to_string(),
            number_type: row.cell(self.mobile_flag_idx).to_string(),
            agent: row.cell(self.agent_idx).to_string(),
            call_disposition: row.cell(self.disposition_idx).to_string(),
            dial_result: DialResult::from_raw(row.cell(self.dial_result_idx)),
            campaign: campaign.clone(),
            passthrough: self
                .passthrough
                .iter()
                .map(|(idx, name)| (name.clone(), row.cell(*idx).to_string()))
                .collect(),
        }
    }

    /// 映射话单行（按位置重映射，录音文件列丢弃）
    ///
    /// # 返回
    /// - Err(DataConversionError): 时长字段去空白后不是非负整数
    pub fn map_call_detail(&self, row: &RawRow, campaign: &Campaign) -> ImportResult<CdrRecord> {
        let text = |column: CdrColumn| self.cdr_cell(row, column).to_string();

        Ok(CdrRecord {
            id: text(CdrColumn::Id),
            time: text(CdrColumn::Time),
            call_duration: self.parse_duration(row, CdrColumn::CallDuration)?,
            ring_duration: self.parse_duration(row, CdrColumn::RingDuration)?,
            talk_duration: self.parse_duration(row, CdrColumn::TalkDuration)?,
            status: text(CdrColumn::Status),
            reason: text(CdrColumn::Reason),
            outbound_caller_id: text(CdrColumn::OutboundCallerId),
            campaign: campaign.clone(),
        })
    }

    fn cdr_cell<'a>(&self, row: &'a RawRow, column: CdrColumn) -> &'a str {
        CdrColumn::SOURCE_LAYOUT
            .iter()
            .position(|c| *c == column)
            .and_then(|pos| self.cdr_sources.get(pos))
            .map(|idx| row.cell(*idx))
            .unwrap_or("")
    }

    /// 解析时长（秒）: 去除首尾空白后按非负整数解析
    fn parse_duration(&self, row: &RawRow, column: CdrColumn) -> ImportResult<u64> {
        let raw = self.cdr_cell(row, column);
        raw.trim()
            .parse::<u64>()
            .map_err(|_| ImportError::DataConversionError {
                row: row.row_number,
                field: column.header().to_string(),
                value: raw.to_string(),
            })
    }
}
