// ==========================================
// 拨号器报表 - 记录分类器实现
// ==========================================
// 职责: 一次上传 → 两个带活动标签、按时间排序的记录集
// 流程: 活动标签 → 解析 → 行判别 → 字段映射 → 类型转换 → 排序
// 原子性: 任一阶段失败则整体失败，不返回部分结果
// ==========================================

use crate::config::ClassifierConfigReader;
use crate::domain::{Campaign, CdrRecord, ClassificationStats, OutcomeRecord, RawExport};
use crate::importer::campaign::derive_campaign;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::CsvParser;
use crate::importer::record_classifier_trait::{FileParser, RowClassifier, RowKind};
use crate::importer::row_classifier::DialerRowClassifier;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// 分类结果（确定性: 相同输入字节与文件名得到相同结果）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRecords {
    pub campaign: Campaign,
    pub outcomes: Vec<OutcomeRecord>,
    pub cdrs: Vec<CdrRecord>,
    pub stats: ClassificationStats,
}

// ==========================================
// RecordClassifier
// ==========================================
pub struct RecordClassifier<C>
where
    C: ClassifierConfigReader,
{
    // 配置读取器
    config: C,

    // 文件解析器
    file_parser: Box<dyn FileParser>,
}

impl<C> RecordClassifier<C>
where
    C: ClassifierConfigReader,
{
    /// 使用 CSV 解析器创建分类器
    pub fn new(config: C) -> Self {
        Self {
            config,
            file_parser: Box::new(CsvParser),
        }
    }

    /// 内存上传: 字节 + 原始文件名
    #[instrument(skip(self, bytes), fields(bytes = bytes.len()))]
    pub fn classify_upload(&self, bytes: &[u8], file_name: &str) -> ImportResult<ClassifiedRecords> {
        // === 步骤 1: 活动标签 ===
        let campaign = derive_campaign(file_name, &self.config)?;
        debug!(campaign = %campaign, "活动标签派生完成");

        // === 步骤 2: 解析 ===
        let export = self.file_parser.parse_bytes(bytes)?;
        self.classify(&export, &campaign)
    }

    /// 磁盘文件: 活动标签取自文件名部分
    #[instrument(skip(self, file_path), fields(file_path = %file_path.display()))]
    pub fn classify_file(&self, file_path: &Path) -> ImportResult<ClassifiedRecords> {
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let campaign = derive_campaign(&file_name, &self.config)?;
        let export = self.file_parser.parse_file(file_path)?;
        self.classify(&export, &campaign)
    }

    /// 将原始导出拆分为结果记录集与话单记录集
    ///
    /// # 返回
    /// - Ok(ClassifiedRecords): 两个记录集均按 Time 升序（稳定排序）
    /// - Err(SchemaMismatchError): 必需列缺失
    /// - Err(DataConversionError): 任一话单时长无法解析
    #[instrument(skip(self, export, campaign), fields(campaign = %campaign))]
    pub fn classify(
        &self,
        export: &RawExport,
        campaign: &Campaign,
    ) -> ImportResult<ClassifiedRecords> {
        // === 步骤 3: 表头校验 ===
        let row_classifier = DialerRowClassifier::new(export, &self.config)?;
        let mapper = FieldMapper::new(export, &self.config)?;

        // === 步骤 4: 行判别 + 映射 ===
        let mut stats = ClassificationStats {
            total_rows: export.rows().len(),
            ..Default::default()
        };
        let mut outcomes = Vec::new();
        let mut cdr_rows = Vec::new();

        for row in export.rows() {
            match row_classifier.classify_row(row) {
                RowKind::Outcome => {
                    stats.outcome_rows += 1;
                    outcomes.push(mapper.map_outcome(row, campaign));
                }
                RowKind::CallDetail => {
                    stats.cdr_rows += 1;
                    cdr_rows.push(row);
                }
                RowKind::StrayHeader => {
                    stats.stray_header_rows += 1;
                    debug!(row_number = row.row_number, "跳过夹带表头行");
                }
                RowKind::Discarded => stats.discarded_rows += 1,
            }
        }

        if !cdr_rows.is_empty() {
            mapper.ensure_cdr_layout()?;
        }

        // === 步骤 5: 话单类型转换（任一失败即整体失败）===
        let mut cdrs = cdr_rows
            .into_iter()
            .map(|row| mapper.map_call_detail(row, campaign))
            .collect::<ImportResult<Vec<_>>>()
            .map_err(|e| {
                warn!(error = %e, "话单时长转换失败");
                e
            })?;

        // === 步骤 6: 排序（稳定，相同时间保持原始顺序）===
        outcomes.sort_by(|a, b| a.time.cmp(&b.time));
        cdrs.sort_by(|a, b| a.time.cmp(&b.time));

        info!(
            total_rows = stats.total_rows,
            outcomes = stats.outcome_rows,
            cdrs = stats.cdr_rows,
            stray_headers = stats.stray_header_rows,
            discarded = stats.discarded_rows,
            "记录分类完成"
        );

        Ok(ClassifiedRecords {
            campaign: campaign.clone(),
            outcomes,
            cdrs,
            stats,
        })
    }
}
