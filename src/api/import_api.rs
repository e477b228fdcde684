// ==========================================
// 拨号器报表 - 导入API
// ==========================================
// 职责: 上传 → 记录分类 → ClassifiedExport（含上传ID与导入时间）
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ClassifierConfigReader;
use crate::domain::ClassifiedExport;
use crate::importer::{ClassifiedRecords, ImportResult, RecordClassifier};
use chrono::Utc;
use std::path::Path;
use std::time::Instant;
use tracing::{error, info};
use uuid::Uuid;

/// 导入API
pub struct ImportApi<C>
where
    C: ClassifierConfigReader,
{
    classifier: RecordClassifier<C>,
}

impl<C> ImportApi<C>
where
    C: ClassifierConfigReader,
{
    /// 创建新的ImportApi实例
    pub fn new(config: C) -> Self {
        Self {
            classifier: RecordClassifier::new(config),
        }
    }

    /// 导入磁盘上的导出文件
    ///
    /// # 参数
    /// - file_path: 文件路径（.csv），活动标签取自文件名
    ///
    /// # 返回
    /// - Ok(ClassifiedExport): 分类结果
    /// - Err(ApiError::ImportError): 任一阶段失败，无部分结果
    pub fn import_file(&self, file_path: &str) -> ApiResult<ClassifiedExport> {
        if file_path.trim().is_empty() {
            return Err(ApiError::InvalidInput("文件路径不能为空".to_string()));
        }

        let path = Path::new(file_path);
        let source_file = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| file_path.to_string());

        let start = Instant::now();
        let result = self.classifier.classify_file(path);
        self.finish(result, source_file, start)
    }

    /// 导入内存中的上传内容
    ///
    /// # 参数
    /// - bytes: 文件内容
    /// - file_name: 上传时的原始文件名
    pub fn import_bytes(&self, bytes: &[u8], file_name: &str) -> ApiResult<ClassifiedExport> {
        let start = Instant::now();
        let result = self.classifier.classify_upload(bytes, file_name);
        self.finish(result, file_name.to_string(), start)
    }

    fn finish(
        &self,
        result: ImportResult<ClassifiedRecords>,
        source_file: String,
        start: Instant,
    ) -> ApiResult<ClassifiedExport> {
        let records = result.map_err(|e| {
            error!(source_file = %source_file, code = e.kind(), error = %e, "导入失败");
            ApiError::from(e)
        })?;

        let export = ClassifiedExport {
            upload_id: Uuid::new_v4(),
            source_file,
            campaign: records.campaign,
            imported_at: Utc::now(),
            outcomes: records.outcomes,
            cdrs: records.cdrs,
            stats: records.stats,
        };

        info!(
            upload_id = %export.upload_id,
            campaign = %export.campaign,
            outcomes = export.outcomes.len(),
            cdrs = export.cdrs.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "导入成功"
        );
        Ok(export)
    }
}
