// ==========================================
// 拨号器报表 - 会话状态
// ==========================================
// 职责: 持有当前会话唯一的已分类数据集
// 生命周期: 导入成功时创建 → 下次成功导入整体替换 → 会话结束丢弃
// 导入失败不影响已有数据集
// ==========================================

use crate::api::ApiResult;
use crate::domain::ClassifiedExport;
use std::sync::Arc;
use tracing::info;

/// 会话上下文
#[derive(Debug, Default)]
pub struct DashboardSession {
    active: Option<Arc<ClassifiedExport>>,
}

impl DashboardSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前数据集
    pub fn current(&self) -> Option<Arc<ClassifiedExport>> {
        self.active.clone()
    }

    pub fn has_data(&self) -> bool {
        self.active.is_some()
    }

    /// 整体替换当前数据集，返回被替换的旧数据集
    pub fn replace(&mut self, export: ClassifiedExport) -> Option<Arc<ClassifiedExport>> {
        let next = Arc::new(export);
        info!(
            upload_id = %next.upload_id,
            campaign = %next.campaign,
            "会话数据集已替换"
        );
        self.active.replace(next)
    }

    /// 应用一次上传结果: 成功则替换，失败则保持原数据集并返回错误
    pub fn apply_upload(
        &mut self,
        result: ApiResult<ClassifiedExport>,
    ) -> ApiResult<Arc<ClassifiedExport>> {
        let export = result?;
        self.replace(export);
        self.current()
            .ok_or_else(|| crate::api::ApiError::InternalError("会话数据集写入失败".to_string()))
    }

    /// 结束会话
    pub fn clear(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::domain::{Campaign, ClassificationStats};
    use crate::importer::ImportError;
    use chrono::Utc;
    use uuid::Uuid;

    fn export(campaign: &str) -> ClassifiedExport {
        ClassifiedExport {
            upload_id: Uuid::new_v4(),
            source_file: format!("{}-Completed.csv", campaign),
            campaign: Campaign::new(campaign),
            imported_at: Utc::now(),
            outcomes: Vec::new(),
            cdrs: Vec::new(),
            stats: ClassificationStats::default(),
        }
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = DashboardSession::new();
        assert!(!session.has_data());
        assert!(session.current().is_none());
    }

    #[test]
    fn test_replace_is_last_write_wins() {
        let mut session = DashboardSession::new();
        assert!(session.replace(export("First")).is_none());

        let previous = session.replace(export("Second")).unwrap();
        assert_eq!(previous.campaign.as_str(), "First");
        assert_eq!(session.current().unwrap().campaign.as_str(), "Second");
    }

    #[test]
    fn test_failed_upload_keeps_previous_dataset() {
        let mut session = DashboardSession::new();
        session.apply_upload(Ok(export("First"))).unwrap();

        let failed = session.apply_upload(Err(ApiError::from(ImportError::InputFormatError(
            "坏文件".to_string(),
        ))));

        assert!(failed.is_err());
        assert_eq!(session.current().unwrap().campaign.as_str(), "First");
    }

    #[test]
    fn test_clear() {
        let mut session = DashboardSession::new();
        session.replace(export("First"));
        session.clear();
        assert!(!session.has_data());
    }
}
