// ==========================================
// 拨号器报表 - 活动标签派生
// ==========================================
// 规则: 文件名截取到第一个完成标记之前，再移除所有前缀标记
// 例: "PSE-CampaignX-Completed-2024.csv" → "CampaignX"
// ==========================================

use crate::config::{CampaignPolicy, ClassifierConfigReader};
use crate::domain::Campaign;
use crate::importer::error::{ImportError, ImportResult};
use std::path::Path;
use tracing::warn;

/// 从上传文件名派生活动标签
///
/// 传入路径时只取文件名部分。
pub fn derive_campaign<C: ClassifierConfigReader + ?Sized>(
    file_name: &str,
    config: &C,
) -> ImportResult<Campaign> {
    let name = Path::new(file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(file_name);

    let completed_marker = config.get_completed_marker();
    let prefix_marker = config.get_prefix_marker();

    let head = match name.find(&completed_marker) {
        Some(end) => &name[..end],
        None => match config.get_campaign_policy() {
            CampaignPolicy::Strict => {
                return Err(ImportError::InputFormatError(format!(
                    "文件名缺少 '{}' 标记: {}",
                    completed_marker, name
                )));
            }
            CampaignPolicy::Fallback => {
                warn!(file_name = %name, marker = %completed_marker, "文件名缺少完成标记，使用原始文件名作为活动标签");
                name
            }
        },
    };

    let label = if prefix_marker.is_empty() {
        head.to_string()
    } else {
        head.replace(&prefix_marker, "")
    };

    if label.is_empty() {
        return Err(ImportError::InputFormatError(format!(
            "无法从文件名派生活动标签: {}",
            name
        )));
    }

    Ok(Campaign::new(label))
}
