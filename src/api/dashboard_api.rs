// ==========================================
// 拨号器报表 - 驾驶舱 API
// ==========================================
// 职责: 基于结果记录集计算汇总指标与聚合序列
// 输入: ClassifiedExport（只读）
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::app::state::DashboardSession;
use crate::domain::{Campaign, ClassificationStats, ClassifiedExport, DialResult, OutcomeRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

// ==========================================
// DTO
// ==========================================

/// 顶部指标行
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DialerMetrics {
    pub total_calls: usize,
    pub complete_calls: usize,
    pub failed_calls: usize,
    pub abandoned_calls: usize,
    pub no_answer: usize,
}

/// 分类计数（图表数据点）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    /// 分类值（空值作为独立分类保留为空字符串）
    pub category: String,
    pub count: usize,
    /// 占比（百分比，0-100）
    pub share: f64,
}

/// 图表序列
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    /// 标题的国际化键
    pub title_key: &'static str,
    /// 分组维度列名
    pub dimension: &'static str,
    pub points: Vec<CategoryCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardCharts {
    pub agent_answered_calls: ChartSeries,
    pub call_dispositions: ChartSeries,
    pub dial_outcomes: ChartSeries,
}

/// 驾驶舱视图（不含记录明细）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub upload_id: Uuid,
    pub source_file: String,
    pub campaign: Campaign,
    pub imported_at: DateTime<Utc>,
    pub stats: ClassificationStats,
    pub metrics: DialerMetrics,
    pub charts: DashboardCharts,
}

// ==========================================
// DashboardApi
// ==========================================

/// 驾驶舱API（无状态）
#[derive(Debug, Default, Clone, Copy)]
pub struct DashboardApi;

impl DashboardApi {
    pub fn new() -> Self {
        Self
    }

    /// 从会话当前数据集构建驾驶舱
    pub fn dashboard_for_session(&self, session: &DashboardSession) -> ApiResult<Dashboard> {
        let export = session.current().ok_or(ApiError::NoActiveDataset)?;
        Ok(self.build_dashboard(&export))
    }

    pub fn build_dashboard(&self, export: &ClassifiedExport) -> Dashboard {
        Dashboard {
            upload_id: export.upload_id,
            source_file: export.source_file.clone(),
            campaign: export.campaign.clone(),
            imported_at: export.imported_at,
            stats: export.stats,
            metrics: self.metrics(&export.outcomes),
            charts: self.charts(&export.outcomes),
        }
    }

    /// 按拨号结果计数
    pub fn metrics(&self, outcomes: &[OutcomeRecord]) -> DialerMetrics {
        let count_of = |target: DialResult| {
            outcomes
                .iter()
                .filter(|r| r.dial_result == target)
                .count()
        };

        DialerMetrics {
            total_calls: outcomes.len(),
            complete_calls: count_of(DialResult::Completed),
            failed_calls: count_of(DialResult::Failed),
            abandoned_calls: count_of(DialResult::Abandon),
            no_answer: count_of(DialResult::NoAnswer),
        }
    }

    pub fn charts(&self, outcomes: &[OutcomeRecord]) -> DashboardCharts {
        DashboardCharts {
            agent_answered_calls: ChartSeries {
                title_key: "charts.agent_answered_calls",
                dimension: "Agent",
                points: value_counts(outcomes.iter().map(|r| r.agent.as_str())),
            },
            call_dispositions: ChartSeries {
                title_key: "charts.call_dispositions",
                dimension: "Call Disposition",
                points: value_counts(outcomes.iter().map(|r| r.call_disposition.as_str())),
            },
            dial_outcomes: ChartSeries {
                title_key: "charts.dial_outcomes",
                dimension: "Dial Result",
                points: value_counts(outcomes.iter().map(|r| r.dial_result.as_str())),
            },
        }
    }
}

/// 分类计数: 按数量降序，数量相同按首次出现顺序
pub fn value_counts<'a, I>(values: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut order: Vec<&'a str> = Vec::new();
    let mut counts: HashMap<&'a str, usize> = HashMap::new();
    for value in values {
        let entry = counts.entry(value).or_insert(0);
        if *entry == 0 {
            order.push(value);
        }
        *entry += 1;
    }

    let total: usize = counts.values().sum();
    let mut points: Vec<CategoryCount> = order
        .into_iter()
        .map(|category| {
            let count = counts.get(category).copied().unwrap_or(0);
            CategoryCount {
                category: category.to_string(),
                count,
                share: if total == 0 {
                    0.0
                } else {
                    count as f64 * 100.0 / total as f64
                },
            }
        })
        .collect();

    // sort_by 为稳定排序，相同数量保持首次出现顺序
    points.sort_by(|a, b| b.count.cmp(&a.count));
    points
}
