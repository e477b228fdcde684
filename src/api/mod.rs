// ==========================================
// 拨号器报表 - API 层
// ==========================================
// 职责: 提供导入与驾驶舱接口，供命令行入口调用
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod import_api;

// 重导出核心类型
pub use dashboard_api::{
    value_counts, CategoryCount, ChartSeries, Dashboard, DashboardApi, DashboardCharts,
    DialerMetrics,
};
pub use error::{ApiError, ApiResult};
pub use import_api::ImportApi;
