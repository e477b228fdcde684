// ==========================================
// 拨号器报表 - 核心库
// ==========================================
// 输入: 拨号器“已拨打”导出 CSV（结果行与话单行交错）
// 输出: 结果记录集 + 话单记录集 + 汇总驾驶舱
// 系统定位: 单用户、单会话报表工具，不做持久化
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 记录与类型
pub mod domain;

// 导入层 - 记录分类器
pub mod importer;

// 配置层 - 分类器配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 导入与驾驶舱接口
pub mod api;

// 应用层 - 会话与渲染
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    Campaign, CdrRecord, ClassificationStats, ClassifiedExport, DialResult, OutcomeRecord,
    RawExport, RawRow,
};

// 导入
pub use importer::{ClassifiedRecords, ImportError, ImportResult, RecordClassifier};

// 配置
pub use config::{CampaignPolicy, ClassifierConfigReader, ConfigManager};

// API
pub use api::{ApiError, ApiResult, Dashboard, DashboardApi, DialerMetrics, ImportApi};

// 会话
pub use app::DashboardSession;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Dialer Report";
