// ==========================================
// 拨号器报表 - 应用层
// ==========================================
// 职责: 会话上下文 + 驾驶舱渲染，连接命令行入口与 API 层
// ==========================================

pub mod render;
pub mod state;

// 重导出
pub use render::{render_json, render_text, OutputFormat, RenderOptions};
pub use state::DashboardSession;
