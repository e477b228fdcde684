// ==========================================
// 拨号器报表 - 命令行入口
// ==========================================
// 流程: 配置 → 导入（分类）→ 会话 → 驾驶舱渲染
// 失败: 诊断写日志，用户只看到统一提示
// ==========================================

use anyhow::Context;
use clap::Parser;
use dialer_report::app::{render_json, render_text, OutputFormat, RenderOptions};
use dialer_report::{i18n, logging, ConfigManager, DashboardApi, DashboardSession, ImportApi};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "dialer-report", version, about = "Dialer export report")]
struct Cli {
    /// 拨号器导出文件（.csv），活动标签取自文件名
    file: PathBuf,

    /// 配置文件路径（JSON）；缺省时读取用户配置目录
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// 输出格式
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// 同时渲染话单明细表
    #[arg(long)]
    show_cdrs: bool,

    /// 界面语言（en / zh-CN）
    #[arg(long, default_value = "en")]
    locale: String,

    /// JSON 格式日志
    #[arg(long)]
    log_json: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // 初始化日志系统
    logging::init(cli.log_json);
    i18n::set_locale(&cli.locale);

    tracing::info!(version = dialer_report::VERSION, "{} 启动", dialer_report::APP_NAME);

    // 加载配置
    let config = match &cli.config {
        Some(path) => ConfigManager::from_file(path)
            .with_context(|| format!("无法加载配置文件: {}", path.display()))?,
        None => ConfigManager::load_default().context("无法加载默认配置文件")?,
    };

    // 导入
    let import_api = ImportApi::new(config);
    let mut session = DashboardSession::new();
    let file = cli.file.to_string_lossy().to_string();

    let export = match session.apply_upload(import_api.import_file(&file)) {
        Ok(export) => export,
        Err(e) => {
            // 诊断日志已由导入层写出
            eprintln!("{}", e.user_message());
            return Ok(ExitCode::FAILURE);
        }
    };

    // 渲染驾驶舱
    let dashboard = DashboardApi::new().dashboard_for_session(&session)?;
    let output = match cli.format {
        OutputFormat::Text => {
            let options = RenderOptions {
                show_cdrs: cli.show_cdrs,
                ..Default::default()
            };
            render_text(&dashboard, &export, &options)
        }
        OutputFormat::Json => render_json(&dashboard).context("驾驶舱序列化失败")?,
    };
    println!("{}", output);

    Ok(ExitCode::SUCCESS)
}
