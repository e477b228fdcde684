// ==========================================
// 拨号器报表 - 驾驶舱渲染
// ==========================================
// 输出: 文本（指标行 / 横向柱状图 / 对齐表格）或 JSON（仅汇总视图）
// ==========================================

use crate::api::{ChartSeries, Dashboard};
use crate::domain::ClassifiedExport;
use crate::i18n::t;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// 是否渲染话单明细表
    pub show_cdrs: bool,
    /// 柱状图最大宽度（字符）
    pub bar_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_cdrs: false,
            bar_width: 40,
        }
    }
}

/// JSON 视图（不含记录明细）
pub fn render_json(dashboard: &Dashboard) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(dashboard)
}

/// 文本视图
pub fn render_text(
    dashboard: &Dashboard,
    export: &ClassifiedExport,
    options: &RenderOptions,
) -> String {
    let mut out = String::new();

    // === 标题 ===
    out.push_str(&format!(
        "{} - {}: {}\n\n",
        t("dashboard.title"),
        t("dashboard.campaign"),
        dashboard.campaign
    ));

    // === 第 1 行: 指标 ===
    let metrics = &dashboard.metrics;
    let cards = [
        (t("metrics.total_calls"), metrics.total_calls),
        (t("metrics.complete_calls"), metrics.complete_calls),
        (t("metrics.failed"), metrics.failed_calls),
        (t("metrics.abandoned_calls"), metrics.abandoned_calls),
        (t("metrics.no_answer"), metrics.no_answer),
    ];
    let line = cards
        .iter()
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(&line);
    out.push_str("\n\n");

    // === 第 2 行: 图表 ===
    for series in [
        &dashboard.charts.agent_answered_calls,
        &dashboard.charts.call_dispositions,
        &dashboard.charts.dial_outcomes,
    ] {
        out.push_str(&render_chart(series, options.bar_width));
        out.push('\n');
    }

    // === 第 3 行: 呼叫结果表 ===
    let mut headers: Vec<String> = [
        "ID",
        "Time",
        "Number Type.1",
        "Agent",
        "Call Disposition",
        "Dial Result",
        "Campaign",
    ]
    .iter()
    .map(|h| h.to_string())
    .collect();
    if let Some(first) = export.outcomes.first() {
        headers.extend(first.passthrough.iter().map(|(name, _)| name.clone()));
    }
    let rows: Vec<Vec<String>> = export
        .outcomes
        .iter()
        .map(|r| {
            let mut cells = vec![
                r.id.clone(),
                r.time.clone(),
                r.number_type.clone(),
                r.agent.clone(),
                r.call_disposition.clone(),
                r.dial_result.to_string(),
                r.campaign.to_string(),
            ];
            cells.extend(r.passthrough.iter().map(|(_, value)| value.clone()));
            cells
        })
        .collect();
    out.push_str(&render_table(&t("tables.dialer_call_results"), &headers, &rows));

    // === 第 4 行: 话单表（可选）===
    if options.show_cdrs {
        let headers: Vec<String> = [
            "ID",
            "Time",
            "Call Duration",
            "Ring Duration",
            "Talk Duration",
            "Status",
            "Reason",
            "Outbound Caller ID",
            "Campaign",
        ]
        .iter()
        .map(|h| h.to_string())
        .collect();
        let rows: Vec<Vec<String>> = export
            .cdrs
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.time.clone(),
                    r.call_duration.to_string(),
                    r.ring_duration.to_string(),
                    r.talk_duration.to_string(),
                    r.status.clone(),
                    r.reason.clone(),
                    r.outbound_caller_id.clone(),
                    r.campaign.to_string(),
                ]
            })
            .collect();
        out.push('\n');
        out.push_str(&render_table(&t("tables.dialer_cdrs"), &headers, &rows));
    }

    out
}

/// 横向柱状图
fn render_chart(series: &ChartSeries, bar_width: usize) -> String {
    let mut out = format!("{}\n", t(series.title_key));
    if series.points.is_empty() {
        out.push_str(&format!("  {}\n", t("common.no_data")));
        return out;
    }

    let labels: Vec<String> = series
        .points
        .iter()
        .map(|p| {
            if p.category.is_empty() {
                t("common.blank")
            } else {
                p.category.clone()
            }
        })
        .collect();
    let label_width = labels.iter().map(|l| display_width(l)).max().unwrap_or(0);
    let max_count = series.points.iter().map(|p| p.count).max().unwrap_or(0);

    for (label, point) in labels.iter().zip(&series.points) {
        let bar_len = if max_count == 0 {
            0
        } else {
            // 非零计数至少显示一格
            ((point.count * bar_width) / max_count).max(1)
        };
        out.push_str(&format!(
            "  {}{} {} {} ({:.1}%)\n",
            label,
            " ".repeat(label_width - display_width(label)),
            "█".repeat(bar_len),
            point.count,
            point.share
        ));
    }
    out
}

/// 对齐表格
fn render_table(title: &str, headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(idx) {
                *width = (*width).max(display_width(cell));
            }
        }
    }

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{}{}", cell, " ".repeat(width - display_width(cell))))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = format!("{}\n", title);
    out.push_str(&format_row(headers));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    if rows.is_empty() {
        out.push_str(&format!("{}\n", t("common.no_data")));
    }
    for row in rows {
        out.push_str(&format_row(row.as_slice()));
        out.push('\n');
    }
    out
}

fn display_width(text: &str) -> usize {
    text.chars().count()
}
