// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 构造拨号器导出 CSV（结果行 / 话单行 / 夹带表头行）
// ==========================================

#![allow(dead_code)]

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// 厂商导出表头（"Number Type" 出现两次）
pub const VENDOR_HEADER: &str =
    "ID,Time,Number,Number Type,Contact Number,Number Type,Agent,Call Disposition,Dial Result,List";

/// 夹带在文件中间的话单表头行
pub const STRAY_HEADER_ROW: &str =
    ",ID,Time,Call Duration,Ring Duration,Talk Duration,Status,Reason,Outbound Caller ID,Recording File";

pub const STANDARD_FILE_NAME: &str = "PSE-CampaignX-Completed-2024.csv";

// ==========================================
// ExportBuilder - 导出文件构建器
// ==========================================
pub struct ExportBuilder {
    lines: Vec<String>,
}

impl ExportBuilder {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// 手机号结果行
    pub fn outcome(self, id: &str, time: &str, agent: &str, disposition: &str, result: &str) -> Self {
        self.outcome_with_type(id, time, "mobile_number", agent, disposition, result)
    }

    /// 指定号码类型的结果行（非 mobile_number 的行会被丢弃）
    pub fn outcome_with_type(
        mut self,
        id: &str,
        time: &str,
        number_type: &str,
        agent: &str,
        disposition: &str,
        result: &str,
    ) -> Self {
        self.lines.push(format!(
            "{},{},+15550{},phone,+15550{},{},{},{},{},Spring",
            id, time, id, id, number_type, agent, disposition, result
        ));
        self
    }

    /// 话单行（ID 为空，列左移一位）
    pub fn cdr(mut self, cdr_id: &str, time: &str, call: &str, ring: &str, talk: &str) -> Self {
        self.lines.push(format!(
            ",{},{},{},{},{},ANSWERED,Normal Clearing,+15559999,{}.wav",
            cdr_id, time, call, ring, talk, cdr_id
        ));
        self
    }

    pub fn stray_header(mut self) -> Self {
        self.lines.push(STRAY_HEADER_ROW.to_string());
        self
    }

    pub fn raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn build(&self) -> String {
        let mut text = String::from(VENDOR_HEADER);
        text.push('\n');
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.build().into_bytes()
    }

    /// 写入临时目录中的指定文件名
    ///
    /// # 返回
    /// - TempDir: 临时目录（需要保持存活）
    /// - PathBuf: 文件路径
    pub fn write_to(&self, file_name: &str) -> Result<(TempDir, PathBuf), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(file_name);
        fs::write(&path, self.build())?;
        Ok((dir, path))
    }
}

/// 三条结果 + 两条话单 + 一条夹带表头 + 一条座机行
pub fn mixed_export() -> ExportBuilder {
    ExportBuilder::new()
        .outcome("3", "2024-05-01 09:10:00", "carol", "Callback", "R-Abandon")
        .cdr("cdr-2", "2024-05-01 09:05:03", "40", "5", "35")
        .stray_header()
        .outcome("1", "2024-05-01 09:00:00", "alice", "Sale", "C-Completed")
        .cdr("cdr-1", "2024-05-01 09:00:02", " 12 ", "3", "9")
        .outcome_with_type("8", "2024-05-01 09:30:00", "landline", "dave", "", "F-Failed")
        .outcome("2", "2024-05-01 09:05:00", "alice", "No Sale", "F-Failed")
}
