// ==========================================
// 拨号器报表 - 文件解析器实现
// ==========================================
// 阶段 0: 文件读取与解析
// 支持: CSV (.csv)
// ==========================================

use crate::domain::{RawExport, RawRow};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::record_classifier_trait::FileParser;
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<RawExport> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致（短行补空）
            .from_reader(bytes);

        // 读取表头
        let raw_headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        if raw_headers.is_empty() || raw_headers.iter().all(|h| h.is_empty()) {
            return Err(ImportError::InputFormatError(
                "文件为空或缺少表头".to_string(),
            ));
        }

        let headers = dedupe_headers(raw_headers);
        let width = headers.len();

        // 读取所有行（单元格保留原始文本）
        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            let row_number = row_idx + 1;

            if record.len() > width {
                return Err(ImportError::InputFormatError(format!(
                    "第 {} 行字段数 {} 超过表头列数 {}",
                    row_number,
                    record.len(),
                    width
                )));
            }

            // 仅有分隔符的行照常保留，由分类器判别
            let cells: Vec<String> = record.iter().map(str::to_string).collect();
            rows.push(RawRow::new(row_number, cells));
        }

        debug!(columns = width, rows = rows.len(), "CSV 解析完成");
        Ok(RawExport::new(headers, rows))
    }

    fn parse_file(&self, file_path: &Path) -> ImportResult<RawExport> {
        let path = file_path;

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let bytes = fs::read(path)?;
        self.parse_bytes(&bytes)
    }
}

/// 重复列名去重: 第二次出现的 "X" 改名为 "X.1"，第三次为 "X.2"，依此类推
///
/// 拨号器导出中 "Number Type" 出现两次，第二列由此可按 "Number Type.1" 寻址
pub fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut result: Vec<String> = Vec::with_capacity(headers.len());

    for header in headers {
        let count = seen.entry(header.clone()).or_insert(0);
        if *count == 0 {
            *count = 1;
            result.push(header);
            continue;
        }

        // 跳过与已有列名冲突的后缀（如表头本身含 "X.1"）
        let mut candidate = format!("{}.{}", header, count);
        while result.contains(&candidate) {
            *count += 1;
            candidate = format!("{}.{}", header, count);
        }
        *count += 1;
        result.push(candidate);
    }

    result
}
