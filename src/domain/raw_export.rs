// ==========================================
// 拨号器报表 - 原始导出模型
// ==========================================
// 用途: 文件解析器输出，记录分类器输入
// 说明: 单元格保留原始文本（不做 TRIM），时长字段的空白由字段映射阶段处理
// ==========================================

/// 原始导出文件（表头 + 数据行）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawExport {
    headers: Vec<String>,
    rows: Vec<RawRow>,
}

impl RawExport {
    pub fn new(headers: Vec<String>, rows: Vec<RawRow>) -> Self {
        Self { headers, rows }
    }

    /// 表头（已去重命名，如 "Number Type" 第二次出现为 "Number Type.1"）
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    /// 按列名查找列位置
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }
}

/// 原始数据行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 数据行号（从 1 开始，不含表头）
    pub row_number: usize,
    pub cells: Vec<String>,
}

impl RawRow {
    pub fn new(row_number: usize, cells: Vec<String>) -> Self {
        Self { row_number, cells }
    }

    /// 读取单元格；行长度不足时视为空值
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }

    /// 单元格是否为空（仅含空白也视为空）
    pub fn is_blank(&self, index: usize) -> bool {
        self.cell(index).trim().is_empty()
    }
}
