// ==========================================
// 拨号器报表 - 记录分类 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// 阶段: 解析 → 行判别 → 字段映射 → 排序
// ==========================================

use crate::domain::{RawExport, RawRow};
use crate::importer::error::ImportResult;
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: CsvParser
pub trait FileParser: Send + Sync {
    /// 解析内存中的上传内容
    ///
    /// # 返回
    /// - Ok(RawExport): 表头 + 原始数据行
    /// - Err(InputFormatError): 结构无法解析
    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<RawExport>;

    /// 解析磁盘文件（检查存在性与扩展名后委托 parse_bytes）
    fn parse_file(&self, file_path: &Path) -> ImportResult<RawExport>;
}

// ==========================================
// RowKind - 行类别
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// 呼叫结果行（手机号标记命中）
    Outcome,
    /// 话单明细行（ID 为空，列整体左移一位）
    CallDetail,
    /// 文件中夹带的重复表头行（ID 为空且 Time == "ID"）
    StrayHeader,
    /// 两类都不属于
    Discarded,
}

// ==========================================
// RowClassifier Trait
// ==========================================
// 用途: 行类别判别（阶段 1）
// 说明: 启发式判别独立成接口，厂商格式变化时可整体替换
// 实现者: DialerRowClassifier
pub trait RowClassifier: Send + Sync {
    /// 判定单行类别，每行恰好归入一类
    fn classify_row(&self, row: &RawRow) -> RowKind;
}
