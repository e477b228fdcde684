// ==========================================
// 拨号器报表 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 三类分类错误: 输入格式 / 表头不匹配 / 数据转换
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    // ===== 分类错误 =====
    #[error("输入格式错误: {0}")]
    InputFormatError(String),

    #[error("表头不匹配: {0}")]
    SchemaMismatchError(String),

    #[error("类型转换失败 (行 {row}, 字段 {field}): 无法解析为非负整数: {value:?}")]
    DataConversionError {
        row: usize,
        field: String,
        value: String,
    },
}

impl ImportError {
    /// 稳定的错误代码（用于日志与前端展示）
    pub fn kind(&self) -> &'static str {
        match self {
            ImportError::FileNotFound(_) => "FILE_NOT_FOUND",
            ImportError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            ImportError::FileReadError(_) => "FILE_READ",
            ImportError::InputFormatError(_) => "INPUT_FORMAT",
            ImportError::SchemaMismatchError(_) => "SCHEMA_MISMATCH",
            ImportError::DataConversionError { .. } => "DATA_CONVERSION",
        }
    }
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::InputFormatError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes() {
        assert_eq!(
            ImportError::InputFormatError("x".to_string()).kind(),
            "INPUT_FORMAT"
        );
        assert_eq!(
            ImportError::SchemaMismatchError("x".to_string()).kind(),
            "SCHEMA_MISMATCH"
        );
        let err = ImportError::DataConversionError {
            row: 4,
            field: "Call Duration".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.kind(), "DATA_CONVERSION");
    }

    #[test]
    fn test_data_conversion_message_names_row_and_field() {
        let err = ImportError::DataConversionError {
            row: 7,
            field: "Talk Duration".to_string(),
            value: "abc".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("行 7"));
        assert!(msg.contains("Talk Duration"));
        assert!(msg.contains("\"abc\""));
    }
}
