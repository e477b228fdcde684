// ==========================================
// 拨号器报表 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换导入错误为用户友好的错误消息
// 规则: 任一导入失败对用户只展示一条统一提示，诊断信息进入日志
// ==========================================

use crate::i18n::{t, t_with_args};
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 导入错误
    // ==========================================
    #[error("文件导入失败: {0}")]
    ImportError(ImportError),

    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("当前会话没有已导入的数据")]
    NoActiveDataset,

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::ImportError(err)
    }
}

impl ApiError {
    /// 错误代码（导入错误沿用导入层代码）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::ImportError(inner) => inner.kind(),
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::NoActiveDataset => "NO_ACTIVE_DATASET",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// 面向最终用户的提示
    ///
    /// 文件不存在时提示路径，其余导入失败统一提示重新导入
    pub fn user_message(&self) -> String {
        match self {
            ApiError::ImportError(ImportError::FileNotFound(path)) => {
                t_with_args("import.file_not_found", &[("path", path)])
            }
            ApiError::ImportError(_) => t("import.invalid_export"),
            other => other.to_string(),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
