// ==========================================
// 成衣供应链物料测算 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 行号均为文件中的 1-based 物理行号
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    // ===== 格式错误 =====
    #[error("表头不完整: 期望 {expected} 行，实际 {actual} 行")]
    HeaderMissing { expected: usize, actual: usize },

    #[error("列数错误 (行 {line}): 期望 {expected} 列，实际 {actual} 列")]
    ColumnCountError {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("类型转换失败 (行 {line}, 字段 {field}): {value}")]
    TypeConversionError {
        line: usize,
        field: String,
        value: String,
    },

    #[error("时间格式错误 (行 {line}): 期望 hh:mm:ss AM/PM，实际 {value}")]
    TimeFormatError { line: usize, value: String },

    #[error("追溯记录解析失败 ({source_name}): {message}")]
    ManifestParseError {
        source_name: String,
        message: String,
    },

    // ===== 内容错误 =====
    #[error("日志中没有采样数据")]
    EmptyLog,
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
