// ==========================================
// 成衣供应链物料测算 - 配置层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    // ===== 文件相关错误 =====
    #[error("配置文件不存在: {0}")]
    FileNotFound(String),

    #[error("配置文件读取失败: {0}")]
    FileReadError(String),

    #[error("配置文件解析失败 ({path}): {message}")]
    ParseError { path: String, message: String },

    // ===== 参数校验错误 =====
    #[error("得率配置错误 (key: {key}): 值 {value} 不在 (0, 1] 区间")]
    InvalidYield { key: String, value: f64 },

    #[error("重量配置错误 (key: {key}): 值 {value} 必须为有限正数")]
    InvalidWeight { key: String, value: f64 },

    #[error("容量配置错误 (key: {key}): 值必须大于 0")]
    InvalidCapacity { key: String },

    #[error("裁片富余比例错误: {0}% 超出 [0, 100]")]
    InvalidOverage(u32),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::FileReadError(err.to_string())
    }
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
