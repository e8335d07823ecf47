// ==========================================
// 成衣供应链物料测算 - 配置层
// ==========================================
// 职责: 得率/重量/容量参数的定义、校验与加载
// 存储: JSON 文件（可选），缺省使用内置参考参数
// ==========================================

pub mod error;
pub mod profile_loader;
pub mod yield_profile;

// 重导出核心类型
pub use error::{ConfigError, ConfigResult};
pub use profile_loader::{
    default_profile_path, load_from_file, resolve, resolve_with, ProfileOrigin, PROFILE_ENV_VAR,
};
pub use yield_profile::{config_keys, YieldProfile};
