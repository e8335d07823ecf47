// ==========================================
// 成衣供应链物料测算 - 导入层
// ==========================================
// 职责: 外部文件 → 领域采样 / 追溯记录
// 支持: pidstat 风格 CPU 日志、JSON 追溯记录
// ==========================================

pub mod cpu_log_parser;
pub mod error;
pub mod trace_manifest;

// 重导出核心类型
pub use cpu_log_parser::{CpuLogParser, COLUMN_COUNT, HEADER_LINES};
pub use error::{ImportError, ImportResult};
pub use trace_manifest::TraceManifestLoader;
