// ==========================================
// 成衣供应链物料测算 - 引擎层
// ==========================================
// 职责: 纯计算（无文件访问、无全局可变状态）
// 输入: 校验后的订单量 / 配置 / 采样
// 输出: 报表、批次、校验结果
// ==========================================

pub mod cpu_usage;
pub mod error;
pub mod lot_divider;
pub mod lot_registry;
pub mod sufficiency;
pub mod supply_chain;

// 重导出核心引擎
pub use cpu_usage::CpuUsageAnalyzer;
pub use error::{EngineError, EngineResult, TraceError, TraceResult};
pub use lot_divider::{divide_into_lots, LotDivider, DEFAULT_MAX_LOTS};
pub use lot_registry::LotRegistry;
pub use sufficiency::{SufficiencyChecker, SufficiencyReport, SufficiencyViolation};
pub use supply_chain::{SupplyChainCalculator, DEFAULT_ORDER_SIZES};
