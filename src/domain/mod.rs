// ==========================================
// 成衣供应链物料测算 - 领域模型层
// ==========================================
// 职责: 定义订单、批次、报表、采样等值类型
// 约束: 不含计算逻辑，不含文件访问
// ==========================================

pub mod cpu_log;
pub mod lot;
pub mod order;
pub mod report;
pub mod traceability;
pub mod types;

// 重导出核心类型
pub use cpu_log::{CpuSample, CpuUsageSummary};
pub use lot::Lot;
pub use order::{OrderSize, OrderSizeError};
pub use report::{
    ButtonStage, CutPartsStage, FabricSpec, LotStage, PackagingStage, SupplyChainReport,
};
pub use traceability::{
    percentage_difference, Asset, AssetKind, AssetRecord, Flag, LotRequest, TraceEvent, TracedLot,
};
pub use types::{CutPartKind, MaterialStage};
