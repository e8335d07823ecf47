// ==========================================
// 成衣供应链物料测算 - 核心库
// ==========================================
// 订单量 → 棉包/纱筒/坯布/成品布/裁片/纽扣/纸箱/集装箱
// 附带: pidstat CPU 日志汇总
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 值类型
pub mod domain;

// 配置层 - 得率与规格参数
pub mod config;

// 引擎层 - 纯计算
pub mod engine;

// 导入层 - 外部日志
pub mod importer;

// 报表层 - 文本/JSON/CSV
pub mod report;

// 日志系统
pub mod logging;

// 耗时统计
pub mod perf;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::{ConfigError, YieldProfile};
pub use domain::{
    CpuSample, CpuUsageSummary, CutPartKind, Lot, LotStage, MaterialStage, OrderSize,
    SupplyChainReport,
};
pub use engine::{
    divide_into_lots, CpuUsageAnalyzer, EngineError, LotDivider, LotRegistry, SufficiencyChecker,
    SupplyChainCalculator, DEFAULT_ORDER_SIZES,
};
pub use importer::{CpuLogParser, ImportError};
pub use report::{ReportError, TextRenderer};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "成衣供应链物料测算";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
