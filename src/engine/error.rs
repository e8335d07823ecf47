// ==========================================
// 成衣供应链物料测算 - 引擎层错误类型
// ==========================================
// 约束: 前置校验失败时不产生任何部分结果
// ==========================================

use crate::config::error::ConfigError;
use crate::domain::order::OrderSizeError;
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("订单量无效: {0}")]
    InvalidOrder(#[from] OrderSizeError),

    #[error("批次数上限必须大于 0")]
    InvalidMaxLots,

    #[error("配置无效: {0}")]
    Config(#[from] ConfigError),

    #[error("CPU 采样为空，无法汇总")]
    EmptySamples,
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;

/// 批次追溯错误类型
///
/// 任何一条校验失败时登记表保持原状
#[derive(Error, Debug, PartialEq)]
pub enum TraceError {
    #[error("ID '{id}' 必须以 '{prefix}' 开头")]
    IdPrefix { id: String, prefix: String },

    #[error("ID 已存在: {0}")]
    AlreadyExists(String),

    #[error("不存在: {0}")]
    NotFound(String),

    #[error("标记与原因不一致 ({id}): 标记时必须给出原因，未标记时原因须为空或 N/A")]
    InvalidFlag { id: String },

    #[error("物料 {0} 已被标记")]
    AssetFlagged(String),

    #[error("物料 {0} 未审批")]
    AssetNotApproved(String),

    #[error("批次内容为空: {0}")]
    EmptyContent(String),

    #[error("重复 ID: {0}")]
    DuplicateInContent(String),

    #[error("物料 {asset_id} 已在批次 {existing_lot} 中，不能放入 {lot_id}")]
    AssetAlreadyInLot {
        asset_id: String,
        lot_id: String,
        existing_lot: String,
    },

    #[error("批次 {lot_id} 装的是 {actual}，期望 {expected}")]
    WrongLotKind {
        lot_id: String,
        expected: String,
        actual: String,
    },

    #[error("{0} 没有上游物料，不能指定来源批次")]
    NoUpstream(String),

    #[error("第 {index} 条记录失败: {source}")]
    AtEvent {
        index: usize,
        #[source]
        source: Box<TraceError>,
    },
}

/// Result 类型别名
pub type TraceResult<T> = Result<T, TraceError>;
