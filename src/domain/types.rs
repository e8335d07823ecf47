// ==========================================
// 成衣供应链物料测算 - 领域类型定义
// ==========================================
// 生产链: 棉包 → 纱筒 → 坯布 → 成品布 → 裁片
// 叶子阶段: 纽扣 / 纸箱 / 集装箱（直接由订单量推导）
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 分批阶段 (Material Stage)
// ==========================================
// 需要按批次 (lot) 拆分的四个中间物料阶段
// 序列化格式: snake_case (与报表字段一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialStage {
    CottonBales,      // 棉包
    YarnCones,        // 纱筒
    UnfinishedFabric, // 坯布
    FinishedFabric,   // 成品布
}

impl MaterialStage {
    /// 按生产链顺序排列的全部阶段
    pub const ALL: [MaterialStage; 4] = [
        MaterialStage::CottonBales,
        MaterialStage::YarnCones,
        MaterialStage::UnfinishedFabric,
        MaterialStage::FinishedFabric,
    ];
}

impl fmt::Display for MaterialStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialStage::CottonBales => write!(f, "cotton_bales"),
            MaterialStage::YarnCones => write!(f, "yarn_cones"),
            MaterialStage::UnfinishedFabric => write!(f, "unfinished_fabric"),
            MaterialStage::FinishedFabric => write!(f, "finished_fabric"),
        }
    }
}

// ==========================================
// 裁片类型 (Cut Part Kind)
// ==========================================
// 每件衬衫由六种裁片组成，各一片
// 声明顺序即报表输出顺序 (Ord 派生)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CutPartKind {
    FrontPanel,  // 前片
    BackPanel,   // 后片
    LeftSleeve,  // 左袖
    RightSleeve, // 右袖
    Collar,      // 领子
    FrontPocket, // 胸袋
}

impl CutPartKind {
    pub const ALL: [CutPartKind; 6] = [
        CutPartKind::FrontPanel,
        CutPartKind::BackPanel,
        CutPartKind::LeftSleeve,
        CutPartKind::RightSleeve,
        CutPartKind::Collar,
        CutPartKind::FrontPocket,
    ];
}

impl fmt::Display for CutPartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CutPartKind::FrontPanel => write!(f, "front_panel"),
            CutPartKind::BackPanel => write!(f, "back_panel"),
            CutPartKind::LeftSleeve => write!(f, "left_sleeve"),
            CutPartKind::RightSleeve => write!(f, "right_sleeve"),
            CutPartKind::Collar => write!(f, "collar"),
            CutPartKind::FrontPocket => write!(f, "front_pocket"),
        }
    }
}
