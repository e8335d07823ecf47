// ==========================================
// 成衣供应链物料测算 - 测算报表
// ==========================================
// 每次测算产出一份不可变报表，按生产阶段组织
// 重量单位统一为磅 (lbs)
// ==========================================

use crate::domain::lot::Lot;
use crate::domain::types::{CutPartKind, MaterialStage};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// LotStage - 分批阶段结果
// ==========================================
// 用于 棉包 / 纱筒 / 坯布 / 成品布
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotStage {
    pub stage: MaterialStage,

    // ===== 数量 =====
    pub units_needed: u64,     // 向上取整后的采购/生产单位数
    pub unit_weight_lbs: f64,  // 单位重量

    // ===== 重量 =====
    pub required_weight_lbs: f64, // 未取整的需求重量
    pub total_weight_lbs: f64,    // units_needed × unit_weight_lbs

    // ===== 批次 =====
    pub lots: Vec<Lot>,
}

impl LotStage {
    /// 各批次单位数
    pub fn lot_units(&self) -> Vec<u64> {
        self.lots.iter().map(|lot| lot.units).collect()
    }

    /// 各批次重量之和（应等于 total_weight_lbs）
    pub fn lot_weight_sum(&self) -> f64 {
        self.lots.iter().map(|lot| lot.weight_lbs).sum()
    }

    /// 取整带来的富余重量
    pub fn slack_lbs(&self) -> f64 {
        self.total_weight_lbs - self.required_weight_lbs
    }
}

// ==========================================
// CutPartsStage - 裁片
// ==========================================
// 注意: weight_per_part_lbs 是按"每件衬衫平均裁片数"摊算的统一单片重量，
// 并非各裁片类型的真实重量（已知近似）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutPartsStage {
    pub weight_lbs: f64,                          // 裁片总重量
    pub quantities: BTreeMap<CutPartKind, u64>,   // 各类型裁片数量
    pub weight_per_part_lbs: f64,                 // 平均单片重量
}

impl CutPartsStage {
    /// 裁片总数（大订单下六类合计会超出 u64）
    pub fn total_parts(&self) -> u128 {
        self.quantities.values().map(|&qty| u128::from(qty)).sum()
    }

    pub fn quantity(&self, kind: CutPartKind) -> u64 {
        self.quantities.get(&kind).copied().unwrap_or(0)
    }
}

/// 纽扣（无损耗）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonStage {
    pub needed: u64,
    pub total_weight_lbs: f64,
}

/// 包装阶段（纸箱 / 集装箱）
///
/// unit_weight_lbs 是装满时的重量，不是最后一个未满包装的实际重量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackagingStage {
    pub needed: u64,
    pub capacity: u64,
    pub unit_weight_lbs: f64,
}

/// 参考工艺参数（仅描述用途，不参与计算）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FabricSpec {
    pub yarn_count: u32,
    pub unfinished_length_yd: f64,
    pub unfinished_width_in: f64,
    pub finished_length_yd: f64,
    pub finished_width_in: f64,
}

// ==========================================
// SupplyChainReport - 测算报表
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyChainReport {
    pub order_size: u64,
    pub total_shirt_weight_lbs: f64,
    pub fabric_spec: FabricSpec,

    // ===== 主链 =====
    pub cotton_bales: LotStage,
    pub yarn_cones: LotStage,
    pub unfinished_fabric: LotStage,
    pub finished_fabric: LotStage,
    pub cut_parts: CutPartsStage,

    // ===== 叶子阶段 =====
    pub buttons: ButtonStage,
    pub shirts_produced: u64,
    pub cartons: PackagingStage,
    pub containers: PackagingStage,
}

impl SupplyChainReport {
    /// 按生产链顺序返回四个分批阶段
    pub fn lot_stages(&self) -> [&LotStage; 4] {
        [
            &self.cotton_bales,
            &self.yarn_cones,
            &self.unfinished_fabric,
            &self.finished_fabric,
        ]
    }

    pub fn lot_stage(&self, stage: MaterialStage) -> &LotStage {
        match stage {
            MaterialStage::CottonBales => &self.cotton_bales,
            MaterialStage::YarnCones => &self.yarn_cones,
            MaterialStage::UnfinishedFabric => &self.unfinished_fabric,
            MaterialStage::FinishedFabric => &self.finished_fabric,
        }
    }
}
