// ==========================================
// 成衣供应链物料测算 - 供应链测算引擎
// ==========================================
// 单次前向计算，无反馈、无迭代:
//  1) 棉包    2) 棉包批次   3) 纱筒    4) 纱筒批次
//  5) 坯布    6) 坯布批次   7) 成品布  8) 成品布批次
//  9) 裁片   10) 纽扣      11) 成衣   12) 纸箱   13) 集装箱
// 每阶段向上取整到整单位，富余逐级向上累积
// ==========================================

use crate::config::yield_profile::YieldProfile;
use crate::domain::lot::Lot;
use crate::domain::order::OrderSize;
use crate::domain::report::{
    ButtonStage, CutPartsStage, LotStage, PackagingStage, SupplyChainReport,
};
use crate::domain::types::{CutPartKind, MaterialStage};
use crate::engine::error::EngineResult;
use crate::engine::lot_divider::LotDivider;
use crate::engine::sufficiency::SufficiencyChecker;
use crate::perf::PerfGuard;
use std::collections::BTreeMap;
use tracing::instrument;

/// 参考驱动使用的订单量
pub const DEFAULT_ORDER_SIZES: [u64; 3] = [10_000, 15_000, 20_000];

// ==========================================
// SupplyChainCalculator - 供应链测算引擎
// ==========================================
// 只持有校验过的只读配置，同一订单量重复计算结果完全一致
#[derive(Debug, Clone)]
pub struct SupplyChainCalculator {
    profile: YieldProfile,
    divider: LotDivider,
}

impl Default for SupplyChainCalculator {
    fn default() -> Self {
        Self {
            profile: YieldProfile::default(),
            divider: LotDivider::default(),
        }
    }
}

impl SupplyChainCalculator {
    /// 使用自定义配置创建引擎
    ///
    /// # 错误
    /// - 配置校验失败: EngineError::Config
    pub fn new(profile: YieldProfile) -> EngineResult<Self> {
        profile.validate()?;
        let divider = LotDivider::new(profile.max_lots)?;
        Ok(Self { profile, divider })
    }

    pub fn profile(&self) -> &YieldProfile {
        &self.profile
    }

    /// 从未校验的整数订单量计算（先校验，失败时不做任何计算）
    pub fn calculate_raw(&self, order_size: i64) -> EngineResult<SupplyChainReport> {
        let order = OrderSize::new(order_size)?;
        Ok(self.calculate(order))
    }

    /// 批量计算
    pub fn calculate_many(&self, orders: &[OrderSize]) -> Vec<SupplyChainReport> {
        orders.iter().map(|&order| self.calculate(order)).collect()
    }

    /// 计算单个订单的全链路物料需求
    #[instrument(skip_all, fields(order_size = %order))]
    pub fn calculate(&self, order: OrderSize) -> SupplyChainReport {
        let _perf = PerfGuard::new("calculate_supply_chain");
        let p = &self.profile;
        let order_size = order.get();
        let order_f = order_size as f64;

        // 1) 棉包: 由成衣总重反推原棉需求
        let total_shirt_weight = order_f * p.shirt_weight_lbs;
        let cotton_needed = total_shirt_weight / p.compounded_yield();
        let bales_needed = ceil_units(cotton_needed, p.cotton_bale_weight_lbs);
        let actual_cotton_weight = bales_needed as f64 * p.cotton_bale_weight_lbs;

        // 2) 棉包批次
        let cotton_bales = self.lot_stage(
            MaterialStage::CottonBales,
            bales_needed,
            p.cotton_bale_weight_lbs,
            cotton_needed,
        );

        // 3) 纱筒: 按实际采购的整包棉花计算
        let yarn_weight = actual_cotton_weight * p.cotton_to_yarn_yield;
        let cones_needed = ceil_units(yarn_weight, p.yarn_cone_weight_lbs);

        // 4) 纱筒批次
        let yarn_cones = self.lot_stage(
            MaterialStage::YarnCones,
            cones_needed,
            p.yarn_cone_weight_lbs,
            yarn_weight,
        );

        // 5) 坯布
        let unfinished_weight = yarn_weight * p.yarn_to_unfinished_fabric_yield;
        let unfinished_pieces = ceil_units(unfinished_weight, p.unfinished_fabric_piece_weight_lbs);

        // 6) 坯布批次
        let unfinished_fabric = self.lot_stage(
            MaterialStage::UnfinishedFabric,
            unfinished_pieces,
            p.unfinished_fabric_piece_weight_lbs,
            unfinished_weight,
        );

        // 7) 成品布
        let finished_weight = unfinished_weight * p.unfinished_to_finished_fabric_yield;
        let finished_pieces = ceil_units(finished_weight, p.finished_fabric_piece_weight_lbs);

        // 8) 成品布批次
        let finished_fabric = self.lot_stage(
            MaterialStage::FinishedFabric,
            finished_pieces,
            p.finished_fabric_piece_weight_lbs,
            finished_weight,
        );

        // 9) 裁片: 数量按统一加放比例，与重量链解耦
        let cut_parts_weight = finished_weight * p.finished_fabric_to_cut_parts_yield;
        let per_kind = with_overage(order_f, p.cut_part_overage_pct);
        let quantities: BTreeMap<CutPartKind, u64> =
            CutPartKind::ALL.iter().map(|&kind| (kind, per_kind)).collect();
        // 六类合计可超出 u64，按 u128 求和
        let total_parts: u128 = quantities.values().map(|&qty| u128::from(qty)).sum();
        let weight_per_part = cut_parts_weight / (total_parts as f64 / order_f);
        let cut_parts = CutPartsStage {
            weight_lbs: cut_parts_weight,
            quantities,
            weight_per_part_lbs: weight_per_part,
        };

        // 10) 纽扣（无损耗）
        let buttons_needed = order_size.saturating_mul(p.buttons_per_shirt);
        let buttons = ButtonStage {
            needed: buttons_needed,
            total_weight_lbs: buttons_needed as f64 * p.button_weight_lbs,
        };

        // 11) 成衣（总装不计损耗）
        let shirts_produced = order_size;

        // 12) 纸箱
        let cartons = PackagingStage {
            needed: shirts_produced.div_ceil(p.carton_capacity),
            capacity: p.carton_capacity,
            unit_weight_lbs: p.carton_weight_lbs(),
        };

        // 13) 集装箱
        let containers = PackagingStage {
            needed: cartons.needed.div_ceil(p.container_capacity),
            capacity: p.container_capacity,
            unit_weight_lbs: p.container_weight_lbs(),
        };

        let report = SupplyChainReport {
            order_size,
            total_shirt_weight_lbs: total_shirt_weight,
            fabric_spec: p.fabric_spec(),
            cotton_bales,
            yarn_cones,
            unfinished_fabric,
            finished_fabric,
            cut_parts,
            buttons,
            shirts_produced,
            cartons,
            containers,
        };

        let sufficiency = SufficiencyChecker::default().check(&report);
        for violation in &sufficiency.violations {
            tracing::warn!(
                check = %violation.check,
                provided = violation.provided,
                required = violation.required,
                "sufficiency violated"
            );
        }

        tracing::info!(
            bales = report.cotton_bales.units_needed,
            cones = report.yarn_cones.units_needed,
            unfinished_pieces = report.unfinished_fabric.units_needed,
            finished_pieces = report.finished_fabric.units_needed,
            cartons = report.cartons.needed,
            containers = report.containers.needed,
            "supply chain calculated"
        );

        report
    }

    /// 组装分批阶段结果
    fn lot_stage(
        &self,
        stage: MaterialStage,
        units_needed: u64,
        unit_weight_lbs: f64,
        required_weight_lbs: f64,
    ) -> LotStage {
        let partition = self.divider.divide(units_needed);
        tracing::debug!(%stage, units_needed, lots = ?partition, "stage lots");

        LotStage {
            stage,
            units_needed,
            unit_weight_lbs,
            required_weight_lbs,
            total_weight_lbs: units_needed as f64 * unit_weight_lbs,
            lots: Lot::from_partition(&partition, unit_weight_lbs),
        }
    }
}

/// 按单位重量向上取整到整单位
fn ceil_units(weight_lbs: f64, unit_weight_lbs: f64) -> u64 {
    (weight_lbs / unit_weight_lbs).ceil() as u64
}

/// ceil(order × (1 + pct/100))，浮点运算
///
/// 与参考测算一致: 100 × 1.1 = 110.00000000000001，向上取整为 111
fn with_overage(order_f: f64, overage_pct: u32) -> u64 {
    (order_f * (1.0 + f64::from(overage_pct) / 100.0)).ceil() as u64
}
