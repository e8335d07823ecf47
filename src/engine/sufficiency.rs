// ==========================================
// 成衣供应链物料测算 - 供应充足性校验
// ==========================================
// 不变量: 每个阶段取整后的供应量 ≥ 该阶段未取整的需求量，
// 经各道得率折算后仍能覆盖订单
// 浮点比较使用相对容差
// ==========================================

use crate::domain::report::SupplyChainReport;
use serde::{Deserialize, Serialize};

/// 默认相对容差
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-9;

/// 单项违规
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SufficiencyViolation {
    pub check: String,  // 校验项 (如 cotton_bales / cartons / cut_parts.collar)
    pub provided: f64,  // 实际供应
    pub required: f64,  // 需求
}

/// 校验结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SufficiencyReport {
    pub order_size: u64,
    pub checks_run: usize,
    pub violations: Vec<SufficiencyViolation>,
}

impl SufficiencyReport {
    pub fn is_sufficient(&self) -> bool {
        self.violations.is_empty()
    }
}

// ==========================================
// SufficiencyChecker - 充足性校验器
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct SufficiencyChecker {
    relative_tolerance: f64,
}

impl Default for SufficiencyChecker {
    fn default() -> Self {
        Self {
            relative_tolerance: DEFAULT_RELATIVE_TOLERANCE,
        }
    }
}

impl SufficiencyChecker {
    /// 校验报表
    ///
    /// # 校验项
    /// - 四个分批阶段: total_weight ≥ required_weight，且批次重量之和 = total_weight
    /// - 裁片总重 ≥ 成衣总重
    /// - 每类裁片数量 ≥ 订单量
    /// - 纸箱容量 ≥ 成衣件数，集装箱容量 ≥ 纸箱数
    pub fn check(&self, report: &SupplyChainReport) -> SufficiencyReport {
        let mut checks_run = 0;
        let mut violations = Vec::new();

        let mut covers = |check: String, provided: f64, required: f64| {
            checks_run += 1;
            if provided < required - self.slack(required) {
                violations.push(SufficiencyViolation {
                    check,
                    provided,
                    required,
                });
            }
        };

        for stage in report.lot_stages() {
            covers(
                stage.stage.to_string(),
                stage.total_weight_lbs,
                stage.required_weight_lbs,
            );
        }

        covers(
            "cut_parts_weight".to_string(),
            report.cut_parts.weight_lbs,
            report.total_shirt_weight_lbs,
        );

        for (kind, &qty) in &report.cut_parts.quantities {
            covers(
                format!("cut_parts.{}", kind),
                qty as f64,
                report.order_size as f64,
            );
        }

        covers(
            "cartons".to_string(),
            report.cartons.needed as f64 * report.cartons.capacity as f64,
            report.shirts_produced as f64,
        );
        covers(
            "containers".to_string(),
            report.containers.needed as f64 * report.containers.capacity as f64,
            report.cartons.needed as f64,
        );

        // 批次重量守恒（双向比较）
        for stage in report.lot_stages() {
            checks_run += 1;
            let sum = stage.lot_weight_sum();
            if (sum - stage.total_weight_lbs).abs() > self.slack(stage.total_weight_lbs) {
                violations.push(SufficiencyViolation {
                    check: format!("{}.lots", stage.stage),
                    provided: sum,
                    required: stage.total_weight_lbs,
                });
            }
        }

        SufficiencyReport {
            order_size: report.order_size,
            checks_run,
            violations,
        }
    }

    fn slack(&self, reference: f64) -> f64 {
        self.relative_tolerance * reference.abs().max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::supply_chain::SupplyChainCalculator;

    #[test]
    fn test_reference_orders_are_sufficient() {
        let calc = SupplyChainCalculator::default();
        for size in [1, 7, 100, 10_000, 15_000, 20_000] {
            let report = calc.calculate_raw(size).unwrap();
            let result = SufficiencyChecker::default().check(&report);
            assert!(result.is_sufficient(), "order {}: {:?}", size, result.violations);
            assert_eq!(result.order_size, size as u64);
        }
    }

    #[test]
    fn test_detects_short_stage() {
        let calc = SupplyChainCalculator::default();
        let mut report = calc.calculate_raw(10_000).unwrap();
        report.yarn_cones.total_weight_lbs = report.yarn_cones.required_weight_lbs * 0.5;

        let result = SufficiencyChecker::default().check(&report);
        assert!(!result.is_sufficient());
        assert!(result.violations.iter().any(|v| v.check == "yarn_cones"));
        // 批次重量之和也不再等于总重
        assert!(result.violations.iter().any(|v| v.check == "yarn_cones.lots"));
    }

    #[test]
    fn test_detects_short_packaging() {
        let calc = SupplyChainCalculator::default();
        let mut report = calc.calculate_raw(10_000).unwrap();
        report.cartons.needed -= 1;

        let result = SufficiencyChecker::default().check(&report);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].check, "cartons");
    }
}
