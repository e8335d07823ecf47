// ==========================================
// 成衣供应链物料测算 - 得率与规格参数
// ==========================================
// 职责: 集中定义全部得率、单位重量、包装容量
// 约束: 校验后不可变，计算引擎只读
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::report::FabricSpec;
use serde::{Deserialize, Serialize};

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    pub const COTTON_BALE_WEIGHT_LBS: &str = "cotton_bale_weight_lbs";
    pub const YARN_CONE_WEIGHT_LBS: &str = "yarn_cone_weight_lbs";
    pub const UNFINISHED_FABRIC_PIECE_WEIGHT_LBS: &str = "unfinished_fabric_piece_weight_lbs";
    pub const FINISHED_FABRIC_PIECE_WEIGHT_LBS: &str = "finished_fabric_piece_weight_lbs";
    pub const BUTTON_WEIGHT_LBS: &str = "button_weight_lbs";
    pub const SHIRT_WEIGHT_LBS: &str = "shirt_weight_lbs";

    pub const COTTON_TO_YARN_YIELD: &str = "cotton_to_yarn_yield";
    pub const YARN_TO_UNFINISHED_FABRIC_YIELD: &str = "yarn_to_unfinished_fabric_yield";
    pub const UNFINISHED_TO_FINISHED_FABRIC_YIELD: &str = "unfinished_to_finished_fabric_yield";
    pub const FINISHED_FABRIC_TO_CUT_PARTS_YIELD: &str = "finished_fabric_to_cut_parts_yield";

    pub const CARTON_CAPACITY: &str = "carton_capacity";
    pub const CONTAINER_CAPACITY: &str = "container_capacity";
    pub const MAX_LOTS: &str = "max_lots";
}

// ==========================================
// YieldProfile - 得率配置
// ==========================================
// 缺省字段回落到 Default（参考工艺参数）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YieldProfile {
    // ===== 单位重量 (lbs) =====
    pub cotton_bale_weight_lbs: f64,
    pub yarn_cone_weight_lbs: f64,
    pub unfinished_fabric_piece_weight_lbs: f64,
    pub finished_fabric_piece_weight_lbs: f64,
    pub button_weight_lbs: f64,
    pub shirt_weight_lbs: f64,

    // ===== 工艺描述 (不参与计算) =====
    pub yarn_count: u32,
    pub unfinished_fabric_length_yd: f64,
    pub unfinished_fabric_width_in: f64,
    pub finished_fabric_length_yd: f64,
    pub finished_fabric_width_in: f64,

    // ===== 得率 (0, 1] =====
    pub cotton_to_yarn_yield: f64,
    pub yarn_to_unfinished_fabric_yield: f64,
    pub unfinished_to_finished_fabric_yield: f64,
    pub finished_fabric_to_cut_parts_yield: f64,

    // ===== 数量与容量 =====
    pub buttons_per_shirt: u64,
    pub cut_part_overage_pct: u32, // 每类裁片统一加放比例
    pub carton_capacity: u64,      // 件/箱
    pub container_capacity: u64,   // 箱/柜
    pub max_lots: usize,           // 每阶段最多批次数
}

impl Default for YieldProfile {
    fn default() -> Self {
        Self {
            cotton_bale_weight_lbs: 480.0,
            yarn_cone_weight_lbs: 5.0,
            unfinished_fabric_piece_weight_lbs: 16.74,
            finished_fabric_piece_weight_lbs: 15.90,
            button_weight_lbs: 0.00165,
            shirt_weight_lbs: 0.554,

            yarn_count: 30,
            unfinished_fabric_length_yd: 50.0,
            unfinished_fabric_width_in: 60.0,
            finished_fabric_length_yd: 47.5,
            finished_fabric_width_in: 58.8,

            cotton_to_yarn_yield: 0.85,
            yarn_to_unfinished_fabric_yield: 0.90,
            unfinished_to_finished_fabric_yield: 0.95,
            finished_fabric_to_cut_parts_yield: 0.85,

            buttons_per_shirt: 7,
            cut_part_overage_pct: 10,
            carton_capacity: 20,
            container_capacity: 400,
            max_lots: 5,
        }
    }
}

impl YieldProfile {
    /// 棉花到裁片的综合得率（四道工序连乘）
    pub fn compounded_yield(&self) -> f64 {
        self.cotton_to_yarn_yield
            * self.yarn_to_unfinished_fabric_yield
            * self.unfinished_to_finished_fabric_yield
            * self.finished_fabric_to_cut_parts_yield
    }

    /// 满箱重量
    pub fn carton_weight_lbs(&self) -> f64 {
        self.shirt_weight_lbs * self.carton_capacity as f64
    }

    /// 满柜重量
    pub fn container_weight_lbs(&self) -> f64 {
        self.carton_weight_lbs() * self.container_capacity as f64
    }

    pub fn fabric_spec(&self) -> FabricSpec {
        FabricSpec {
            yarn_count: self.yarn_count,
            unfinished_length_yd: self.unfinished_fabric_length_yd,
            unfinished_width_in: self.unfinished_fabric_width_in,
            finished_length_yd: self.finished_fabric_length_yd,
            finished_width_in: self.finished_fabric_width_in,
        }
    }

    /// 校验全部参数
    ///
    /// # 规则
    /// - 得率 ∈ (0, 1]
    /// - 单位重量为有限正数（纽扣重量允许为 0）
    /// - 容量与批次数 > 0
    /// - 裁片加放比例 ≤ 100%
    pub fn validate(&self) -> ConfigResult<()> {
        use config_keys::*;

        let yields = [
            (COTTON_TO_YARN_YIELD, self.cotton_to_yarn_yield),
            (YARN_TO_UNFINISHED_FABRIC_YIELD, self.yarn_to_unfinished_fabric_yield),
            (
                UNFINISHED_TO_FINISHED_FABRIC_YIELD,
                self.unfinished_to_finished_fabric_yield,
            ),
            (
                FINISHED_FABRIC_TO_CUT_PARTS_YIELD,
                self.finished_fabric_to_cut_parts_yield,
            ),
        ];
        for (key, value) in yields {
            // NaN 也会落入该分支
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::InvalidYield {
                    key: key.to_string(),
                    value,
                });
            }
        }

        let weights = [
            (COTTON_BALE_WEIGHT_LBS, self.cotton_bale_weight_lbs),
            (YARN_CONE_WEIGHT_LBS, self.yarn_cone_weight_lbs),
            (
                UNFINISHED_FABRIC_PIECE_WEIGHT_LBS,
                self.unfinished_fabric_piece_weight_lbs,
            ),
            (
                FINISHED_FABRIC_PIECE_WEIGHT_LBS,
                self.finished_fabric_piece_weight_lbs,
            ),
            (SHIRT_WEIGHT_LBS, self.shirt_weight_lbs),
        ];
        for (key, value) in weights {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidWeight {
                    key: key.to_string(),
                    value,
                });
            }
        }
        if !(self.button_weight_lbs.is_finite() && self.button_weight_lbs >= 0.0) {
            return Err(ConfigError::InvalidWeight {
                key: BUTTON_WEIGHT_LBS.to_string(),
                value: self.button_weight_lbs,
            });
        }

        let capacities = [
            (CARTON_CAPACITY, self.carton_capacity),
            (CONTAINER_CAPACITY, self.container_capacity),
            (MAX_LOTS, self.max_lots as u64),
        ];
        for (key, value) in capacities {
            if value == 0 {
                return Err(ConfigError::InvalidCapacity {
                    key: key.to_string(),
                });
            }
        }

        if self.cut_part_overage_pct > 100 {
            return Err(ConfigError::InvalidOverage(self.cut_part_overage_pct));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        let profile = YieldProfile::default();
        assert!(profile.validate().is_ok());
        assert_eq!(profile.max_lots, 5);
        assert_eq!(profile.buttons_per_shirt, 7);
    }

    #[test]
    fn test_compounded_yield() {
        let profile = YieldProfile::default();
        let expected = 0.85 * 0.90 * 0.95 * 0.85;
        assert!((profile.compounded_yield() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_zero_yield() {
        let profile = YieldProfile {
            yarn_to_unfinished_fabric_yield: 0.0,
            ..YieldProfile::default()
        };
        match profile.validate() {
            Err(ConfigError::InvalidYield { key, .. }) => {
                assert_eq!(key, config_keys::YARN_TO_UNFINISHED_FABRIC_YIELD)
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_yield_above_one_and_nan() {
        let over = YieldProfile {
            cotton_to_yarn_yield: 1.2,
            ..YieldProfile::default()
        };
        assert!(matches!(over.validate(), Err(ConfigError::InvalidYield { .. })));

        let nan = YieldProfile {
            finished_fabric_to_cut_parts_yield: f64::NAN,
            ..YieldProfile::default()
        };
        assert!(matches!(nan.validate(), Err(ConfigError::InvalidYield { .. })));
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let profile = YieldProfile {
            max_lots: 0,
            ..YieldProfile::default()
        };
        match profile.validate() {
            Err(ConfigError::InvalidCapacity { key }) => assert_eq!(key, config_keys::MAX_LOTS),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_negative_weight() {
        let profile = YieldProfile {
            cotton_bale_weight_lbs: -480.0,
            ..YieldProfile::default()
        };
        assert!(matches!(profile.validate(), Err(ConfigError::InvalidWeight { .. })));
    }

    #[test]
    fn test_package_weights() {
        let profile = YieldProfile::default();
        assert!((profile.carton_weight_lbs() - 11.08).abs() < 1e-9);
        assert!((profile.container_weight_lbs() - 4432.0).abs() < 1e-6);
    }
}
