// ==========================================
// 成衣供应链物料测算 - 批次 (Lot)
// ==========================================
// 批次 = 一次发运/生产的单位组，每阶段最多拆成 max_lots 批
// ==========================================

use serde::{Deserialize, Serialize};

/// 单个批次
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    pub seq_no: usize,   // 批次序号 (从 1 开始)
    pub units: u64,      // 本批单位数 (包/筒/匹)
    pub weight_lbs: f64, // 本批重量 = units × 单位重量
}

impl Lot {
    /// 将批次拆分结果换算为带重量的批次列表
    ///
    /// 顺序与拆分结果一致（余数集中在前面的批次）
    pub fn from_partition(sizes: &[u64], unit_weight_lbs: f64) -> Vec<Lot> {
        sizes
            .iter()
            .enumerate()
            .map(|(idx, &units)| Lot {
                seq_no: idx + 1,
                units,
                weight_lbs: units as f64 * unit_weight_lbs,
            })
            .collect()
    }
}
