// ==========================================
// 成衣供应链物料测算 - 批次拆分器
// ==========================================
// 规则:
// 1) total <= max_lots: 每批 1 个单位，共 total 批
// 2) 否则: max_lots 批，每批 total / max_lots，
//    余数逐一加到最前面的批次
// 输出顺序固定，前面的批次不小于后面的批次
// ==========================================

use crate::engine::error::{EngineError, EngineResult};

/// 默认批次数上限
pub const DEFAULT_MAX_LOTS: usize = 5;

/// 批次拆分（一次性调用）
///
/// # 示例
/// ```
/// use garment_supply_chain::engine::divide_into_lots;
/// assert_eq!(divide_into_lots(23, 5).unwrap(), vec![5, 5, 5, 4, 4]);
/// assert_eq!(divide_into_lots(3, 5).unwrap(), vec![1, 1, 1]);
/// assert!(divide_into_lots(0, 5).unwrap().is_empty());
/// ```
pub fn divide_into_lots(total: u64, max_lots: usize) -> EngineResult<Vec<u64>> {
    Ok(LotDivider::new(max_lots)?.divide(total))
}

// ==========================================
// LotDivider - 批次拆分器
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LotDivider {
    max_lots: usize,
}

impl LotDivider {
    /// # 错误
    /// - max_lots == 0: EngineError::InvalidMaxLots
    pub fn new(max_lots: usize) -> EngineResult<Self> {
        if max_lots == 0 {
            return Err(EngineError::InvalidMaxLots);
        }
        Ok(Self { max_lots })
    }

    pub fn max_lots(&self) -> usize {
        self.max_lots
    }

    /// 将 total 个单位拆成不超过 max_lots 批
    pub fn divide(&self, total: u64) -> Vec<u64> {
        let max_lots = self.max_lots as u64;
        if total <= max_lots {
            return vec![1; total as usize];
        }

        let base = total / max_lots;
        let remainder = (total % max_lots) as usize;

        let mut lots = vec![base; self.max_lots];
        for lot in lots.iter_mut().take(remainder) {
            *lot += 1;
        }
        lots
    }
}

impl Default for LotDivider {
    fn default() -> Self {
        Self {
            max_lots: DEFAULT_MAX_LOTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remainder_goes_to_front() {
        assert_eq!(divide_into_lots(23, 5).unwrap(), vec![5, 5, 5, 4, 4]);
        assert_eq!(divide_into_lots(1551, 5).unwrap(), vec![311, 310, 310, 310, 310]);
        assert_eq!(divide_into_lots(19, 5).unwrap(), vec![4, 4, 4, 4, 3]);
    }

    #[test]
    fn test_small_totals_are_ones() {
        assert_eq!(divide_into_lots(3, 5).unwrap(), vec![1, 1, 1]);
        assert_eq!(divide_into_lots(5, 5).unwrap(), vec![1, 1, 1, 1, 1]);
        assert_eq!(divide_into_lots(1, 5).unwrap(), vec![1]);
    }

    #[test]
    fn test_zero_total_is_empty() {
        assert!(divide_into_lots(0, 5).unwrap().is_empty());
    }

    #[test]
    fn test_exact_multiple() {
        assert_eq!(divide_into_lots(10, 5).unwrap(), vec![2, 2, 2, 2, 2]);
    }

    #[test]
    fn test_single_lot() {
        assert_eq!(divide_into_lots(42, 1).unwrap(), vec![42]);
    }

    #[test]
    fn test_zero_max_lots_rejected() {
        assert!(matches!(LotDivider::new(0), Err(EngineError::InvalidMaxLots)));
        assert!(divide_into_lots(0, 0).is_err());
    }

    #[test]
    fn test_default_max_lots() {
        assert_eq!(LotDivider::default().max_lots(), DEFAULT_MAX_LOTS);
    }
}
