// ==========================================
// 成衣供应链物料测算 - 订单量
// ==========================================
// 订单量 = 需生产的成品衬衫件数，必须为正整数
// 校验在任何计算开始之前完成
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 订单量校验错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderSizeError {
    #[error("订单量必须为正整数，实际: {0}")]
    NonPositive(i64),

    #[error("订单量不是整数: {0}")]
    NotAnInteger(String),
}

/// 订单量（正整数，件）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct OrderSize(u64);

impl OrderSize {
    /// 校验并构造订单量
    ///
    /// # 返回
    /// - Ok(OrderSize): value > 0
    /// - Err(OrderSizeError::NonPositive): value <= 0
    pub fn new(value: i64) -> Result<Self, OrderSizeError> {
        if value <= 0 {
            return Err(OrderSizeError::NonPositive(value));
        }
        Ok(Self(value as u64))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for OrderSize {
    type Error = OrderSizeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        OrderSize::new(value)
    }
}

impl From<OrderSize> for u64 {
    fn from(order: OrderSize) -> Self {
        order.0
    }
}

impl FromStr for OrderSize {
    type Err = OrderSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<i64>()
            .map_err(|_| OrderSizeError::NotAnInteger(trimmed.to_string()))?;
        OrderSize::new(value)
    }
}

impl fmt::Display for OrderSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive() {
        assert_eq!(OrderSize::new(0), Err(OrderSizeError::NonPositive(0)));
        assert_eq!(OrderSize::new(-5), Err(OrderSizeError::NonPositive(-5)));
        assert_eq!(OrderSize::new(1).unwrap().get(), 1);
    }

    #[test]
    fn test_parse_from_str() {
        assert_eq!("10000".parse::<OrderSize>().unwrap().get(), 10000);
        assert_eq!(" 42 ".parse::<OrderSize>().unwrap().get(), 42);
        assert!(matches!(
            "12.5".parse::<OrderSize>(),
            Err(OrderSizeError::NotAnInteger(_))
        ));
        assert!(matches!(
            "-3".parse::<OrderSize>(),
            Err(OrderSizeError::NonPositive(-3))
        ));
    }

    #[test]
    fn test_serde_validates() {
        let order: OrderSize = serde_json::from_str("15000").unwrap();
        assert_eq!(order.get(), 15000);
        assert!(serde_json::from_str::<OrderSize>("0").is_err());
        assert_eq!(serde_json::to_string(&order).unwrap(), "15000");
    }
}
