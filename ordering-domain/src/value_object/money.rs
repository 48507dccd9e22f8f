//! 金额值对象
//!
//! 以最小货币单位（分）的整数表示金额，避免浮点舍入漂移。
//! 金额之间的除法取整数商并向零取整（floor），这是固定契约：
//! 积分计算依赖该语义，不足一个整数倍的部分不产生积分。
//!
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// 非负金额，内部为最小货币单位（分）
///
/// # 示例
///
/// ```
/// use ordering_domain::value_object::Money;
///
/// let total = Money::from_units(2500).unwrap();
/// let threshold = Money::from_units(1000).unwrap();
/// assert!(total >= threshold);
/// assert_eq!(total.divide(&threshold).unwrap(), 2);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    /// 零金额
    pub const ZERO: Self = Self(0);

    /// 从最小货币单位（分）创建金额
    pub fn from_cents(cents: i64) -> DomainResult<Self> {
        let money = Self(cents);
        money.validate()?;
        Ok(money)
    }

    /// 从整数货币单位（元）创建金额
    pub fn from_units(units: i64) -> DomainResult<Self> {
        match units.checked_mul(100) {
            Some(cents) => Self::from_cents(cents),
            None => Err(DomainError::InvalidMoney {
                reason: format!("amount overflows: {units} units"),
            }),
        }
    }

    /// 获取金额的最小货币单位数值
    pub const fn cents(&self) -> i64 {
        self.0
    }

    // 编译期常量金额，仅限 crate 内非负字面量使用
    pub(crate) const fn const_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// 两个金额相除，返回向零取整的整数商
    ///
    /// 除数必须为正金额。
    pub fn divide(&self, divisor: &Money) -> DomainResult<u64> {
        if divisor.0 <= 0 {
            return Err(DomainError::InvalidMoney {
                reason: "division requires a positive divisor".to_string(),
            });
        }
        Ok((self.0 / divisor.0) as u64)
    }

    /// 是否为零金额
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl ValueObject for Money {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.0 < 0 {
            return Err(DomainError::InvalidMoney {
                reason: format!("amount must not be negative: {} cents", self.0),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_rejects_negative_amounts() {
        assert!(matches!(
            Money::from_cents(-1).unwrap_err(),
            DomainError::InvalidMoney { .. }
        ));
        assert!(Money::from_cents(0).is_ok());
    }

    #[test]
    fn comparison_follows_amount() {
        let small = Money::from_units(999).unwrap();
        let big = Money::from_units(1000).unwrap();
        assert!(small < big);
        assert!(big >= big);
    }

    #[test]
    fn divide_floors_toward_zero() {
        let total = Money::from_units(2500).unwrap();
        let threshold = Money::from_units(1000).unwrap();
        // 2.5 个门槛只算 2 个
        assert_eq!(total.divide(&threshold).unwrap(), 2);

        let below = Money::from_units(999).unwrap();
        assert_eq!(below.divide(&threshold).unwrap(), 0);
    }

    #[test]
    fn divide_rejects_zero_divisor() {
        let total = Money::from_units(100).unwrap();
        assert!(matches!(
            total.divide(&Money::ZERO).unwrap_err(),
            DomainError::InvalidMoney { .. }
        ));
    }

    #[test]
    fn displays_units_and_cents() {
        assert_eq!(Money::from_cents(123456).unwrap().to_string(), "1234.56");
        assert_eq!(Money::from_cents(5).unwrap().to_string(), "0.05");
    }
}
