//! 积分值对象
//!
//! 非负整数包装，余额只增不减；负值在类型层面不可表达。
//! `ZERO` 是合法的静止余额，但不是合法的增加量（增加量必须严格为正，
//! 由聚合的增加操作负责拒绝）。
//!
use std::fmt;

use serde::{Deserialize, Serialize};

/// 积分余额 / 积分增量
///
/// # 示例
///
/// ```
/// use ordering_domain::value_object::LoyaltyPoints;
///
/// let balance = LoyaltyPoints::ZERO.add(LoyaltyPoints::new(10));
/// assert_eq!(balance, LoyaltyPoints::new(10));
/// assert!(balance > LoyaltyPoints::ZERO);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct LoyaltyPoints(u64);

impl LoyaltyPoints {
    /// 零积分（合法的静止余额）
    pub const ZERO: Self = Self(0);

    /// 从数值创建积分
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// 获取积分数值
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// 累加积分，返回新的余额
    ///
    /// # 示例
    ///
    /// ```
    /// use ordering_domain::value_object::LoyaltyPoints;
    ///
    /// let total = LoyaltyPoints::new(10).add(LoyaltyPoints::new(20));
    /// assert_eq!(total.value(), 30);
    /// ```
    pub fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }

    /// 是否为零
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for LoyaltyPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for LoyaltyPoints {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<LoyaltyPoints> for u64 {
    fn from(points: LoyaltyPoints) -> Self {
        points.value()
    }
}
