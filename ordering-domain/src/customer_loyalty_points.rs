//! 客户积分服务（CustomerLoyaltyPointsService）
//!
//! 为满足条件的订单向客户发放积分，执行两个聚合都无法单独保证的
//! 跨聚合前置校验：订单必须归属该客户，且已达到就绪里程碑。
//! 服务本身无状态，只持有显式配置（每档积分与金额门槛），
//! 便于按部署或测试场景替换，而不依赖共享常量。
//!
use crate::customer::Customer;
use crate::domain_service::DomainService;
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::order::Order;
use crate::value_object::{LoyaltyPoints, Money};

const DEFAULT_BASE_POINTS: LoyaltyPoints = LoyaltyPoints::new(5);
const DEFAULT_AMOUNT_THRESHOLD: Money = Money::const_units(1000);

/// 客户积分发放服务
///
/// 奖励规则：订单总金额每满一个门槛发放一档基础积分，
/// 不足一个门槛的部分不计（金额相除向零取整）。
#[derive(Debug, Clone)]
pub struct CustomerLoyaltyPointsService {
    base_points: LoyaltyPoints,
    amount_threshold: Money,
}

impl CustomerLoyaltyPointsService {
    /// 以显式配置创建服务
    ///
    /// 基础积分与金额门槛都必须为正，否则视为配置错误而被拒绝。
    pub fn new(base_points: LoyaltyPoints, amount_threshold: Money) -> DomainResult<Self> {
        if base_points.is_zero() {
            return Err(DomainError::ZeroLoyaltyPointsAdded);
        }
        if amount_threshold.is_zero() {
            return Err(DomainError::InvalidMoney {
                reason: "amount threshold must be positive".to_string(),
            });
        }
        Ok(Self {
            base_points,
            amount_threshold,
        })
    }

    /// 为一笔订单向客户发放积分，返回本次发放的积分数
    ///
    /// 前置条件不满足时返回对应错误且不改动任何聚合；
    /// 金额不足门槛时返回 `ZERO` 且不触发任何变更调用。
    pub fn add_points(
        &self,
        customer: &mut Customer,
        order: &impl Order,
    ) -> DomainResult<LoyaltyPoints> {
        if order.customer_id() != customer.id() {
            return Err(DomainError::OrderDoesNotBelongToCustomer {
                order_id: order.id().clone(),
                customer_id: customer.id().clone(),
            });
        }
        if !order.is_ready() {
            return Err(DomainError::OrderNotReadyForLoyaltyPoints {
                order_id: order.id().clone(),
            });
        }

        let points = self.calculate_points(order.total_amount())?;
        if points.is_zero() {
            // 聚合的增加操作拒绝零增量，无奖励时不得调用它
            return Ok(LoyaltyPoints::ZERO);
        }
        customer.add_loyalty_points(points)?;
        Ok(points)
    }

    fn calculate_points(&self, amount: Money) -> DomainResult<LoyaltyPoints> {
        if amount < self.amount_threshold {
            return Ok(LoyaltyPoints::ZERO);
        }
        let multiplier = amount.divide(&self.amount_threshold)?;
        Ok(LoyaltyPoints::new(multiplier * self.base_points.value()))
    }
}

impl Default for CustomerLoyaltyPointsService {
    /// 默认配置：每满 1000 货币单位发放 5 积分
    fn default() -> Self {
        Self {
            base_points: DEFAULT_BASE_POINTS,
            amount_threshold: DEFAULT_AMOUNT_THRESHOLD,
        }
    }
}

impl DomainService for CustomerLoyaltyPointsService {}
