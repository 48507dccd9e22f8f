//! 领域层统一错误定义
//!
//! 每个可区分的失败对应一个变体，调用方既可按变体精确匹配，
//! 也可通过 [`DomainError::category`] 按错误类别粗粒度分支。
//! 所有错误均为同步、确定性的拒绝，失败的操作不改变聚合状态。
//!
use crate::value_object::{CustomerId, OrderId};
use thiserror::Error;

/// 统一错误类型（领域层最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 值校验 ---
    #[error("invalid email format: {value}")]
    InvalidEmail { value: String },
    #[error("invalid phone format: {value}")]
    InvalidPhone { value: String },
    #[error("invalid document format: {value}")]
    InvalidDocument { value: String },
    #[error("invalid full name: {reason}")]
    InvalidFullName { reason: String },
    #[error("invalid money amount: {reason}")]
    InvalidMoney { reason: String },
    #[error("loyalty points to add must be greater than zero")]
    ZeroLoyaltyPointsAdded,

    // --- 状态守卫 ---
    #[error("customer {id} is archived and cannot be changed")]
    CustomerArchived { id: CustomerId },

    // --- 跨聚合一致性 ---
    #[error("order {order_id} does not belong to customer {customer_id}")]
    OrderDoesNotBelongToCustomer {
        order_id: OrderId,
        customer_id: CustomerId,
    },
    #[error("order {order_id} is not ready for loyalty points")]
    OrderNotReadyForLoyaltyPoints { order_id: OrderId },

    // --- 仓储/持久化（由端口实现方转换而来） ---
    #[error("repository error: {reason}")]
    Repository { reason: String },
    #[error("not found: {reason}")]
    NotFound { reason: String },
}

/// 错误类别：对应校验、状态守卫与跨聚合一致性三类失败
///
/// 空参数类（null 前置条件）在 Rust 中由类型系统静态排除，没有运行时类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    StateGuard,
    CrossAggregateConsistency,
    Infrastructure,
}

impl DomainError {
    /// 返回错误所属的类别
    pub fn category(&self) -> ErrorCategory {
        match self {
            DomainError::InvalidEmail { .. }
            | DomainError::InvalidPhone { .. }
            | DomainError::InvalidDocument { .. }
            | DomainError::InvalidFullName { .. }
            | DomainError::InvalidMoney { .. }
            | DomainError::ZeroLoyaltyPointsAdded => ErrorCategory::Validation,
            DomainError::CustomerArchived { .. } => ErrorCategory::StateGuard,
            DomainError::OrderDoesNotBelongToCustomer { .. }
            | DomainError::OrderNotReadyForLoyaltyPoints { .. } => {
                ErrorCategory::CrossAggregateConsistency
            }
            DomainError::Repository { .. } | DomainError::NotFound { .. } => {
                ErrorCategory::Infrastructure
            }
        }
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
