//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值与校验逻辑。
//! 所有值对象在构造时完成校验，构造成功即合法，后续不再变化。
//!
mod document;
mod email;
mod full_name;
mod id;
mod loyalty_points;
mod money;
mod phone;

pub use document::Document;
pub use email::Email;
pub use full_name::FullName;
pub use id::{CustomerId, OrderId};
pub use loyalty_points::LoyaltyPoints;
pub use money::Money;
pub use phone::Phone;

/// 值对象抽象
pub trait ValueObject {
    /// 业务校验失败时的错误类型
    type Error;

    /// 创建值对象时进行验证
    fn validate(&self) -> Result<(), Self::Error>;
}
