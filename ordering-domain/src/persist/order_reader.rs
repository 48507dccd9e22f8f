//! 订单只读加载端口
//!
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::DomainResult;
use crate::order::Order;
use crate::value_object::OrderId;

/// 按标识加载订单只读视图的接口
///
/// 返回的订单类型由实现方决定，只要满足 [`Order`] 契约。
#[async_trait]
pub trait OrderReader: Send + Sync {
    type Order: Order;

    /// 按标识加载订单视图；不存在时返回 `None`
    async fn of_id(&self, id: &OrderId) -> DomainResult<Option<Self::Order>>;
}

#[async_trait]
impl<T> OrderReader for Arc<T>
where
    T: OrderReader + ?Sized,
{
    type Order = T::Order;

    async fn of_id(&self, id: &OrderId) -> DomainResult<Option<Self::Order>> {
        (**self).of_id(id).await
    }
}
