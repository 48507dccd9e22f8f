//! 客户仓储端口
//!
use std::sync::Arc;

use async_trait::async_trait;

use crate::customer::Customer;
use crate::error::DomainResult;
use crate::value_object::CustomerId;

/// 客户聚合的加载与保存接口
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// 按标识加载客户；不存在时返回 `None`
    async fn of_id(&self, id: &CustomerId) -> DomainResult<Option<Customer>>;

    /// 保存（新增或覆盖）客户的当前状态
    async fn save(&self, customer: &Customer) -> DomainResult<()>;
}

#[async_trait]
impl<T> CustomerRepository for Arc<T>
where
    T: CustomerRepository + ?Sized,
{
    async fn of_id(&self, id: &CustomerId) -> DomainResult<Option<Customer>> {
        (**self).of_id(id).await
    }

    async fn save(&self, customer: &Customer) -> DomainResult<()> {
        (**self).save(customer).await
    }
}
