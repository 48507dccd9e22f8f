//! 端到端流程：应用层视角的加载 → 业务操作 → 保存
//!
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result as AnyResult;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use ordering_domain::customer::{Customer, RegisterCustomer};
use ordering_domain::customer_loyalty_points::CustomerLoyaltyPointsService;
use ordering_domain::entity::Entity;
use ordering_domain::error::{DomainError, DomainResult};
use ordering_domain::order::Order;
use ordering_domain::persist::{CustomerRepository, OrderReader};
use ordering_domain::value_object::{CustomerId, FullName, LoyaltyPoints, Money, OrderId};

#[derive(Default, Clone)]
struct InMemoryCustomerRepository {
    customers: Arc<Mutex<HashMap<CustomerId, Customer>>>,
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn of_id(&self, id: &CustomerId) -> DomainResult<Option<Customer>> {
        let customers = self.customers.lock().unwrap();
        Ok(customers.get(id).cloned())
    }

    async fn save(&self, customer: &Customer) -> DomainResult<()> {
        let mut customers = self.customers.lock().unwrap();
        customers.insert(customer.id().clone(), customer.clone());
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct CompletedOrder {
    id: OrderId,
    customer_id: CustomerId,
    total_amount: Money,
    ready: bool,
}

impl Order for CompletedOrder {
    fn id(&self) -> &OrderId {
        &self.id
    }

    fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    fn total_amount(&self) -> Money {
        self.total_amount
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}

#[derive(Default, Clone)]
struct InMemoryOrderReader {
    orders: Arc<Mutex<HashMap<OrderId, CompletedOrder>>>,
}

impl InMemoryOrderReader {
    fn put(&self, order: CompletedOrder) {
        self.orders.lock().unwrap().insert(order.id.clone(), order);
    }
}

#[async_trait]
impl OrderReader for InMemoryOrderReader {
    type Order = CompletedOrder;

    async fn of_id(&self, id: &OrderId) -> DomainResult<Option<CompletedOrder>> {
        let orders = self.orders.lock().unwrap();
        Ok(orders.get(id).cloned())
    }
}

fn register_john_doe() -> AnyResult<Customer> {
    Ok(Customer::register(RegisterCustomer {
        id: CustomerId::new(),
        full_name: FullName::new("John", "Doe")?,
        birth_date: NaiveDate::from_ymd_opt(1991, 7, 5),
        email: "john.doe@gmail.com".to_string(),
        phone: "478-256-2504".to_string(),
        document: "255-08-0578".to_string(),
        promotion_notifications_allowed: true,
        registered_at: Utc::now(),
    })?)
}

#[tokio::test(flavor = "multi_thread")]
async fn award_points_then_reload_shows_balance() -> AnyResult<()> {
    let customers = InMemoryCustomerRepository::default();
    let orders = InMemoryOrderReader::default();
    let service = CustomerLoyaltyPointsService::default();

    // 注册并保存客户
    let customer = register_john_doe()?;
    let customer_id = customer.id().clone();
    customers.save(&customer).await?;

    // 一笔已就绪、金额 2500 的订单
    let order_id = OrderId::new();
    orders.put(CompletedOrder {
        id: order_id.clone(),
        customer_id: customer_id.clone(),
        total_amount: Money::from_units(2500)?,
        ready: true,
    });

    // 应用层编排：加载 -> 发放 -> 保存
    let mut customer = customers.of_id(&customer_id).await?.expect("customer exists");
    let order = orders.of_id(&order_id).await?.expect("order exists");
    let awarded = service.add_points(&mut customer, &order)?;
    customers.save(&customer).await?;

    assert_eq!(awarded, LoyaltyPoints::new(10));
    let reloaded = customers.of_id(&customer_id).await?.expect("customer exists");
    assert_eq!(reloaded.loyalty_points(), LoyaltyPoints::new(10));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn foreign_order_never_credits_points() -> AnyResult<()> {
    let customers = InMemoryCustomerRepository::default();
    let service = CustomerLoyaltyPointsService::default();

    let mut customer = register_john_doe()?;
    customers.save(&customer).await?;

    // 归属其他客户的订单
    let order = CompletedOrder {
        id: OrderId::new(),
        customer_id: CustomerId::new(),
        total_amount: Money::from_units(5000)?,
        ready: true,
    };

    let err = service.add_points(&mut customer, &order).unwrap_err();
    assert!(matches!(err, DomainError::OrderDoesNotBelongToCustomer { .. }));
    assert_eq!(customer.loyalty_points(), LoyaltyPoints::ZERO);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn archived_tombstone_survives_reload() -> AnyResult<()> {
    let customers = InMemoryCustomerRepository::default();

    let mut customer = register_john_doe()?;
    let customer_id = customer.id().clone();
    customer.archive()?;
    customers.save(&customer).await?;

    let mut reloaded = customers.of_id(&customer_id).await?.expect("customer exists");
    assert!(reloaded.is_archived());
    assert!(reloaded.email().value().ends_with("@anonymous.com"));
    assert!(reloaded.birth_date().is_none());

    // 重新加载后的墓碑同样冻结
    let err = reloaded.change_email("john.doe@gmail.com").unwrap_err();
    assert!(matches!(err, DomainError::CustomerArchived { .. }));
    Ok(())
}
