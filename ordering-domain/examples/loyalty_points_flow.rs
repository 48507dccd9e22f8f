/// 客户积分流程示例
/// 演示注册客户、按就绪订单发放积分以及归档匿名化
use chrono::{NaiveDate, Utc};
use ordering_domain::customer::{Customer, RegisterCustomer};
use ordering_domain::customer_loyalty_points::CustomerLoyaltyPointsService;
use ordering_domain::entity::Entity;
use ordering_domain::error::DomainResult;
use ordering_domain::order::Order;
use ordering_domain::value_object::{CustomerId, FullName, Money, OrderId};

struct ReadyOrder {
    id: OrderId,
    customer_id: CustomerId,
    total_amount: Money,
}

impl Order for ReadyOrder {
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
        true
    }
}

fn main() -> DomainResult<()> {
    // 注册客户
    let mut customer = Customer::register(RegisterCustomer {
        id: CustomerId::new(),
        full_name: FullName::new("John", "Doe")?,
        birth_date: NaiveDate::from_ymd_opt(1991, 7, 5),
        email: "john.doe@gmail.com".to_string(),
        phone: "478-256-2504".to_string(),
        document: "255-08-0578".to_string(),
        promotion_notifications_allowed: true,
        registered_at: Utc::now(),
    })?;
    println!("registered: {} <{}>", customer.full_name(), customer.email());

    // 一笔金额 2500 的就绪订单 -> 按默认配置发放 10 积分
    let order = ReadyOrder {
        id: OrderId::new(),
        customer_id: customer.id().clone(),
        total_amount: Money::from_units(2500)?,
    };
    let service = CustomerLoyaltyPointsService::default();
    let awarded = service.add_points(&mut customer, &order)?;
    println!(
        "order {} total {} -> awarded {} points, balance {}",
        order.id(),
        order.total_amount(),
        awarded,
        customer.loyalty_points()
    );

    // 归档：个人数据匿名化，记录保留
    customer.archive()?;
    println!(
        "archived: {} <{}> points kept: {}",
        customer.full_name(),
        customer.email(),
        customer.loyalty_points()
    );

    // 归档后的变更一律被拒绝
    if let Err(err) = customer.change_email("john.doe@gmail.com") {
        println!("change after archive rejected: {err}");
    }
    Ok(())
}
