//! 客户聚合（Customer）
//!
//! 聚合根持有身份、联系方式、归档状态与积分余额，
//! 所有变更都经由聚合方法校验自身不变量与当前生命周期状态：
//! - 邮箱/电话/证件在每次变更时重新校验格式，而不只是构造时；
//! - 归档是单向迁移，归档后一切变更操作（包括再次归档与加积分）被拒绝；
//! - 归档时对个人数据做匿名化，记录本身作为墓碑保留。
//!
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::value_object::{CustomerId, Document, Email, FullName, LoyaltyPoints, Phone};

const ANONYMIZED_NAME: &str = "Anonymous";
const ANONYMOUS_EMAIL_DOMAIN: &str = "anonymous.com";
const ANONYMIZED_PHONE: &str = "000-000-0000";
const ANONYMIZED_DOCUMENT: &str = "000-000-0000";

/// 注册新客户的输入
///
/// 邮箱/电话/证件以原始字符串传入，由注册工厂统一走值对象校验，
/// 保证校验规则集中在一处。
#[derive(Debug, Clone)]
pub struct RegisterCustomer {
    pub id: CustomerId,
    pub full_name: FullName,
    pub birth_date: Option<NaiveDate>,
    pub email: String,
    pub phone: String,
    pub document: String,
    pub promotion_notifications_allowed: bool,
    pub registered_at: DateTime<Utc>,
}

/// 从存储重建客户时的完整字段快照
///
/// 字段均为已通过校验的类型化值，重建本身不会失败。
#[derive(Debug, Clone)]
pub struct CustomerState {
    pub id: CustomerId,
    pub full_name: FullName,
    pub birth_date: Option<NaiveDate>,
    pub email: Email,
    pub phone: Phone,
    pub document: Document,
    pub promotion_notifications_allowed: bool,
    pub archived: bool,
    pub registered_at: DateTime<Utc>,
    pub archived_at: Option<DateTime<Utc>>,
    pub loyalty_points: LoyaltyPoints,
}

/// 客户聚合根
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    full_name: FullName,
    birth_date: Option<NaiveDate>,
    email: Email,
    phone: Phone,
    document: Document,
    promotion_notifications_allowed: bool,
    archived: bool,
    registered_at: DateTime<Utc>,
    archived_at: Option<DateTime<Utc>>,
    loyalty_points: LoyaltyPoints,
}

impl Customer {
    /// 注册新客户
    ///
    /// 新客户总是处于未归档状态，积分余额为零。
    /// 邮箱/电话/证件格式不合法时返回对应的校验错误。
    pub fn register(input: RegisterCustomer) -> DomainResult<Self> {
        Ok(Self {
            id: input.id,
            full_name: input.full_name,
            birth_date: input.birth_date,
            email: Email::new(input.email)?,
            phone: Phone::new(input.phone)?,
            document: Document::new(input.document)?,
            promotion_notifications_allowed: input.promotion_notifications_allowed,
            archived: false,
            registered_at: input.registered_at,
            archived_at: None,
            loyalty_points: LoyaltyPoints::ZERO,
        })
    }

    /// 从存储快照重建聚合（替代逐字段 builder）
    pub fn from_persistence(state: CustomerState) -> Self {
        Self {
            id: state.id,
            full_name: state.full_name,
            birth_date: state.birth_date,
            email: state.email,
            phone: state.phone,
            document: state.document,
            promotion_notifications_allowed: state.promotion_notifications_allowed,
            archived: state.archived,
            registered_at: state.registered_at,
            archived_at: state.archived_at,
            loyalty_points: state.loyalty_points,
        }
    }

    /// 变更邮箱；归档后拒绝，格式不合法时拒绝
    pub fn change_email(&mut self, new_email: &str) -> DomainResult<()> {
        self.ensure_not_archived()?;
        self.email = Email::new(new_email)?;
        Ok(())
    }

    /// 变更电话；归档后拒绝，格式不合法时拒绝
    pub fn change_phone(&mut self, new_phone: &str) -> DomainResult<()> {
        self.ensure_not_archived()?;
        self.phone = Phone::new(new_phone)?;
        Ok(())
    }

    /// 允许接收促销通知；归档后拒绝
    pub fn enable_promotion_notifications(&mut self) -> DomainResult<()> {
        self.ensure_not_archived()?;
        self.promotion_notifications_allowed = true;
        Ok(())
    }

    /// 停止接收促销通知；归档后拒绝
    pub fn disable_promotion_notifications(&mut self) -> DomainResult<()> {
        self.ensure_not_archived()?;
        self.promotion_notifications_allowed = false;
        Ok(())
    }

    /// 增加积分
    ///
    /// 增加量必须严格为正：零增量是调用方错误，与合法的零余额不同。
    /// 归档客户与其他变更操作一样被冻结，不能再获得积分。
    pub fn add_loyalty_points(&mut self, points: LoyaltyPoints) -> DomainResult<()> {
        self.ensure_not_archived()?;
        if points.is_zero() {
            return Err(DomainError::ZeroLoyaltyPointsAdded);
        }
        self.loyalty_points = self.loyalty_points.add(points);
        Ok(())
    }

    /// 归档客户：单向迁移，匿名化个人数据并保留记录
    ///
    /// 姓名、电话、证件替换为固定占位值；邮箱替换为保留匿名域名下
    /// 新生成的地址（保持结构合法且不会碰撞）；出生日期清除；
    /// 促销通知强制关闭；打上归档时间戳。再次归档会被拒绝。
    pub fn archive(&mut self) -> DomainResult<()> {
        self.ensure_not_archived()?;

        // 先构造全部匿名化值，再一次性写入，失败不落半截状态
        let full_name = FullName::new(ANONYMIZED_NAME, ANONYMIZED_NAME)?;
        let email = Email::new(format!("{}@{}", Uuid::now_v7(), ANONYMOUS_EMAIL_DOMAIN))?;
        let phone = Phone::new(ANONYMIZED_PHONE)?;
        let document = Document::new(ANONYMIZED_DOCUMENT)?;

        self.full_name = full_name;
        self.email = email;
        self.phone = phone;
        self.document = document;
        self.birth_date = None;
        self.promotion_notifications_allowed = false;
        self.archived = true;
        self.archived_at = Some(Utc::now());
        Ok(())
    }

    pub fn full_name(&self) -> &FullName {
        &self.full_name
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn is_promotion_notifications_allowed(&self) -> bool {
        self.promotion_notifications_allowed
    }

    pub fn is_archived(&self) -> bool {
        self.archived
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    pub fn archived_at(&self) -> Option<DateTime<Utc>> {
        self.archived_at
    }

    pub fn loyalty_points(&self) -> LoyaltyPoints {
        self.loyalty_points
    }

    fn ensure_not_archived(&self) -> DomainResult<()> {
        if self.archived {
            return Err(DomainError::CustomerArchived {
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
