//! 领域服务（Domain Service）
//!
//! 封装不属于单个聚合的领域逻辑，通常跨多个聚合做一致性校验。
//! 本核心的所有操作都是同步的纯内存计算，领域服务不持有可变状态。
//!
/// 领域服务标记：无状态、可安全跨线程共享
pub trait DomainService: Send + Sync {}
