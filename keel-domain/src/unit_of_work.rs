//! 工作单元（Unit of Work）
//!
//! 协调一组需要一起提交的变更。本 crate 只定义接口，具体的持久化与事务
//! 由基础设施层实现。
//!
use crate::error::DomainResult;
use async_trait::async_trait;
use std::sync::Arc;

/// 仓储标记
pub trait Repository: Send + Sync + 'static {}

/// 工作单元
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// 获取参与本工作单元的仓储；未注册时返回 `DomainError::RepositoryNotRegistered`
    fn repository<R: Repository>(&self) -> DomainResult<Arc<R>>;

    /// 提交本工作单元内发生的变更
    fn commit(&self) -> DomainResult<()>;

    /// 异步提交本工作单元内发生的变更
    async fn commit_async(&self) -> DomainResult<()>;
}
