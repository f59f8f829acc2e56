//! 领域事件总线（DomainEventBus）协议
//!
//! 将已发生的领域事件投递给所有订阅该事件类型的处理器。
//! 默认实现见 [`IocDomainEventBus`](crate::eventing::IocDomainEventBus)。
//!
use crate::{domain_event::DomainEvent, error::DomainResult};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// 领域事件总线
#[async_trait]
pub trait DomainEventBus: Send + Sync {
    /// 发布事件，投递给所有已注册的处理器
    async fn publish<E>(&self, event: E) -> DomainResult<()>
    where
        E: DomainEvent,
    {
        self.publish_with_cancellation(event, CancellationToken::new())
            .await
    }

    /// 发布事件，并将取消令牌原样传递给每个处理器
    async fn publish_with_cancellation<E>(
        &self,
        event: E,
        cancellation: CancellationToken,
    ) -> DomainResult<()>
    where
        E: DomainEvent;

    /// 依次发布一批同类型事件，遇到第一个失败即返回
    async fn publish_all<E>(&self, events: Vec<E>) -> DomainResult<()>
    where
        E: DomainEvent,
    {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}
