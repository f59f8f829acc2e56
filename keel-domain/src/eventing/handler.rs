//! 领域事件处理器（DomainEventHandler）
//!
//! 当聚合的某个操作改变了领域状态时，领域内其他部分可能需要对此作出响应。
//! 同一事件类型可以存在多个相互独立的处理器，由事件总线逐个调用。
//!
use crate::{domain_event::DomainEvent, error::DomainResult};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// 领域事件处理器：处理某一具体类型的领域事件
#[async_trait]
pub trait DomainEventHandler<E>: Send + Sync
where
    E: DomainEvent,
{
    /// 处理器名称（用于日志）
    fn handler_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// 处理事件
    async fn handle(&self, event: &E) -> DomainResult<()>;

    /// 带取消令牌处理事件
    ///
    /// 默认忽略令牌并委托给 [`handle`](Self::handle)；需要响应取消的处理器可覆写。
    async fn handle_with_cancellation(
        &self,
        event: &E,
        cancellation: &CancellationToken,
    ) -> DomainResult<()> {
        let _ = cancellation;
        self.handle(event).await
    }
}
