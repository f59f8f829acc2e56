//! 处理器解析器（HandlerResolver）
//!
//! 事件总线唯一依赖的外部协作者：给定事件类型，返回当前为其注册的全部处理器。
//! 解析在每次发布时进行，总线自身不缓存任何处理器。
//!
use crate::{domain_event::DomainEvent, error::DomainResult, eventing::DomainEventHandler};
use std::sync::Arc;

/// 共享的处理器实例
pub type SharedHandler<E> = Arc<dyn DomainEventHandler<E>>;

/// 按事件类型解析处理器
pub trait HandlerResolver: Send + Sync {
    /// 返回为事件类型 `E`（精确类型）注册的处理器，顺序即调用顺序
    fn resolve<E: DomainEvent>(&self) -> DomainResult<Vec<SharedHandler<E>>>;
}

impl<R> HandlerResolver for Arc<R>
where
    R: HandlerResolver,
{
    fn resolve<E: DomainEvent>(&self) -> DomainResult<Vec<SharedHandler<E>>> {
        (**self).resolve::<E>()
    }
}
