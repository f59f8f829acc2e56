//! 基于解析器的事件总线（IocDomainEventBus）
//!
//! 每次发布时向 [`HandlerResolver`] 查询该事件类型的处理器，并按返回顺序
//! 逐个等待其完成：
//! - 没有任何处理器视为配置错误，立即返回 `DomainError::NoHandlerRegistered`；
//! - 处理器串行执行，不并发；
//! - 第一个失败的处理器终止本次发布，其错误原样返回，后续处理器不再调用。
//!
use crate::{
    domain_event::DomainEvent,
    error::{DomainError, DomainResult},
    eventing::{DomainEventBus, HandlerResolver},
};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, trace};

/// 默认事件总线实现，仅持有解析器
#[derive(Clone, Debug)]
pub struct IocDomainEventBus<R> {
    resolver: R,
}

impl<R> IocDomainEventBus<R>
where
    R: HandlerResolver,
{
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }
}

#[async_trait]
impl<R> DomainEventBus for IocDomainEventBus<R>
where
    R: HandlerResolver,
{
    async fn publish_with_cancellation<E>(
        &self,
        event: E,
        cancellation: CancellationToken,
    ) -> DomainResult<()>
    where
        E: DomainEvent,
    {
        let event_type = E::event_name();
        let handlers = self.resolver.resolve::<E>()?;

        if handlers.is_empty() {
            error!(event_type, "no registered handlers found for domain event");
            return Err(DomainError::NoHandlerRegistered { event_type });
        }

        debug!(event_type, handlers = handlers.len(), "publishing domain event");

        for handler in &handlers {
            trace!(event_type, handler = handler.handler_name(), "dispatching");
            if let Err(err) = handler
                .handle_with_cancellation(&event, &cancellation)
                .await
            {
                debug!(
                    event_type,
                    handler = handler.handler_name(),
                    error = %err,
                    "domain event handler failed, publish aborted"
                );
                return Err(err);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eventing::{DomainEventHandler, SharedHandler};
    use std::any::{Any, TypeId};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    struct OrderPlaced {
        order_id: u64,
    }
    impl DomainEvent for OrderPlaced {}

    #[derive(Debug)]
    struct OrderCancelled;
    impl DomainEvent for OrderCancelled {}

    type Log = Arc<Mutex<Vec<(&'static str, u64)>>>;

    struct Recording {
        name: &'static str,
        log: Log,
        fail: bool,
    }

    #[async_trait]
    impl DomainEventHandler<OrderPlaced> for Recording {
        async fn handle(&self, event: &OrderPlaced) -> DomainResult<()> {
            self.log.lock().unwrap().push((self.name, event.order_id));
            if self.fail {
                return Err(DomainError::event_handler(self.name, "boom"));
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingResolver {
        handlers: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
        calls: AtomicUsize,
    }

    impl CountingResolver {
        fn with<E: DomainEvent>(mut self, handler: SharedHandler<E>) -> Self {
            self.handlers
                .entry(TypeId::of::<E>())
                .or_insert_with(|| Box::new(Vec::<SharedHandler<E>>::new()))
                .downcast_mut::<Vec<SharedHandler<E>>>()
                .unwrap()
                .push(handler);
            self
        }
    }

    impl HandlerResolver for CountingResolver {
        fn resolve<E: DomainEvent>(&self) -> DomainResult<Vec<SharedHandler<E>>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .handlers
                .get(&TypeId::of::<E>())
                .and_then(|b| b.downcast_ref::<Vec<SharedHandler<E>>>())
                .cloned()
                .unwrap_or_default())
        }
    }

    fn recording(name: &'static str, log: &Log, fail: bool) -> SharedHandler<OrderPlaced> {
        Arc::new(Recording {
            name,
            log: log.clone(),
            fail,
        })
    }

    #[tokio::test]
    async fn invokes_every_handler_once_in_resolver_order() {
        let log = Log::default();
        let bus = IocDomainEventBus::new(
            CountingResolver::default()
                .with(recording("h1", &log, false))
                .with(recording("h2", &log, false)),
        );

        bus.publish(OrderPlaced { order_id: 42 }).await.unwrap();

        assert_eq!(*log.lock().unwrap(), vec![("h1", 42), ("h2", 42)]);
        assert_eq!(bus.resolver().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_handlers_is_an_error_naming_the_event() {
        let log = Log::default();
        let bus = IocDomainEventBus::new(
            CountingResolver::default().with(recording("h1", &log, false)),
        );

        let err = bus.publish(OrderCancelled).await.unwrap_err();

        match &err {
            DomainError::NoHandlerRegistered { event_type } => {
                assert!(event_type.contains("OrderCancelled"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("OrderCancelled"));
        assert!(log.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn first_failure_stops_the_publish_and_is_returned_as_is() {
        let log = Log::default();
        let bus = IocDomainEventBus::new(
            CountingResolver::default()
                .with(recording("h1", &log, true))
                .with(recording("h2", &log, false)),
        );

        let err = bus.publish(OrderPlaced { order_id: 1 }).await.unwrap_err();

        match err {
            DomainError::EventHandler { handler, reason } => {
                assert_eq!(handler, "h1");
                assert_eq!(reason, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(*log.lock().unwrap(), vec![("h1", 1)]);
    }

    #[tokio::test]
    async fn failure_in_the_middle_skips_only_later_handlers() {
        let log = Log::default();
        let bus = IocDomainEventBus::new(
            CountingResolver::default()
                .with(recording("h1", &log, false))
                .with(recording("h2", &log, true))
                .with(recording("h3", &log, false)),
        );

        assert!(bus.publish(OrderPlaced { order_id: 5 }).await.is_err());
        assert_eq!(*log.lock().unwrap(), vec![("h1", 5), ("h2", 5)]);
    }

    struct CancellationProbe {
        seen: Arc<Mutex<Vec<bool>>>,
    }

    #[async_trait]
    impl DomainEventHandler<OrderPlaced> for CancellationProbe {
        async fn handle(&self, _event: &OrderPlaced) -> DomainResult<()> {
            unreachable!("bus always calls handle_with_cancellation")
        }

        async fn handle_with_cancellation(
            &self,
            _event: &OrderPlaced,
            cancellation: &CancellationToken,
        ) -> DomainResult<()> {
            self.seen.lock().unwrap().push(cancellation.is_cancelled());
            Ok(())
        }
    }

    #[tokio::test]
    async fn cancellation_token_is_passed_through_to_handlers() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let bus = IocDomainEventBus::new(CountingResolver::default().with::<OrderPlaced>(
            Arc::new(CancellationProbe { seen: seen.clone() }),
        ));

        let token = CancellationToken::new();
        token.cancel();
        bus.publish_with_cancellation(OrderPlaced { order_id: 9 }, token)
            .await
            .unwrap();
        bus.publish(OrderPlaced { order_id: 10 }).await.unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    }

    #[tokio::test]
    async fn publish_all_stops_at_first_failing_event() {
        let log = Log::default();
        let resolver = CountingResolver::default().with(recording("h1", &log, false));
        let bus = IocDomainEventBus::new(Arc::new(resolver));

        bus.publish_all(vec![OrderPlaced { order_id: 1 }, OrderPlaced { order_id: 2 }])
            .await
            .unwrap();
        assert_eq!(*log.lock().unwrap(), vec![("h1", 1), ("h1", 2)]);
        assert_eq!(bus.resolver().calls.load(Ordering::SeqCst), 2);

        let err = bus
            .publish_all(vec![OrderCancelled, OrderCancelled])
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NoHandlerRegistered { .. }));
        assert_eq!(bus.resolver().calls.load(Ordering::SeqCst), 3);
    }
}
