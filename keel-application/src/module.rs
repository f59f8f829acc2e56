//! 领域模块（DomainModule）与处理器清单（HandlerManifest）
//!
//! 模块在编译期显式列出自己的领域事件处理器，注册时统一指定生命周期。
//!
use crate::lifetime::ServiceLifetime;
use crate::registry::HandlerRegistryBuilder;
use keel_domain::domain_event::DomainEvent;
use keel_domain::eventing::DomainEventHandler;

type Deferred = Box<dyn FnOnce(&mut HandlerRegistryBuilder, ServiceLifetime) + Send>;

/// 处理器清单：记录待注册的处理器，生命周期在应用时才确定
#[derive(Default)]
pub struct HandlerManifest {
    entries: Vec<Deferred>,
}

impl HandlerManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加以 `Default` 构造的处理器
    pub fn handler<E, H>(&mut self) -> &mut Self
    where
        E: DomainEvent,
        H: DomainEventHandler<E> + Default + 'static,
    {
        self.handler_with::<E, H, _>(H::default)
    }

    /// 添加由工厂构造的处理器
    pub fn handler_with<E, H, F>(&mut self, factory: F) -> &mut Self
    where
        E: DomainEvent,
        H: DomainEventHandler<E> + 'static,
        F: Fn() -> H + Send + Sync + 'static,
    {
        self.entries.push(Box::new(move |builder, lifetime| {
            builder.add::<E, H, F>(lifetime, factory);
        }));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 以统一的生命周期把清单写入注册表，顺序与添加顺序一致
    pub(crate) fn apply(self, builder: &mut HandlerRegistryBuilder, lifetime: ServiceLifetime) {
        for entry in self.entries {
            entry(builder, lifetime);
        }
    }
}

/// 领域模块：一组领域事件处理器的集合
///
/// ```
/// use async_trait::async_trait;
/// use keel_application::module::{DomainModule, HandlerManifest};
/// use keel_domain::domain_event::DomainEvent;
/// use keel_domain::error::DomainResult;
/// use keel_domain::eventing::DomainEventHandler;
///
/// struct ParcelShipped;
/// impl DomainEvent for ParcelShipped {}
///
/// #[derive(Default)]
/// struct NotifyRecipient;
///
/// #[async_trait]
/// impl DomainEventHandler<ParcelShipped> for NotifyRecipient {
///     async fn handle(&self, _event: &ParcelShipped) -> DomainResult<()> {
///         Ok(())
///     }
/// }
///
/// struct Shipping;
///
/// impl DomainModule for Shipping {
///     const NAME: &'static str = "shipping";
///
///     fn domain_event_handlers(manifest: &mut HandlerManifest) {
///         manifest.handler::<ParcelShipped, NotifyRecipient>();
///     }
/// }
///
/// let mut manifest = HandlerManifest::new();
/// Shipping::domain_event_handlers(&mut manifest);
/// assert_eq!(manifest.len(), 1);
/// ```
pub trait DomainModule {
    /// 模块名称（用于日志）
    const NAME: &'static str;

    /// 列出本模块的全部领域事件处理器
    fn domain_event_handlers(manifest: &mut HandlerManifest);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::HandlerRegistry;
    use async_trait::async_trait;
    use keel_domain::error::DomainResult;

    struct Shipped;
    impl DomainEvent for Shipped {}

    struct Returned;
    impl DomainEvent for Returned {}

    #[derive(Default)]
    struct Notify;

    #[async_trait]
    impl DomainEventHandler<Shipped> for Notify {
        async fn handle(&self, _event: &Shipped) -> DomainResult<()> {
            Ok(())
        }
    }

    #[async_trait]
    impl DomainEventHandler<Returned> for Notify {
        async fn handle(&self, _event: &Returned) -> DomainResult<()> {
            Ok(())
        }
    }

    struct Restock {
        warehouse: &'static str,
    }

    #[async_trait]
    impl DomainEventHandler<Returned> for Restock {
        async fn handle(&self, _event: &Returned) -> DomainResult<()> {
            assert!(!self.warehouse.is_empty());
            Ok(())
        }
    }

    struct Logistics;

    impl DomainModule for Logistics {
        const NAME: &'static str = "logistics";

        fn domain_event_handlers(manifest: &mut HandlerManifest) {
            manifest
                .handler::<Shipped, Notify>()
                .handler::<Returned, Notify>()
                .handler_with::<Returned, _, _>(|| Restock { warehouse: "north" });
        }
    }

    #[test]
    fn module_manifest_lands_in_registry() {
        let mut manifest = HandlerManifest::new();
        assert!(manifest.is_empty());
        Logistics::domain_event_handlers(&mut manifest);
        assert_eq!(manifest.len(), 3);

        let mut builder = HandlerRegistry::builder();
        manifest.apply(&mut builder, ServiceLifetime::Scoped);
        let registry = builder.build();

        assert_eq!(registry.handler_count::<Shipped>(), 1);
        assert_eq!(registry.handler_count::<Returned>(), 2);
        assert_eq!(registry.registered_event_types().len(), 2);
    }
}
