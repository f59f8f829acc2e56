//! 服务提供者（ServiceProvider）与服务作用域（ServiceScope）
//!
//! 提供者持有只读注册表和一个根作用域；根上的解析使用根作用域，
//! 因此在根上解析的 Scoped 处理器在整个提供者内共享。
//! 单例事件总线总是绑定根作用域。
//!
use crate::error::{AppError, AppResult};
use crate::lifetime::ServiceLifetime;
use crate::registry::{HandlerRegistry, HandlerScope};
use keel_domain::domain_event::DomainEvent;
use keel_domain::eventing::{HandlerResolver, IocDomainEventBus, SharedHandler};
use std::sync::{Arc, OnceLock};
use tracing::trace;

/// 默认事件总线：从某个处理器作用域解析处理器
pub type DefaultEventBus = IocDomainEventBus<HandlerScope>;

struct ProviderInner {
    registry: Arc<HandlerRegistry>,
    bus_lifetime: Option<ServiceLifetime>,
    root: HandlerScope,
    singleton_bus: OnceLock<Arc<DefaultEventBus>>,
    root_scoped_bus: OnceLock<Arc<DefaultEventBus>>,
}

impl ProviderInner {
    fn event_bus(
        &self,
        scope: &HandlerScope,
        scoped_bus: &OnceLock<Arc<DefaultEventBus>>,
    ) -> AppResult<Arc<DefaultEventBus>> {
        let lifetime = self.bus_lifetime.ok_or(AppError::BusNotRegistered)?;
        let bus = match lifetime {
            ServiceLifetime::Singleton => self
                .singleton_bus
                .get_or_init(|| Arc::new(IocDomainEventBus::new(self.root.clone())))
                .clone(),
            ServiceLifetime::Scoped => scoped_bus
                .get_or_init(|| Arc::new(IocDomainEventBus::new(scope.clone())))
                .clone(),
            ServiceLifetime::Transient => Arc::new(IocDomainEventBus::new(scope.clone())),
        };
        Ok(bus)
    }
}

/// 根服务提供者，克隆开销很小
#[derive(Clone)]
pub struct ServiceProvider {
    inner: Arc<ProviderInner>,
}

impl ServiceProvider {
    pub(crate) fn new(registry: HandlerRegistry, bus_lifetime: Option<ServiceLifetime>) -> Self {
        let registry = Arc::new(registry);
        Self {
            inner: Arc::new(ProviderInner {
                root: HandlerScope::new(registry.clone()),
                registry,
                bus_lifetime,
                singleton_bus: OnceLock::new(),
                root_scoped_bus: OnceLock::new(),
            }),
        }
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.inner.registry
    }

    /// 按注册的生命周期解析默认事件总线
    pub fn event_bus(&self) -> AppResult<Arc<DefaultEventBus>> {
        self.inner
            .event_bus(&self.inner.root, &self.inner.root_scoped_bus)
    }

    /// 在根作用域中解析事件 `E` 的处理器
    pub fn handlers<E: DomainEvent>(&self) -> AppResult<Vec<SharedHandler<E>>> {
        Ok(self.inner.root.resolve::<E>()?)
    }

    /// 创建新的服务作用域
    pub fn create_scope(&self) -> ServiceScope {
        trace!("created service scope");
        ServiceScope {
            provider: self.inner.clone(),
            scope: HandlerScope::new(self.inner.registry.clone()),
            scoped_bus: OnceLock::new(),
        }
    }
}

/// 服务作用域：一次逻辑工作单元
pub struct ServiceScope {
    provider: Arc<ProviderInner>,
    scope: HandlerScope,
    scoped_bus: OnceLock<Arc<DefaultEventBus>>,
}

impl ServiceScope {
    /// 按注册的生命周期解析默认事件总线；Scoped 总线在本作用域内唯一
    pub fn event_bus(&self) -> AppResult<Arc<DefaultEventBus>> {
        self.provider.event_bus(&self.scope, &self.scoped_bus)
    }

    /// 在本作用域中解析事件 `E` 的处理器
    pub fn handlers<E: DomainEvent>(&self) -> AppResult<Vec<SharedHandler<E>>> {
        Ok(self.scope.resolve::<E>()?)
    }

    pub fn handler_scope(&self) -> &HandlerScope {
        &self.scope
    }
}
