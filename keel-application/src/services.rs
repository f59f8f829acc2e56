//! 服务集合（DomainServices）
//!
//! 装配阶段收集领域事件处理器与事件总线的注册，`build` 后得到只读的
//! [`ServiceProvider`]。
//!
use crate::config::EventingConfig;
use crate::lifetime::ServiceLifetime;
use crate::module::{DomainModule, HandlerManifest};
use crate::provider::ServiceProvider;
use crate::registry::{HandlerRegistry, HandlerRegistryBuilder};
use keel_domain::domain_event::DomainEvent;
use keel_domain::eventing::DomainEventHandler;
use tracing::{debug, info};

pub struct DomainServices {
    handlers: HandlerRegistryBuilder,
    bus_lifetime: Option<ServiceLifetime>,
    defaults: EventingConfig,
}

impl Default for DomainServices {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainServices {
    /// 空集合，不注册事件总线
    pub fn new() -> Self {
        Self {
            handlers: HandlerRegistry::builder(),
            bus_lifetime: None,
            defaults: EventingConfig::default(),
        }
    }

    /// 按配置创建；`register_default_bus` 为真时以 `bus_lifetime` 注册默认总线
    pub fn from_config(config: &EventingConfig) -> Self {
        let mut services = Self {
            defaults: config.clone(),
            ..Self::new()
        };
        if config.register_default_bus {
            services.register_default_domain_event_bus(config.bus_lifetime);
        }
        services
    }

    /// 注册以 `Default` 构造的处理器
    pub fn register_domain_event_handler<E, H>(&mut self, lifetime: ServiceLifetime) -> &mut Self
    where
        E: DomainEvent,
        H: DomainEventHandler<E> + Default + 'static,
    {
        self.handlers.add::<E, H, _>(lifetime, H::default);
        self
    }

    /// 注册由工厂构造的处理器
    pub fn register_domain_event_handler_with<E, H, F>(
        &mut self,
        lifetime: ServiceLifetime,
        factory: F,
    ) -> &mut Self
    where
        E: DomainEvent,
        H: DomainEventHandler<E> + 'static,
        F: Fn() -> H + Send + Sync + 'static,
    {
        self.handlers.add::<E, H, F>(lifetime, factory);
        self
    }

    /// 以配置中的 `handler_lifetime` 注册处理器
    pub fn add_domain_event_handler<E, H>(&mut self) -> &mut Self
    where
        E: DomainEvent,
        H: DomainEventHandler<E> + Default + 'static,
    {
        let lifetime = self.defaults.handler_lifetime;
        self.register_domain_event_handler::<E, H>(lifetime)
    }

    /// 注册默认事件总线；重复调用时以最后一次为准
    pub fn register_default_domain_event_bus(&mut self, lifetime: ServiceLifetime) -> &mut Self {
        if let Some(previous) = self.bus_lifetime.replace(lifetime) {
            debug!(%previous, %lifetime, "default domain event bus re-registered");
        } else {
            debug!(%lifetime, "registered default domain event bus");
        }
        self
    }

    /// 以统一生命周期注册模块内的全部处理器
    pub fn register_module_domain_event_handlers<M>(&mut self, lifetime: ServiceLifetime) -> &mut Self
    where
        M: DomainModule,
    {
        let mut manifest = HandlerManifest::new();
        M::domain_event_handlers(&mut manifest);
        let count = manifest.len();
        manifest.apply(&mut self.handlers, lifetime);
        info!(module = M::NAME, handlers = count, %lifetime, "registered domain module");
        self
    }

    /// 以配置中的 `module_handler_lifetime` 注册模块
    pub fn add_module_domain_event_handlers<M>(&mut self) -> &mut Self
    where
        M: DomainModule,
    {
        let lifetime = self.defaults.module_handler_lifetime;
        self.register_module_domain_event_handlers::<M>(lifetime)
    }

    /// 已注册的处理器总数
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn bus_lifetime(&self) -> Option<ServiceLifetime> {
        self.bus_lifetime
    }

    pub fn build(self) -> ServiceProvider {
        ServiceProvider::new(self.handlers.build(), self.bus_lifetime)
    }
}
