//! 处理器注册表（HandlerRegistry）与作用域（HandlerScope）
//!
//! 以事件类型的 `TypeId` 为键，保存按注册顺序排列的处理器工厂及其生命周期。
//! 注册表构建后只读；实例的创建与缓存按生命周期区分：
//! - `Singleton`：首次解析时创建，保存在注册表内；
//! - `Scoped`：首次在某个作用域内解析时创建，保存在该作用域内；
//! - `Transient`：每次解析都调用工厂。
//!
use crate::lifetime::ServiceLifetime;
use dashmap::DashMap;
use keel_domain::domain_event::DomainEvent;
use keel_domain::error::{DomainError, DomainResult};
use keel_domain::eventing::{DomainEventHandler, HandlerResolver, SharedHandler};
use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tracing::{debug, trace};

type HandlerFactory<E> = Arc<dyn Fn() -> SharedHandler<E> + Send + Sync>;

type BoxAnySend = Box<dyn Any + Send + Sync>;

// (事件类型, 注册序号) -> SharedHandler<E>
type ScopeCache = DashMap<(TypeId, usize), BoxAnySend>;

struct Registration<E: DomainEvent> {
    lifetime: ServiceLifetime,
    factory: HandlerFactory<E>,
    singleton: OnceLock<SharedHandler<E>>,
}

impl<E: DomainEvent> Registration<E> {
    fn instance(&self, slot: usize, cache: &ScopeCache) -> DomainResult<SharedHandler<E>> {
        match self.lifetime {
            ServiceLifetime::Singleton => Ok(self.singleton.get_or_init(|| (self.factory)()).clone()),
            ServiceLifetime::Transient => Ok((self.factory)()),
            ServiceLifetime::Scoped => {
                let entry = cache
                    .entry((TypeId::of::<E>(), slot))
                    .or_insert_with(|| Box::new((self.factory)()));
                entry
                    .downcast_ref::<SharedHandler<E>>()
                    .cloned()
                    .ok_or(DomainError::TypeMismatch {
                        expected: type_name::<SharedHandler<E>>(),
                        found: "unknown",
                    })
            }
        }
    }
}

struct EventEntry {
    event_type: &'static str,
    // 元素类型为 Registration<E>
    registrations: Vec<BoxAnySend>,
}

/// 只读的处理器注册表
pub struct HandlerRegistry {
    entries: HashMap<TypeId, EventEntry>,
}

impl HandlerRegistry {
    pub fn builder() -> HandlerRegistryBuilder {
        HandlerRegistryBuilder::default()
    }

    /// 某事件类型已注册的处理器数量
    pub fn handler_count<E: DomainEvent>(&self) -> usize {
        self.entries
            .get(&TypeId::of::<E>())
            .map(|e| e.registrations.len())
            .unwrap_or(0)
    }

    /// 已注册处理器的事件类型名（排序后）
    pub fn registered_event_types(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.values().map(|e| e.event_type).collect();
        names.sort_unstable();
        names
    }

    fn resolve_in<E: DomainEvent>(&self, cache: &ScopeCache) -> DomainResult<Vec<SharedHandler<E>>> {
        let Some(entry) = self.entries.get(&TypeId::of::<E>()) else {
            return Ok(Vec::new());
        };

        entry
            .registrations
            .iter()
            .enumerate()
            .map(|(slot, boxed)| {
                // 正常情况下这里的 downcast 永远不会失败（键与注册项同一泛型 E）
                let registration =
                    boxed
                        .downcast_ref::<Registration<E>>()
                        .ok_or(DomainError::TypeMismatch {
                            expected: type_name::<Registration<E>>(),
                            found: entry.event_type,
                        })?;
                registration.instance(slot, cache)
            })
            .collect()
    }
}

/// 注册表构建器
#[derive(Default)]
pub struct HandlerRegistryBuilder {
    entries: HashMap<TypeId, EventEntry>,
}

impl HandlerRegistryBuilder {
    /// 以给定生命周期注册事件 `E` 的处理器工厂，同一事件可注册多个处理器
    pub fn add<E, H, F>(&mut self, lifetime: ServiceLifetime, factory: F) -> &mut Self
    where
        E: DomainEvent,
        H: DomainEventHandler<E> + 'static,
        F: Fn() -> H + Send + Sync + 'static,
    {
        let factory: HandlerFactory<E> = Arc::new(move || Arc::new(factory()) as SharedHandler<E>);

        let entry = self
            .entries
            .entry(TypeId::of::<E>())
            .or_insert_with(|| EventEntry {
                event_type: E::event_name(),
                registrations: Vec::new(),
            });
        entry.registrations.push(Box::new(Registration::<E> {
            lifetime,
            factory,
            singleton: OnceLock::new(),
        }));

        debug!(
            event_type = E::event_name(),
            handler = type_name::<H>(),
            %lifetime,
            "registered domain event handler"
        );
        self
    }

    /// 已注册的处理器总数
    pub fn len(&self) -> usize {
        self.entries.values().map(|e| e.registrations.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn build(self) -> HandlerRegistry {
        HandlerRegistry {
            entries: self.entries,
        }
    }
}

/// 处理器作用域：注册表 + 本作用域内的 Scoped 实例缓存
///
/// 克隆开销很小，克隆体共享同一份缓存。
#[derive(Clone)]
pub struct HandlerScope {
    registry: Arc<HandlerRegistry>,
    cache: Arc<ScopeCache>,
}

impl HandlerScope {
    pub fn new(registry: Arc<HandlerRegistry>) -> Self {
        trace!("created handler scope");
        Self {
            registry,
            cache: Arc::new(DashMap::new()),
        }
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }
}

impl HandlerResolver for HandlerScope {
    fn resolve<E: DomainEvent>(&self) -> DomainResult<Vec<SharedHandler<E>>> {
        self.registry.resolve_in::<E>(&self.cache)
    }
}
