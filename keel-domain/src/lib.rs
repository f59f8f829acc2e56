//! DDD 领域层基础库（keel-domain）
//!
//! 提供以 DDD 为中心的基础抽象：
//! - 实体（`entity`）：以标识相等为准的实体建模；
//! - 属性拦截（`property`）：仅在值变化时赋值，并记录变更；
//! - 领域事件（`domain_event`）：事件标记 trait；
//! - 事件系统（`eventing`）：处理器、解析器与进程内事件总线；
//! - 工作单元（`unit_of_work`）：事务性持久化的接口。
//!
//! 本 crate 不绑定任何依赖注入容器：事件总线只依赖一个 `HandlerResolver`，
//! 由组合层（例如 `keel-application`）提供并注入。
//!
//! 典型用法：
//! 1. 使用 `#[entity]`/`#[domain_event]` 定义实体与事件；
//! 2. 为事件实现 `DomainEventHandler`；
//! 3. 将处理器注册到解析器，用它构造 `IocDomainEventBus`；
//! 4. 通过 `DomainEventBus::publish` 发布事件。
//!
pub mod domain_event;
pub mod entity;
pub mod error;
#[cfg(feature = "eventing")]
pub mod eventing;
pub mod property;
pub mod unit_of_work;

// 允许在本 crate 内部通过 ::keel_domain 进行自引用，
// 以便过程宏在本 crate 的单元测试中也能解析到 ::keel_domain 路径。
extern crate self as keel_domain;
