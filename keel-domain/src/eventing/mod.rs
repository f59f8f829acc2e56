//! 事件子系统（eventing）
//!
//! 提供进程内领域事件的发布与处理：
//! - `DomainEventHandler`：处理某一具体事件类型；
//! - `HandlerResolver`：按事件类型解析处理器（由组合层实现并注入）；
//! - `DomainEventBus`：统一发布接口；
//! - `IocDomainEventBus`：基于解析器、串行调用处理器的默认实现。
//!
pub mod bus;
pub mod handler;
pub mod ioc_bus;
pub mod resolver;

pub use bus::DomainEventBus;
pub use handler::DomainEventHandler;
pub use ioc_bus::IocDomainEventBus;
pub use resolver::{HandlerResolver, SharedHandler};
pub use tokio_util::sync::CancellationToken;
