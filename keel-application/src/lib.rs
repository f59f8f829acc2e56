//! 应用组合层
//!
//! 负责把领域事件处理器和事件总线装配到带生命周期的服务容器中：
//! `DomainServices` 收集注册，`ServiceProvider` / `ServiceScope` 解析事件总线。
//!
pub mod config;
pub mod error;
pub mod lifetime;
pub mod module;
pub mod provider;
pub mod registry;
pub mod services;

pub use config::EventingConfig;
pub use error::{AppError, AppResult};
pub use lifetime::ServiceLifetime;
pub use module::{DomainModule, HandlerManifest};
pub use provider::{DefaultEventBus, ServiceProvider, ServiceScope};
pub use registry::{HandlerRegistry, HandlerScope};
pub use services::DomainServices;
