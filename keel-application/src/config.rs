//! 事件装配配置
//!
//! 来源按以下顺序合并（后者覆盖前者）：
//! 1. `EventingConfig::default()`
//! 2. TOML 文件（若提供且存在）
//! 3. 带 `KEEL_EVENTING_` 前缀的环境变量，例如 `KEEL_EVENTING_BUS_LIFETIME=scoped`
//!
use crate::error::AppResult;
use crate::lifetime::ServiceLifetime;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// 环境变量前缀
pub const CONFIG_ENV_PREFIX: &str = "KEEL_EVENTING_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventingConfig {
    /// 单个处理器注册的默认生命周期
    pub handler_lifetime: ServiceLifetime,
    /// 模块批量注册的默认生命周期
    pub module_handler_lifetime: ServiceLifetime,
    /// 默认事件总线的生命周期
    pub bus_lifetime: ServiceLifetime,
    /// 是否自动注册默认事件总线
    pub register_default_bus: bool,
}

impl Default for EventingConfig {
    fn default() -> Self {
        Self {
            handler_lifetime: ServiceLifetime::Transient,
            module_handler_lifetime: ServiceLifetime::Scoped,
            bus_lifetime: ServiceLifetime::Singleton,
            register_default_bus: true,
        }
    }
}

impl EventingConfig {
    /// 加载配置；`path` 不存在时跳过文件层
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(EventingConfig::default()));

        if let Some(path) = path {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
                debug!(path = %path.display(), "loaded eventing config file");
            } else {
                debug!(path = %path.display(), "eventing config file not found, skipped");
            }
        }

        let config: EventingConfig = figment.merge(Env::prefixed(CONFIG_ENV_PREFIX)).extract()?;
        Ok(config)
    }
}
