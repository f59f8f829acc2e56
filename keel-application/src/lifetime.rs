use serde::{Deserialize, Serialize};
use std::fmt;

/// 服务生命周期
///
/// - `Singleton`：整个进程（同一个 `HandlerRegistry`）共享一个实例；
/// - `Scoped`：每个作用域（一次逻辑工作单元）一个实例；
/// - `Transient`：每次解析都创建新实例。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceLifetime {
    Singleton,
    Scoped,
    #[default]
    Transient,
}

impl fmt::Display for ServiceLifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ServiceLifetime::Singleton => "singleton",
            ServiceLifetime::Scoped => "scoped",
            ServiceLifetime::Transient => "transient",
        };
        f.write_str(s)
    }
}
