//! 领域事件（Domain Event）
//!
//! 领域事件是对“业务中已发生事实”的不可变描述，由调用方持有并传入事件总线。
//! 本 crate 仅要求事件类型实现标记 trait `DomainEvent`，并以其静态类型作为
//! 处理器路由的键。
//!
//! 可以手动实现：
//!
//! ```
//! use keel_domain::domain_event::DomainEvent;
//!
//! struct OrderPlaced {
//!     order_id: u64,
//! }
//!
//! impl DomainEvent for OrderPlaced {}
//!
//! assert!(OrderPlaced::event_name().ends_with("OrderPlaced"));
//! ```
//!
//! 或使用 `#[domain_event]` 宏（见 `keel-macros`）。

/// 领域事件标记
pub trait DomainEvent: Send + Sync + 'static {
    /// 事件类型名，用于日志与错误信息
    ///
    /// 默认返回完整类型路径（`std::any::type_name`），可覆写为稳定名称。
    fn event_name() -> &'static str
    where
        Self: Sized,
    {
        std::any::type_name::<Self>()
    }
}
