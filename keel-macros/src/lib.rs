//! keel 过程宏
//!
//! - `#[entity]`：为具名字段结构体补全 `id` 字段并实现基于标识的 `Entity/PartialEq/Eq/Hash`
//! - `#[entity_id]`：为单字段 tuple struct 生成标识类型常用实现
//! - `#[domain_event]`：实现 `DomainEvent` 标记，并提供稳定的事件名
//!
use proc_macro::TokenStream;

mod domain_event;
mod entity;
mod entity_id;
mod utils;

/// 实体宏
///
/// ```ignore
/// #[entity(id = OrderId)]
/// struct Order {
///     total: u64,
/// }
/// ```
#[proc_macro_attribute]
pub fn entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity::expand(attr, item)
}

/// 实体 ID 宏
/// 用于为 `tuple struct` 形式的 ID 类型（例如 `struct OrderId(Uuid);`）生成
/// 派生、`new/value`、`Display`、`FromStr` 与 `From` 转换。
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}

/// 领域事件宏
///
/// ```ignore
/// #[domain_event(name = "order.placed")]
/// struct OrderPlaced {
///     order_id: OrderId,
/// }
/// ```
#[proc_macro_attribute]
pub fn domain_event(attr: TokenStream, item: TokenStream) -> TokenStream {
    domain_event::expand(attr, item)
}
