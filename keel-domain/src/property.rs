//! 属性赋值拦截（Property Interception）
//!
//! 为实体提供“仅在值变化时赋值”的基础能力，并允许在赋值发生后插入自定义逻辑，
//! 例如记录脏字段、触发校验或生成领域事件。
//!
//! 由于拦截器与被赋值字段通常同属一个结构体，这里将二者拆为两个独立参数，
//! 以便借用检查器接受 `self.changes.set(&mut self.name, v, "name")` 这样的写法。
//!

/// 当 `value` 与当前值不同（按 `PartialEq`）时写入字段，返回是否发生了变化
pub fn set_field<T: PartialEq>(field: &mut T, value: T) -> bool {
    if *field == value {
        return false;
    }
    *field = value;
    true
}

/// 属性赋值拦截器
pub trait PropertyInterceptor {
    /// 在属性实际发生变化后调用
    fn on_property_set(&mut self, property: &'static str);
}

/// 写入字段并在发生变化时通知拦截器，返回是否发生了变化
pub fn set_field_intercepted<T, I>(
    interceptor: &mut I,
    field: &mut T,
    value: T,
    property: &'static str,
) -> bool
where
    T: PartialEq,
    I: PropertyInterceptor + ?Sized,
{
    let changed = set_field(field, value);
    if changed {
        interceptor.on_property_set(property);
    }
    changed
}

/// 记录已变化属性名的拦截器
///
/// 属性名按首次变化的顺序保存且不重复。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeTracker {
    changed: Vec<&'static str>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入字段，若发生变化则记录属性名
    pub fn set<T: PartialEq>(&mut self, field: &mut T, value: T, property: &'static str) -> bool {
        set_field_intercepted(self, field, value, property)
    }

    pub fn is_dirty(&self) -> bool {
        !self.changed.is_empty()
    }

    pub fn is_changed(&self, property: &str) -> bool {
        self.changed.iter().any(|p| *p == property)
    }

    pub fn changed_properties(&self) -> &[&'static str] {
        &self.changed
    }

    /// 取出并清空已记录的变化
    pub fn take_changes(&mut self) -> Vec<&'static str> {
        std::mem::take(&mut self.changed)
    }
}

impl PropertyInterceptor for ChangeTracker {
    fn on_property_set(&mut self, property: &'static str) {
        if !self.changed.contains(&property) {
            self.changed.push(property);
        }
    }
}
