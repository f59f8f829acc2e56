//! 实体（Entity）基础抽象
//!
//! 实体以标识（Id）区分彼此：同类型的两个实体当且仅当标识相等时视为相等，
//! 其余属性不参与比较。通常配合 `#[entity]` 宏使用，由宏生成基于标识的
//! `PartialEq/Eq/Hash` 实现。
//!
use std::fmt::Debug;
use std::hash::Hash;

/// 具备唯一标识的实体抽象
pub trait Entity: Send + Sync {
    /// 实体标识类型，要求可比较、可哈希与可克隆
    type Id: Clone + Eq + Hash + Debug + Send + Sync + 'static;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;

    /// 判断与另一个（标识类型相同的）实体是否具有相同标识
    ///
    /// 与 `PartialEq` 不同，`other` 可以是不同的实体类型。
    fn same_identity<O>(&self, other: &O) -> bool
    where
        O: Entity<Id = Self::Id> + ?Sized,
    {
        self.id() == other.id()
    }
}
