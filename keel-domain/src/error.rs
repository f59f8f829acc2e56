//! 领域层统一错误定义
//!
//! 聚焦事件分发、处理器、仓储与工作单元等最小必要集合，
//! 便于在各实现层统一转换为 `DomainError`。
//!
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 事件系统 ---
    /// 配置错误：事件类型没有任何已注册的处理器
    #[error("no registered handlers found for event type: {event_type}")]
    NoHandlerRegistered { event_type: &'static str },
    #[error("event handler error: handler={handler}, reason={reason}")]
    EventHandler { handler: String, reason: String },
    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    // --- 仓储/工作单元 ---
    #[error("repository not registered: {repository}")]
    RepositoryNotRegistered { repository: &'static str },
    #[error("repository error: {reason}")]
    Repository { reason: String },
    #[error("commit failed: {reason}")]
    Commit { reason: String },

    // --- 通用 ---
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl DomainError {
    pub fn event_handler(handler: impl Into<String>, reason: impl Into<String>) -> Self {
        DomainError::EventHandler {
            handler: handler.into(),
            reason: reason.into(),
        }
    }

    pub fn repository(reason: impl Into<String>) -> Self {
        DomainError::Repository {
            reason: reason.into(),
        }
    }

    pub fn commit(reason: impl Into<String>) -> Self {
        DomainError::Commit {
            reason: reason.into(),
        }
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
