/// 进程内事件总线示例
/// 展示 处理器注册 -> 解析器 -> IocDomainEventBus -> 串行投递，以及未注册事件的错误
use async_trait::async_trait;
use keel_domain::domain_event::DomainEvent;
use keel_domain::error::{DomainError, DomainResult};
use keel_domain::eventing::{
    DomainEventBus, DomainEventHandler, HandlerResolver, IocDomainEventBus, SharedHandler,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct AccountOpened {
    owner: String,
}

impl DomainEvent for AccountOpened {}

#[derive(Debug)]
struct AccountClosed;

impl DomainEvent for AccountClosed {}

struct WelcomeMail;

#[async_trait]
impl DomainEventHandler<AccountOpened> for WelcomeMail {
    async fn handle(&self, event: &AccountOpened) -> DomainResult<()> {
        println!("welcome mail -> {}", event.owner);
        Ok(())
    }
}

struct OpenAudit;

#[async_trait]
impl DomainEventHandler<AccountOpened> for OpenAudit {
    async fn handle(&self, event: &AccountOpened) -> DomainResult<()> {
        println!("audit: account opened by {}", event.owner);
        Ok(())
    }
}

// 只认识 AccountOpened 的静态解析器
struct StaticResolver {
    opened: Vec<SharedHandler<AccountOpened>>,
}

impl HandlerResolver for StaticResolver {
    fn resolve<E: DomainEvent>(&self) -> DomainResult<Vec<SharedHandler<E>>> {
        let any: &dyn std::any::Any = &self.opened;
        Ok(any
            .downcast_ref::<Vec<SharedHandler<E>>>()
            .cloned()
            .unwrap_or_default())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("keel_domain=trace".parse()?))
        .init();

    let bus = IocDomainEventBus::new(StaticResolver {
        opened: vec![Arc::new(WelcomeMail), Arc::new(OpenAudit)],
    });

    bus.publish(AccountOpened {
        owner: "alice".into(),
    })
    .await?;

    // 未注册处理器的事件 -> NoHandlerRegistered
    if let Err(DomainError::NoHandlerRegistered { event_type }) = bus.publish(AccountClosed).await
    {
        eprintln!("no handler registered as expected for: {}", event_type);
    }
    Ok(())
}
