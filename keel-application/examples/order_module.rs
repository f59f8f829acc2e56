/// 模块装配示例
/// 展示 EventingConfig -> DomainServices -> 模块注册 -> ServiceScope 发布事件
use async_trait::async_trait;
use keel_application::{
    DomainModule, DomainServices, EventingConfig, HandlerManifest, ServiceLifetime,
};
use keel_domain::error::{DomainError, DomainResult};
use keel_domain::eventing::{DomainEventBus, DomainEventHandler};
use keel_macros::domain_event;
use tracing_subscriber::EnvFilter;

#[domain_event]
struct OrderPlaced {
    order_no: u32,
    total: u64,
}

#[domain_event(name = "order.cancelled")]
struct OrderCancelled {
    order_no: u32,
}

#[derive(Default)]
struct ReserveStock;

#[async_trait]
impl DomainEventHandler<OrderPlaced> for ReserveStock {
    async fn handle(&self, event: &OrderPlaced) -> DomainResult<()> {
        println!("reserve stock for order #{}", event.order_no);
        Ok(())
    }
}

#[derive(Default)]
struct SendReceipt;

#[async_trait]
impl DomainEventHandler<OrderPlaced> for SendReceipt {
    async fn handle(&self, event: &OrderPlaced) -> DomainResult<()> {
        println!("receipt: order #{} total {}", event.order_no, event.total);
        Ok(())
    }
}

struct Sales;

impl DomainModule for Sales {
    const NAME: &'static str = "sales";

    fn domain_event_handlers(manifest: &mut HandlerManifest) {
        manifest
            .handler::<OrderPlaced, ReserveStock>()
            .handler::<OrderPlaced, SendReceipt>();
    }
}

#[derive(Default)]
struct AuditTrail;

#[async_trait]
impl DomainEventHandler<OrderPlaced> for AuditTrail {
    async fn handle(&self, event: &OrderPlaced) -> DomainResult<()> {
        println!("audit: order #{} placed", event.order_no);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("keel_application=debug".parse()?)
                .add_directive("keel_domain=trace".parse()?),
        )
        .init();

    // 默认值 + 可选的 keel.toml + KEEL_EVENTING_* 环境变量
    let config = EventingConfig::load(Some(std::path::Path::new("keel.toml")))?;

    let mut services = DomainServices::from_config(&config);
    services
        .add_module_domain_event_handlers::<Sales>()
        .register_domain_event_handler::<OrderPlaced, AuditTrail>(ServiceLifetime::Singleton);
    let provider = services.build();

    let scope = provider.create_scope();
    let bus = scope.event_bus()?;
    bus.publish(OrderPlaced {
        order_no: 1001,
        total: 250,
    })
    .await?;

    // 未注册处理器的事件 -> NoHandlerRegistered
    if let Err(DomainError::NoHandlerRegistered { event_type }) =
        bus.publish(OrderCancelled { order_no: 1001 }).await
    {
        eprintln!("no handler registered as expected for: {}", event_type);
    }
    Ok(())
}
