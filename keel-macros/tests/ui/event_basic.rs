use keel_domain::domain_event::DomainEvent;
use keel_macros::domain_event;

#[domain_event]
struct OrderPlaced {
    order_id: u64,
}

#[domain_event(name = "order.cancelled")]
#[derive(PartialEq)]
struct OrderCancelled {
    order_id: u64,
    reason: String,
}

#[domain_event]
enum StockEvent {
    Reserved { sku: String },
    Released { sku: String },
}

fn main() {
    assert_eq!(OrderPlaced::event_name(), "OrderPlaced");
    assert_eq!(OrderCancelled::event_name(), "order.cancelled");
    assert_eq!(StockEvent::event_name(), "StockEvent");

    let placed = OrderPlaced { order_id: 1 };
    let _ = format!("{:?}", placed.clone());
    assert_eq!(placed.order_id, 1);

    let cancelled = OrderCancelled {
        order_id: 1,
        reason: "late".into(),
    };
    assert_eq!(cancelled.clone(), cancelled);
    assert_eq!(cancelled.reason, "late");

    for e in [
        StockEvent::Reserved { sku: "a".into() },
        StockEvent::Released { sku: "b".into() },
    ] {
        match e {
            StockEvent::Reserved { sku } | StockEvent::Released { sku } => {
                assert!(!sku.is_empty())
            }
        }
    }
}
