use keel_macros::entity_id;
use uuid::Uuid;

#[entity_id]
struct OrderId(Uuid);

#[entity_id(debug = false)]
struct SkuId(String);

impl std::fmt::Debug for SkuId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SkuId(..)")
    }
}

fn main() {
    let raw = Uuid::new_v4();
    let id = OrderId::new(raw);
    assert_eq!(*id.value(), raw);
    let _ = format!("{:?}", id); // 默认启用 Debug，应可用

    let parsed: OrderId = raw.to_string().parse().unwrap();
    assert_eq!(parsed, id);
    assert_eq!(id.to_string(), raw.to_string());

    let sku = SkuId::from("lamp-01".to_string());
    assert_eq!(format!("{:?}", sku), "SkuId(..)"); // 使用手写 Debug
    let back: String = sku.into();
    assert_eq!(back, "lamp-01");
}
