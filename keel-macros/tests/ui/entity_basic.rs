use keel_domain::entity::Entity;
use keel_macros::entity;
use std::collections::HashSet;

#[entity(id = u64)]
struct Customer {
    name: String,
}

#[entity]
#[derive(Clone, Default)]
struct Warehouse {
    city: String,
}

#[entity(id = u32, debug = false)]
struct Secret {
    payload: Vec<u8>,
    id: u32,
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret({}, ..)", self.id)
    }
}

fn main() {
    let a = Customer {
        id: 1,
        name: "alice".into(),
    };
    let b = Customer {
        id: 1,
        name: "bob".into(),
    };
    assert_eq!(a, b);
    assert_eq!(*a.id(), 1);
    assert_eq!(a.name.len(), 5);

    let mut set = HashSet::new();
    set.insert(a);
    assert!(!set.insert(b));

    let w = Warehouse::default();
    assert_eq!(w.id, String::new());
    let _ = format!("{:?}", w.clone()); // 默认启用 Debug
    assert!(w.city.is_empty());

    let s = Secret {
        id: 3,
        payload: vec![1],
    };
    assert_eq!(format!("{:?}", s), "Secret(3, ..)"); // 使用手写 Debug
    assert_eq!(s.payload, vec![1]);
}
