use keel_macros::entity;

#[entity(id = u64)]
#[derive(PartialEq)]
struct Customer {
    name: String,
}

fn main() {}
