//! Typed records for the guitarguitar catalogue API.
//!
//! Records are immutable once decoded. Field names follow Rust conventions;
//! the upstream JSON keys are listed on each decoder.

pub mod address;
pub mod codes;
pub mod customer;
pub mod id;
pub mod opaque;
pub mod order;
pub mod product;

pub use address::Address;
pub use codes::{BodyShape, Colour, OrderStatus, Pickup};
pub use customer::{Customer, find_by_email};
pub use id::*;
pub use opaque::OpaqueJson;
pub use order::Order;
pub use product::Product;
