//! Domain models for storefront.

pub mod session;

pub use session::{CurrentLogin, keys as session_keys};
