//! CLI command implementations.

pub mod check;
pub mod decode;

use clap::ValueEnum;
use guitarguitar_storefront::catalogue::{CUSTOMERS, ORDERS, PRODUCTS};

/// One of the three catalogue collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Collection {
    Customers,
    Products,
    Orders,
}

impl Collection {
    /// Every collection, in the order `check all` loads them.
    pub const ALL: [Self; 3] = [Self::Customers, Self::Products, Self::Orders];

    /// Endpoint path on the catalogue API.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Customers => CUSTOMERS,
            Self::Products => PRODUCTS,
            Self::Orders => ORDERS,
        }
    }
}
