//! Order record.

use serde::Serialize;
use serde_json::{Map, Value};

use super::{Address, CustomerId, OrderId, OrderStatus, Product};
use crate::decode::{DecodeError, FieldReader, FromJson, context_label};

/// An order with its shipping address and embedded products.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    /// Not checked against the customer list.
    pub customer_id: CustomerId,
    pub shipping_address: Address,
    pub products: Vec<Product>,
    /// Upstream date, kept verbatim.
    pub date_created: String,
    pub order_total: f64,
    pub status: OrderStatus,
}

impl FromJson for Order {
    const CONTEXT: &'static str = "Order";

    fn from_json(value: &Value, parent: Option<&str>) -> Result<Self, DecodeError> {
        let mut r = FieldReader::new(value, context_label(Self::CONTEXT, parent))?;

        let id: i64 = r.require_field("Id")?;
        let customer_id: i64 = r.require_field("CustomerId")?;
        let shipping_address: Map<String, Value> = r.require_field("ShippingAddress")?;
        let shipping_address =
            Address::from_json(&Value::Object(shipping_address), Some(r.context()))?;
        let products: Vec<Value> = r.require_field("Products")?;
        let products = products
            .iter()
            .map(|p| Product::from_json(p, Some(r.context())))
            .collect::<Result<Vec<_>, _>>()?;
        let date_created = r.require_field("DateCreated")?;
        let order_total = r.require_field("OrderTotal")?;

        // Strict on purpose: unlike product codes, an unknown status is an error.
        let code: i64 = r.require_field("OrderStatus")?;
        let status =
            OrderStatus::try_from_code(code).ok_or_else(|| DecodeError::InvalidEnumValue {
                context: r.context().to_string(),
                key: "OrderStatus".to_string(),
                value: code,
            })?;

        r.finish()?;
        Ok(Self {
            id: OrderId::new(id),
            customer_id: CustomerId::new(customer_id),
            shipping_address,
            products,
            date_created,
            order_total,
            status,
        })
    }
}

impl Order {
    /// Total number of product lines.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.products.len()
    }
}
