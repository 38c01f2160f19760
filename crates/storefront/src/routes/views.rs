//! Display types shared by the page templates.
//!
//! Templates only see pre-formatted strings; all formatting happens here.

use guitarguitar_core::{Customer, Order, OrderStatus, Product};

/// Format a price in pounds sterling.
#[must_use]
pub fn format_price(amount: f64) -> String {
    format!("£{amount:.2}")
}

/// Product display data.
#[derive(Clone)]
pub struct ProductView {
    pub sku: String,
    pub title: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    pub detail: String,
    pub price: String,
    pub picture: String,
    pub online: bool,
    pub in_stock: bool,
    pub stock_label: String,
    pub colour: &'static str,
    pub pickup: &'static str,
    pub body_shape: &'static str,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        let stock_label = if product.in_stock() {
            format!("{} in stock", product.qty_in_stock)
        } else if product.qty_on_order > 0 {
            format!("Out of stock, {} on order", product.qty_on_order)
        } else {
            "Out of stock".to_string()
        };

        Self {
            sku: product.sku_id.clone(),
            title: product.title.clone(),
            brand: product.brand_name.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
            detail: product.product_detail.clone(),
            price: format_price(product.sales_price),
            picture: product.picture_main.clone(),
            online: product.online,
            in_stock: product.in_stock(),
            stock_label,
            colour: product.colour.label(),
            pickup: product.pickup.label(),
            body_shape: product.body_shape.label(),
        }
    }
}

/// Order display data.
#[derive(Clone)]
pub struct OrderView {
    pub id: i64,
    pub customer_id: i64,
    pub date: String,
    pub total: String,
    pub status: &'static str,
    /// CSS modifier, e.g. `status--placed`.
    pub status_class: &'static str,
    pub shipping: String,
    pub item_count: usize,
    pub items: Vec<ProductView>,
}

const fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Placed => "status--placed",
        OrderStatus::Dispatched | OrderStatus::Delivering => "status--transit",
        OrderStatus::Delivered | OrderStatus::Completed => "status--done",
        OrderStatus::Cancelled => "status--cancelled",
        OrderStatus::Unknown => "status--unknown",
    }
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.as_i64(),
            customer_id: order.customer_id.as_i64(),
            date: order.date_created.clone(),
            total: format_price(order.order_total),
            status: order.status.label(),
            status_class: status_class(order.status),
            shipping: order.shipping_address.one_line(),
            item_count: order.item_count(),
            items: order.products.iter().map(ProductView::from).collect(),
        }
    }
}

/// Customer display data.
#[derive(Clone)]
pub struct CustomerView {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar: String,
    pub address: String,
    pub loyalty_level: i64,
}

impl From<&Customer> for CustomerView {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id.as_i64(),
            name: customer.full_name(),
            email: customer.email.clone(),
            phone: customer.phone_number.clone(),
            avatar: customer.avatar.clone(),
            address: customer.address.one_line(),
            loyalty_level: customer.loyalty_level,
        }
    }
}

/// Order counts per status, in status-code order.
#[derive(Clone)]
pub struct StatusCount {
    pub status: &'static str,
    pub status_class: &'static str,
    pub count: usize,
}

/// Tally orders by status. Statuses with no orders are omitted.
#[must_use]
pub fn count_by_status(orders: &[Order]) -> Vec<StatusCount> {
    OrderStatus::ALL
        .iter()
        .map(|status| StatusCount {
            status: status.label(),
            status_class: status_class(*status),
            count: orders.iter().filter(|o| o.status == *status).count(),
        })
        .filter(|c| c.count > 0)
        .collect()
}
