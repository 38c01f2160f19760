//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use guitarguitar_core::Order;
use tracing::instrument;

use super::views::{OrderView, StatusCount, count_by_status, format_price};
use crate::error::Result;
use crate::filters;
use crate::middleware::OptionalLogin;
use crate::state::AppState;

/// Number of orders shown under "Latest orders".
const RECENT_ORDERS: usize = 5;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub login: Option<String>,
    pub order_count: usize,
    pub revenue: String,
    pub status_counts: Vec<StatusCount>,
    pub recent: Vec<OrderView>,
    /// Orders placed by the logged-in customer, if any.
    pub my_orders: Option<Vec<OrderView>>,
}

/// Display the home page: an order summary plus the visitor's own orders.
#[instrument(skip(state, login))]
pub async fn home(State(state): State<AppState>, login: OptionalLogin) -> Result<impl IntoResponse> {
    let orders = state.catalogue().load_orders().await?;

    let revenue: f64 = orders.iter().map(|o| o.order_total).sum();

    let mut recent: Vec<&Order> = orders.iter().collect();
    // ISO dates sort lexically
    recent.sort_by(|a, b| b.date_created.cmp(&a.date_created));
    let recent = recent
        .into_iter()
        .take(RECENT_ORDERS)
        .map(OrderView::from)
        .collect();

    let my_orders = login.0.as_ref().map(|current| {
        orders
            .iter()
            .filter(|o| o.customer_id == current.customer_id)
            .map(OrderView::from)
            .collect()
    });

    Ok(HomeTemplate {
        login: login.email(),
        order_count: orders.len(),
        revenue: format_price(revenue),
        status_counts: count_by_status(&orders),
        recent,
        my_orders,
    })
}
