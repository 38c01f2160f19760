//! Orders page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use super::views::OrderView;
use crate::error::Result;
use crate::filters;
use crate::middleware::OptionalLogin;
use crate::state::AppState;

/// Orders page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders.html")]
pub struct OrdersTemplate {
    pub login: Option<String>,
    pub orders: Vec<OrderView>,
}

/// Display every order with its products.
#[instrument(skip(state, login))]
pub async fn index(State(state): State<AppState>, login: OptionalLogin) -> Result<impl IntoResponse> {
    let orders = state.catalogue().load_orders().await?;

    Ok(OrdersTemplate {
        login: login.email(),
        orders: orders.iter().map(OrderView::from).collect(),
    })
}
