//! Customers page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use super::views::CustomerView;
use crate::error::Result;
use crate::filters;
use crate::middleware::OptionalLogin;
use crate::state::AppState;

/// Customers page template.
#[derive(Template, WebTemplate)]
#[template(path = "customers.html")]
pub struct CustomersTemplate {
    pub login: Option<String>,
    pub customers: Vec<CustomerView>,
}

/// Display every customer.
#[instrument(skip(state, login))]
pub async fn index(State(state): State<AppState>, login: OptionalLogin) -> Result<impl IntoResponse> {
    let customers = state.catalogue().load_customers().await?;

    Ok(CustomersTemplate {
        login: login.email(),
        customers: customers.iter().map(CustomerView::from).collect(),
    })
}
