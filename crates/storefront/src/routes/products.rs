//! Products page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use super::views::ProductView;
use crate::error::Result;
use crate::filters;
use crate::middleware::OptionalLogin;
use crate::state::AppState;

/// Query parameters for the product listing.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Only show products that are in stock.
    #[serde(default)]
    pub in_stock: bool,
    /// Only show products in this category (exact match).
    pub category: Option<String>,
}

/// Products page template.
#[derive(Template, WebTemplate)]
#[template(path = "products.html")]
pub struct ProductsTemplate {
    pub login: Option<String>,
    pub products: Vec<ProductView>,
    pub total: usize,
    pub in_stock_only: bool,
    pub category: Option<String>,
}

/// Display the product listing.
#[instrument(skip(state, login))]
pub async fn index(
    State(state): State<AppState>,
    login: OptionalLogin,
    Query(query): Query<ProductsQuery>,
) -> Result<impl IntoResponse> {
    let products = state.catalogue().load_products().await?;
    let total = products.len();

    let category = query.category.filter(|c| !c.is_empty());
    let products = products
        .iter()
        .filter(|p| !query.in_stock || p.in_stock())
        .filter(|p| category.as_ref().is_none_or(|c| &p.category == c))
        .map(ProductView::from)
        .collect();

    Ok(ProductsTemplate {
        login: login.email(),
        products,
        total,
        in_stock_only: query.in_stock,
        category,
    })
}
