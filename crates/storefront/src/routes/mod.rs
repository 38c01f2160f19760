//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (order summary)
//! GET  /health                 - Health check
//! GET  /static/site.css        - Stylesheet
//!
//! # Catalogue
//! GET  /orders                 - Orders with their products
//! GET  /customers              - Customer listing
//! GET  /products               - Product listing (?in_stock=true, ?category=)
//!
//! # Login
//! GET  /login                  - Login form
//! POST /login                  - Match email against customers
//! GET  /logout                 - Clear login
//! POST /logout                 - Clear login
//! ```
//!
//! Unmatched paths render the 404 error page.
//!
//! Every catalogue page fetches fresh data from the upstream API.

pub mod assets;
pub mod auth;
pub mod customers;
pub mod home;
pub mod orders;
pub mod products;
pub mod views;

use axum::{Router, http::Uri, routing::get};

use crate::error::AppError;
use crate::state::AppState;

/// Create the login routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout).post(auth::logout))
}

/// Create the catalogue page routes router.
pub fn catalogue_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(orders::index))
        .route("/customers", get(customers::index))
        .route("/products", get(products::index))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/static/site.css", get(assets::stylesheet))
        .merge(catalogue_routes())
        .merge(auth_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the catalogue API.
pub async fn health() -> &'static str {
    "ok"
}

/// Fallback for unmatched paths.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
