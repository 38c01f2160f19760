//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! rendering the HTML error page. All route handlers should return
//! `Result<T, AppError>`.
//!
//! The rendered page carries an [`ErrorPage`] response extension so the login
//! middleware can re-render it with the visitor's login.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::catalogue::CatalogueError;
use crate::filters;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalogue API request or decode failed.
    #[error("Catalogue error: {0}")]
    Catalogue(#[from] CatalogueError),

    /// Session store operation failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub title: String,
    pub message: String,
    pub login: Option<String>,
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Catalogue(_) => StatusCode::BAD_GATEWAY,
            Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Message safe to show to visitors.
    ///
    /// Upstream bodies and internal details stay in the logs.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Catalogue(_) => {
                "The catalogue service is unavailable right now. Please try again shortly."
                    .to_string()
            }
            Self::Session(_) => "Internal server error".to_string(),
            Self::NotFound(what) => format!("Not found: {what}"),
            Self::BadRequest(why) => format!("Bad request: {why}"),
        }
    }
}

/// Contents of a rendered error page.
#[derive(Debug, Clone)]
pub struct ErrorPage {
    pub status: StatusCode,
    pub title: String,
    pub message: String,
}

impl ErrorPage {
    /// Render the page, falling back to plain text if the template fails.
    #[must_use]
    pub fn render(&self, login: Option<String>) -> Response {
        let page = ErrorTemplate {
            status: self.status.as_u16(),
            title: self.title.clone(),
            message: self.message.clone(),
            login,
        };

        match page.render() {
            Ok(html) => (self.status, Html(html)).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to render error page");
                (self.status, self.message.clone()).into_response()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.status().is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = self.status();
        let page = ErrorPage {
            status,
            title: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.public_message(),
        };

        let mut response = page.render(None);
        response.extensions_mut().insert(page);
        response
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Set the Sentry user context for the logged-in customer.
///
/// Applies to the current hub, which `sentry-tower` binds per request.
pub fn set_sentry_user(customer_id: &impl ToString, email: &str) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(customer_id.to_string()),
            email: Some(email.to_string()),
            ..Default::default()
        }));
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use guitarguitar_core::JsonType;

    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("order-123".to_string());
        assert_eq!(err.to_string(), "Not found: order-123");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::Catalogue(CatalogueError::Shape {
                endpoint: "orders".to_string(),
                actual: JsonType::Object,
            })),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_catalogue_error_hides_upstream_body() {
        let err = AppError::Catalogue(CatalogueError::Fetch {
            endpoint: "customers".to_string(),
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: "stack trace with secrets".to_string(),
        });

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("catalogue service is unavailable"));
        assert!(!html.contains("secrets"));
    }

    #[test]
    fn test_error_page_extension_attached() {
        let response = AppError::NotFound("/nope".to_string()).into_response();
        let page = response.extensions().get::<ErrorPage>().unwrap();

        assert_eq!(page.status, StatusCode::NOT_FOUND);
        assert_eq!(page.title, "Not Found");
        assert_eq!(page.message, "Not found: /nope");
    }

    #[tokio::test]
    async fn test_error_page_renders_login() {
        let page = ErrorPage {
            status: StatusCode::BAD_GATEWAY,
            title: "Bad Gateway".to_string(),
            message: "Try again".to_string(),
        };

        let response = page.render(Some("ada@example.com".to_string()));
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("ada@example.com"));
    }
}
