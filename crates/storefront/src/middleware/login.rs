//! Login extractor and session helpers.
//!
//! The login lives in the request's session, never in process-wide state,
//! so concurrent visitors cannot see each other's identity.

use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tower_sessions::Session;

use crate::error::{ErrorPage, set_sentry_user};
use crate::models::{CurrentLogin, session_keys};

/// Extractor that optionally gets the current login.
///
/// Never rejects: visitors without a session or login get `None`.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(OptionalLogin(login): OptionalLogin) -> impl IntoResponse {
///     match login {
///         Some(l) => format!("Hello, {}!", l.email),
///         None => "Hello, guest!".to_string(),
///     }
/// }
/// ```
pub struct OptionalLogin(pub Option<CurrentLogin>);

impl OptionalLogin {
    /// Email of the logged-in customer, for templates.
    #[must_use]
    pub fn email(&self) -> Option<String> {
        self.0.as_ref().map(|login| login.email.clone())
    }
}

impl<S> FromRequestParts<S> for OptionalLogin
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let login = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<CurrentLogin>(session_keys::LOGIN)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(login))
    }
}

/// Store the login in the session.
///
/// The session ID is cycled first so a pre-login cookie cannot be reused.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_login(
    session: &Session,
    login: &CurrentLogin,
) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(session_keys::LOGIN, login).await
}

/// Clear the login from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_login(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<CurrentLogin>(session_keys::LOGIN).await?;
    Ok(())
}

/// Middleware that applies the visitor's login to the whole request.
///
/// Tags the per-request Sentry scope with the customer, and re-renders
/// error pages so a logged-in visitor keeps their login in the header.
pub async fn login_context_middleware(
    OptionalLogin(login): OptionalLogin,
    request: Request,
    next: Next,
) -> Response {
    let Some(login) = login else {
        return next.run(request).await;
    };

    set_sentry_user(&login.customer_id, &login.email);

    let mut response = next.run(request).await;
    match response.extensions_mut().remove::<ErrorPage>() {
        Some(page) => page.render(Some(login.email)),
        None => response,
    }
}
