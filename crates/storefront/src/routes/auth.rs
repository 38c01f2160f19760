//! Login and logout route handlers.
//!
//! Login is by email only: the submitted address is matched against the
//! customers loaded from the catalogue API. There are no passwords.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::{IntoResponse, Redirect, Response},
};
use guitarguitar_core::find_by_email;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::{OptionalLogin, clear_login, set_login};
use crate::models::CurrentLogin;
use crate::state::AppState;

/// Shown when no customer has the submitted email.
const UNKNOWN_EMAIL: &str = "No customer found with that email address.";

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub login: Option<String>,
    /// Email to prefill after a failed attempt.
    pub email: String,
    pub error: Option<String>,
}

/// Display the login form.
pub async fn login_page(login: OptionalLogin) -> impl IntoResponse {
    LoginTemplate {
        login: login.email(),
        email: String::new(),
        error: None,
    }
}

/// Handle a login submission.
///
/// A match stores the login in the session and redirects home; otherwise the
/// form is shown again with an error. A malformed submission is a 400.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    form: std::result::Result<Form<LoginForm>, FormRejection>,
) -> Result<Response> {
    let Form(form) = form.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let customers = state.catalogue().load_customers().await?;

    let Some(customer) = find_by_email(&customers, &form.email) else {
        tracing::info!(customers = customers.len(), "Login rejected: unknown email");
        return Ok(LoginTemplate {
            login: None,
            email: form.email.trim().to_string(),
            error: Some(UNKNOWN_EMAIL.to_string()),
        }
        .into_response());
    };

    let current = CurrentLogin {
        customer_id: customer.id,
        email: customer.email.clone(),
    };
    set_login(&session, &current).await?;

    tracing::info!(customer_id = %current.customer_id, "Customer logged in");
    Ok(Redirect::to("/").into_response())
}

/// Clear the login and redirect home.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_login(&session).await?;

    tracing::info!("Customer logged out");
    Ok(Redirect::to("/"))
}
