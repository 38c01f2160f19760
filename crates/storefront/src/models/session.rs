//! Session-related types.
//!
//! Types stored in the session for login state.

use serde::{Deserialize, Serialize};

use guitarguitar_core::CustomerId;

/// Session-stored login identity.
///
/// Written by a successful login and read by every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentLogin {
    /// Customer ID of the matched record.
    pub customer_id: CustomerId,
    /// Email exactly as stored upstream.
    pub email: String,
}

/// Session keys for login data.
pub mod keys {
    /// Key for storing the current login.
    pub const LOGIN: &str = "login";
}
