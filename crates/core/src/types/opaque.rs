//! Passthrough JSON values.

use serde::Serialize;
use serde_json::Value;

/// A JSON value carried through decoding without validation.
///
/// Used for upstream fields whose shape is undocumented (`Customer.Orders`,
/// `Product.ImageUrls`). The wrapper deliberately offers no structural
/// accessors; code that needs to look inside must go through
/// [`OpaqueJson::as_value`] and handle every shape itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OpaqueJson(Value);

impl OpaqueJson {
    /// Wrap a raw value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the raw value.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the wrapper and return the raw value.
    #[must_use]
    pub fn into_inner(self) -> Value {
        self.0
    }
}
