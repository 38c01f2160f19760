//! Postal address record.

use serde::Serialize;
use serde_json::Value;

use crate::decode::{DecodeError, FieldReader, FromJson, context_label};

/// A postal address, embedded by value in customers and orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    pub city: String,
    pub street_name: String,
    pub street_address: String,
    pub zip_code: String,
    pub country: String,
}

impl FromJson for Address {
    const CONTEXT: &'static str = "Address";

    fn from_json(value: &Value, parent: Option<&str>) -> Result<Self, DecodeError> {
        let mut r = FieldReader::new(value, context_label(Self::CONTEXT, parent))?;

        let address = Self {
            city: r.require_field("city")?,
            street_name: r.require_field("street_name")?,
            street_address: r.require_field("street_address")?,
            zip_code: r.require_field("zip_code")?,
            country: r.require_field("country")?,
        };

        r.finish()?;
        Ok(address)
    }
}

impl Address {
    /// Single-line rendering for listings.
    #[must_use]
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.street_address, self.city, self.zip_code, self.country
        )
    }
}
