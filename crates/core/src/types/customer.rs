//! Customer record and login matching.

use serde::Serialize;
use serde_json::{Map, Value};

use super::{Address, CustomerId, OpaqueJson};
use crate::decode::{DecodeError, FieldReader, FromJson, context_label};

/// A customer as returned by the `customers/` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub avatar: String,
    pub address: Address,
    /// Defaults to 0 when the upstream omits it.
    pub loyalty_level: i64,
    /// Undocumented upstream field, passed through untouched.
    pub orders: Option<OpaqueJson>,
}

impl FromJson for Customer {
    const CONTEXT: &'static str = "Customer";

    fn from_json(value: &Value, parent: Option<&str>) -> Result<Self, DecodeError> {
        let mut r = FieldReader::new(value, context_label(Self::CONTEXT, parent))?;

        let id: i64 = r.require_field("Id")?;
        let first_name = r.require_field("first_name")?;
        let last_name = r.require_field("last_name")?;
        let email = r.require_field("email")?;
        let phone_number = r.require_field("phone_number")?;
        let avatar = r.require_field("avatar")?;
        let address: Map<String, Value> = r.require_field("address")?;
        let address = Address::from_json(&Value::Object(address), Some(r.context()))?;
        let loyalty_level = r.get_typed("LoyaltyLevel")?.unwrap_or(0);
        let orders = r.get_typed("Orders")?;

        r.finish()?;
        Ok(Self {
            id: CustomerId::new(id),
            first_name,
            last_name,
            email,
            phone_number,
            avatar,
            address,
            loyalty_level,
            orders,
        })
    }
}

impl Customer {
    /// `"First Last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Find the customer whose email equals `email` exactly.
///
/// Surrounding whitespace in `email` is ignored; the comparison itself is
/// case-sensitive. An empty address never matches.
#[must_use]
pub fn find_by_email<'a>(customers: &'a [Customer], email: &str) -> Option<&'a Customer> {
    let email = email.trim();
    if email.is_empty() {
        return None;
    }
    customers.iter().find(|c| c.email == email)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn payload() -> Value {
        json!({
            "Id": 12,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "phone_number": "01234 567890",
            "avatar": "https://example.com/ada.png",
            "address": {
                "city": "London",
                "street_name": "St James's Square",
                "street_address": "12 St James's Square",
                "zip_code": "SW1Y 4JH",
                "country": "UK"
            },
            "LoyaltyLevel": 3,
            "Orders": [101, 102]
        })
    }

    #[test]
    fn test_decode_full_customer() {
        let customer = Customer::from_json(&payload(), None).unwrap();
        assert_eq!(customer.id, CustomerId::new(12));
        assert_eq!(customer.first_name, "Ada");
        assert_eq!(customer.last_name, "Lovelace");
        assert_eq!(customer.email, "ada@example.com");
        assert_eq!(customer.phone_number, "01234 567890");
        assert_eq!(customer.avatar, "https://example.com/ada.png");
        assert_eq!(customer.address.city, "London");
        assert_eq!(customer.address.zip_code, "SW1Y 4JH");
        assert_eq!(customer.loyalty_level, 3);
        assert_eq!(
            customer.orders.as_ref().map(OpaqueJson::as_value),
            Some(&json!([101, 102]))
        );
    }

    #[test]
    fn test_loyalty_level_defaults_to_zero() {
        let mut value = payload();
        value.as_object_mut().unwrap().remove("LoyaltyLevel");

        let customer = Customer::from_json(&value, None).unwrap();
        assert_eq!(customer.loyalty_level, 0);
    }

    #[test]
    fn test_orders_absent_or_null() {
        let mut value = payload();
        value.as_object_mut().unwrap().remove("Orders");
        assert!(Customer::from_json(&value, None).unwrap().orders.is_none());

        value
            .as_object_mut()
            .unwrap()
            .insert("Orders".to_string(), Value::Null);
        assert!(Customer::from_json(&value, None).unwrap().orders.is_none());
    }

    #[test]
    fn test_nested_address_error_context() {
        let mut value = payload();
        value["address"].as_object_mut().unwrap().remove("country");

        assert_eq!(
            Customer::from_json(&value, None).unwrap_err(),
            DecodeError::MissingField {
                context: "Customer:Address".to_string(),
                key: "country".to_string(),
            }
        );
    }

    #[test]
    fn test_address_must_be_object() {
        let mut value = payload();
        value["address"] = json!("12 St James's Square");

        assert!(matches!(
            Customer::from_json(&value, None),
            Err(DecodeError::TypeMismatch { ref key, .. }) if key == "address"
        ));
    }

    #[test]
    fn test_string_id_is_type_mismatch() {
        let mut value = payload();
        value["Id"] = json!("12");

        assert!(matches!(
            Customer::from_json(&value, None),
            Err(DecodeError::TypeMismatch { ref key, .. }) if key == "Id"
        ));
    }

    #[test]
    fn test_decode_leaves_input_untouched() {
        let value = payload();
        let before = value.clone();
        Customer::from_json(&value, None).unwrap();
        assert_eq!(value, before);
    }

    #[test]
    fn test_find_by_email() {
        let ada = Customer::from_json(&payload(), None).unwrap();
        let customers = vec![ada];

        assert!(find_by_email(&customers, "ada@example.com").is_some());
        assert!(find_by_email(&customers, "  ada@example.com\n").is_some());
        assert!(find_by_email(&customers, "ADA@example.com").is_none());
        assert!(find_by_email(&customers, "").is_none());
        assert!(find_by_email(&[], "ada@example.com").is_none());
    }
}
