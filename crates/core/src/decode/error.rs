//! Decoding errors.

use core::fmt;

use serde_json::Value;

/// Runtime type of a JSON value, as seen by the field accessor.
///
/// Numbers are split into `Integer` and `Float` following how `serde_json`
/// parsed them: `1` is an integer, `1.0` is a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    Null,
    Bool,
    Integer,
    Float,
    String,
    Array,
    Object,
    /// Accepts any value. Only used as an expected type.
    Any,
}

impl JsonType {
    /// Classify a JSON value.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(n) if n.is_f64() => Self::Float,
            Value::Number(_) => Self::Integer,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Lowercase name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure while decoding one record.
///
/// Every variant carries the context label of the record being decoded
/// (e.g. `"Order"`, `"Customer:Address"`).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A required key is absent (or `null`).
    #[error("{context}: field {key} not found")]
    MissingField {
        /// Record context label.
        context: String,
        /// The missing key.
        key: String,
    },

    /// A key is present but holds the wrong JSON type.
    #[error("{context}: field {key} is of type {actual} not {expected}")]
    TypeMismatch {
        /// Record context label.
        context: String,
        /// The offending key.
        key: String,
        /// Type found in the payload.
        actual: JsonType,
        /// Type the record declares.
        expected: JsonType,
    },

    /// An integer field holds a number that does not fit `i64`.
    #[error("{context}: field {key} value {value} is out of range for a 64-bit integer")]
    OutOfRange {
        /// Record context label.
        context: String,
        /// The offending key.
        key: String,
        /// The number as it appeared in the payload.
        value: String,
    },

    /// A strictly decoded enum received a code outside its range.
    #[error("{context}: field {key} has invalid code {value}")]
    InvalidEnumValue {
        /// Record context label.
        context: String,
        /// The offending key.
        key: String,
        /// The out-of-range code.
        value: i64,
    },

    /// The record decoded, but the payload carried keys it does not declare.
    #[error("{context}: leftover fields {}", keys.join(", "))]
    UnconsumedFields {
        /// Record context label.
        context: String,
        /// Unconsumed keys, sorted.
        keys: Vec<String>,
    },

    /// The record payload was not a JSON object.
    #[error("{context}: expected object, got {actual}")]
    NotAnObject {
        /// Record context label.
        context: String,
        /// Type found in the payload.
        actual: JsonType,
    },
}

impl DecodeError {
    /// The context label of the record that failed.
    #[must_use]
    pub fn context(&self) -> &str {
        match self {
            Self::MissingField { context, .. }
            | Self::TypeMismatch { context, .. }
            | Self::OutOfRange { context, .. }
            | Self::InvalidEnumValue { context, .. }
            | Self::UnconsumedFields { context, .. }
            | Self::NotAnObject { context, .. } => context,
        }
    }
}

/// A failure while decoding a top-level collection.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// The top-level value was not a JSON array.
    #[error("expected a JSON array, got {actual}")]
    Shape {
        /// Type found at the top level.
        actual: JsonType,
    },

    /// One element failed to decode. Decoding stops at the first failure.
    #[error("element {index}: {source}")]
    Element {
        /// Position of the failing element.
        index: usize,
        /// The underlying record error.
        #[source]
        source: DecodeError,
    },
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_json_type_splits_numbers() {
        assert_eq!(JsonType::of(&json!(1)), JsonType::Integer);
        assert_eq!(JsonType::of(&json!(-4)), JsonType::Integer);
        assert_eq!(JsonType::of(&json!(1.0)), JsonType::Float);
        assert_eq!(JsonType::of(&json!(19.99)), JsonType::Float);
    }

    #[test]
    fn test_json_type_other_kinds() {
        assert_eq!(JsonType::of(&json!(null)), JsonType::Null);
        assert_eq!(JsonType::of(&json!(true)), JsonType::Bool);
        assert_eq!(JsonType::of(&json!("x")), JsonType::String);
        assert_eq!(JsonType::of(&json!([])), JsonType::Array);
        assert_eq!(JsonType::of(&json!({})), JsonType::Object);
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::MissingField {
            context: "Address".to_string(),
            key: "city".to_string(),
        };
        assert_eq!(err.to_string(), "Address: field city not found");

        let err = DecodeError::TypeMismatch {
            context: "Product".to_string(),
            key: "SalesPrice".to_string(),
            actual: JsonType::String,
            expected: JsonType::Float,
        };
        assert_eq!(
            err.to_string(),
            "Product: field SalesPrice is of type string not float"
        );

        let err = DecodeError::UnconsumedFields {
            context: "Order".to_string(),
            keys: vec!["Extra".to_string(), "Note".to_string()],
        };
        assert_eq!(err.to_string(), "Order: leftover fields Extra, Note");

        let err = DecodeError::OutOfRange {
            context: "Product".to_string(),
            key: "QtyInStock".to_string(),
            value: "18446744073709551615".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Product: field QtyInStock value 18446744073709551615 is out of range for a 64-bit integer"
        );
    }

    #[test]
    fn test_collection_error_display() {
        let err = CollectionError::Element {
            index: 3,
            source: DecodeError::InvalidEnumValue {
                context: "Order".to_string(),
                key: "OrderStatus".to_string(),
                value: 9,
            },
        };
        assert_eq!(
            err.to_string(),
            "element 3: Order: field OrderStatus has invalid code 9"
        );
    }
}
