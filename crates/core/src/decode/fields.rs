//! Field accessor: typed, consuming reads from one JSON object.
//!
//! A [`FieldReader`] owns a private copy of the object being decoded. Each
//! read removes its key, so once a record has read every field it declares,
//! [`FieldReader::finish`] can reject payloads carrying keys nobody asked
//! for. The caller's value is never touched.

use serde_json::{Map, Value};

use super::error::{DecodeError, JsonType};
use crate::types::OpaqueJson;

/// A Rust type that can be read from a single JSON field.
///
/// Matching is strict: no coercion between numbers, strings or booleans.
pub trait FieldValue: Sized {
    /// The JSON type this Rust type accepts.
    const EXPECTED: JsonType;

    /// Convert the value, handing it back if it does not fit.
    ///
    /// # Errors
    ///
    /// Returns the original value when its JSON type (or range) does not match.
    fn from_value(value: Value) -> Result<Self, Value>;
}

impl FieldValue for String {
    const EXPECTED: JsonType = JsonType::String;

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl FieldValue for bool {
    const EXPECTED: JsonType = JsonType::Bool;

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(other),
        }
    }
}

impl FieldValue for i64 {
    const EXPECTED: JsonType = JsonType::Integer;

    // Integers above i64::MAX are handed back and reported as out of range.
    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Number(n) if !n.is_f64() => n.as_i64().ok_or(Value::Number(n)),
            other => Err(other),
        }
    }
}

impl FieldValue for f64 {
    const EXPECTED: JsonType = JsonType::Float;

    // Integral JSON numbers are rejected: the upstream sends prices as floats.
    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Number(n) if n.is_f64() => n.as_f64().ok_or(Value::Number(n)),
            other => Err(other),
        }
    }
}

impl FieldValue for Map<String, Value> {
    const EXPECTED: JsonType = JsonType::Object;

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Object(map) => Ok(map),
            other => Err(other),
        }
    }
}

impl FieldValue for Vec<Value> {
    const EXPECTED: JsonType = JsonType::Array;

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Array(items) => Ok(items),
            other => Err(other),
        }
    }
}

impl FieldValue for OpaqueJson {
    const EXPECTED: JsonType = JsonType::Any;

    fn from_value(value: Value) -> Result<Self, Value> {
        Ok(Self::new(value))
    }
}

/// Consuming reader over one JSON object.
#[derive(Debug)]
pub struct FieldReader {
    context: String,
    fields: Map<String, Value>,
}

impl FieldReader {
    /// Copy `value` into a new reader labelled with `context`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::NotAnObject`] if `value` is not a JSON object.
    pub fn new(value: &Value, context: impl Into<String>) -> Result<Self, DecodeError> {
        let context = context.into();
        match value {
            Value::Object(map) => Ok(Self {
                context,
                fields: map.clone(),
            }),
            other => Err(DecodeError::NotAnObject {
                context,
                actual: JsonType::of(other),
            }),
        }
    }

    /// The context label used in errors raised by this reader.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Remove `key` and convert it to `T`.
    ///
    /// Absent keys and `null` values yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TypeMismatch`] if the value has the wrong type,
    /// or [`DecodeError::OutOfRange`] for an integer that does not fit `i64`.
    pub fn get_typed<T: FieldValue>(&mut self, key: &str) -> Result<Option<T>, DecodeError> {
        let Some(value) = self.fields.remove(key) else {
            return Ok(None);
        };

        if value.is_null() {
            return Ok(None);
        }

        let actual = JsonType::of(&value);
        match T::from_value(value) {
            Ok(v) => Ok(Some(v)),
            Err(value) if actual == T::EXPECTED => Err(DecodeError::OutOfRange {
                context: self.context.clone(),
                key: key.to_string(),
                value: value.to_string(),
            }),
            Err(_) => Err(DecodeError::TypeMismatch {
                context: self.context.clone(),
                key: key.to_string(),
                actual,
                expected: T::EXPECTED,
            }),
        }
    }

    /// Remove `key` and convert it to `T`, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MissingField`] if the key is absent or `null`,
    /// or [`DecodeError::TypeMismatch`] if the value has the wrong type.
    pub fn require_field<T: FieldValue>(&mut self, key: &str) -> Result<T, DecodeError> {
        self.get_typed(key)?
            .ok_or_else(|| DecodeError::MissingField {
                context: self.context.clone(),
                key: key.to_string(),
            })
    }

    /// Remove `key` as an integer enum code.
    ///
    /// An integer too large for `i64` cannot name any variant and yields
    /// `Ok(None)`, letting forgiving enums fall back to `Unknown`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MissingField`] if the key is absent or `null`,
    /// or [`DecodeError::TypeMismatch`] if the value is not an integer.
    pub fn require_code(&mut self, key: &str) -> Result<Option<i64>, DecodeError> {
        match self.require_field::<i64>(key) {
            Ok(code) => Ok(Some(code)),
            Err(DecodeError::OutOfRange { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Assert every field has been consumed.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnconsumedFields`] listing the leftover keys.
    pub fn finish(self) -> Result<(), DecodeError> {
        if self.fields.is_empty() {
            return Ok(());
        }

        let mut keys: Vec<String> = self.fields.into_iter().map(|(k, _)| k).collect();
        keys.sort();
        Err(DecodeError::UnconsumedFields {
            context: self.context,
            keys,
        })
    }
}
