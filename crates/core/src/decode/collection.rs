//! Top-level collection decoding.

use serde_json::Value;

use super::FromJson;
use super::error::{CollectionError, JsonType};

/// Decode a top-level JSON array into records, stopping at the first failure.
///
/// # Errors
///
/// Returns [`CollectionError::Shape`] if `value` is not an array, or
/// [`CollectionError::Element`] for the first element that fails to decode.
pub fn decode_collection<T: FromJson>(value: &Value) -> Result<Vec<T>, CollectionError> {
    let Value::Array(items) = value else {
        return Err(CollectionError::Shape {
            actual: JsonType::of(value),
        });
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            T::from_json(item, None).map_err(|source| CollectionError::Element { index, source })
        })
        .collect()
}
