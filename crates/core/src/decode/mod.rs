//! Strict JSON decoding for catalogue API payloads.
//!
//! # Layers
//!
//! - [`fields`] - consuming, type-checked reads of single fields
//! - [`FromJson`] - per-record decoders built on [`FieldReader`]
//! - [`collection`] - top-level array shape check and fail-fast mapping
//!
//! Decoding never mutates the caller's value and never substitutes defaults
//! beyond the optional fields each record documents.

pub mod collection;
pub mod error;
pub mod fields;

pub use collection::decode_collection;
pub use error::{CollectionError, DecodeError, JsonType};
pub use fields::{FieldReader, FieldValue};

use serde_json::Value;

/// A record that can be decoded from a JSON object.
pub trait FromJson: Sized {
    /// Context label used when the record is decoded at the top level.
    const CONTEXT: &'static str;

    /// Decode one record.
    ///
    /// `parent` is the context label of the enclosing record, if any; nested
    /// records report errors as `"<parent>:<CONTEXT>"`.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] describing the first invalid field.
    fn from_json(value: &Value, parent: Option<&str>) -> Result<Self, DecodeError>;
}

/// Build the context label for a record, nested under `parent` if given.
#[must_use]
pub fn context_label(record: &str, parent: Option<&str>) -> String {
    parent.map_or_else(|| record.to_string(), |p| format!("{p}:{record}"))
}
