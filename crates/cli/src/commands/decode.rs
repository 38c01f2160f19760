//! Offline decoding of saved catalogue responses.
//!
//! Useful for checking a captured response against the decoders before
//! changing them, e.g. whether any `SalesPrice` arrives as an integer.

use std::path::{Path, PathBuf};

use guitarguitar_core::{
    CollectionError, Customer, DecodeError, FromJson, Order, Product, decode_collection,
};
use serde_json::Value;
use thiserror::Error;

use super::Collection;

/// Errors that can occur while decoding a file.
#[derive(Debug, Error)]
pub enum DecodeFileError {
    /// The file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("{path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A collection failed to decode.
    #[error("{0}")]
    Collection(#[from] CollectionError),

    /// A single record failed to decode.
    #[error("{0}")]
    Record(#[from] DecodeError),
}

/// Decode `path` as `kind` and report how many records it holds.
///
/// # Errors
///
/// Returns `DecodeFileError` if the file cannot be read, parsed or decoded.
pub fn run(kind: Collection, path: &Path) -> Result<usize, DecodeFileError> {
    let text = std::fs::read_to_string(path).map_err(|source| DecodeFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|source| DecodeFileError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let count = decode_value(kind, &value)?;
    tracing::info!(
        "{}: {} {} records decoded",
        path.display(),
        count,
        kind.endpoint()
    );
    Ok(count)
}

/// Decode an already-parsed value.
///
/// Arrays go through the collection decoder; a single object is decoded as
/// one record.
///
/// # Errors
///
/// Returns the first decode failure.
pub fn decode_value(kind: Collection, value: &Value) -> Result<usize, DecodeFileError> {
    match kind {
        Collection::Customers => count::<Customer>(value),
        Collection::Products => count::<Product>(value),
        Collection::Orders => count::<Order>(value),
    }
}

fn count<T: FromJson>(value: &Value) -> Result<usize, DecodeFileError> {
    if value.is_object() {
        T::from_json(value, None)?;
        return Ok(1);
    }
    Ok(decode_collection::<T>(value)?.len())
}
