//! guitarguitar Core - typed records and strict JSON decoders.
//!
//! This crate converts the loosely-typed JSON served by the guitarguitar
//! catalogue API into validated records:
//! - `storefront` - renders the records as HTML pages
//! - `cli` - checks live endpoints and local samples against the decoders
//!
//! # Architecture
//!
//! The core crate contains only types and decoders - no I/O, no HTTP
//! clients. Fetching lives in the storefront's catalogue client.
//!
//! # Modules
//!
//! - [`types`] - Records (`Customer`, `Product`, `Order`, `Address`), coded
//!   enums, ID newtypes and the opaque passthrough value
//! - [`decode`] - Field accessor, record decoding trait and collection decoding

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod decode;
pub mod types;

pub use decode::{CollectionError, DecodeError, FromJson, JsonType, decode_collection};
pub use types::*;
