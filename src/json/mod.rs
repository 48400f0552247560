//! # JSON Document Model
//!
//! The closed set of JSON value variants a response body is built from,
//! together with the conversion trait that turns application values into
//! documents and the recursive predicates that check documents.
//!
//! Serialization is canonical: no pretty printing, no trailing separators,
//! object keys in insertion order, and only the seven short escape forms in
//! strings (no `\uXXXX` codepoint escaping). There is no parser - the model
//! is an output contract, not an interchange layer.

mod convert;
mod value;
mod visitor;

pub use convert::ToJson;
pub use value::{escape_json, JsonMap, JsonNumber, JsonValue};
pub use visitor::{arrays_uniform, is_valid};
