//! # HTTP Surface
//!
//! Thin layer over `may_minihttp`: parses method, path and query string off
//! the raw request, rejects anything that is not a GET with 405 before the
//! dispatcher is involved, and writes the dispatch result back as
//! status/headers/body. Concurrency, socket handling and keep-alive belong
//! to the listener; this module owns only the translation in and out of the
//! dispatch engine.

pub mod http_server;
pub mod request;
pub mod response;
pub mod service;

pub use http_server::{HttpServer, ServerHandle};
pub use request::{parse_query_params, parse_request, ParsedRequest};
pub use service::AppService;
