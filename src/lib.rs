//! # getjson
//!
//! A GET-only JSON microframework built on the `may` coroutine runtime.
//!
//! Controllers declare operations with path templates and typed parameter
//! lists. A route table, built once at startup from those registrations,
//! maps request paths onto operations; the dispatcher binds path variables
//! and query parameters with type coercion, invokes the operation, and
//! serializes the return value through a self-describing JSON document
//! model.
//!
//! ## Modules
//!
//! - [`json`] - document model, `ToJson` conversion, validation visitors
//! - [`controller`] - declarative controller/operation registration
//! - [`router`] - route table construction and path matching
//! - [`dispatcher`] - parameter binding, coercion and operation invocation
//! - [`server`] - `may_minihttp` HTTP surface (GET only)
//! - [`runtime_config`] - environment-driven coroutine runtime settings
//!
//! ## Example
//!
//! ```rust,no_run
//! use getjson::{serve, Controller, ParamSpec, ParamType};
//!
//! let users = Controller::new("users").operation(
//!     "{id}",
//!     vec![ParamSpec::path("id", ParamType::Integer)],
//!     |args| {
//!         let id = args.int(0)?;
//!         Ok(format!("user-{id}"))
//!     },
//! );
//!
//! let handle = serve(vec![users], "127.0.0.1:8080").expect("bind");
//! let _ = handle.join();
//! ```
//!
//! Records and unit enums become JSON objects and strings through
//! `#[derive(ToJson)]`; sequences, maps, options and primitives convert
//! through the blanket implementations in [`json`].

pub mod controller;
pub mod dispatcher;
pub mod json;
pub mod router;
pub mod runtime_config;
pub mod server;

pub use controller::{ArgValue, Args, Controller, Operation, ParamSource, ParamSpec, ParamType};
pub use dispatcher::{DispatchError, Dispatcher};
pub use json::{JsonMap, JsonNumber, JsonValue, ToJson};
pub use router::{RouteMatch, RouteTable};
pub use runtime_config::RuntimeConfig;
pub use server::{AppService, HttpServer, ServerHandle};

// Derive macro for the conversion trait; shares the trait's name the way
// serde re-exports its derives.
pub use getjson_macros::ToJson;

use std::io;
use std::net::ToSocketAddrs;
use std::sync::Arc;

/// Builds the route table from `controllers` and serves it at `addr`.
///
/// Convenience entry point wiring the route table, dispatcher and HTTP
/// service together. The returned handle can wait for readiness, stop the
/// server, or block until it exits.
pub fn serve<A: ToSocketAddrs>(
    controllers: Vec<Controller>,
    addr: A,
) -> io::Result<ServerHandle> {
    let table = Arc::new(RouteTable::build(controllers));
    let service = AppService::new(Dispatcher::new(table));
    HttpServer(service).start(addr)
}
