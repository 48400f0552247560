use crate::controller::{ArgValue, Args, Operation, ParamSource, ParamType};
use crate::json::JsonValue;
use crate::router::{RouteMatch, RouteTable};
use std::collections::HashMap;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, error};

/// A request-scoped dispatch failure.
///
/// Failures never outlive the request that caused them and nothing is
/// retried here.
#[derive(Debug)]
pub enum DispatchError {
    /// No route template matched the request path.
    NotFound,
    /// A non-nullable parameter had no usable raw value - either absent or
    /// present but failing coercion.
    MissingParameter(String),
    /// The operation returned an error or panicked.
    Handler(anyhow::Error),
}

impl DispatchError {
    /// The HTTP status this failure maps to.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            DispatchError::NotFound => 404,
            _ => 500,
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::NotFound => write!(f, "no route matched the request path"),
            DispatchError::MissingParameter(name) => {
                write!(f, "Missing required parameter: {name}")
            }
            DispatchError::Handler(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for DispatchError {}

/// Stateless dispatch engine over an immutable route table.
#[derive(Clone)]
pub struct Dispatcher {
    table: Arc<RouteTable>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(table: Arc<RouteTable>) -> Self {
        Self { table }
    }

    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Runs the full match → bind → invoke pipeline for one GET request.
    ///
    /// `path` excludes the query string; `query` holds the decoded query
    /// parameters. The serialized response body is the returned value's
    /// canonical JSON text.
    pub fn dispatch(
        &self,
        path: &str,
        query: &HashMap<String, String>,
    ) -> Result<JsonValue, DispatchError> {
        let matched = self.table.match_path(path).ok_or(DispatchError::NotFound)?;
        let args = bind_args(&matched, query)?;
        debug!(path = %path, args = args.len(), "Arguments bound");
        invoke(&matched.operation, &args)
    }
}

/// Resolves and coerces every declared parameter of the matched operation.
fn bind_args(
    matched: &RouteMatch,
    query: &HashMap<String, String>,
) -> Result<Args, DispatchError> {
    let mut args = Args::default();
    for param in &matched.operation.params {
        let raw = match param.source {
            ParamSource::PathVariable => matched.path_param(&param.name),
            ParamSource::QueryParameter => query.get(&param.name).map(String::as_str),
        };
        match raw.and_then(|raw| coerce(raw, param.ty)) {
            Some(value) => args.0.push(value),
            None if param.nullable => args.0.push(ArgValue::Null),
            None => return Err(DispatchError::MissingParameter(param.name.clone())),
        }
    }
    Ok(args)
}

/// Coerces a raw string into the declared target type.
///
/// `None` when the value does not parse; the caller treats that exactly
/// like an absent value.
fn coerce(raw: &str, ty: ParamType) -> Option<ArgValue> {
    match ty {
        ParamType::String => Some(ArgValue::Str(raw.to_string())),
        ParamType::Integer => raw.parse::<i64>().ok().map(ArgValue::Int),
        ParamType::Double => raw.parse::<f64>().ok().map(ArgValue::Double),
        ParamType::Boolean => match raw {
            "true" => Some(ArgValue::Bool(true)),
            "false" => Some(ArgValue::Bool(false)),
            _ => None,
        },
    }
}

/// Invokes the operation, converting panics into request-local errors.
fn invoke(operation: &Operation, args: &Args) -> Result<JsonValue, DispatchError> {
    match catch_unwind(AssertUnwindSafe(|| operation.call(args))) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(DispatchError::Handler(err)),
        Err(panic) => {
            let message = panic
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "opaque panic payload".to_string());
            error!(message = %message, "Handler panicked");
            Err(DispatchError::Handler(anyhow::anyhow!(
                "handler panicked: {message}"
            )))
        }
    }
}
