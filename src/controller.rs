//! # Controller Registration
//!
//! A [`Controller`] groups operations under a path prefix; each
//! [`Operation`] declares a path suffix template, the parameters it binds,
//! and the closure to invoke. Registration is explicit - the route table
//! consumes a list of controllers once at startup and nothing is discovered
//! at runtime. Operation closures own whatever state they need, so there is
//! no separate instance object and no implicit receiver argument.

use crate::json::{JsonValue, ToJson};
use anyhow::{bail, Result};
use smallvec::SmallVec;
use std::fmt;

/// Where a parameter's raw value is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamSource {
    /// A `{name}` segment of the matched path template.
    PathVariable,
    /// A query-string entry looked up by name.
    QueryParameter,
}

/// Target type a raw parameter string is coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Integer,
    Double,
    Boolean,
}

/// Declares one bindable operation parameter.
///
/// The name doubles as the lookup key: the path-variable name inside the
/// template, or the decoded query-string key.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: String,
    pub source: ParamSource,
    pub ty: ParamType,
    pub nullable: bool,
}

impl ParamSpec {
    /// A required parameter bound from the `{name}` path variable.
    pub fn path(name: impl Into<String>, ty: ParamType) -> Self {
        Self {
            name: name.into(),
            source: ParamSource::PathVariable,
            ty,
            nullable: false,
        }
    }

    /// A required parameter bound from the query string.
    pub fn query(name: impl Into<String>, ty: ParamType) -> Self {
        Self {
            name: name.into(),
            source: ParamSource::QueryParameter,
            ty,
            nullable: false,
        }
    }

    /// Makes the parameter nullable: absence or a failed coercion binds
    /// `null` instead of failing the request.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

/// A parameter value after coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Str(String),
    Int(i64),
    Double(f64),
    Bool(bool),
    Null,
}

/// Maximum bound arguments held without heap allocation.
pub const MAX_INLINE_ARGS: usize = 8;

/// Arguments bound for one invocation, in declared parameter order.
///
/// The fallible accessors are for required parameters - the dispatcher has
/// already guaranteed them present and typed, so an error here means the
/// index or type in the handler disagrees with the declared parameter list.
/// The `opt_` accessors return `None` for arguments bound as `null`.
#[derive(Debug, Default)]
pub struct Args(pub(crate) SmallVec<[ArgValue; MAX_INLINE_ARGS]>);

impl Args {
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&ArgValue> {
        self.0.get(idx)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn str(&self, idx: usize) -> Result<&str> {
        match self.get(idx) {
            Some(ArgValue::Str(s)) => Ok(s),
            other => bail!("argument {idx} is not a string: {other:?}"),
        }
    }

    pub fn int(&self, idx: usize) -> Result<i64> {
        match self.get(idx) {
            Some(ArgValue::Int(n)) => Ok(*n),
            other => bail!("argument {idx} is not an integer: {other:?}"),
        }
    }

    pub fn double(&self, idx: usize) -> Result<f64> {
        match self.get(idx) {
            Some(ArgValue::Double(n)) => Ok(*n),
            other => bail!("argument {idx} is not a double: {other:?}"),
        }
    }

    pub fn boolean(&self, idx: usize) -> Result<bool> {
        match self.get(idx) {
            Some(ArgValue::Bool(b)) => Ok(*b),
            other => bail!("argument {idx} is not a boolean: {other:?}"),
        }
    }

    #[must_use]
    pub fn opt_str(&self, idx: usize) -> Option<&str> {
        match self.get(idx) {
            Some(ArgValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn opt_int(&self, idx: usize) -> Option<i64> {
        match self.get(idx) {
            Some(ArgValue::Int(n)) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn opt_double(&self, idx: usize) -> Option<f64> {
        match self.get(idx) {
            Some(ArgValue::Double(n)) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn opt_bool(&self, idx: usize) -> Option<bool> {
        match self.get(idx) {
            Some(ArgValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }
}

/// Boxed invocation target of an operation.
pub type HandlerFn = Box<dyn Fn(&Args) -> Result<JsonValue> + Send + Sync>;

/// One exposed operation: path suffix template, parameter list and handler.
pub struct Operation {
    /// Path suffix under the controller prefix; may contain `{name}`
    /// variable segments, may be empty for the bare prefix.
    pub path: String,
    /// Parameters bound before invocation, in declaration order.
    pub params: Vec<ParamSpec>,
    handler: HandlerFn,
}

impl Operation {
    /// Wraps `handler` so any `ToJson` return type serializes uniformly.
    pub fn new<R, F>(path: impl Into<String>, params: Vec<ParamSpec>, handler: F) -> Self
    where
        R: ToJson,
        F: Fn(&Args) -> Result<R> + Send + Sync + 'static,
    {
        Self {
            path: path.into(),
            params,
            handler: Box::new(move |args| handler(args).map(|value| value.to_json())),
        }
    }

    /// Invokes the handler with already-bound arguments.
    pub fn call(&self, args: &Args) -> Result<JsonValue> {
        (self.handler)(args)
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("path", &self.path)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// A set of operations registered under a common path prefix.
#[derive(Debug)]
pub struct Controller {
    pub prefix: String,
    pub operations: Vec<Operation>,
}

impl Controller {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            operations: Vec::new(),
        }
    }

    /// Adds an operation under this controller's prefix.
    ///
    /// `path` may be empty, making the operation reachable at the bare
    /// prefix.
    #[must_use]
    pub fn operation<R, F>(mut self, path: &str, params: Vec<ParamSpec>, handler: F) -> Self
    where
        R: ToJson,
        F: Fn(&Args) -> Result<R> + Send + Sync + 'static,
    {
        self.operations.push(Operation::new(path, params, handler));
        self
    }
}
