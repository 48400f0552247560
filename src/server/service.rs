use super::request::{parse_query_params, parse_request};
use super::response::{write_json, write_plain};
use crate::dispatcher::{DispatchError, Dispatcher};
use http::Method;
use may_minihttp::{HttpService, Request, Response};
use std::io;
use tracing::{debug, error, info};

/// `HttpService` implementation serving one dispatcher.
///
/// The listener clones the service per connection; all clones share the same
/// immutable route table through the dispatcher, so cloning is an `Arc`
/// bump.
#[derive(Clone)]
pub struct AppService {
    dispatcher: Dispatcher,
}

impl AppService {
    #[must_use]
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

impl HttpService for AppService {
    fn call(&mut self, req: Request, res: &mut Response) -> io::Result<()> {
        let parsed = parse_request(&req);

        if parsed.method != Method::GET.as_str() {
            debug!(method = %parsed.method, path = %parsed.path, "Rejected non-GET request");
            write_plain(res, 405, "Method Not Allowed");
            return Ok(());
        }

        let query = match parsed.query.as_deref().map(parse_query_params).transpose() {
            Ok(query) => query.unwrap_or_default(),
            Err(err) => {
                error!(path = %parsed.path, error = %err, "Query string decoding failed");
                write_plain(res, 500, &format!("Internal Server Error: {err}"));
                return Ok(());
            }
        };

        match self.dispatcher.dispatch(&parsed.path, &query) {
            Ok(value) => {
                info!(path = %parsed.path, "Request served");
                write_json(res, 200, value.to_json_string());
            }
            Err(DispatchError::NotFound) => {
                debug!(path = %parsed.path, "Route not found");
                write_plain(res, 404, "Not Found");
            }
            Err(err) => {
                error!(path = %parsed.path, error = %err, "Request failed");
                write_plain(res, err.status(), &format!("Internal Server Error: {err}"));
            }
        }
        Ok(())
    }
}
