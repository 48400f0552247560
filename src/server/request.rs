use may_minihttp::Request;
use std::collections::HashMap;
use std::string::FromUtf8Error;

/// Parsed pieces of an incoming request used by `AppService`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    /// HTTP method token as received.
    pub method: String,
    /// Request path without the query string.
    pub path: String,
    /// Raw query string (text after `?`), when present.
    pub query: Option<String>,
}

/// Extracts method, path and raw query string from a request.
pub fn parse_request(req: &Request) -> ParsedRequest {
    let method = req.method().to_string();
    let raw_path = req.path().to_string();
    let (path, query) = match raw_path.split_once('?') {
        Some((path, query)) => (path.to_string(), Some(query.to_string())),
        None => (raw_path, None),
    };
    ParsedRequest {
        method,
        path,
        query,
    }
}

/// Parses a query string into a name → value map.
///
/// Pairs are split on `&`; only pairs with exactly one `=` are kept, the
/// rest are dropped silently. Names and values are percent-decoded as UTF-8
/// with `+` standing for space. A repeated name keeps its last occurrence.
pub fn parse_query_params(raw: &str) -> Result<HashMap<String, String>, FromUtf8Error> {
    let mut params = HashMap::new();
    for pair in raw.split('&') {
        let parts: Vec<&str> = pair.split('=').collect();
        if parts.len() != 2 {
            continue;
        }
        params.insert(decode_component(parts[0])?, decode_component(parts[1])?);
    }
    Ok(params)
}

fn decode_component(component: &str) -> Result<String, FromUtf8Error> {
    // '+' must become a space before percent-decoding so that an encoded
    // "%2B" still comes out as a literal plus.
    urlencoding::decode(&component.replace('+', " ")).map(|decoded| decoded.into_owned())
}
