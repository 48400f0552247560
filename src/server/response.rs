use may_minihttp::Response;

fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        _ => "OK",
    }
}

/// Writes a serialized JSON document body.
pub fn write_json(res: &mut Response, status: u16, body: String) {
    res.status_code(status as usize, status_reason(status));
    res.header("Content-Type: application/json");
    res.body_vec(body.into_bytes());
}

/// Writes a plain-text body, used for every error surface.
pub fn write_plain(res: &mut Response, status: u16, message: &str) {
    res.status_code(status as usize, status_reason(status));
    res.header("Content-Type: text/plain");
    res.body_vec(message.as_bytes().to_vec());
}
