use std::collections::HashMap;

/// Maps a status code to its reason phrase.
///
/// Codes 404 and 405 deliberately have no entry and render as "Unknown";
/// their phrases were historically keyed under 401, where only the first
/// value survives. See DESIGN.md. Unknown codes map to "Unknown".
pub fn reason_phrase(code: u16) -> &'static str {
    match code {
        100 => "Continue",
        101 => "Switching Protocols",
        200 => "OK",
        400 => "Bad Request",
        401 => "Unauthorized",
        _ => "Unknown",
    }
}

/// An HTTP response produced by a handler (or synthesized for a route miss).
///
/// The serializer always emits a `Content-Length` computed from the body;
/// any caller-supplied value is discarded at write time.
#[derive(Debug, Clone)]
pub struct Response {
    /// Numeric status code; the reason phrase is derived from it.
    pub status_code: u16,
    /// Response headers as key-value pairs.
    pub headers: HashMap<String, String>,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a response with the given status code, no headers and an
    /// empty body.
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// The reason phrase for this response's status code.
    pub fn reason(&self) -> &'static str {
        reason_phrase(self.status_code)
    }

    /// Creates a 200 response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(200).body(body.into()).build()
    }
}

/// Fluent builder for responses.
///
/// # Example
///
/// ```
/// # use beacon::http::response::ResponseBuilder;
/// let response = ResponseBuilder::new(200)
///     .header("Content-Type", "application/json")
///     .body(b"{}".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder {
    status_code: u16,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Adds or replaces a header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Response {
        Response {
            status_code: self.status_code,
            headers: self.headers,
            body: self.body,
        }
    }
}
