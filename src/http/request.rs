use std::collections::HashMap;

/// A parsed HTTP request.
///
/// Fields are stored exactly as received: the method is not validated
/// against a known set, and header keys keep the casing the client sent.
/// Unrecognized methods simply never match a registered route.
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// The HTTP method token (e.g. "GET"). Empty if the request line was
    /// malformed.
    pub method: String,
    /// The request path, including any query string (queries are not
    /// stripped; routes match the path literally).
    pub path: String,
    /// HTTP version token (typically "HTTP/1.1").
    pub version: String,
    /// Headers as key-value pairs, keys as received (case preserved).
    pub headers: HashMap<String, String>,
    /// Request body bytes.
    pub body: Vec<u8>,
}

impl Request {
    /// Retrieves a header value by its literal key.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// The body length the client declared.
    ///
    /// Only the exact spellings `Content-Length` and `content-length` are
    /// recognized; other casings are ignored. A missing or unparsable
    /// value counts as 0.
    pub fn declared_content_length(&self) -> usize {
        self.header("Content-Length")
            .or_else(|| self.header("content-length"))
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }
}
