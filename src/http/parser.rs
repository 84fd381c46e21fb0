use std::collections::HashMap;

use crate::http::request::Request;

/// Locates the `\r\n\r\n` header terminator in the buffered bytes.
pub fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

/// Parses the header section (everything before the `\r\n\r\n` terminator)
/// into a [`Request`] with an empty body.
///
/// Parsing never fails. A malformed request line yields empty fields, so
/// the route lookup misses and the client gets a 404 rather than an error.
/// Header lines without a `": "` separator are skipped.
pub fn parse_header(buf: &[u8]) -> Request {
    let text = String::from_utf8_lossy(buf);
    let mut lines = text.split("\r\n");

    let mut request_line = lines.next().unwrap_or("").split_whitespace();
    let method = request_line.next().unwrap_or("").to_string();
    let path = request_line.next().unwrap_or("").to_string();
    let version = request_line.next().unwrap_or("").to_string();

    let mut headers = HashMap::new();
    for line in lines {
        let Some((key, value)) = line.split_once(": ") else {
            continue;
        };
        headers.insert(key.to_string(), value.to_string());
    }

    Request {
        method,
        path,
        version,
        headers,
        body: Vec::new(),
    }
}
