use beacon::http::parser::{find_header_end, parse_header};

#[test]
fn test_find_header_end() {
    assert_eq!(find_header_end(b"GET / HTTP/1.1\r\n\r\n"), Some(14));
    assert_eq!(find_header_end(b"GET / HTTP/1.1\r\nHost: x\r\n"), None);
    assert_eq!(find_header_end(b""), None);
}

#[test]
fn test_parse_simple_get() {
    let parsed = parse_header(b"GET / HTTP/1.1\r\nHost: example.com");

    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
    assert!(parsed.body.is_empty());
}

#[test]
fn test_parse_multiple_headers() {
    let parsed =
        parse_header(b"GET /path HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*");

    assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
    assert_eq!(parsed.headers.get("User-Agent").unwrap(), "test-client");
    assert_eq!(parsed.headers.get("Accept").unwrap(), "*/*");
}

#[test]
fn test_malformed_request_line_yields_empty_fields() {
    let parsed = parse_header(b"GET\r\nHost: x");

    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.path, "");
    assert_eq!(parsed.version, "");

    let parsed = parse_header(b"");
    assert_eq!(parsed.method, "");
    assert_eq!(parsed.path, "");
}

#[test]
fn test_header_line_without_separator_is_skipped() {
    let parsed = parse_header(b"GET / HTTP/1.1\r\nBrokenHeader\r\nHost: x");

    assert!(!parsed.headers.contains_key("BrokenHeader"));
    assert_eq!(parsed.headers.get("Host").unwrap(), "x");
}

#[test]
fn test_header_requires_space_after_colon() {
    // The split is on the literal ": ", not on ':'.
    let parsed = parse_header(b"GET / HTTP/1.1\r\nHost:example.com");

    assert!(parsed.headers.is_empty());
}

#[test]
fn test_header_key_case_is_preserved() {
    let parsed = parse_header(b"GET / HTTP/1.1\r\ncontent-type: application/json");

    assert!(parsed.headers.contains_key("content-type"));
    assert!(!parsed.headers.contains_key("Content-Type"));
}

#[test]
fn test_header_value_keeps_inner_colons() {
    let parsed = parse_header(b"GET / HTTP/1.1\r\nHost: example.com: 8080");

    assert_eq!(parsed.headers.get("Host").unwrap(), "example.com: 8080");
}

#[test]
fn test_query_string_stays_in_path() {
    let parsed = parse_header(b"GET /search?q=rust HTTP/1.1\r\nHost: x");

    assert_eq!(parsed.path, "/search?q=rust");
}

#[test]
fn test_declared_content_length_variants() {
    let parsed = parse_header(b"POST /api HTTP/1.1\r\nContent-Length: 5");
    assert_eq!(parsed.declared_content_length(), 5);

    let parsed = parse_header(b"POST /api HTTP/1.1\r\ncontent-length: 7");
    assert_eq!(parsed.declared_content_length(), 7);

    // Only those two exact spellings are recognized.
    let parsed = parse_header(b"POST /api HTTP/1.1\r\nCONTENT-LENGTH: 9");
    assert_eq!(parsed.declared_content_length(), 0);

    let parsed = parse_header(b"POST /api HTTP/1.1\r\nContent-Length: nope");
    assert_eq!(parsed.declared_content_length(), 0);
}
