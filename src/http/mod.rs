//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 layer: one request per connection, exact
//! routing, no keep-alive, no chunked transfer.
//!
//! - **`connection`**: per-connection state machine (read, route, write, close)
//! - **`parser`**: lossy request-header parsing from buffered bytes
//! - **`request`**: parsed request representation
//! - **`response`**: response representation, builder, status reason table
//! - **`writer`**: response serialization and full-buffer writing

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
