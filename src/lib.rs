//! Beacon - Embeddable HTTP Server Engine
//!
//! A small, transport-agnostic accept loop plus a one-shot HTTP/1.1
//! request/response layer, built directly on non-blocking sockets.
//! Plain TCP and TLS transports run the same server code.

pub mod config;
pub mod http;
pub mod router;
pub mod server;
pub mod transport;
