//! Transport adapters: turn an accepted raw connection into a byte-stream.
//!
//! The server is generic over [`Transport`], so the accept loop and the
//! HTTP layer never know whether they run over plain TCP or TLS. The
//! variant is fixed per server instance at construction time.

pub mod plain;
pub mod tls;

pub use plain::Plain;
pub use tls::Tls;

use std::future::Future;
use std::io;

use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;

/// Prepares an accepted socket for use by the HTTP layer.
pub trait Transport: Send + Sync + 'static {
    /// The byte-stream handed to the protocol engine on success.
    type Stream: AsyncRead + AsyncWrite + Unpin + Send + 'static;

    /// Transport-specific setup for a freshly accepted connection.
    ///
    /// A no-op beyond socket options for plain TCP; the full handshake
    /// for TLS. On error the connection is dropped without a response.
    fn setup(&self, socket: TcpStream) -> impl Future<Output = io::Result<Self::Stream>> + Send;

    /// Whether the stream buffers output that must be flushed explicitly
    /// after the response is written.
    fn explicit_flush(&self) -> bool;
}
