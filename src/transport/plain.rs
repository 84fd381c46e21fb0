use std::future::Future;
use std::io;

use tokio::io::BufWriter;
use tokio::net::TcpStream;

use crate::transport::Transport;

/// Plain TCP transport.
///
/// Setup disables Nagle's algorithm and wraps the socket in a buffered
/// writer, so small response fragments coalesce into one segment and are
/// pushed out by the engine's final flush.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Transport for Plain {
    type Stream = BufWriter<TcpStream>;

    fn setup(&self, socket: TcpStream) -> impl Future<Output = io::Result<Self::Stream>> + Send {
        async move {
            socket.set_nodelay(true)?;
            Ok(BufWriter::new(socket))
        }
    }

    fn explicit_flush(&self) -> bool {
        true
    }
}
