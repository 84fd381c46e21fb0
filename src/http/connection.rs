use std::time::Duration;

use anyhow::Context;
use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;

use crate::http::parser::{find_header_end, parse_header};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::router::Router;

/// Bound on the single read that fetches body bytes beyond what the
/// header read already buffered. All other steps have no timeout and rely
/// on the transport erroring out.
pub const BODY_READ_TIMEOUT: Duration = Duration::from_secs(5);

const READ_CHUNK: usize = 1024;

/// Services exactly one request on one accepted stream, then closes it.
///
/// State machine, terminal on every path:
///
/// ```text
/// ReceivingHeader -> HeaderParsed -> [ReceivingBody ->] Routed
///   -> WritingResponse -> Flushed -> Closed
/// any state -> (I/O error) -> Closed
/// ```
///
/// There is no transition back to the start: no keep-alive, no pipelining.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    explicit_flush: bool,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Wraps a stream produced by a transport adapter. `explicit_flush`
    /// comes from [`Transport::explicit_flush`](crate::transport::Transport).
    pub fn new(stream: S, explicit_flush: bool) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            explicit_flush,
        }
    }

    /// Reads one request, dispatches it, writes the response, closes.
    ///
    /// A stream that closes before a full header arrives terminates the
    /// connection quietly with no response, which is not an error.
    pub async fn run(mut self, router: &Router) -> anyhow::Result<()> {
        let Some(request) = self.read_request().await? else {
            return Ok(());
        };

        let response = router.dispatch(&request);

        let mut writer = ResponseWriter::new(&response);
        writer.write_to_stream(&mut self.stream).await?;

        if self.explicit_flush {
            self.stream.flush().await?;
        }

        // Dropping self closes the socket; there is no request #2.
        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        // Read until the header terminator shows up in the buffer.
        let header_end = loop {
            if let Some(pos) = find_header_end(&self.buffer) {
                break pos;
            }

            let mut chunk = [0u8; READ_CHUNK];
            let n = self.stream.read(&mut chunk).await?;

            if n == 0 {
                return Ok(None);
            }

            self.buffer.extend_from_slice(&chunk[..n]);
        };

        let mut request = parse_header(&self.buffer[..header_end]);

        // The header read may already have buffered part or all of the
        // body; fetch only what is still missing, under a bounded timeout.
        let body_start = header_end + 4;
        let content_size = request.declared_content_length();
        let buffered = self.buffer.len() - body_start;

        if content_size > buffered {
            let mut rest = vec![0u8; content_size - buffered];
            timeout(BODY_READ_TIMEOUT, self.stream.read_exact(&mut rest))
                .await
                .context("timed out reading request body")??;
            self.buffer.extend_from_slice(&rest);
        }

        request.body = self.buffer[body_start..body_start + content_size].to_vec();

        Ok(Some(request))
    }
}
