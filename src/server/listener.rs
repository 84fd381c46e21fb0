use std::net::{Ipv4Addr, SocketAddr, TcpListener as StdTcpListener};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::http::connection::Connection;
use crate::router::Router;
use crate::transport::{Plain, Tls, Transport};

/// An HTTP server bound to one port with one fixed transport.
///
/// The listening socket is bound at construction; a bind failure is fatal
/// and surfaces to the caller. The routing table is frozen before the
/// server exists, so serving needs no locks.
pub struct Server<T: Transport> {
    listener: StdTcpListener,
    transport: Arc<T>,
    router: Arc<Router>,
}

impl Server<Plain> {
    /// Binds a plain-TCP server on the given port (0 for an ephemeral one).
    pub fn bind(port: u16, router: Router) -> anyhow::Result<Self> {
        Self::with_transport(port, Plain, router)
    }
}

impl Server<Tls> {
    /// Binds a TLS server; the certificate chain and private key are PEM
    /// files loaded once, here.
    pub fn bind_tls(
        port: u16,
        cert_path: &Path,
        key_path: &Path,
        router: Router,
    ) -> anyhow::Result<Self> {
        let tls = Tls::from_pem_files(cert_path, key_path)?;
        Self::with_transport(port, tls, router)
    }
}

impl<T: Transport> Server<T> {
    fn with_transport(port: u16, transport: T, router: Router) -> anyhow::Result<Self> {
        let listener = StdTcpListener::bind((Ipv4Addr::UNSPECIFIED, port))
            .with_context(|| format!("failed to bind port {port}"))?;
        listener
            .set_nonblocking(true)
            .context("failed to set listener non-blocking")?;

        Ok(Self {
            listener,
            transport: Arc::new(transport),
            router: Arc::new(router),
        })
    }

    /// The address the server actually bound (useful with port 0).
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Runs the server on its own multi-threaded reactor with
    /// `worker_count` workers, blocking the calling thread. There is no
    /// stop API; the loop runs until the process exits.
    pub fn run(self, worker_count: usize) -> anyhow::Result<()> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(worker_count.max(1))
            .enable_all()
            .build()
            .context("failed to build runtime")?;

        runtime.block_on(self.serve())
    }

    /// The accept loop, for embedding in an existing runtime.
    ///
    /// Each accepted connection is handed to its own task; the loop re-arms
    /// immediately, so transport setup (including TLS handshakes) for many
    /// connections runs concurrently. Accept errors are logged and the
    /// loop keeps going.
    pub async fn serve(self) -> anyhow::Result<()> {
        let listener = TcpListener::from_std(self.listener)?;
        info!("Listening on {}", listener.local_addr()?);

        loop {
            let (socket, peer) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    error!("Accept error: {}", e);
                    continue;
                }
            };

            let transport = Arc::clone(&self.transport);
            let router = Arc::clone(&self.router);

            tokio::spawn(async move {
                // Setup failure (e.g. a failed handshake) drops the
                // connection without a response.
                let stream = match transport.setup(socket).await {
                    Ok(stream) => stream,
                    Err(e) => {
                        debug!("Transport setup failed for {}: {}", peer, e);
                        return;
                    }
                };

                let conn = Connection::new(stream, transport.explicit_flush());
                if let Err(e) = conn.run(&router).await {
                    debug!("Connection error from {}: {}", peer, e);
                }
            });
        }
    }
}
