use std::fs::File;
use std::future::Future;
use std::io::{self, BufReader};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpStream;
use tokio_rustls::TlsAcceptor;
use tokio_rustls::rustls::ServerConfig;
use tokio_rustls::server::TlsStream;

use crate::transport::Transport;

/// TLS transport.
///
/// The certificate chain and private key are loaded once at construction
/// and shared read-only by every handshake for the lifetime of the server.
/// There is no certificate reloading.
#[derive(Clone)]
pub struct Tls {
    acceptor: TlsAcceptor,
}

impl Tls {
    /// Builds the TLS context from PEM-encoded certificate chain and
    /// private key files.
    pub fn from_pem_files(cert_path: &Path, key_path: &Path) -> anyhow::Result<Self> {
        let cert_file = File::open(cert_path)
            .with_context(|| format!("failed to open certificate file: {}", cert_path.display()))?;
        let certs = rustls_pemfile::certs(&mut BufReader::new(cert_file))
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("invalid certificate file: {}", cert_path.display()))?;

        let key_file = File::open(key_path)
            .with_context(|| format!("failed to open private key file: {}", key_path.display()))?;
        let key = rustls_pemfile::private_key(&mut BufReader::new(key_file))
            .with_context(|| format!("invalid private key file: {}", key_path.display()))?
            .with_context(|| format!("no private key found in {}", key_path.display()))?;

        let config = ServerConfig::builder()
            .with_no_client_auth()
            .with_single_cert(certs, key)
            .context("failed to build TLS server config")?;

        Ok(Self {
            acceptor: TlsAcceptor::from(Arc::new(config)),
        })
    }
}

impl Transport for Tls {
    type Stream = TlsStream<TcpStream>;

    fn setup(&self, socket: TcpStream) -> impl Future<Output = io::Result<Self::Stream>> + Send {
        let acceptor = self.acceptor.clone();
        async move { acceptor.accept(socket).await }
    }

    /// The TLS stream writes records straight through; no separate flush.
    fn explicit_flush(&self) -> bool {
        false
    }
}
