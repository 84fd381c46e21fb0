//! Transport acceptor: listening socket ownership and the accept loop.

pub mod listener;

pub use listener::Server;
