use std::collections::HashMap;

use crate::http::request::Request;
use crate::http::response::Response;

/// A registered request handler.
///
/// Handlers run synchronously on the connection's task and must always
/// return a [`Response`]; any shared state they capture needs its own
/// locking.
pub type Handler = Box<dyn Fn(&Request) -> Response + Send + Sync>;

/// Registration phase of the routing table.
///
/// Routes can only be added here; [`build`](RouterBuilder::build) produces
/// the immutable [`Router`] the server consumes, so no registration can
/// race live traffic.
#[derive(Default)]
pub struct RouterBuilder {
    routes: HashMap<String, Handler>,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for a method and path.
    ///
    /// The table key is the plain concatenation `method + path` with no
    /// separator. Matching is an exact string comparison: no patterns, no
    /// trailing-slash normalization, no query stripping.
    pub fn register<F>(mut self, method: &str, path: &str, handler: F) -> Self
    where
        F: Fn(&Request) -> Response + Send + Sync + 'static,
    {
        self.routes.insert(format!("{method}{path}"), Box::new(handler));
        self
    }

    pub fn build(self) -> Router {
        Router {
            routes: self.routes,
        }
    }
}

/// Immutable routing table, shared read-only across connections.
pub struct Router {
    routes: HashMap<String, Handler>,
}

impl Router {
    /// Looks up and invokes the handler for a request.
    ///
    /// A miss is not an error: it yields a 404 with an empty body.
    pub fn dispatch(&self, request: &Request) -> Response {
        let key = format!("{}{}", request.method, request.path);

        match self.routes.get(&key) {
            Some(handler) => handler(request),
            None => Response::new(404),
        }
    }
}
