//! Main router implementation.

use std::fmt;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use tracing::{debug, info};

use crate::error::Result;
use crate::handler::{Handler, IdHandler};
use crate::id::IdField;
use crate::pattern::IdPattern;
use crate::request::{Method, Request};
use crate::response::Response;
use crate::table::{RouteKey, RouteTable};

/// A route matched by literal path equality.
#[derive(Clone)]
pub struct ExactRoute {
    /// HTTP method.
    pub method: Method,
    /// Literal path.
    pub path: String,
    /// Request handler.
    pub handler: Handler,
}

/// A route matched by a compiled `%d` pattern.
#[derive(Clone)]
pub struct ParametricRoute {
    /// HTTP method.
    pub method: Method,
    /// Compiled path pattern.
    pub pattern: IdPattern,
    /// Request handler.
    pub handler: IdHandler,
}

/// The route selected for a request.
pub enum RouteMatch<'a> {
    /// An exact route.
    Exact(&'a ExactRoute),
    /// A parametric route together with the id parsed from the path.
    Parametric(&'a ParametricRoute, IdField),
}

impl RouteMatch<'_> {
    /// Invokes the matched handler.
    pub fn call(self, request: Request) -> BoxFuture<'static, Response> {
        match self {
            Self::Exact(route) => (route.handler)(request),
            Self::Parametric(route, id) => (route.handler)(request, id),
        }
    }
}

/// Dispatches requests to handlers by method and path.
///
/// Routes are compiled once from a list of tables and never change
/// afterwards, so a router can be shared across tasks without locking.
///
/// Exact routes always win over parametric routes. Within each kind the
/// route from the earliest table wins.
///
/// # Example
///
/// ```
/// use oxide_dispatch::{ExactTable, IdField, ParametricTable, Request, Response, Router};
///
/// # futures::executor::block_on(async {
/// let router = Router::new([
///     ExactTable::new()
///         .route("GET /items", |_req: Request| async { Response::text("all items") })
///         .into(),
///     ParametricTable::new()
///         .route("GET /items/%d", |_req: Request, id: IdField| async move {
///             Response::text(format!("item {id}"))
///         })
///         .into(),
/// ])
/// .unwrap();
///
/// let res = router.handle(Request::get("/items/42")).await;
/// assert_eq!(res.body_string(), Some("item 42".to_string()));
///
/// let res = router.handle(Request::get("/items/abc")).await;
/// assert_eq!(res.status, 404);
/// # });
/// ```
#[derive(Clone, Default)]
pub struct Router {
    /// Exact routes in registration order.
    exact: Vec<ExactRoute>,
    /// Parametric routes in registration order.
    parametric: Vec<ParametricRoute>,
}

impl Router {
    /// Compiles route tables into a router.
    ///
    /// Tables are consulted in the order given. Every key is parsed and every
    /// pattern compiled here, so a bad table fails now rather than on the
    /// first request.
    ///
    /// # Errors
    ///
    /// Returns a [`RouterError`](crate::RouterError) for a key without a
    /// method and path, or for a parametric pattern that does not contain
    /// exactly one `%d`.
    pub fn new<I>(tables: I) -> Result<Self>
    where
        I: IntoIterator<Item = RouteTable>,
    {
        let mut router = Self::default();

        for table in tables {
            match table {
                RouteTable::Exact(table) => {
                    for (key, handler) in table.into_entries() {
                        let RouteKey { method, path } = RouteKey::parse(&key)?;
                        router.exact.push(ExactRoute {
                            method,
                            path,
                            handler,
                        });
                    }
                }
                RouteTable::Parametric(table) => {
                    for (key, handler) in table.into_entries() {
                        let RouteKey { method, path } = RouteKey::parse(&key)?;
                        let pattern = IdPattern::compile(&path)?;
                        router.parametric.push(ParametricRoute {
                            method,
                            pattern,
                            handler,
                        });
                    }
                }
            }
        }

        debug!(
            exact = router.exact.len(),
            parametric = router.parametric.len(),
            "compiled route tables"
        );

        Ok(router)
    }

    /// Finds the route for a request without invoking it.
    pub fn find(&self, request: &Request) -> Option<RouteMatch<'_>> {
        if let Some(route) = self
            .exact
            .iter()
            .find(|r| r.method == request.method && r.path == request.path)
        {
            return Some(RouteMatch::Exact(route));
        }

        self.parametric
            .iter()
            .filter(|r| r.method == request.method)
            .find_map(|r| {
                r.pattern
                    .match_id(&request.path)
                    .map(|id| RouteMatch::Parametric(r, id))
            })
    }

    /// Handles an incoming request.
    ///
    /// The matched handler's response is returned unchanged. Requests that
    /// match nothing get a 404 and one log line.
    pub fn handle(&self, request: Request) -> BoxFuture<'static, Response> {
        match self.find(&request) {
            Some(matched) => matched.call(request),
            None => {
                info!(method = %request.method, path = %request.path, "unknown request");
                futures::future::ready(Response::not_found()).boxed()
            }
        }
    }

    /// Turns the router into a single handler for a server front end.
    pub fn into_handler(self) -> Handler {
        Arc::new(move |req| self.handle(req))
    }

    /// Returns the route keys, exact routes first, each in registration order.
    pub fn route_keys(&self) -> Vec<RouteKey> {
        let exact = self.exact.iter().map(|r| RouteKey {
            method: r.method.clone(),
            path: r.path.clone(),
        });
        let parametric = self.parametric.iter().map(|r| RouteKey {
            method: r.method.clone(),
            path: r.pattern.pattern().to_string(),
        });
        exact.chain(parametric).collect()
    }

    /// Returns the total number of routes.
    pub fn len(&self) -> usize {
        self.exact.len() + self.parametric.len()
    }

    /// Returns `true` if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.route_keys())
            .finish()
    }
}
