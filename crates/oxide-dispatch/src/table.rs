//! Route keys and route tables.

use std::fmt;
use std::future::Future;

use crate::error::{Result, RouterError};
use crate::handler::{handler, id_handler, Handler, IdHandler};
use crate::id::IdField;
use crate::request::{Method, Request};
use crate::response::Response;

/// A parsed `"<METHOD> <path>"` route key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    /// Method token, compared verbatim against the request method.
    pub method: Method,
    /// Literal path or `%d` pattern.
    pub path: String,
}

impl RouteKey {
    /// Parses a route key, splitting on the first space.
    ///
    /// # Example
    ///
    /// ```
    /// use oxide_dispatch::{Method, RouteKey};
    ///
    /// let key = RouteKey::parse("GET /widgets/%d/edit").unwrap();
    /// assert_eq!(key.method, Method::Get);
    /// assert_eq!(key.path, "/widgets/%d/edit");
    /// ```
    pub fn parse(key: &str) -> Result<Self> {
        let malformed = || RouterError::MalformedRouteKey {
            key: key.to_string(),
        };
        let (method, path) = key.split_once(' ').ok_or_else(malformed)?;
        if method.is_empty() || path.is_empty() {
            return Err(malformed());
        }
        Ok(Self {
            method: Method::from(method),
            path: path.to_string(),
        })
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// A table of routes matched by exact path equality.
///
/// ```
/// use oxide_dispatch::{ExactTable, Request, Response};
///
/// let table = ExactTable::new()
///     .route("GET /", |_req: Request| async { Response::text("home") })
///     .route("POST /items", |_req: Request| async { Response::new(201) });
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct ExactTable {
    entries: Vec<(String, Handler)>,
}

impl ExactTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a route. Re-adding a key replaces the earlier handler.
    #[must_use]
    pub fn route<F, Fut>(mut self, key: impl Into<String>, f: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        upsert(&mut self.entries, key.into(), handler(f));
        self
    }

    /// Adds an already boxed handler.
    #[must_use]
    pub fn handler(mut self, key: impl Into<String>, handler: Handler) -> Self {
        upsert(&mut self.entries, key.into(), handler);
        self
    }

    /// Returns the number of routes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> Vec<(String, Handler)> {
        self.entries
    }
}

/// A table of routes whose path contains one `%d` placeholder.
///
/// ```
/// use oxide_dispatch::{IdField, ParametricTable, Request, Response};
///
/// let table = ParametricTable::new().route("GET /items/%d", |_req: Request, id: IdField| async move {
///     Response::text(format!("item {id}"))
/// });
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct ParametricTable {
    entries: Vec<(String, IdHandler)>,
}

impl ParametricTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a route. Re-adding a key replaces the earlier handler.
    #[must_use]
    pub fn route<F, Fut>(mut self, key: impl Into<String>, f: F) -> Self
    where
        F: Fn(Request, IdField) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        upsert(&mut self.entries, key.into(), id_handler(f));
        self
    }

    /// Adds an already boxed handler.
    #[must_use]
    pub fn handler(mut self, key: impl Into<String>, handler: IdHandler) -> Self {
        upsert(&mut self.entries, key.into(), handler);
        self
    }

    /// Returns the number of routes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> Vec<(String, IdHandler)> {
        self.entries
    }
}

fn upsert<H>(entries: &mut Vec<(String, H)>, key: String, handler: H) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some(entry) => entry.1 = handler,
        None => entries.push((key, handler)),
    }
}

/// One route table argument. The variant fixes the handler shape.
#[derive(Clone)]
pub enum RouteTable {
    /// Literal paths with plain handlers.
    Exact(ExactTable),
    /// `%d` patterns with id handlers.
    Parametric(ParametricTable),
}

impl From<ExactTable> for RouteTable {
    fn from(table: ExactTable) -> Self {
        Self::Exact(table)
    }
}

impl From<ParametricTable> for RouteTable {
    fn from(table: ParametricTable) -> Self {
        Self::Parametric(table)
    }
}

impl fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, keys): (&str, Vec<&str>) = match self {
            Self::Exact(t) => ("Exact", t.entries.iter().map(|(k, _)| k.as_str()).collect()),
            Self::Parametric(t) => (
                "Parametric",
                t.entries.iter().map(|(k, _)| k.as_str()).collect(),
            ),
        };
        f.debug_tuple(kind).field(&keys).finish()
    }
}
