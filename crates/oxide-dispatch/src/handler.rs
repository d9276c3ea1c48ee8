//! Handler shapes accepted by route tables.

use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};

use crate::id::IdField;
use crate::request::Request;
use crate::response::Response;

/// A boxed async handler function.
pub type Handler = Arc<dyn Fn(Request) -> BoxFuture<'static, Response> + Send + Sync>;

/// A boxed async handler that also receives the id parsed from the path.
pub type IdHandler = Arc<dyn Fn(Request, IdField) -> BoxFuture<'static, Response> + Send + Sync>;

/// Boxes a plain handler.
pub fn handler<F, Fut>(f: F) -> Handler
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    Arc::new(move |req| f(req).boxed())
}

/// Boxes a handler taking an id.
pub fn id_handler<F, Fut>(f: F) -> IdHandler
where
    F: Fn(Request, IdField) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    Arc::new(move |req, id| f(req, id).boxed())
}
