//! Handler wrappers.
//!
//! Each wrapper takes a [`Handler`] and returns a new one, so they compose
//! with each other and with [`Router::into_handler`](crate::Router::into_handler):
//!
//! ```
//! use oxide_dispatch::middleware::{get_only, logging};
//! use oxide_dispatch::{ExactTable, Request, Response, Router};
//!
//! let router = Router::new([ExactTable::new()
//!     .route("GET /", |_req: Request| async { Response::text("home") })
//!     .into()])
//! .unwrap();
//! let app = logging(get_only(router.into_handler()));
//! # let _ = app;
//! ```

use std::sync::Arc;
use std::time::Instant;

use futures::future::FutureExt;
use tracing::{info, warn};

use crate::handler::Handler;
use crate::request::Method;
use crate::response::Response;

/// Logs method, path, status and elapsed time of every request.
pub fn logging(inner: Handler) -> Handler {
    Arc::new(move |req| {
        let method = req.method.clone();
        let path = req.path.clone();
        let start = Instant::now();
        let fut = inner(req);
        async move {
            let res = fut.await;
            info!(
                method = %method,
                path = %path,
                status = res.status,
                elapsed = ?start.elapsed(),
                "request"
            );
            res
        }
        .boxed()
    })
}

/// Rejects every request whose method is not GET with a 405.
pub fn get_only(inner: Handler) -> Handler {
    Arc::new(move |req| {
        if req.method == Method::Get {
            inner(req)
        } else {
            warn!(method = %req.method, path = %req.path, "method not allowed");
            futures::future::ready(Response::method_not_allowed()).boxed()
        }
    })
}

/// Runs the inner handler `count` times in sequence and returns the last
/// response. Useful for load testing a single endpoint.
pub fn repeat(count: usize, inner: Handler) -> Handler {
    Arc::new(move |req| {
        let inner = Arc::clone(&inner);
        async move {
            let mut res = Response::ok();
            for _ in 0..count {
                res = inner(req.clone()).await;
            }
            res
        }
        .boxed()
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::handler::handler;
    use crate::request::Request;

    fn counting(calls: Arc<AtomicUsize>) -> Handler {
        handler(move |_req: Request| {
            let calls = Arc::clone(&calls);
            async move {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                Response::text(n.to_string())
            }
        })
    }

    #[tokio::test]
    async fn test_get_only_rejects_other_methods() {
        let calls = Arc::new(AtomicUsize::new(0));
        let app = get_only(counting(Arc::clone(&calls)));

        let res = app(Request::post("/")).await;
        assert_eq!(res.status, 405);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let res = app(Request::get("/")).await;
        assert_eq!(res.status, 200);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_repeat_returns_last_response() {
        let calls = Arc::new(AtomicUsize::new(0));
        let app = repeat(3, counting(Arc::clone(&calls)));

        let res = app(Request::get("/")).await;
        assert_eq!(res.body_string(), Some("3".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_repeat_zero_times() {
        let calls = Arc::new(AtomicUsize::new(0));
        let app = repeat(0, counting(Arc::clone(&calls)));

        let res = app(Request::get("/")).await;
        assert_eq!(res, Response::ok());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_logging_passes_response_through() {
        let app = logging(handler(|_req: Request| async { Response::new(418) }));
        assert_eq!(app(Request::get("/teapot")).await.status, 418);
    }
}
