//! # oxide-dispatch
//!
//! Method and path dispatch for small web applications.
//!
//! This crate provides:
//! - Exact routes, matched by literal path
//! - Parametric routes with a single `%d` segment parsed as an [`IdField`]
//! - A router compiled once from route tables and shared without locks
//! - Handler wrappers for request logging and method filtering
//!
//! ## Quick Start
//!
//! ```ignore
//! use oxide_dispatch::{ExactTable, IdField, ParametricTable, Request, Response, Router};
//!
//! async fn list_widgets(_req: Request) -> Response {
//!     Response::text("all widgets")
//! }
//!
//! async fn edit_widget(_req: Request, id: IdField) -> Response {
//!     Response::text(format!("editing widget {id}"))
//! }
//!
//! let router = Router::new([
//!     ExactTable::new()
//!         .route("GET /widgets", list_widgets)
//!         .into(),
//!     ParametricTable::new()
//!         .route("GET /widgets/%d/edit", edit_widget)
//!         .route("DELETE /widgets/%d", delete_widget)
//!         .into(),
//! ])?;
//!
//! let response = router.handle(Request::get("/widgets/42/edit")).await;
//! ```
//!
//! ## Matching Rules
//!
//! Route keys have the form `"<METHOD> <path>"`. The method token is compared
//! verbatim. Exact routes are tried before parametric routes; within each
//! kind, routes from earlier tables win. A `%d` matches one or more decimal
//! digits; a run of digits too large for a `u64` does not match. Anything
//! unmatched gets a 404.
//!
//! ## Configuration Errors
//!
//! Malformed keys and patterns are reported by [`Router::new`] as a
//! [`RouterError`]. They are never deferred to request time.

mod error;
mod handler;
mod id;
pub mod middleware;
mod pattern;
mod request;
mod response;
mod router;
mod table;

pub use error::{Result, RouterError};
pub use handler::{handler, id_handler, Handler, IdHandler};
pub use id::{IdField, ParseIdError};
pub use pattern::{IdPattern, PLACEHOLDER};
pub use request::{Method, Request};
pub use response::Response;
pub use router::{ExactRoute, ParametricRoute, RouteMatch, Router};
pub use table::{ExactTable, ParametricTable, RouteKey, RouteTable};
