//! # Router Module
//!
//! Route registration, lookup and middleware-cascading dispatch.
//!
//! ## Overview
//!
//! The router holds an ordered list of routes per HTTP method and an
//! ordered, method-independent middleware registry. `handle` resolves one
//! request to exactly one route (first match in registration order),
//! gathers every middleware whose pattern accepts the path, and folds them
//! into a single continuation chain around the route's action: registry
//! middleware outermost, route-scoped middleware inside, the handler
//! innermost. Each layer receives the parameters its own pattern extracted
//! plus the [`Next`] continuation, and may short-circuit by returning
//! without calling it.
//!
//! ## Example
//!
//! ```rust
//! use http::Method;
//! use routecast::Router;
//!
//! # fn main() -> Result<(), routecast::RouterError> {
//! let mut router = Router::new();
//! router.get("hello/:name", |params| {
//!     format!("Hello, {}", params.get("name").unwrap_or_default())
//! })?;
//!
//! let greeting = router.handle(&Method::GET, "hello/Sam")?;
//! assert_eq!(greeting, "Hello, Sam");
//! # Ok(())
//! # }
//! ```

mod cascade;
mod core;
mod hooks;

pub use cascade::Next;
pub use core::{Route, Router};
pub use hooks::{Action, Handler, Middleware, MiddlewareInvoker, RouteData, RouteInvoker};
