//! # routecast
//!
//! **routecast** is a pattern-matching HTTP request router: given a set of
//! `(method, pattern, handler)` registrations and a set of
//! `(pattern, middleware)` registrations, it resolves one incoming request
//! to exactly one executed handler, wrapped by every middleware whose
//! pattern matches the path, in a deterministic order.
//!
//! It is a pure, synchronous, in-memory library. There is no transport, no
//! response type and no I/O: the router consumes anything that can report a
//! method and a path, and returns whatever the matched handler returns, up
//! through each middleware layer.
//!
//! ## Architecture
//!
//! - **[`matcher`]** - pattern compilation. Each pattern string is compiled
//!   once, at registration time, into the cheapest matcher variant able to
//!   express it: exact equality, segment-by-segment comparison with typed
//!   placeholders, or an anchored regular expression.
//! - **[`router`]** - the per-method route table, the method-independent
//!   middleware registry, first-match lookup and the nested-continuation
//!   middleware cascade.
//! - **[`error`]** - one error enum covering registration failures and
//!   dispatch misses; everything propagates synchronously to the caller.
//!
//! ## Pattern syntax
//!
//! | Pattern | Matches |
//! |---------|---------|
//! | `blog/archive` | exactly `blog/archive` (trailing slash significant) |
//! | `users/:id` | any non-empty segment, captured as `id` |
//! | `images/&imageId` | digits-only segment, captured as `imageId` |
//! | `items/&id-:name` | placeholders mixed into one segment |
//! | `~^report/(\d{4})$~` | a verbatim regular expression, case-insensitive |
//!
//! Patterns are written without a leading slash; the bare root pattern `/`
//! is the one exception.
//!
//! ## Quick start
//!
//! ```rust
//! use http::Method;
//! use routecast::Router;
//!
//! # fn main() -> Result<(), routecast::RouterError> {
//! let mut router = Router::new();
//!
//! router.get("hello/:name", |params| {
//!     format!("Hello, {}", params.get("name").unwrap_or_default())
//! })?;
//!
//! router.middleware("hello/admin", |_params, _next| {
//!     // Short-circuit: the handler below never runs for this path.
//!     Ok("restricted".to_string())
//! })?;
//!
//! assert_eq!(router.handle(&Method::GET, "hello/Sam")?, "Hello, Sam");
//! assert_eq!(router.handle(&Method::GET, "hello/admin")?, "restricted");
//! # Ok(())
//! # }
//! ```
//!
//! ## Dispatch flow
//!
//! 1. `handle(method, path)` looks up the method's routes and scans them in
//!    registration order; the first matching pattern wins.
//! 2. Every registry middleware whose pattern accepts the path is
//!    collected, in registration order.
//! 3. Middleware folds into a single continuation chain around the route's
//!    action - N middleware produce exactly N+1 stack frames. Each layer
//!    receives the parameters its own pattern extracted and a
//!    [`Next`](router::Next) continuation; not calling `next` cancels every
//!    inner layer.
//! 4. The handler's return value travels back out through each layer, any
//!    of which may transform it.
//!
//! ## Invocation hooks
//!
//! A host can centralize dependency injection or logging by installing a
//! [`RouteInvoker`](router::RouteInvoker) or
//! [`MiddlewareInvoker`](router::MiddlewareInvoker) on a router instance;
//! the hook then owns invocation entirely. Hooks are per-router state:
//! routers in the same process never interfere through them.
//!
//! ## Concurrency
//!
//! Registration takes `&mut self`, dispatch takes `&self`. Build the table
//! first, then share the router (e.g. behind an `Arc`) and call `handle`
//! from as many threads as needed; dispatch performs no interior mutation.

pub mod error;
pub mod matcher;
pub mod params;
pub mod request;
pub mod router;

pub use error::RouterError;
pub use matcher::{Matcher, MatcherKind};
pub use params::{ParamKey, Params};
pub use request::Request;
pub use router::{
    Action, Handler, Middleware, MiddlewareInvoker, Next, Route, RouteData, RouteInvoker, Router,
};
