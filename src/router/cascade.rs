//! Middleware cascade composition.
//!
//! Matched middleware fold into one nested continuation around the route
//! action: for N applicable layers the chain is exactly N+1 frames deep,
//! runs outermost-first, and any layer that returns without calling its
//! continuation prevents every inner layer (and the handler) from running.

use std::fmt;

use crate::error::RouterError;
use crate::params::Params;

use super::core::{Route, Router};
use super::hooks::Middleware;

/// The rest of the middleware chain, handed to each layer.
///
/// A middleware decides the fate of everything inside it: call
/// [`call`](Next::call) to continue (and possibly transform the result), or
/// return without calling it to short-circuit.
pub struct Next<'a, T> {
    continuation: Box<dyn FnOnce() -> Result<T, RouterError> + 'a>,
}

impl<'a, T> Next<'a, T> {
    pub(crate) fn new(continuation: impl FnOnce() -> Result<T, RouterError> + 'a) -> Self {
        Self {
            continuation: Box::new(continuation),
        }
    }

    /// Run the inner layers and ultimately the route handler, returning the
    /// handler's value back outward.
    pub fn call(self) -> Result<T, RouterError> {
        (self.continuation)()
    }
}

impl<T> fmt::Debug for Next<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Next(..)")
    }
}

/// Run the full cascade: registry middleware outermost, route-scoped
/// middleware inside it, the route action innermost.
///
/// Each registry layer carries the parameters its own matcher extracted
/// from the request path; route-scoped layers receive the route's
/// parameters.
pub(crate) fn run<T>(
    router: &Router<T>,
    layers: &[(Middleware<T>, Params)],
    route: &Route<T>,
    route_params: &Params,
) -> Result<T, RouterError> {
    match layers.split_first() {
        Some(((middleware, params), rest)) => {
            let next = Next::new(|| run(router, rest, route, route_params));
            router.invoke_middleware(middleware, params, next)
        }
        None => run_route_scoped(router, route.middleware(), route, route_params),
    }
}

fn run_route_scoped<T>(
    router: &Router<T>,
    middleware: &[Middleware<T>],
    route: &Route<T>,
    params: &Params,
) -> Result<T, RouterError> {
    match middleware.split_first() {
        Some((layer, rest)) => {
            let next = Next::new(|| run_route_scoped(router, rest, route, params));
            router.invoke_middleware(layer, params, next)
        }
        None => router.invoke_route(route, params),
    }
}
