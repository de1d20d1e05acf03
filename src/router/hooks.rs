//! Actions and invocation hooks.
//!
//! A route's action is usually a plain function, but a host application can
//! take over invocation entirely by installing hooks on the router: the
//! route hook receives the action, the extracted parameters and the route's
//! opaque data; the middleware hook receives each middleware function, its
//! parameters and the `next` continuation. Hooks exist so a host can
//! centralize dependency injection or logging around every dispatch without
//! touching individual handlers.
//!
//! Hooks are per-router state, not process-wide: two routers in one process
//! never interfere, and tests need no teardown discipline. Installing is
//! last-write-wins; passing `None` uninstalls.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::RouterError;
use crate::params::Params;

use super::cascade::Next;

/// Opaque route metadata, passed through to the route-invocation hook and
/// never interpreted by the router.
pub type RouteData = Arc<dyn Any + Send + Sync>;

/// A route handler: consumes the parameters its route's matcher extracted
/// and produces the dispatch result.
pub type Handler<T> = Arc<dyn Fn(&Params) -> T + Send + Sync>;

/// A middleware function: receives the parameters its own matcher extracted
/// from the path, plus the continuation for the rest of the chain.
///
/// Calling [`Next::call`] runs the inner layers; returning without calling
/// it short-circuits them. The result of `next` may be transformed before
/// being returned outward.
pub type Middleware<T> =
    Arc<dyn Fn(&Params, Next<'_, T>) -> Result<T, RouterError> + Send + Sync>;

/// What a matched route invokes.
pub enum Action<T> {
    /// A directly invocable handler function.
    Handler(Handler<T>),
    /// A symbolic action name, meaningful only to an installed route
    /// invoker (e.g. a controller reference the host resolves itself).
    /// Dispatching it without a hook fails with
    /// [`RouterError::InvalidHandler`].
    Abstract(String),
}

impl<T> Action<T> {
    /// Wrap a plain function as an action.
    pub fn handler(action: impl Fn(&Params) -> T + Send + Sync + 'static) -> Self {
        Action::Handler(Arc::new(action))
    }

    /// Create a symbolic action resolved by the route invoker.
    pub fn named(name: impl Into<String>) -> Self {
        Action::Abstract(name.into())
    }
}

impl<T> Clone for Action<T> {
    fn clone(&self) -> Self {
        match self {
            Action::Handler(handler) => Action::Handler(Arc::clone(handler)),
            Action::Abstract(name) => Action::Abstract(name.clone()),
        }
    }
}

impl<T> fmt::Debug for Action<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Handler(_) => f.write_str("Action::Handler(..)"),
            Action::Abstract(name) => write!(f, "Action::Abstract({name:?})"),
        }
    }
}

/// Hook owning route invocation.
///
/// When installed, the router no longer calls handlers itself; the hook
/// receives the action, the route's extracted parameters and its opaque
/// data, and decides how to run it.
pub trait RouteInvoker<T>: Send + Sync {
    /// Invoke the matched route's action.
    fn invoke(
        &self,
        action: &Action<T>,
        params: &Params,
        data: Option<&RouteData>,
    ) -> Result<T, RouterError>;
}

impl<T, F> RouteInvoker<T> for F
where
    F: Fn(&Action<T>, &Params, Option<&RouteData>) -> Result<T, RouterError> + Send + Sync,
{
    fn invoke(
        &self,
        action: &Action<T>,
        params: &Params,
        data: Option<&RouteData>,
    ) -> Result<T, RouterError> {
        self(action, params, data)
    }
}

/// Hook owning middleware invocation.
///
/// When installed, every middleware layer in the cascade is run through the
/// hook instead of being called directly.
pub trait MiddlewareInvoker<T>: Send + Sync {
    /// Invoke one middleware layer.
    fn invoke(
        &self,
        middleware: &Middleware<T>,
        params: &Params,
        next: Next<'_, T>,
    ) -> Result<T, RouterError>;
}

impl<T, F> MiddlewareInvoker<T> for F
where
    F: Fn(&Middleware<T>, &Params, Next<'_, T>) -> Result<T, RouterError> + Send + Sync,
{
    fn invoke(
        &self,
        middleware: &Middleware<T>,
        params: &Params,
        next: Next<'_, T>,
    ) -> Result<T, RouterError> {
        self(middleware, params, next)
    }
}
