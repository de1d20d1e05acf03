//! Route table and request dispatch.

use std::collections::HashMap;
use std::sync::Arc;

use http::Method;
use tracing::{debug, info, warn};

use crate::error::RouterError;
use crate::matcher::Matcher;
use crate::params::Params;
use crate::request::{normalize_path, Request};

use super::cascade::{self, Next};
use super::hooks::{Action, Middleware, MiddlewareInvoker, RouteData, RouteInvoker};

/// The binding of a compiled matcher to an action.
///
/// Created at registration time, immutable afterwards, held by the router
/// until [`Router::clear`] drops it.
pub struct Route<T> {
    matcher: Arc<Matcher>,
    action: Action<T>,
    middleware: Vec<Middleware<T>>,
    data: Option<RouteData>,
}

impl<T> Route<T> {
    /// The compiled matcher for this route's pattern.
    #[must_use]
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// The action invoked when this route wins the match.
    #[must_use]
    pub fn action(&self) -> &Action<T> {
        &self.action
    }

    /// Route-scoped middleware, outer-to-inner as declared.
    #[must_use]
    pub fn middleware(&self) -> &[Middleware<T>] {
        &self.middleware
    }

    /// Opaque caller metadata attached at registration.
    #[must_use]
    pub fn data(&self) -> Option<&RouteData> {
        self.data.as_ref()
    }
}

impl<T> Clone for Route<T> {
    fn clone(&self) -> Self {
        Self {
            matcher: Arc::clone(&self.matcher),
            action: self.action.clone(),
            middleware: self.middleware.clone(),
            data: self.data.clone(),
        }
    }
}

/// Methods covered by [`Router::any`].
fn any_methods() -> [Method; 5] {
    [
        Method::HEAD,
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
    ]
}

/// Pattern-matching request router with cascading middleware.
///
/// Routes live in per-method lists scanned in registration order; the first
/// matcher accepting the path wins, so more specific patterns must be
/// registered before more general ones. Middleware is method-independent
/// and matched against the path only.
///
/// Registration takes `&mut self` and dispatch takes `&self`: once the
/// table is built, a shared router is immutable and can serve lookups from
/// multiple threads behind an `Arc`.
///
/// `T` is whatever the host's handlers return; the router hands it back
/// unchanged through every middleware layer.
pub struct Router<T> {
    routes: HashMap<Method, Vec<Route<T>>>,
    middleware: Vec<(Arc<Matcher>, Middleware<T>)>,
    route_invoker: Option<Arc<dyn RouteInvoker<T>>>,
    middleware_invoker: Option<Arc<dyn MiddlewareInvoker<T>>>,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Router<T> {
    /// Create an empty router.
    #[must_use]
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            middleware: Vec::new(),
            route_invoker: None,
            middleware_invoker: None,
        }
    }

    /// Register a route for a set of methods.
    ///
    /// The pattern is validated and compiled here; an invalid pattern fails
    /// this call and registers nothing.
    ///
    /// # Errors
    ///
    /// [`RouterError::Configuration`] or
    /// [`RouterError::PatternCompilation`] when the pattern is rejected.
    pub fn add(
        &mut self,
        methods: &[Method],
        pattern: &str,
        action: Action<T>,
        data: Option<RouteData>,
    ) -> Result<&mut Self, RouterError> {
        self.add_with_middleware(methods, pattern, Vec::new(), action, data)
    }

    /// Register a route with route-scoped middleware.
    ///
    /// The middleware wraps this route's action only, inside any matching
    /// registry middleware, in the order given.
    ///
    /// # Errors
    ///
    /// Same as [`add`](Self::add).
    pub fn add_with_middleware(
        &mut self,
        methods: &[Method],
        pattern: &str,
        middleware: Vec<Middleware<T>>,
        action: Action<T>,
        data: Option<RouteData>,
    ) -> Result<&mut Self, RouterError> {
        let matcher = Arc::new(Matcher::build(pattern)?);

        info!(
            pattern = %pattern,
            methods = ?methods,
            kind = ?matcher.kind(),
            route_middleware = middleware.len(),
            "route registered"
        );

        let route = Route {
            matcher,
            action,
            middleware,
            data,
        };

        for method in methods {
            self.routes
                .entry(method.clone())
                .or_default()
                .push(route.clone());
        }

        Ok(self)
    }

    /// Register a route answering HEAD and GET.
    ///
    /// # Errors
    ///
    /// Same as [`add`](Self::add).
    pub fn get<F>(&mut self, pattern: &str, action: F) -> Result<&mut Self, RouterError>
    where
        F: Fn(&Params) -> T + Send + Sync + 'static,
    {
        self.add(
            &[Method::HEAD, Method::GET],
            pattern,
            Action::handler(action),
            None,
        )
    }

    /// Register a POST route.
    ///
    /// # Errors
    ///
    /// Same as [`add`](Self::add).
    pub fn post<F>(&mut self, pattern: &str, action: F) -> Result<&mut Self, RouterError>
    where
        F: Fn(&Params) -> T + Send + Sync + 'static,
    {
        self.add(&[Method::POST], pattern, Action::handler(action), None)
    }

    /// Register a PUT route.
    ///
    /// # Errors
    ///
    /// Same as [`add`](Self::add).
    pub fn put<F>(&mut self, pattern: &str, action: F) -> Result<&mut Self, RouterError>
    where
        F: Fn(&Params) -> T + Send + Sync + 'static,
    {
        self.add(&[Method::PUT], pattern, Action::handler(action), None)
    }

    /// Register a DELETE route.
    ///
    /// # Errors
    ///
    /// Same as [`add`](Self::add).
    pub fn delete<F>(&mut self, pattern: &str, action: F) -> Result<&mut Self, RouterError>
    where
        F: Fn(&Params) -> T + Send + Sync + 'static,
    {
        self.add(&[Method::DELETE], pattern, Action::handler(action), None)
    }

    /// Register a route answering HEAD, GET, POST, PUT and DELETE.
    ///
    /// # Errors
    ///
    /// Same as [`add`](Self::add).
    pub fn any<F>(&mut self, pattern: &str, action: F) -> Result<&mut Self, RouterError>
    where
        F: Fn(&Params) -> T + Send + Sync + 'static,
    {
        self.add(&any_methods(), pattern, Action::handler(action), None)
    }

    /// Register a middleware for all requests whose path matches `pattern`,
    /// regardless of method.
    ///
    /// Middleware runs in registration order, outermost first, each layer
    /// receiving the parameters its own pattern extracted plus the `next`
    /// continuation.
    ///
    /// # Errors
    ///
    /// Same as [`add`](Self::add).
    pub fn middleware<F>(&mut self, pattern: &str, middleware: F) -> Result<&mut Self, RouterError>
    where
        F: Fn(&Params, Next<'_, T>) -> Result<T, RouterError> + Send + Sync + 'static,
    {
        let matcher = Arc::new(Matcher::build(pattern)?);

        debug!(pattern = %pattern, kind = ?matcher.kind(), "middleware registered");

        self.middleware.push((matcher, Arc::new(middleware)));

        Ok(self)
    }

    /// Install or uninstall the route-invocation hook.
    ///
    /// Last write wins; `None` restores direct invocation.
    pub fn set_route_invoker(&mut self, invoker: Option<Arc<dyn RouteInvoker<T>>>) {
        self.route_invoker = invoker;
    }

    /// Install or uninstall the middleware-invocation hook.
    ///
    /// Last write wins; `None` restores direct invocation.
    pub fn set_middleware_invoker(&mut self, invoker: Option<Arc<dyn MiddlewareInvoker<T>>>) {
        self.middleware_invoker = invoker;
    }

    /// Drop all routes and middleware.
    ///
    /// Invocation hooks are router configuration, not route state, and stay
    /// installed.
    pub fn clear(&mut self) {
        let routes: usize = self.routes.values().map(Vec::len).sum();

        info!(
            routes = routes,
            middleware = self.middleware.len(),
            "router cleared"
        );

        self.routes.clear();
        self.middleware.clear();
    }

    /// All registered pattern sources, useful for startup diagnostics.
    #[must_use]
    pub fn patterns(&self) -> Vec<String> {
        self.routes
            .values()
            .flatten()
            .map(|route| route.matcher().source().to_string())
            .collect()
    }

    /// Resolve and invoke the route matching `method` and `path`.
    ///
    /// The path is taken verbatim; see [`handle_request`](Self::handle_request)
    /// for the transport-path entry point. Matching walks the method's
    /// routes in registration order, collects every registry middleware
    /// whose pattern accepts the path, folds them around the route action
    /// and runs the resulting chain on the calling stack.
    ///
    /// # Errors
    ///
    /// - [`RouterError::MethodNotSupported`] when no routes were ever
    ///   registered for `method`;
    /// - [`RouterError::RouteNotFound`] when the method has routes but none
    ///   match;
    /// - [`RouterError::InvalidHandler`] when the matched route's action is
    ///   symbolic and no route invoker is installed;
    /// - anything a middleware or hook returns.
    pub fn handle(&self, method: &Method, path: &str) -> Result<T, RouterError> {
        debug!(method = %method, path = %path, "route match attempt");

        let routes = self.routes.get(method).ok_or_else(|| {
            warn!(method = %method, "no routes registered for method");
            RouterError::MethodNotSupported {
                method: method.clone(),
            }
        })?;

        let Some((route, params)) = routes
            .iter()
            .find_map(|route| route.matcher().try_match(path).map(|params| (route, params)))
        else {
            warn!(method = %method, path = %path, "no route matched");
            return Err(RouterError::RouteNotFound {
                method: method.clone(),
                path: path.to_string(),
            });
        };

        info!(
            method = %method,
            path = %path,
            pattern = %route.matcher().source(),
            params = ?params,
            "route matched"
        );

        let layers = self.matching_middleware(path);

        debug!(
            middleware = layers.len(),
            route_middleware = route.middleware().len(),
            "middleware cascade built"
        );

        cascade::run(self, &layers, route, &params)
    }

    /// Resolve and invoke the route matching an abstract request.
    ///
    /// The transport path is normalized first: leading slashes are
    /// stripped and the bare root becomes `/`, matching how patterns are
    /// written.
    ///
    /// # Errors
    ///
    /// Same as [`handle`](Self::handle).
    pub fn handle_request<R: Request>(&self, request: &R) -> Result<T, RouterError> {
        let method = request.method();
        let path = normalize_path(request.path());

        self.handle(&method, path)
    }

    /// Registry middleware whose patterns accept the path, in registration
    /// order, each paired with the parameters its own matcher extracted.
    fn matching_middleware(&self, path: &str) -> Vec<(Middleware<T>, Params)> {
        self.middleware
            .iter()
            .filter_map(|(matcher, middleware)| {
                matcher
                    .try_match(path)
                    .map(|params| (Arc::clone(middleware), params))
            })
            .collect()
    }

    pub(crate) fn invoke_route(&self, route: &Route<T>, params: &Params) -> Result<T, RouterError> {
        if let Some(invoker) = &self.route_invoker {
            return invoker.invoke(route.action(), params, route.data());
        }

        match route.action() {
            Action::Handler(handler) => Ok(handler(params)),
            Action::Abstract(name) => Err(RouterError::InvalidHandler {
                action: name.clone(),
            }),
        }
    }

    pub(crate) fn invoke_middleware(
        &self,
        middleware: &Middleware<T>,
        params: &Params,
        next: Next<'_, T>,
    ) -> Result<T, RouterError> {
        if let Some(invoker) = &self.middleware_invoker {
            return invoker.invoke(middleware, params, next);
        }

        middleware(params, next)
    }
}
