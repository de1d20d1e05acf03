//! Router error types.
//!
//! Every failure the router can produce is one variant of [`RouterError`].
//! Matching and dispatch are deterministic and side-effect-free until the
//! terminal handler runs, so all errors propagate synchronously to the
//! caller of `handle`; translating them into user-visible behavior (404,
//! 405, 500, ...) is the host application's job.

use std::fmt;

use http::Method;

/// Error raised during route registration or request dispatch.
#[derive(Debug)]
pub enum RouterError {
    /// A route pattern failed validation at registration time.
    ///
    /// Patterns must be non-empty and must not begin with a `/` (the bare
    /// root pattern `/` is the one exception). Raised synchronously by the
    /// registration call, never at match time.
    Configuration(String),
    /// A raw regular-expression pattern failed to compile.
    PatternCompilation {
        /// The pattern text as registered.
        pattern: String,
        /// The underlying compilation failure.
        source: regex::Error,
    },
    /// `handle` was called with an HTTP method for which no routes were
    /// ever registered.
    MethodNotSupported {
        /// The unsupported method.
        method: Method,
    },
    /// The method has registered routes, but none of them matches the path.
    RouteNotFound {
        /// The request method.
        method: Method,
        /// The request path that failed to match.
        path: String,
    },
    /// A matched route carries a symbolic action and no route-invocation
    /// hook is installed to resolve it.
    InvalidHandler {
        /// The symbolic action name.
        action: String,
    },
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::Configuration(reason) => {
                write!(f, "invalid route pattern: {reason}")
            }
            RouterError::PatternCompilation { pattern, source } => {
                write!(f, "pattern '{pattern}' is not a valid regular expression: {source}")
            }
            RouterError::MethodNotSupported { method } => {
                write!(f, "method {method} not implemented")
            }
            RouterError::RouteNotFound { method, path } => {
                write!(f, "no route matches {method} {path}")
            }
            RouterError::InvalidHandler { action } => {
                write!(
                    f,
                    "action '{action}' is not invocable and no route invoker is installed"
                )
            }
        }
    }
}

impl std::error::Error for RouterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouterError::PatternCompilation { source, .. } => Some(source),
            _ => None,
        }
    }
}
