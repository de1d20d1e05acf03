//! Abstract request surface.
//!
//! The router never touches a transport. It consumes anything that can
//! report a method and a path, and returns whatever the matched handler
//! returns.

use http::Method;

/// Minimal request capability the router dispatches on.
pub trait Request {
    /// HTTP method of the request.
    fn method(&self) -> Method;

    /// Request path as received from the transport, e.g. `/users/42`.
    fn path(&self) -> &str;
}

/// Strip leading slashes from a transport path, mapping the bare root to
/// `/`.
///
/// Route patterns are written without a leading slash (`users/:id`), while
/// transports report paths with one (`/users/42`); this is the bridge
/// between the two conventions.
pub(crate) fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}
