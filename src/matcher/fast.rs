//! Segment-by-segment matcher with typed, whole-segment placeholders.

use crate::params::Params;

/// Pattern segment as parsed at registration time.
#[derive(Debug, Clone)]
enum Segment {
    /// Must equal the path segment exactly.
    Literal(String),
    /// `:name` - any non-empty path segment, captured under `name`.
    Param(String),
    /// `&name` - digits-only path segment, captured under `name`.
    NumericParam(String),
}

impl Segment {
    fn parse(part: &str) -> Self {
        // A bare `:` or `&` carries no name and stays a literal.
        if part.len() > 1 && part.starts_with(':') {
            Segment::Param(part[1..].to_string())
        } else if part.len() > 1 && part.starts_with('&') {
            Segment::NumericParam(part[1..].to_string())
        } else {
            Segment::Literal(part.to_string())
        }
    }
}

/// Matcher for patterns whose placeholders each occupy a whole segment.
///
/// Pattern and path are split on `/` and compared segment by segment; a
/// segment-count mismatch fails immediately, so `users/:id` rejects both
/// `users` and `users/42/extra` without inspecting any segment. The empty
/// pattern and the bare `/` both reduce to a single root segment matching
/// only the root path.
#[derive(Debug, Clone)]
pub struct FastMatcher {
    source: String,
    segments: Vec<Segment>,
}

impl FastMatcher {
    pub(crate) fn new(pattern: &str) -> Self {
        let segments = split(pattern).iter().map(|part| Segment::parse(part)).collect();

        Self {
            source: pattern.to_string(),
            segments,
        }
    }

    pub(crate) fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn try_match(&self, path: &str) -> Option<Params> {
        let parts = split(path);

        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();

        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) => {
                    if part != literal.as_str() {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    params.push_named(name.clone(), part);
                }
                Segment::NumericParam(name) => {
                    if !is_numeric(part) {
                        return None;
                    }
                    params.push_named(name.clone(), part);
                }
            }
        }

        Some(params)
    }
}

/// Split a route or path into segments; the empty string and the bare root
/// both reduce to a single `/` segment.
fn split(path: &str) -> Vec<&str> {
    if path.is_empty() || path == "/" {
        vec!["/"]
    } else {
        path.split('/').collect()
    }
}

fn is_numeric(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}
