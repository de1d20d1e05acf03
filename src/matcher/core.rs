//! Matcher sum type and shared pattern validation.

use crate::error::RouterError;
use crate::params::Params;

use super::builder;
use super::extended::ExtendedMatcher;
use super::fast::FastMatcher;
use super::raw::RegexMatcher;

/// Variant tag of a compiled matcher.
///
/// The builder picks the cheapest variant sufficient for a pattern; the tag
/// makes that classification observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatcherKind {
    /// Exact string equality.
    Static,
    /// Segment-by-segment comparison with whole-segment placeholders.
    Fast,
    /// Regex-backed pattern with placeholders mixed into segments.
    Extended,
    /// Verbatim regular expression.
    Regex,
}

/// Compiled runtime representation of a route pattern.
///
/// A matcher is built once at registration time and only tests paths
/// afterwards; match time never compiles anything. The variants form a
/// closed set ordered by cost: [`Static`](MatcherKind::Static) is a string
/// comparison, [`Fast`](MatcherKind::Fast) walks path segments, and the two
/// regex-backed variants pay for a compiled `Regex`.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Exact-equality matcher for patterns without placeholders.
    Static(StaticMatcher),
    /// Segment matcher for patterns whose placeholders fill whole segments.
    Fast(FastMatcher),
    /// Regex-backed matcher for placeholders embedded inside segments.
    Extended(ExtendedMatcher),
    /// Verbatim regular-expression matcher.
    Regex(RegexMatcher),
}

impl Matcher {
    /// Compile a pattern string into the cheapest sufficient matcher.
    ///
    /// Validation (non-empty, no leading `/` except the bare root pattern)
    /// runs before classification, so an invalid pattern fails the
    /// registration call rather than silently never matching.
    ///
    /// # Errors
    ///
    /// [`RouterError::Configuration`] when validation fails and
    /// [`RouterError::PatternCompilation`] when a regex-backed pattern does
    /// not compile.
    pub fn build(pattern: &str) -> Result<Self, RouterError> {
        builder::build(pattern)
    }

    /// The original, un-compiled pattern text.
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            Matcher::Static(m) => m.source(),
            Matcher::Fast(m) => m.source(),
            Matcher::Extended(m) => m.source(),
            Matcher::Regex(m) => m.source(),
        }
    }

    /// Variant tag of this matcher.
    #[must_use]
    pub fn kind(&self) -> MatcherKind {
        match self {
            Matcher::Static(_) => MatcherKind::Static,
            Matcher::Fast(_) => MatcherKind::Fast,
            Matcher::Extended(_) => MatcherKind::Extended,
            Matcher::Regex(_) => MatcherKind::Regex,
        }
    }

    /// Test a path and extract its parameters in one pass.
    ///
    /// Returns `None` when the path does not satisfy the pattern; the
    /// returned [`Params`] is empty for patterns without placeholders.
    #[must_use]
    pub fn try_match(&self, path: &str) -> Option<Params> {
        match self {
            Matcher::Static(m) => m.try_match(path),
            Matcher::Fast(m) => m.try_match(path),
            Matcher::Extended(m) => m.try_match(path),
            Matcher::Regex(m) => m.try_match(path),
        }
    }

    /// Whether the path satisfies the pattern.
    #[inline]
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.try_match(path).is_some()
    }

    /// Extract parameters from a path.
    ///
    /// Only meaningful when [`matches`](Self::matches) is true; on a
    /// non-matching path this returns an empty collection without erroring.
    #[must_use]
    pub fn extract(&self, path: &str) -> Params {
        self.try_match(path).unwrap_or_default()
    }
}

/// Exact-equality matcher.
///
/// Matches iff the path equals the pattern byte for byte; trailing slashes
/// are significant and comparison is case-sensitive. Never captures
/// parameters.
#[derive(Debug, Clone)]
pub struct StaticMatcher {
    source: String,
}

impl StaticMatcher {
    pub(crate) fn new(pattern: &str) -> Self {
        Self {
            source: pattern.to_string(),
        }
    }

    pub(crate) fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn try_match(&self, path: &str) -> Option<Params> {
        (path == self.source).then(Params::new)
    }
}

/// Validate a pattern before classification.
///
/// Patterns must be non-empty and must not begin with a path separator; the
/// bare root pattern `/` is the one legal exception.
pub(crate) fn validate(pattern: &str) -> Result<(), RouterError> {
    if pattern.is_empty() {
        return Err(RouterError::Configuration(
            "pattern must not be empty".to_string(),
        ));
    }

    if pattern != "/" && pattern.starts_with('/') {
        return Err(RouterError::Configuration(format!(
            "pattern '{pattern}' must not begin with a slash"
        )));
    }

    Ok(())
}
