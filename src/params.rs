//! Extracted path parameters.
//!
//! Parameters come out of a matched pattern either under a name (`:id`,
//! `&page`, named regex captures) or under a position (unnamed regex
//! captures). Both kinds live in one ordered container so that handlers can
//! consume them positionally while middleware and hooks can look them up by
//! name.

use std::fmt;

use smallvec::SmallVec;

/// Maximum number of parameters before heap allocation.
///
/// Most route patterns carry well under 8 placeholders, so the common case
/// never leaves the stack.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Key under which a parameter was captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamKey {
    /// Named placeholder or named capture group.
    Name(String),
    /// Position of an unnamed capture group, starting at 0.
    Index(usize),
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKey::Name(name) => f.write_str(name),
            ParamKey::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Stack-allocated parameter storage for the match hot path.
pub type ParamVec = SmallVec<[(ParamKey, String); MAX_INLINE_PARAMS]>;

/// Ordered collection of parameters extracted from a request path.
///
/// Order is the order of appearance in the pattern, which is what handlers
/// taking parameters positionally rely on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: ParamVec,
}

impl Params {
    /// Create an empty parameter collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_named(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((ParamKey::Name(name.into()), value.into()));
    }

    pub(crate) fn push_indexed(&mut self, index: usize, value: impl Into<String>) {
        self.entries.push((ParamKey::Index(index), value.into()));
    }

    /// Get a parameter by name.
    ///
    /// Uses "last write wins" semantics: if duplicate parameter names exist
    /// at different pattern depths, the last occurrence is returned.
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .rfind(|(k, _)| matches!(k, ParamKey::Name(n) if n == name))
            .map(|(_, v)| v.as_str())
    }

    /// Get a positionally captured parameter by its 0-based index.
    #[inline]
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&str> {
        self.entries
            .iter()
            .rfind(|(k, _)| *k == ParamKey::Index(index))
            .map(|(_, v)| v.as_str())
    }

    /// Parameter values in order of appearance, regardless of key kind.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, v)| v.as_str())
    }

    /// Iterate over `(key, value)` pairs in order of appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&ParamKey, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Number of captured parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pattern captured anything at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
