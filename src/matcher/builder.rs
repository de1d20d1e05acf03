//! Cheapest-sufficient-variant selection.

use tracing::debug;

use crate::error::RouterError;

use super::core::{self, Matcher, StaticMatcher};
use super::extended::ExtendedMatcher;
use super::fast::FastMatcher;
use super::raw::RegexMatcher;

/// Classify a pattern and compile the matching variant.
///
/// Selection order, cheapest first:
/// 1. leading `~` - raw regular expression, delimiters stripped;
/// 2. no placeholder markers at all - static equality;
/// 3. every placeholder fills a whole segment - fast segment walk;
/// 4. otherwise - extended regex-backed matching.
pub(crate) fn build(pattern: &str) -> Result<Matcher, RouterError> {
    core::validate(pattern)?;

    let matcher = if let Some(stripped) = pattern.strip_prefix('~') {
        let body = stripped.trim_matches('~');
        Matcher::Regex(RegexMatcher::new(body)?)
    } else if !pattern.contains(':') && !pattern.contains('&') {
        Matcher::Static(StaticMatcher::new(pattern))
    } else if pattern.split('/').any(has_embedded_marker) {
        Matcher::Extended(ExtendedMatcher::new(pattern)?)
    } else {
        Matcher::Fast(FastMatcher::new(pattern))
    };

    debug!(pattern = %pattern, kind = ?matcher.kind(), "pattern compiled");

    Ok(matcher)
}

/// A placeholder marker past a segment's first character means the
/// placeholder shares the segment with literal text or another placeholder,
/// which only the extended matcher can express.
fn has_embedded_marker(segment: &str) -> bool {
    segment.rfind(':').is_some_and(|i| i > 0) || segment.rfind('&').is_some_and(|i| i > 0)
}
