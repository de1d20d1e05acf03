//! Regex-backed matcher for placeholders embedded inside path segments.

use regex::Regex;

use crate::error::RouterError;
use crate::params::Params;

/// Matcher for patterns that mix literal text and placeholders within one
/// segment, e.g. `items/&id-:name` matching `items/15-something`.
///
/// Literal portions are regex-escaped, `:name` becomes a non-greedy
/// any-character capture and `&name` a digits-only capture; the result is
/// compiled as an anchored, case-sensitive regular expression.
#[derive(Debug, Clone)]
pub struct ExtendedMatcher {
    source: String,
    regex: Regex,
}

impl ExtendedMatcher {
    pub(crate) fn new(pattern: &str) -> Result<Self, RouterError> {
        let body = compile(pattern);
        let regex =
            Regex::new(&format!("^{body}$")).map_err(|source| RouterError::PatternCompilation {
                pattern: pattern.to_string(),
                source,
            })?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    pub(crate) fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn try_match(&self, path: &str) -> Option<Params> {
        let captures = self.regex.captures(path)?;
        let mut params = Params::new();

        for name in self.regex.capture_names().flatten() {
            if let Some(capture) = captures.name(name) {
                params.push_named(name, capture.as_str());
            }
        }

        Some(params)
    }
}

/// Translate a pattern into a regex body: literals escaped, `:name` →
/// `(?P<name>.+?)`, `&name` → `(?P<name>[0-9]+)`.
///
/// Placeholder names are word characters only; a marker without a name is
/// kept as literal text.
fn compile(pattern: &str) -> String {
    let mut body = String::with_capacity(pattern.len() + 16);
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' || c == '&' {
            let mut name = String::new();
            while let Some(&next) = chars.peek() {
                if next.is_ascii_alphanumeric() || next == '_' {
                    name.push(next);
                    chars.next();
                } else {
                    break;
                }
            }

            if name.is_empty() {
                literal.push(c);
            } else {
                body.push_str(&regex::escape(&literal));
                literal.clear();
                let capture = if c == ':' { ".+?" } else { "[0-9]+" };
                body.push_str(&format!("(?P<{name}>{capture})"));
            }
        } else {
            literal.push(c);
        }
    }

    body.push_str(&regex::escape(&literal));
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_placeholder_per_segment() {
        let matcher = ExtendedMatcher::new("users/:id").unwrap();

        let params = matcher.try_match("users/bill").unwrap();
        assert_eq!(params.get("id"), Some("bill"));

        assert!(matcher.try_match("other/route").is_none());
    }

    #[test]
    fn numeric_placeholder_rejects_words() {
        let matcher = ExtendedMatcher::new("users/&userId").unwrap();

        assert!(matcher.try_match("users/100").is_some());
        assert!(matcher.try_match("users/sam").is_none());
    }

    #[test]
    fn multiple_placeholders_in_one_segment() {
        let matcher = ExtendedMatcher::new("items/&id-:name").unwrap();

        let params = matcher.try_match("items/15-something").unwrap();
        assert_eq!(params.get("id"), Some("15"));
        assert_eq!(params.get("name"), Some("something"));

        assert!(matcher.try_match("items/abc-x").is_none());
    }

    #[test]
    fn literal_metacharacters_are_escaped() {
        let matcher = ExtendedMatcher::new("files/:name.txt").unwrap();

        // `.` in the literal tail must not act as a wildcard.
        assert!(matcher.try_match("files/notes_txt").is_none());

        let params = matcher.try_match("files/notes.txt").unwrap();
        assert_eq!(params.get("name"), Some("notes"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let matcher = ExtendedMatcher::new("users/:id").unwrap();

        assert!(matcher.try_match("Users/bill").is_none());
    }
}
