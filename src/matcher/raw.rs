//! Verbatim regular-expression matcher.

use regex::Regex;

use crate::error::RouterError;
use crate::params::Params;

/// Matcher whose pattern text is used directly as a regular expression.
///
/// The body is anchored at both ends and matched case-insensitively.
/// Parameter extraction follows one fixed rule: if no capture group carries
/// a name, all groups are returned positionally (0-based); as soon as one
/// group is named, only named captures are returned and positional
/// duplicates of them are discarded.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    source: String,
    regex: Regex,
}

impl RegexMatcher {
    pub(crate) fn new(body: &str) -> Result<Self, RouterError> {
        let regex = Regex::new(&format!("(?i)^(?:{body})$")).map_err(|source| {
            RouterError::PatternCompilation {
                pattern: body.to_string(),
                source,
            }
        })?;

        Ok(Self {
            source: body.to_string(),
            regex,
        })
    }

    pub(crate) fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn try_match(&self, path: &str) -> Option<Params> {
        let captures = self.regex.captures(path)?;
        let mut params = Params::new();

        let named: Vec<&str> = self.regex.capture_names().flatten().collect();

        if named.is_empty() {
            for (index, capture) in captures.iter().skip(1).enumerate() {
                if let Some(capture) = capture {
                    params.push_indexed(index, capture.as_str());
                }
            }
        } else {
            for name in named {
                if let Some(capture) = captures.name(name) {
                    params.push_named(name, capture.as_str());
                }
            }
        }

        Some(params)
    }
}
