//! # Matcher Module
//!
//! Pattern compilation and path matching. A route pattern string is
//! compiled once, at registration time, into the cheapest matcher variant
//! able to express it; match time only ever tests pre-compiled matchers.
//!
//! ## Variants
//!
//! Ordered by cost:
//!
//! - **Static** - exact string equality, for patterns without placeholders.
//! - **Fast** - segment-by-segment comparison, for patterns whose
//!   placeholders (`:name`, `&name`) each occupy a whole segment.
//! - **Extended** - compiled regular expression, for placeholders embedded
//!   inside a segment (`items/&id-:name`).
//! - **Regex** - a verbatim regular expression, written as `~pattern~`.
//!
//! ## Pattern syntax
//!
//! - literal segment: matched verbatim; trailing slashes are significant.
//! - `:name` - string placeholder capturing one non-empty segment (Fast)
//!   or a non-greedy character run (Extended).
//! - `&name` - numeric placeholder, digits only.
//! - `~...~` - raw regular expression, anchored and case-insensitive.
//!
//! ## Example
//!
//! ```rust
//! use routecast::matcher::{Matcher, MatcherKind};
//!
//! # fn main() -> Result<(), routecast::RouterError> {
//! let matcher = Matcher::build("users/:userId/images/&imageId")?;
//! assert_eq!(matcher.kind(), MatcherKind::Fast);
//!
//! let params = matcher.extract("users/bob/images/11");
//! assert_eq!(params.get("userId"), Some("bob"));
//! assert_eq!(params.get("imageId"), Some("11"));
//! # Ok(())
//! # }
//! ```

mod builder;
mod core;
mod extended;
mod fast;
mod raw;

pub use core::{Matcher, MatcherKind, StaticMatcher};
pub use extended::ExtendedMatcher;
pub use fast::FastMatcher;
pub use raw::RegexMatcher;
