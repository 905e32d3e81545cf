//! Wildcard trigger patterns.
//!
//! A trigger like `*bubblegum*` is a glob over the whole message: `*`
//! matches zero or more characters, everything else matches itself. The
//! pattern is anchored at both ends, so there is no substring matching
//! beyond what the `*`s allow.

use regex::Regex;

use crate::error::DispatchError;

/// A compiled wildcard pattern.
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    source: String,
    regex: Regex,
}

impl WildcardPattern {
    /// Compile a wildcard pattern into a whole-string matcher.
    ///
    /// Any string is a valid pattern: literal segments are escaped before
    /// they reach the regex engine, so `.`, `+`, `(` and the rest match
    /// themselves. A pattern without any `*` is an exact equality test.
    pub fn compile(pattern: &str) -> Result<Self, DispatchError> {
        let escaped = pattern
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");

        let regex = Regex::new(&format!("^{}$", escaped)).map_err(|source| {
            DispatchError::Pattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern string this matcher was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the entire candidate string satisfies the pattern.
    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}
