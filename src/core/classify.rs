//! Character classification
//!
//! A [`Matcher`] decides whether a single character belongs to a category.
//! Matchers are a closed set of three shapes, dispatched explicitly: a
//! regular expression tested against the character in isolation, a boolean
//! predicate, or the reserved fallback marker that claims everything no
//! other rule matched.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::data::cjk::is_cjk;
use crate::utils::error::{AlignError, AlignResult};

/// Shared predicate over a single character.
pub type CharPredicate = Arc<dyn Fn(char) -> bool + Send + Sync>;

/// Decides whether a single character belongs to a category.
#[derive(Clone)]
pub enum Matcher {
    /// Regular expression tested against the character in isolation
    Pattern(Regex),
    /// Boolean predicate invoked with the character
    Predicate(CharPredicate),
    /// Reserved marker: claims every character no other rule matched
    Fallback,
}

impl Matcher {
    /// Compile a regular expression matcher from a pattern string.
    ///
    /// The pattern is applied per character, so anchors are unnecessary
    /// (`"[0-9]"` and `"^[0-9]$"` behave the same).
    ///
    /// ```rust
    /// use align_text::Matcher;
    ///
    /// let digits = Matcher::pattern("[0-9]").unwrap();
    /// assert!(digits.matches('7'));
    /// assert!(!digits.matches('x'));
    ///
    /// assert!(Matcher::pattern("[unclosed").is_err());
    /// ```
    pub fn pattern(pattern: &str) -> AlignResult<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| AlignError::invalid_pattern(pattern, e.to_string()))?;
        Ok(Matcher::Pattern(regex))
    }

    /// Wrap an already compiled regular expression.
    pub fn regex(regex: Regex) -> Self {
        Matcher::Pattern(regex)
    }

    /// Wrap a character predicate.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(char) -> bool + Send + Sync + 'static,
    {
        Matcher::Predicate(Arc::new(predicate))
    }

    /// The built-in CJK range test (see [`crate::data::cjk`]).
    pub fn cjk() -> Self {
        Matcher::Predicate(Arc::new(is_cjk))
    }

    /// The reserved fallback marker.
    pub fn fallback() -> Self {
        Matcher::Fallback
    }

    /// Whether this matcher is the fallback marker.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Matcher::Fallback)
    }

    /// Test a single character.
    ///
    /// The fallback marker never matches directly; it claims a character
    /// only after every other rule declined (see [`classify`]).
    pub fn matches(&self, c: char) -> bool {
        match self {
            Matcher::Pattern(regex) => {
                let mut buf = [0u8; 4];
                regex.is_match(c.encode_utf8(&mut buf))
            }
            Matcher::Predicate(predicate) => predicate(c),
            Matcher::Fallback => false,
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            Matcher::Predicate(_) => f.write_str("Predicate(..)"),
            Matcher::Fallback => f.write_str("Fallback"),
        }
    }
}

/// Classify a single character against an ordered rule list.
///
/// Returns the key of the first non-fallback matcher that accepts `c`, or
/// `fallback_key` when none does. First match wins: rule order is the
/// priority order, which matters when matchers overlap.
pub fn classify<'a, I>(c: char, rules: I, fallback_key: &'a str) -> &'a str
where
    I: IntoIterator<Item = (&'a str, &'a Matcher)>,
{
    for (key, matcher) in rules {
        if !matcher.is_fallback() && matcher.matches(c) {
            return key;
        }
    }
    fallback_key
}
