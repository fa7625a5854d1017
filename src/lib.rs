//! # align-text
//!
//! Pads mixed-width strings with category-specific space characters so
//! they render as aligned columns in monospaced output (terminals,
//! markdown tables).
//!
//! Every character of every input string is classified into a category —
//! by default "cjk" (Han, Kana and Hangul ranges) versus a catch-all
//! fallback — the per-category maxima are taken across the whole list, and
//! each string is right-padded with that category's placeholder up to the
//! maxima. CJK glyphs render double width, so padding them with EM QUAD
//! (U+2001) and everything else with FIGURE SPACE (U+2007) lines the
//! columns up without any display-width computation.
//!
//! ## Usage Examples
//!
//! ### Default configuration
//!
//! ```rust
//! use align_text::align_text;
//!
//! let aligned = align_text(&["Hello 世界", "Hi", "Hello World 世"]);
//!
//! assert_eq!(
//!     aligned,
//!     vec![
//!         format!("Hello 世界{}", "\u{2007}".repeat(6)),
//!         format!("Hi{}{}", "\u{2007}".repeat(10), "\u{2001}".repeat(2)),
//!         "Hello World 世\u{2001}".to_string(),
//!     ]
//! );
//! ```
//!
//! ### Custom rules
//!
//! ```rust
//! use align_text::{align_text_with, Matcher, PaddingMap, PaddingRule};
//!
//! // Ideographic-space padding for Han characters, plain spaces for ASCII
//! let overrides = PaddingMap::new()
//!     .rule(
//!         "en",
//!         PaddingRule::new(Matcher::pattern("[a-zA-Z0-9]").unwrap(), ' '),
//!     )
//!     .rule(
//!         "cjk",
//!         PaddingRule::new(Matcher::pattern(r"\p{Han}").unwrap(), '\u{3000}'),
//!     );
//!
//! let aligned = align_text_with(&["Hi", "你好"], &overrides);
//! assert_eq!(aligned[0], "Hi\u{3000}\u{3000}");
//! assert_eq!(aligned[1], "你好  ");
//! ```

/// Core alignment modules
pub mod core;

/// Data layer - static classification tables
pub mod data;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core types and functions
pub use crate::core::align::align;
pub use crate::core::classify::{classify, CharPredicate, Matcher};
pub use crate::core::config::{
    PaddingConfig, PaddingMap, PaddingRule, RuleSpec, CJK_KEY, CJK_PLACEHOLDER, FALLBACK_KEY,
    FALLBACK_PLACEHOLDER,
};

// Re-export data
pub use crate::data::cjk::{is_cjk, CJK_RANGES};

// Re-export utilities
pub use crate::utils::error::{AlignError, AlignResult};

/// Align strings with the default configuration.
///
/// Characters in the CJK ranges pad with U+2001 (EM QUAD), everything else
/// pads with U+2007 (FIGURE SPACE).
///
/// ```rust
/// use align_text::align_text;
///
/// let aligned = align_text(&["世界", "你好", "世界你好"]);
/// assert_eq!(aligned[0], "世界\u{2001}\u{2001}");
/// assert_eq!(aligned[1], "你好\u{2001}\u{2001}");
/// assert_eq!(aligned[2], "世界你好");
/// ```
pub fn align_text<S: AsRef<str>>(strings: &[S]) -> Vec<String> {
    align(strings, &PaddingConfig::default())
}

/// Align strings with caller overrides merged over the defaults.
///
/// A bare placeholder override keeps the key's default matcher; a full
/// rule replaces it. Unmentioned default categories stay in effect.
///
/// ```rust
/// use align_text::{align_text_with, PaddingMap, FALLBACK_KEY};
///
/// // Swap only the fallback placeholder for EN SPACE
/// let overrides = PaddingMap::new().placeholder(FALLBACK_KEY, '\u{2002}');
/// let aligned = align_text_with(&["世界", "Hi"], &overrides);
/// assert_eq!(aligned[0], "世界\u{2002}\u{2002}");
/// assert_eq!(aligned[1], "Hi\u{2001}\u{2001}");
/// ```
pub fn align_text_with<S: AsRef<str>>(strings: &[S], overrides: &PaddingMap) -> Vec<String> {
    align(strings, &PaddingConfig::resolve(overrides))
}
