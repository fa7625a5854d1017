//! Core alignment modules
//!
//! This module contains the two collaborating components:
//! - the classifier: per-character category decisions (`classify`, with
//!   rule merging and normalization in `config`)
//! - the aligner: the counting and padding pass itself (`align`)

pub mod align;
pub mod classify;
pub mod config;

// Re-export main types and functions
pub use align::align;
pub use classify::{classify, CharPredicate, Matcher};
pub use config::{
    PaddingConfig, PaddingMap, PaddingRule, RuleSpec, CJK_KEY, CJK_PLACEHOLDER, FALLBACK_KEY,
    FALLBACK_PLACEHOLDER,
};
