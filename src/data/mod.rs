//! Data layer - static classification tables
//!
//! This module contains the fixed data the default configuration is built
//! from: the CJK code-point range table.

pub mod cjk;

// Re-export commonly used items
pub use cjk::{is_cjk, CJK_RANGES};
