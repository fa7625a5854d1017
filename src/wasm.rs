//! WASM bindings for align-text
//!
//! This module provides JavaScript-accessible alignment functions. Only
//! bare placeholder overrides cross the boundary; predicates and compiled
//! regexes cannot be passed from JS.

#[cfg(feature = "wasm")]
use std::collections::HashMap;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Align strings with the default configuration
///
/// # Arguments
/// * `strings` - Strings to align
///
/// # Returns
/// Aligned strings, same order as the input
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "alignText")]
pub fn align_text_wasm(strings: Vec<String>) -> Vec<String> {
    crate::align_text(&strings)
}

/// Align strings with placeholder overrides
///
/// # Arguments
/// * `strings` - Strings to align
/// * `placeholders` - Map of category key to placeholder string; the first
///   character of each value is used. Keys without a default matcher are
///   ignored.
///
/// # Returns
/// Aligned strings, same order as the input
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "alignTextWithPlaceholders")]
pub fn align_text_with_placeholders_wasm(strings: Vec<String>, placeholders: JsValue) -> Vec<String> {
    let overrides: HashMap<String, String> =
        serde_wasm_bindgen::from_value(placeholders).unwrap_or_default();

    let mut map = crate::PaddingMap::new();
    for (key, value) in &overrides {
        if let Some(placeholder) = value.chars().next() {
            map = map.placeholder(key.as_str(), placeholder);
        }
    }
    crate::align_text_with(&strings, &map)
}

/// Check whether the first character of the input is CJK
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "isCjk")]
pub fn is_cjk_wasm(input: &str) -> bool {
    input.chars().next().map(crate::is_cjk).unwrap_or(false)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
