//! CJK code-point range table
//!
//! The built-in "wide" test: a character counts as CJK iff its code point
//! falls in one of a fixed set of inclusive Unicode ranges. This is
//! deliberately not a full display-width database (wcwidth); it covers the
//! Han, Kana and Hangul blocks that matter for column alignment.

/// Inclusive code-point ranges classified as CJK.
pub const CJK_RANGES: &[(u32, u32)] = &[
    // Chinese (Hanzi)
    (0x4E00, 0x9FFF),   // CJK Unified Ideographs
    (0x3400, 0x4DBF),   // CJK Unified Ideographs Extension A
    (0x20000, 0x2A6DF), // CJK Unified Ideographs Extension B
    (0x2A700, 0x2B73F), // CJK Unified Ideographs Extension C
    (0x2B740, 0x2B81F), // CJK Unified Ideographs Extension D
    (0x2B820, 0x2CEAF), // CJK Unified Ideographs Extension E
    (0xF900, 0xFAFF),   // CJK Compatibility Ideographs
    (0x2F800, 0x2FA1F), // CJK Compatibility Ideographs Supplement
    // Japanese
    (0x3040, 0x309F), // Hiragana
    (0x30A0, 0x30FF), // Katakana
    (0x31F0, 0x31FF), // Katakana Phonetic Extensions
    // Korean
    (0xAC00, 0xD7A3), // Hangul Syllables
    (0x1100, 0x11FF), // Hangul Jamo
    (0x3130, 0x318F), // Hangul Compatibility Jamo
];

/// Whether a character falls in any of the [`CJK_RANGES`].
///
/// ```rust
/// use align_text::is_cjk;
///
/// assert!(is_cjk('世'));
/// assert!(is_cjk('あ'));
/// assert!(!is_cjk('A'));
/// ```
pub fn is_cjk(c: char) -> bool {
    let code = c as u32;
    CJK_RANGES
        .iter()
        .any(|&(start, end)| code >= start && code <= end)
}
