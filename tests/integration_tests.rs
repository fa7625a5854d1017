//! Integration tests for align-text

use align_text::{
    align_text, align_text_with, Matcher, PaddingConfig, PaddingMap, PaddingRule, FALLBACK_KEY,
};

// ============================================================================
// Default Configuration
// ============================================================================

mod default_config {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mixed_chinese_and_english() {
        let input = ["Hello 世界", "Hi", "Hello World 世"];
        let expected = vec![
            format!("Hello 世界{}", "\u{2007}".repeat(6)),
            format!("Hi{}{}", "\u{2007}".repeat(10), "\u{2001}".repeat(2)),
            "Hello World 世\u{2001}".to_string(),
        ];
        assert_eq!(align_text(&input), expected);
    }

    #[test]
    fn test_empty_string_member() {
        let input = ["", "Hello", "世界"];
        let expected = vec![
            format!("{}{}", "\u{2007}".repeat(5), "\u{2001}".repeat(2)),
            format!("Hello{}", "\u{2001}".repeat(2)),
            format!("世界{}", "\u{2007}".repeat(5)),
        ];
        assert_eq!(align_text(&input), expected);
    }

    #[test]
    fn test_pure_english() {
        let input = ["Hello", "Hi", "Hello World"];
        let expected = vec![
            format!("Hello{}", "\u{2007}".repeat(6)),
            format!("Hi{}", "\u{2007}".repeat(9)),
            "Hello World".to_string(),
        ];
        assert_eq!(align_text(&input), expected);
    }

    #[test]
    fn test_pure_chinese() {
        let input = ["世界", "你好", "世界你好"];
        let expected = vec![
            "世界\u{2001}\u{2001}".to_string(),
            "你好\u{2001}\u{2001}".to_string(),
            "世界你好".to_string(),
        ];
        assert_eq!(align_text(&input), expected);
    }

    #[test]
    fn test_japanese() {
        let input = ["こんにちは", "ありがとう", "さようなら世界"];
        let expected = vec![
            "こんにちは\u{2001}\u{2001}".to_string(),
            "ありがとう\u{2001}\u{2001}".to_string(),
            "さようなら世界".to_string(),
        ];
        assert_eq!(align_text(&input), expected);
    }

    #[test]
    fn test_korean() {
        // The space in the longest entry is a fallback character
        let input = ["안녕하세요", "감사합니다", "안녕히 가세요"];
        let expected = vec![
            "안녕하세요\u{2007}\u{2001}".to_string(),
            "감사합니다\u{2007}\u{2001}".to_string(),
            "안녕히 가세요".to_string(),
        ];
        assert_eq!(align_text(&input), expected);
    }

    #[test]
    fn test_mixed_languages() {
        let input = ["Hello 世界", "こんにちは", "안녕하세요 World"];
        let expected = vec![
            format!("Hello 世界{}", "\u{2001}".repeat(3)),
            format!("こんにちは{}", "\u{2007}".repeat(6)),
            "안녕하세요 World".to_string(),
        ];
        assert_eq!(align_text(&input), expected);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(align_text(&[] as &[&str]), Vec::<String>::new());
    }

    #[test]
    fn test_single_empty_string() {
        assert_eq!(align_text(&[""]), vec!["".to_string()]);
    }
}

// ============================================================================
// Custom Configurations
// ============================================================================

mod custom_config {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_custom_map() {
        let input = ["Hello 世界", "Hi", "Hello World 世"];
        let overrides = PaddingMap::new()
            .rule(
                "en",
                PaddingRule::new(Matcher::pattern("^[a-zA-Z0-9]$").unwrap(), '\u{0020}'),
            )
            .rule(
                "cjk",
                PaddingRule::new(Matcher::pattern(r"\p{Han}").unwrap(), '\u{3000}'),
            );

        // The implicit default fallback claims the ASCII spaces and pads
        // first; caller categories follow in declaration order.
        let expected = vec![
            format!("Hello 世界{}{}", "\u{2007}", "\u{0020}".repeat(5)),
            format!(
                "Hi{}{}{}",
                "\u{2007}".repeat(2),
                "\u{0020}".repeat(8),
                "\u{3000}".repeat(2)
            ),
            "Hello World 世\u{3000}".to_string(),
        ];
        assert_eq!(align_text_with(&input, &overrides), expected);
    }

    #[test]
    fn test_partial_custom_map() {
        let input = ["Hello 世界", "Hi", "Hello World 世"];
        let overrides = PaddingMap::new()
            .placeholder(FALLBACK_KEY, '\u{2002}')
            .rule(
                "cjk",
                PaddingRule::new(Matcher::pattern(r"\p{Han}").unwrap(), '\u{3000}'),
            );

        let expected = vec![
            format!("Hello 世界{}", "\u{2002}".repeat(6)),
            format!("Hi{}{}", "\u{2002}".repeat(10), "\u{3000}".repeat(2)),
            "Hello World 世\u{3000}".to_string(),
        ];
        assert_eq!(align_text_with(&input, &overrides), expected);
    }

    #[test]
    fn test_fallback_override_keeps_default_cjk_rule() {
        let input = ["Hello 世界", "Hi"];
        let overrides = PaddingMap::new().placeholder(FALLBACK_KEY, '\u{2002}');

        let expected = vec![
            "Hello 世界".to_string(),
            format!("Hi{}{}", "\u{2002}".repeat(4), "\u{2001}".repeat(2)),
        ];
        assert_eq!(align_text_with(&input, &overrides), expected);
    }

    #[test]
    fn test_unknown_bare_key_is_ignored() {
        let input = ["ab", "世"];
        let overrides = PaddingMap::new().placeholder("latin", 'x');
        assert_eq!(align_text_with(&input, &overrides), align_text(&input));
    }

    #[test]
    fn test_predicate_rule() {
        let input = ["123", "4"];
        let overrides = PaddingMap::new().rule(
            "digits",
            PaddingRule::new(Matcher::predicate(|c| c.is_ascii_digit()), '·'),
        );
        let aligned = align_text_with(&input, &overrides);
        assert_eq!(aligned, vec!["123".to_string(), "4··".to_string()]);
    }
}

// ============================================================================
// Alignment Properties
// ============================================================================

mod properties {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLES: [&str; 5] = ["Hello 世界", "Hi", "こんにちは", "안녕하세요 World", ""];

    fn category_counts(config: &PaddingConfig, s: &str) -> Vec<usize> {
        let keys: Vec<&str> = config.keys().collect();
        let mut counts = vec![0usize; config.len()];
        for c in s.chars() {
            let key = config.classify(c);
            if let Some(index) = keys.iter().position(|k| *k == key) {
                counts[index] += 1;
            }
        }
        counts
    }

    #[test]
    fn test_uniform_profile() {
        // Padding must raise every string's per-category count to the
        // global maximum. Appended placeholders count toward the category
        // that emitted them (a placeholder need not classify into its own
        // category; U+2001 is not itself a CJK character).
        let config = PaddingConfig::default();
        let aligned = align_text(&SAMPLES);

        let counts: Vec<Vec<usize>> = SAMPLES
            .iter()
            .map(|s| category_counts(&config, s))
            .collect();
        let mut maxima = vec![0usize; config.len()];
        for vector in &counts {
            for (max, count) in maxima.iter_mut().zip(vector) {
                *max = (*max).max(*count);
            }
        }

        for ((input, output), vector) in SAMPLES.iter().zip(&aligned).zip(&counts) {
            let suffix = &output[input.len()..];
            for (index, (key, rule)) in config.rules().enumerate() {
                let appended = suffix.chars().filter(|c| *c == rule.placeholder).count();
                assert_eq!(
                    vector[index] + appended,
                    maxima[index],
                    "category '{}' for input '{}'",
                    key,
                    input
                );
            }
        }
    }

    #[test]
    fn test_prefix_preservation() {
        let aligned = align_text(&SAMPLES);
        for (input, output) in SAMPLES.iter().zip(&aligned) {
            assert!(
                output.starts_with(input),
                "'{}' does not start with '{}'",
                output,
                input
            );
        }
    }

    #[test]
    fn test_widest_element_idempotent() {
        // "Hello World 世" holds both maxima, so it comes back untouched
        let input = ["Hello World 世", "Hi"];
        let aligned = align_text(&input);
        assert_eq!(aligned[0], "Hello World 世");
    }

    #[test]
    fn test_determinism() {
        let overrides = PaddingMap::new().placeholder(FALLBACK_KEY, '\u{2002}');
        assert_eq!(
            align_text_with(&SAMPLES, &overrides),
            align_text_with(&SAMPLES, &overrides)
        );
    }

    #[test]
    fn test_output_cardinality_and_order() {
        let aligned = align_text(&SAMPLES);
        assert_eq!(aligned.len(), SAMPLES.len());
        for (input, output) in SAMPLES.iter().zip(&aligned) {
            assert!(output.starts_with(input));
        }
    }
}
