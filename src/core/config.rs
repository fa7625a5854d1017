//! Padding configuration
//!
//! A configuration maps category keys to padding rules. Callers supply a
//! partial, ordered map of overrides ([`PaddingMap`]); normalization merges
//! it with the built-in defaults into a complete [`PaddingConfig`] that is
//! guaranteed to contain exactly one fallback entry.
//!
//! Key order is semantic twice over: it is the matching priority when
//! matchers overlap, and it is the order in which per-category padding is
//! concatenated onto each string. The merged order is fixed: fallback
//! first, then caller categories in declaration order, then default
//! categories the caller did not mention.

use indexmap::IndexMap;
use lazy_static::lazy_static;

use super::classify::{classify, Matcher};

/// Reserved key of the catch-all category.
pub const FALLBACK_KEY: &str = "@@fallback";

/// Key of the built-in CJK category.
pub const CJK_KEY: &str = "cjk";

/// Default placeholder for the CJK category (EM QUAD, the width of a CJK cell).
pub const CJK_PLACEHOLDER: char = '\u{2001}';

/// Default placeholder for the fallback category (FIGURE SPACE, the width of a digit).
pub const FALLBACK_PLACEHOLDER: char = '\u{2007}';

/// One category's matcher and placeholder.
#[derive(Debug, Clone)]
pub struct PaddingRule {
    /// Decides which characters belong to this category
    pub matcher: Matcher,
    /// Appended once per missing character of this category
    pub placeholder: char,
}

impl PaddingRule {
    pub fn new(matcher: Matcher, placeholder: char) -> Self {
        Self {
            matcher,
            placeholder,
        }
    }
}

/// A caller-supplied override for one category.
#[derive(Debug, Clone)]
pub enum RuleSpec {
    /// Full rule: matcher plus placeholder
    Rule(PaddingRule),
    /// Bare placeholder: reuse the default matcher for this key
    Placeholder(char),
}

/// Partial, ordered map of category overrides.
///
/// ```rust
/// use align_text::{Matcher, PaddingMap, PaddingRule};
///
/// let overrides = PaddingMap::new()
///     .rule(
///         "greek",
///         PaddingRule::new(Matcher::pattern(r"\p{Greek}").unwrap(), ' '),
///     )
///     .placeholder("cjk", '\u{3000}');
/// ```
#[derive(Debug, Clone, Default)]
pub struct PaddingMap {
    entries: IndexMap<String, RuleSpec>,
}

impl PaddingMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a full rule for a category. Declaration order is the
    /// matching priority among caller rules.
    pub fn rule(mut self, key: impl Into<String>, rule: PaddingRule) -> Self {
        self.entries.insert(key.into(), RuleSpec::Rule(rule));
        self
    }

    /// Override only the placeholder of a category that has a default
    /// matcher. Keys without a default matcher are dropped during
    /// normalization; this is a tolerance policy, not an error.
    pub fn placeholder(mut self, key: impl Into<String>, placeholder: char) -> Self {
        self.entries
            .insert(key.into(), RuleSpec::Placeholder(placeholder));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn get(&self, key: &str) -> Option<&RuleSpec> {
        self.entries.get(key)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &RuleSpec)> + '_ {
        self.entries.iter().map(|(key, spec)| (key.as_str(), spec))
    }
}

lazy_static! {
    /// Built-in default configuration: the catch-all fallback and the CJK
    /// category, in that order.
    static ref DEFAULT_RULES: IndexMap<String, PaddingRule> = {
        let mut rules = IndexMap::new();
        rules.insert(
            FALLBACK_KEY.to_string(),
            PaddingRule::new(Matcher::fallback(), FALLBACK_PLACEHOLDER),
        );
        rules.insert(
            CJK_KEY.to_string(),
            PaddingRule::new(Matcher::cjk(), CJK_PLACEHOLDER),
        );
        rules
    };
}

/// A complete, resolvable configuration.
///
/// Always contains exactly one fallback entry. Rule order is both the
/// matching priority and the padding concatenation order.
#[derive(Debug, Clone)]
pub struct PaddingConfig {
    rules: IndexMap<String, PaddingRule>,
}

impl Default for PaddingConfig {
    /// The built-in default configuration: everything in the CJK ranges
    /// pads with U+2001, everything else is fallback and pads with U+2007.
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES.clone(),
        }
    }
}

impl PaddingConfig {
    /// Merge caller overrides with the built-in defaults.
    ///
    /// Merged order: fallback first, then caller categories in declaration
    /// order, then default categories the caller did not mention. The
    /// reserved fallback key always keeps fallback semantics; a full rule
    /// supplied under it contributes only its placeholder. Bare placeholder
    /// overrides for keys without a default matcher are silently dropped.
    pub fn resolve(overrides: &PaddingMap) -> Self {
        let mut rules = IndexMap::new();

        let fallback_placeholder = match overrides.get(FALLBACK_KEY) {
            Some(RuleSpec::Rule(rule)) => rule.placeholder,
            Some(RuleSpec::Placeholder(placeholder)) => *placeholder,
            None => FALLBACK_PLACEHOLDER,
        };
        rules.insert(
            FALLBACK_KEY.to_string(),
            PaddingRule::new(Matcher::fallback(), fallback_placeholder),
        );

        for (key, spec) in overrides.iter() {
            if key == FALLBACK_KEY {
                continue;
            }
            match spec {
                RuleSpec::Rule(rule) => {
                    rules.insert(key.to_string(), rule.clone());
                }
                RuleSpec::Placeholder(placeholder) => {
                    if let Some(default) = DEFAULT_RULES.get(key) {
                        rules.insert(
                            key.to_string(),
                            PaddingRule::new(default.matcher.clone(), *placeholder),
                        );
                    }
                    // No default matcher to reuse: the override is dropped.
                }
            }
        }

        for (key, rule) in DEFAULT_RULES.iter() {
            if !rules.contains_key(key) {
                rules.insert(key.clone(), rule.clone());
            }
        }

        Self { rules }
    }

    /// Number of categories, fallback included.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Category keys in configuration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.rules.keys().map(|key| key.as_str())
    }

    /// Rules in configuration order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &PaddingRule)> + '_ {
        self.rules.iter().map(|(key, rule)| (key.as_str(), rule))
    }

    /// Classify one character into a category key. First match wins; the
    /// fallback claims whatever no rule matched.
    pub fn classify(&self, c: char) -> &str {
        classify(
            c,
            self.rules
                .iter()
                .map(|(key, rule)| (key.as_str(), &rule.matcher)),
            FALLBACK_KEY,
        )
    }

    /// Index of the category a character falls into, in configuration order.
    pub(crate) fn classify_index(&self, c: char) -> usize {
        self.rules
            .values()
            .position(|rule| !rule.matcher.is_fallback() && rule.matcher.matches(c))
            .unwrap_or_else(|| self.fallback_index())
    }

    pub(crate) fn fallback_index(&self) -> usize {
        self.rules.get_index_of(FALLBACK_KEY).unwrap_or(0)
    }
}
