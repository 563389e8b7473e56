//! Hard-rejection patterns for layout and CMS noise.

use once_cell::sync::Lazy;
use regex::Regex;

/// Source patterns of the built-in firewall, one per noise family.
pub const FIREWALL_PATTERNS: &[&str] = &[
    // alignment / positioning
    r"\b(?:align|aligned|left|right|center|centre|top|bottom|middle|float|clear)\b",
    // box model and visibility
    r"\b(?:display|block|inline|none|hidden|visible|margin|padding|border|width|height|hspace|vspace)\b",
    // CMS metadata
    r"\b(?:post|pagetype|taxonomy|category|categorie|tag|author|slug|archive|sidebar|footer|header)\b",
    // interface chrome
    r"\b(?:click|expand|auto|toggle|menu|button|scroll|popup|modal|loading)\b",
    // feed template residue
    r"\b(?:bone|drive|driver|download|install|plugin|widget)\b",
];

static BUILTIN: Lazy<Vec<Regex>> = Lazy::new(|| {
    FIREWALL_PATTERNS
        .iter()
        .map(|p| Regex::new(p).expect("built-in firewall pattern"))
        .collect()
});

/// A layout attribute followed by another word, e.g. "align left".
static LAYOUT_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:align|display|margin|target|blank|hspace|vspace)\s+\w+")
        .expect("layout phrase pattern")
});

/// Ordered set of rejection patterns applied to tokens and phrases.
#[derive(Debug, Clone)]
pub struct Firewall {
    patterns: Vec<Regex>,
}

impl Default for Firewall {
    fn default() -> Self {
        Self {
            patterns: BUILTIN.clone(),
        }
    }
}

impl Firewall {
    /// A firewall with no patterns
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Compile and append a caller-supplied pattern.
    pub fn push_pattern(&mut self, pattern: &str) -> Result<(), regex::Error> {
        self.patterns.push(Regex::new(pattern)?);
        Ok(())
    }

    /// Whether any pattern matches `text`
    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(text))
    }

    /// Whether `text` contains a layout attribute followed by another word
    pub fn is_layout_phrase(&self, text: &str) -> bool {
        LAYOUT_PHRASE.is_match(text)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_patterns_compile() {
        let firewall = Firewall::default();
        assert_eq!(firewall.len(), FIREWALL_PATTERNS.len());
    }

    #[test]
    fn test_matches_whole_words_only() {
        let firewall = Firewall::default();

        assert!(firewall.matches("click"));
        assert!(firewall.matches("pagetype"));
        assert!(firewall.matches("driver"));
        assert!(firewall.matches("float left"));
        // substrings of longer words are not noise
        assert!(!firewall.matches("automotive"));
        assert!(!firewall.matches("blockchain"));
        assert!(!firewall.matches("battery"));
    }

    #[test]
    fn test_layout_phrase() {
        let firewall = Firewall::default();

        assert!(firewall.is_layout_phrase("target blank"));
        assert!(firewall.is_layout_phrase("margin auto"));
        assert!(!firewall.is_layout_phrase("target"));
        assert!(!firewall.is_layout_phrase("lithium supply"));
    }

    #[test]
    fn test_custom_pattern() {
        let mut firewall = Firewall::empty();
        assert!(!firewall.matches("sponsored"));

        firewall.push_pattern(r"\bsponsored\b").unwrap();
        assert!(firewall.matches("sponsored"));

        assert!(firewall.push_pattern("(unclosed").is_err());
    }
}
