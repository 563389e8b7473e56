//! Pipeline artifacts.
//!
//! Typed intermediate results flowing between stages. Counting artifacts
//! live next to their producers in [`crate::phrase::counter`].

/// Filtered tokens grouped by source article.
///
/// Each article contributes one segment; bigrams never span two segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    segments: Vec<Vec<String>>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: Vec<Vec<String>>) -> Self {
        Self { segments }
    }

    /// Append the tokens of one article
    pub fn push_segment(&mut self, tokens: Vec<String>) {
        self.segments.push(tokens);
    }

    pub fn segments(&self) -> impl Iterator<Item = &[String]> {
        self.segments.iter().map(Vec::as_slice)
    }

    /// All tokens in order, ignoring segment boundaries
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().flatten().map(String::as_str)
    }

    /// Keep only tokens for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        for segment in &mut self.segments {
            segment.retain(|t| keep(t));
        }
    }

    /// Rewrite every token in place.
    pub fn map_tokens(&mut self, mut f: impl FnMut(&mut String)) {
        for token in self.segments.iter_mut().flatten() {
            f(token);
        }
    }

    /// Total number of tokens
    pub fn len(&self) -> usize {
        self.segments.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(Vec::is_empty)
    }

    pub fn num_segments(&self) -> usize {
        self.segments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream() -> TokenStream {
        TokenStream::from_segments(vec![
            vec!["lithium".into(), "price".into()],
            vec![],
            vec!["cathode".into()],
        ])
    }

    #[test]
    fn test_len_counts_all_segments() {
        let stream = stream();
        assert_eq!(stream.len(), 3);
        assert_eq!(stream.num_segments(), 3);
        assert!(!stream.is_empty());
    }

    #[test]
    fn test_tokens_flatten_in_order() {
        let stream = stream();
        let tokens: Vec<_> = stream.tokens().collect();
        assert_eq!(tokens, vec!["lithium", "price", "cathode"]);
    }

    #[test]
    fn test_retain_keeps_segments() {
        let mut stream = stream();
        stream.retain(|t| t != "price");
        assert_eq!(stream.num_segments(), 3);
        assert_eq!(stream.len(), 2);
    }

    #[test]
    fn test_map_tokens() {
        let mut stream = stream();
        stream.map_tokens(|t| t.make_ascii_uppercase());
        assert_eq!(stream.tokens().next(), Some("LITHIUM"));
    }

    #[test]
    fn test_empty_stream() {
        let stream = TokenStream::from_segments(vec![vec![], vec![]]);
        assert!(stream.is_empty());
        assert_eq!(stream.len(), 0);
    }
}
