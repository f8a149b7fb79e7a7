use super::matcher::SequenceMatcher;

/// Brute-force matcher: compares the pattern against every window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactScanMatcher;

impl ExactScanMatcher {
    /// Counts every offset where `pattern` occurs in `text`, overlaps included.
    ///
    /// A pattern longer than the text gives an empty offset range and a count
    /// of 0. An empty pattern also counts 0; callers reject it before this point.
    pub fn count(text: &[u8], pattern: &[u8]) -> usize {
        if pattern.is_empty() || pattern.len() > text.len() {
            return 0;
        }

        (0..=text.len() - pattern.len())
            .filter(|&offset| matches_at(text, pattern, offset))
            .count()
    }
}

impl SequenceMatcher for ExactScanMatcher {
    fn count(&self, text: &[u8], pattern: &[u8]) -> usize {
        Self::count(text, pattern)
    }
}

/// Element-wise comparison of `pattern` against `text` at `offset`, stopping
/// at the first mismatch. The window must lie inside `text`.
#[inline]
pub(crate) fn matches_at(text: &[u8], pattern: &[u8], offset: usize) -> bool {
    text[offset..offset + pattern.len()]
        .iter()
        .zip(pattern)
        .all(|(t, p)| t == p)
}
