use serde::Serialize;

use crate::errors::SearchResult;
use crate::metrics::ScanStats;
use crate::search::Algorithm;

/// Result of one search run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    /// Strategy that produced the count
    pub algorithm: Algorithm,
    /// Number of (possibly overlapping) occurrences of the pattern
    pub matches: usize,
    /// Length of the searched sequence, in symbols
    pub text_len: usize,
    /// Length of the pattern, in symbols
    pub pattern_len: usize,
    /// Rolling-hash statistics; only the Karp-Rabin scan collects them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ScanStats>,
}

impl SearchOutcome {
    /// The one-line report printed for a finished search
    pub fn summary(&self) -> String {
        format!("The pattern was found: {} times", self.matches)
    }

    pub fn to_json(&self) -> SearchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
