use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::exact::ExactScanMatcher;
use super::rolling::HashScanMatcher;
use crate::errors::SearchError;

/// Counts pattern occurrences in a text.
///
/// Implementations are stateless; the same value can be shared across
/// threads and reused for any number of calls.
pub trait SequenceMatcher: fmt::Debug + Send + Sync {
    /// Number of offsets in `text` where `pattern` matches, overlaps included.
    fn count(&self, text: &[u8], pattern: &[u8]) -> usize;
}

/// Matching strategy selectable from the command line or a config file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Exhaustive character-by-character scan
    #[serde(rename = "bf", alias = "brute-force")]
    BruteForce,
    /// Rolling hash with verification
    #[default]
    #[serde(rename = "kr", alias = "karp-rabin")]
    KarpRabin,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::BruteForce, Algorithm::KarpRabin];

    /// Short identifier used on the command line
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::BruteForce => "bf",
            Algorithm::KarpRabin => "kr",
        }
    }

    pub fn matcher(self) -> &'static dyn SequenceMatcher {
        match self {
            Algorithm::BruteForce => &ExactScanMatcher,
            Algorithm::KarpRabin => &HashScanMatcher,
        }
    }

    pub fn count(self, text: &[u8], pattern: &[u8]) -> usize {
        self.matcher().count(text, pattern)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::BruteForce => "Brute Force",
            Algorithm::KarpRabin => "Karp-Rabin",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    /// Accepts `bf`/`kr`, the dashed `-bf`/`-kr` forms and the long names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bf" | "-bf" | "brute-force" => Ok(Algorithm::BruteForce),
            "kr" | "-kr" | "karp-rabin" => Ok(Algorithm::KarpRabin),
            _ => Err(SearchError::invalid_algorithm(s)),
        }
    }
}
