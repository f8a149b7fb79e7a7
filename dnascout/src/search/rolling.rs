use tracing::trace;

use super::exact::matches_at;
use super::hasher::RollingHasher;
use super::matcher::SequenceMatcher;
use crate::metrics::ScanStats;

/// Karp-Rabin matcher: hash equality picks candidate windows, an exact
/// comparison confirms them.
///
/// Two different windows can share a hash modulo `MOD`. Such collisions are
/// never counted; every candidate is verified before it is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HashScanMatcher;

impl HashScanMatcher {
    /// Counts every offset where `pattern` occurs in `text`, overlaps included.
    pub fn count(text: &[u8], pattern: &[u8]) -> usize {
        Self::scan(text, pattern).matches
    }

    /// Runs the scan and reports what it saw along the way.
    pub fn scan(text: &[u8], pattern: &[u8]) -> ScanStats {
        let mut stats = ScanStats::default();
        let m = pattern.len();
        if m == 0 || m > text.len() {
            return stats;
        }

        let hasher = RollingHasher::new(m);
        let pattern_hash = hasher.hash(pattern);

        for (offset, window_hash) in hasher.windows(text).enumerate() {
            stats.windows += 1;
            if window_hash != pattern_hash {
                continue;
            }

            stats.candidates += 1;
            if matches_at(text, pattern, offset) {
                stats.matches += 1;
            } else {
                trace!("Hash collision at offset {}", offset);
                stats.spurious += 1;
            }
        }

        stats
    }

    /// Counts windows whose hash equals the pattern's, without verifying them.
    ///
    /// This over-counts whenever two different windows collide. It exists to
    /// show what verification rules out; do not use it for real counts.
    pub fn count_hash_only(text: &[u8], pattern: &[u8]) -> usize {
        let m = pattern.len();
        if m == 0 || m > text.len() {
            return 0;
        }

        let hasher = RollingHasher::new(m);
        let pattern_hash = hasher.hash(pattern);
        hasher
            .windows(text)
            .filter(|&window_hash| window_hash == pattern_hash)
            .count()
    }
}

impl SequenceMatcher for HashScanMatcher {
    fn count(&self, text: &[u8], pattern: &[u8]) -> usize {
        Self::count(text, pattern)
    }
}
