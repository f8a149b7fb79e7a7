use tracing::{debug, info};

use super::matcher::Algorithm;
use super::rolling::HashScanMatcher;
use crate::config::SearchConfig;
use crate::errors::{SearchError, SearchResult};
use crate::results::SearchOutcome;
use crate::sequence::Sequence;

/// Loads the configured sequence and pattern and counts the pattern.
///
/// Inputs are rejected before any matcher runs when either file cannot be
/// read, either fills its capacity, or the pattern is empty after sanitizing.
pub fn search(config: &SearchConfig) -> SearchResult<SearchOutcome> {
    config.validate()?;
    info!(
        "Starting {} search for {} in {}",
        config.algorithm,
        config.pattern_path.display(),
        config.sequence_path.display()
    );

    let (text, pattern) = load_inputs(config)?;
    let outcome = run(config.algorithm, &text, &pattern);

    info!(
        "Search complete. Found {} matches of a {}-symbol pattern in {} symbols",
        outcome.matches, outcome.pattern_len, outcome.text_len
    );

    Ok(outcome)
}

/// Loads the text and pattern named by `config`, applying the same checks
/// as [`search`]. Lets a caller run several algorithms over one load.
pub fn load_inputs(config: &SearchConfig) -> SearchResult<(Sequence, Sequence)> {
    let limit = config.max_sequence_len;

    let text = Sequence::load(&config.sequence_path, limit)?;
    if text.truncated {
        return Err(SearchError::sequence_too_large(&config.sequence_path, limit));
    }

    let pattern = Sequence::load(&config.pattern_path, limit)?;
    if pattern.truncated {
        return Err(SearchError::pattern_too_large(&config.pattern_path, limit));
    }
    if pattern.sequence.is_empty() {
        return Err(SearchError::EmptyPattern);
    }

    Ok((text.sequence, pattern.sequence))
}

/// Counts `pattern` in `text` with `algorithm`, collecting scan statistics
/// when the algorithm produces them.
pub fn run(algorithm: Algorithm, text: &Sequence, pattern: &Sequence) -> SearchOutcome {
    let (matches, stats) = match algorithm {
        Algorithm::BruteForce => (
            algorithm.count(text.as_bytes(), pattern.as_bytes()),
            None,
        ),
        Algorithm::KarpRabin => {
            let stats = HashScanMatcher::scan(text.as_bytes(), pattern.as_bytes());
            stats.log_stats();
            (stats.matches, Some(stats))
        }
    };

    SearchOutcome {
        algorithm,
        matches,
        text_len: text.len(),
        pattern_len: pattern.len(),
        stats,
    }
}

/// In-memory entry point: counts without loading or validating anything.
pub fn count_matches(algorithm: Algorithm, text: &[u8], pattern: &[u8]) -> usize {
    debug!(
        "Counting with {} ({} symbols in {} symbols)",
        algorithm,
        pattern.len(),
        text.len()
    );
    algorithm.count(text, pattern)
}
