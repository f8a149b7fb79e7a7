pub mod config;
pub mod errors;
pub mod metrics;
pub mod results;
pub mod search;
pub mod sequence;

pub use config::{CliOverrides, SearchConfig};
pub use errors::{SearchError, SearchResult};
pub use metrics::ScanStats;
pub use results::SearchOutcome;
pub use search::{search, Algorithm, ExactScanMatcher, HashScanMatcher, RollingHasher};
pub use sequence::{LoadedSequence, Sequence, DEFAULT_CAPACITY};
