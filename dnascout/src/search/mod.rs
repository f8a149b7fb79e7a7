//! Nucleotide pattern counting.
//!
//! Two interchangeable matchers count every (possibly overlapping) offset
//! where a pattern occurs in a text:
//!
//! 1. [`ExactScanMatcher`] compares the pattern against each window, stopping
//!    at the first mismatch. O(n·m) worst case, no setup.
//! 2. [`HashScanMatcher`] keeps a base-2 polynomial hash of the current window
//!    and updates it in O(1) per step with [`RollingHasher`]. Only windows whose
//!    hash equals the pattern's are compared symbol by symbol, so the average
//!    cost is O(n + m).
//!
//! Hash equality alone is not a match. Distinct windows can collide modulo
//! [`MOD`], and the hash matcher always verifies a candidate before counting it:
//!
//! ```rust,ignore
//! // 32-symbol windows: the leading weight 2^31 is 1 modulo 2^31 - 1
//! let pattern = [&b"A"[..], &b"C".repeat(30)[..], &b"G"[..]].concat();
//! let window = [&b"G"[..], &b"C".repeat(30)[..], &b"A"[..]].concat();
//! assert_eq!(hash(&pattern), hash(&window));
//! assert_eq!(HashScanMatcher::count(&window, &pattern), 0);
//! ```
//!
//! Both matchers only borrow their inputs and keep no state between calls, so
//! they can run on any number of threads at once.

pub mod engine;
pub mod exact;
pub mod hasher;
pub mod matcher;
pub mod rolling;

pub use engine::{count_matches, load_inputs, run, search};
pub use exact::ExactScanMatcher;
pub use hasher::{hash, slide, HashValue, RollingHasher, MOD};
pub use matcher::{Algorithm, SequenceMatcher};
pub use rolling::HashScanMatcher;
