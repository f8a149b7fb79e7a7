use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

use crate::errors::{SearchError, SearchResult};

/// Default capacity of a loaded sequence, in symbols. A sequence that fills
/// `capacity - 1` symbols is reported as truncated.
pub const DEFAULT_CAPACITY: usize = 512_000;

/// Owned nucleotide sequence.
///
/// Built either from bytes that are already clean ([`Sequence::new`]) or by
/// sanitizing raw input, which keeps only `A`, `T`, `C` and `G` (in either
/// case), upper-cases them and drops everything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sequence(Vec<u8>);

/// A sequence read from a source, along with whether it hit the capacity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSequence {
    pub sequence: Sequence,
    pub truncated: bool,
}

#[inline]
fn nucleotide(byte: u8) -> Option<u8> {
    match byte {
        b'A' | b'T' | b'C' | b'G' => Some(byte),
        b'a' | b't' | b'c' | b'g' => Some(byte.to_ascii_uppercase()),
        _ => None,
    }
}

impl Sequence {
    /// Wraps bytes as-is, without sanitizing them
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Sanitizes the first line of `raw` with no capacity limit
    pub fn sanitize(raw: &[u8]) -> Self {
        Self(
            raw.iter()
                .copied()
                .take_while(|&b| b != b'\n')
                .filter_map(nucleotide)
                .collect(),
        )
    }

    /// Reads and sanitizes the first line of `reader`.
    ///
    /// Reading stops at the first newline, at end of input, or once
    /// `capacity - 1` symbols are held. Only the last case sets `truncated`.
    pub fn from_reader<R: BufRead>(mut reader: R, capacity: usize) -> io::Result<LoadedSequence> {
        let limit = capacity.saturating_sub(1);
        let mut symbols = Vec::new();

        loop {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }

            let mut used = 0;
            let mut done = false;
            for &byte in buf {
                if symbols.len() >= limit {
                    done = true;
                    break;
                }
                used += 1;
                if byte == b'\n' {
                    done = true;
                    break;
                }
                if let Some(symbol) = nucleotide(byte) {
                    symbols.push(symbol);
                }
            }

            reader.consume(used);
            if done {
                break;
            }
        }

        let truncated = symbols.len() >= limit;
        Ok(LoadedSequence {
            sequence: Self(symbols),
            truncated,
        })
    }

    /// Opens `path` and reads it with [`Sequence::from_reader`].
    pub fn load(path: impl AsRef<Path>, capacity: usize) -> SearchResult<LoadedSequence> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SearchError::from_io(path, e))?;
        let loaded = Self::from_reader(BufReader::new(file), capacity)
            .map_err(|e| SearchError::from_io(path, e))?;

        debug!(
            "Loaded {} symbols from {}",
            loaded.sequence.len(),
            path.display()
        );
        if loaded.truncated {
            warn!("Sequence may have been truncated: {}", path.display());
        }

        Ok(loaded)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Sequence {
    fn from(s: &str) -> Self {
        Self::sanitize(s.as_bytes())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}
