use serde::Serialize;
use tracing::debug;

/// Counters collected by one rolling-hash scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Windows whose hash was compared against the pattern's
    pub windows: usize,
    /// Windows whose hash equaled the pattern's
    pub candidates: usize,
    /// Candidates confirmed by exact comparison
    pub matches: usize,
    /// Candidates rejected by exact comparison (hash collisions)
    pub spurious: usize,
}

impl ScanStats {
    /// Share of candidates that turned out to be collisions
    pub fn collision_rate(&self) -> f64 {
        if self.candidates == 0 {
            0.0
        } else {
            self.spurious as f64 / self.candidates as f64
        }
    }

    pub fn log_stats(&self) {
        debug!(
            "Scan stats: windows: {}, candidates: {}, matches: {}, spurious: {}",
            self.windows, self.candidates, self.matches, self.spurious
        );
    }
}
