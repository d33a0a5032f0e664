//! Run score accumulation.

/// Accumulated score for the current run.
///
/// Replaces a process-wide counter with an explicit value the host passes
/// into the resolver. Single-writer: only the resolver adds to it; UI and
/// host code read [`Scoreboard::total`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    total: u64,
}

impl Scoreboard {
    /// Create a scoreboard at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points for a confirmed kill.
    pub fn add(&mut self, points: u32) {
        self.total += u64::from(points);
    }

    /// Current total.
    pub fn total(&self) -> u64 {
        self.total
    }
}
