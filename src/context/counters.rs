use std::time::Duration;

/// Counts for various things which count, roughly.
pub struct Counters {
    /// A count of replacements performed (equally, of fresh atoms allocated).
    pub replacements: usize,

    /// A count of pivot literals examined by the matrix-discovery loop.
    pub pivots_examined: usize,

    /// A count of queue entries discarded as stale at pop time.
    pub stale_pops: usize,

    /// The remaining step budget; seeded from the configuration on each run.
    pub steps_remaining: i64,

    /// The time taken by the run.
    pub time: Duration,
}

impl Counters {
    /// Spend `cost` computation steps, saturating at the floor.
    pub fn spend_steps(&mut self, cost: usize) {
        self.steps_remaining = self.steps_remaining.saturating_sub(cost as i64);
    }
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            replacements: 0,
            pivots_examined: 0,
            stale_pops: 0,
            steps_remaining: i64::MAX,
            time: Duration::from_secs(0),
        }
    }
}
