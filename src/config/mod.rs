/*!
Configuration of a formula transformation.

All configuration is fixed when the [Context](crate::context::Context) is
created; budgets are read by the driver at outer-iteration boundaries only,
so no setting interrupts an operation midway.
*/

use std::time::Duration;

/// How ties between equally frequent candidate literals are broken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tiebreak {
    /// Maximise the three-hop adjacency score (the default).
    #[default]
    ThreeHop,

    /// Keep the first candidate in sorted order (equivalent to original BVA).
    None,
}

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The step budget, in raw computation steps.
    ///
    /// Decremented roughly in proportion to clause scans, clause differences,
    /// and heuristic evaluations; the driver stops when no steps remain.
    pub steps: i64,

    /// The replacement budget. `0` permits unlimited replacements.
    pub max_replacements: usize,

    /// The wall-clock budget, measured from the start of a run.
    ///
    /// A zero limit stops the driver before the first replacement, which
    /// doubles as the external cancellation hook.
    pub time_limit: Option<Duration>,

    /// Record a proof of each clause addition and deletion.
    pub generate_proof: bool,

    /// Add the clause which blocks the degenerate model of each fresh atom,
    /// preserving the model count of the formula.
    pub preserve_model_count: bool,

    /// Replace only matrices with at least this many matched clauses.
    ///
    /// Setting either cutoff swaps the default profitability gate for these
    /// floors.
    pub clause_cutoff: Option<usize>,

    /// Replace only matrices with at least this many matched literals.
    pub literal_cutoff: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            steps: i64::MAX,
            max_replacements: 0,
            time_limit: None,
            generate_proof: false,
            preserve_model_count: false,
            clause_cutoff: None,
            literal_cutoff: None,
        }
    }
}
