/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    pub const INGESTION: &str = "ingestion";
    pub const QUEUE: &str = "queue";
    pub const MATRIX: &str = "matrix";
    pub const HEURISTIC: &str = "heuristic";
    pub const REPLACEMENT: &str = "replacement";
    pub const BUDGET: &str = "budget";
}
