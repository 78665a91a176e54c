/*!
Databases holding the state of a formula.

- [The clause database](crate::db::clause)
  + Owns every clause, original and synthesized, in insertion order.
    Clause indices are stable; removal is a flag.
- [The literal database](crate::db::literal)
  + For each literal, the clauses containing it, together with the count
    adjustment which accounts for lazily deleted clauses.
- [The adjacency cache](crate::db::adjacency)
  + Per-atom sparse co-occurrence vectors, built on demand for the tie-break
    heuristic and invalidated when occurrence lists change.

The literal database and adjacency cache hold only indices into the clause
database; their invariants are restored at every replacement step.
*/

pub mod adjacency;
pub mod clause;
pub mod literal;

/// The index of a clause in the clause database.
pub type ClauseIndex = usize;
