/*!
The matrix-discovery loop.

Given a pivot literal `l`, the loop grows a matrix of matched literals
(`Mlit`, starting at `{l}`) and matched clauses (`Mcls`, starting as the live
clauses containing `l`).

Each iteration looks, for every clause `C` of the matrix, at the clauses `D`
which differ from `C` exactly by swapping `l` for some other literal.
The literal matched most often extends `Mlit`, `Mcls` shrinks to the columns
which produced a match, and the partner clauses join the removal set.
Growth stops as soon as extending would not improve the reduction
`|Mlit|·|Mcls| − |Mlit| − |Mcls|`.

For example, over the formula

```none
(A v E)  (A v F)  (A v G)  (A v H)
(B v E)  (B v F)  (B v G)  (B v H)
(C v E)  (C v F)           (C v H)
(D v E)  (D v F)
```

pivoting on `A` grows `Mlit` through `B` and then `C`, narrowing `Mcls` from
the four `A` clauses to `(A v E) (A v F) (A v H)`; adding `D` would shrink
the matrix below profit, so the loop stops there.

Clauses are tracked alongside their *positional tags* --- positions within
the pivot's occurrence list --- and a partner is removed during replacement
only if its tag survived to the final `Mcls`.
*/

use crate::{
    config::Tiebreak,
    context::Context,
    db::{literal::LiteralDB, ClauseIndex},
    misc::log::targets,
    structures::{clause::Clause, literal::CLiteral},
};

/// A matrix of matched literals and clauses for a pivot, with the removal
/// set accumulated while growing it.
pub struct Matrix {
    /// The pivot literal.
    pub pivot: CLiteral,

    /// The matched literals, pivot first.
    pub literals: Vec<CLiteral>,

    /// The matched clauses: indices of live clauses containing the pivot.
    pub clauses: Vec<ClauseIndex>,

    /// The positional tag of each matched clause in the pivot's occurrence list.
    pub clause_tags: Vec<usize>,

    /// Every (clause, tag) pair visited while growing; pairs whose tag is
    /// absent from the final `clause_tags` are not removed.
    pub removals: Vec<(ClauseIndex, usize)>,
}

/// The reduction in clause count from replacing a `literals` × `clauses`
/// matrix with a fresh atom.
pub fn reduction(literals: usize, clauses: usize) -> i64 {
    (literals * clauses) as i64 - (literals + clauses) as i64
}

/// The least frequent literal of `clause` other than `pivot`, by effective
/// occurrence count, first encountered winning ties.
fn least_frequent_excluding(
    clause: &Clause,
    pivot: CLiteral,
    literal_db: &LiteralDB,
) -> Option<CLiteral> {
    let mut least: Option<(CLiteral, usize)> = None;
    for &literal in clause.literals() {
        if literal == pivot {
            continue;
        }
        let count = literal_db.effective_count(literal);
        match least {
            Some((_, least_count)) if count >= least_count => {}
            _ => least = Some((literal, count)),
        }
    }
    least.map(|(literal, _)| literal)
}

/// The sole element of `clause ∖ other`, if the difference is a singleton.
///
/// Both clauses are sorted, so the difference is a merge walk, abandoned as
/// soon as a second element appears.
fn single_difference(clause: &Clause, other: &Clause) -> Option<CLiteral> {
    let mut difference = None;
    let mut other_literals = other.literals().iter().peekable();

    for &literal in clause.literals() {
        loop {
            match other_literals.peek() {
                Some(&&o) if o < literal => {
                    other_literals.next();
                }
                Some(&&o) if o == literal => {
                    other_literals.next();
                    break;
                }
                _ => {
                    if difference.is_some() {
                        return None;
                    }
                    difference = Some(literal);
                    break;
                }
            }
        }
    }

    difference
}

impl Context {
    /// Grow a matrix for `pivot`, greedily and deterministically.
    pub(crate) fn discover_matrix(&mut self, pivot: CLiteral, tiebreak: Tiebreak) -> Matrix {
        let mut matched_literals = vec![pivot];
        let mut matched_clauses: Vec<ClauseIndex> = Vec::default();
        let mut matched_tags: Vec<usize> = Vec::default();
        let mut removals: Vec<(ClauseIndex, usize)> = Vec::default();

        for (position, &clause_index) in self.literal_db.occurrences_of(pivot).iter().enumerate() {
            if !self.clause_db.get(clause_index).is_deleted() {
                matched_clauses.push(clause_index);
                matched_tags.push(position);
                removals.push((clause_index, position));
            }
        }

        // (matched literal, partner clause, column in matched_clauses)
        let mut matched_entries: Vec<(CLiteral, ClauseIndex, usize)> = Vec::default();
        let mut matched_entry_literals: Vec<CLiteral> = Vec::default();

        loop {
            matched_entries.clear();
            matched_entry_literals.clear();

            log::trace!(target: targets::MATRIX, "Matrix literals: {matched_literals:?}");

            for (column, &clause_index) in matched_clauses.iter().enumerate() {
                let clause = self.clause_db.get(clause_index);
                self.counters.spend_steps(clause.size());

                // A singleton clause has no literal besides the pivot.
                let Some(least) = least_frequent_excluding(clause, pivot, &self.literal_db) else {
                    continue;
                };

                for &other_index in self.literal_db.occurrences_of(least) {
                    let other = self.clause_db.get(other_index);
                    if other.is_deleted() || other.size() != clause.size() {
                        continue;
                    }
                    self.counters.spend_steps(1);

                    if single_difference(clause, other) != Some(pivot) {
                        continue;
                    }
                    let Some(candidate) = single_difference(other, clause) else {
                        continue;
                    };
                    if !matched_literals.contains(&candidate) {
                        matched_entries.push((candidate, other_index, column));
                        matched_entry_literals.push(candidate);
                    }
                }
            }

            // Bucket the matched literals by value and keep the largest bucket.
            matched_entry_literals.sort_unstable();

            let mut extension: Option<CLiteral> = None;
            let mut extension_count = 0;
            let mut ties: Vec<CLiteral> = Vec::default();

            let mut i = 0;
            while i < matched_entry_literals.len() {
                let literal = matched_entry_literals[i];
                let mut count = 0;
                while i < matched_entry_literals.len() && matched_entry_literals[i] == literal {
                    count += 1;
                    i += 1;
                }

                if count > extension_count {
                    extension = Some(literal);
                    extension_count = count;
                    ties.clear();
                    ties.push(literal);
                } else if count == extension_count {
                    ties.push(literal);
                }
            }

            let Some(mut extension) = extension else {
                break;
            };

            let current_reduction = reduction(matched_literals.len(), matched_clauses.len());
            let next_reduction = reduction(matched_literals.len() + 1, extension_count);
            if next_reduction <= current_reduction {
                log::trace!(
                    target: targets::MATRIX,
                    "Stopping: extending by {extension} ({extension_count}) reduces {current_reduction} to {next_reduction}"
                );
                break;
            }

            if ties.len() > 1 && tiebreak == Tiebreak::ThreeHop {
                let mut best = self.three_hop_score(pivot, ties[0]);
                for &tie in &ties[1..] {
                    let score = self.three_hop_score(pivot, tie);
                    if score > best {
                        best = score;
                        extension = tie;
                    }
                }
            }

            log::trace!(target: targets::MATRIX, "Extending by {extension} ({extension_count})");

            matched_literals.push(extension);

            let mut next_clauses = Vec::with_capacity(extension_count);
            let mut next_tags = Vec::with_capacity(extension_count);
            for &(literal, partner_index, column) in &matched_entries {
                if literal != extension {
                    continue;
                }
                next_clauses.push(matched_clauses[column]);
                next_tags.push(matched_tags[column]);
                removals.push((partner_index, matched_tags[column]));
            }
            matched_clauses = next_clauses;
            matched_tags = next_tags;
        }

        Matrix {
            pivot,
            literals: matched_literals,
            clauses: matched_clauses,
            clause_tags: matched_tags,
            removals,
        }
    }
}

impl Matrix {
    /// Whether replacing the matrix is worthwhile.
    ///
    /// By default a matrix of one literal, or of at most two literals and two
    /// clauses, breaks even at best and is skipped.
    /// When either cutoff is configured the default gate is replaced by the
    /// configured floors on the final matrix dimensions.
    pub fn profitable(&self, config: &crate::config::Config) -> bool {
        if self.literals.len() <= 1 {
            return false;
        }
        match (config.clause_cutoff, config.literal_cutoff) {
            (None, None) => !(self.literals.len() <= 2 && self.clauses.len() <= 2),
            (clause_floor, literal_floor) => {
                self.clauses.len() >= clause_floor.unwrap_or(0)
                    && self.literals.len() >= literal_floor.unwrap_or(0)
            }
        }
    }
}
