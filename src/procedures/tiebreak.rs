/*!
The three-hop tie-break heuristic.

For a pivot `a` and a candidate `b`, the score is

```none
H(a, b) = Σ_{u : A(b)[u] > 0}  A(b)[u] · ⟨A(u), A(a)⟩
```

where `A(x)` is the adjacency vector of the atom of `x` --- a walk
`a → u → b` weighted by co-occurrence, favouring candidates whose
neighbourhood is densely connected to the pivot's.

Scores are memoised per outer iteration, keyed by the candidate's atom; the
driver clears the memo before each pivot.
The adjacency vectors themselves live in the [adjacency
cache](crate::db::adjacency) and survive across pivots until invalidated.
*/

use crate::{
    context::Context,
    misc::log::targets,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

impl Context {
    /// The three-hop score of extending `pivot`'s matrix by `candidate`.
    pub(crate) fn three_hop_score(&mut self, pivot: CLiteral, candidate: CLiteral) -> i64 {
        if let Some(&score) = self.heuristic_memo.get(&candidate.atom_index()) {
            return score;
        }

        let mut visited = self
            .adjacency
            .ensure(pivot.atom(), &self.clause_db, &self.literal_db);
        visited += self
            .adjacency
            .ensure(candidate.atom(), &self.clause_db, &self.literal_db);

        let candidate_entries: Vec<(usize, i64)> =
            self.adjacency.vector(candidate.atom()).nonzeros().collect();

        let mut total = 0;
        for (atom_index, count) in candidate_entries {
            let via = (atom_index + 1) as Atom;
            visited += self
                .adjacency
                .ensure(via, &self.clause_db, &self.literal_db);
            visited += self.adjacency.vector(via).nonzero_count();
            total += count
                * self
                    .adjacency
                    .vector(via)
                    .dot(self.adjacency.vector(pivot.atom()));
        }
        self.counters.spend_steps(visited);

        log::trace!(target: targets::HEURISTIC, "H({pivot}, {candidate}) = {total}");
        self.heuristic_memo.insert(candidate.atom_index(), total);
        total
    }
}
