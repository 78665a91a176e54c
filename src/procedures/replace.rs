/*!
The replacement step.

A profitable matrix `(Mlit, Mcls)` over pivot `l` is folded into a fresh atom
`f`:

- a *definition* clause `(m ∨ f)` for each matched literal `m`,
- a *body* clause `(¬f ∨ C ∖ {l})` for each matched clause `C`,
- optionally, the clause `(¬f ∨ ¬m₁ ∨ … ∨ ¬m_k)` which blocks the one
  degenerate model where `f` is otherwise unconstrained, preserving the
  model count,
- and the deletion of every visited clause whose positional tag survived to
  the final matrix.

Together the definition and body clauses are the clausal form of
`f ↔ ⋀ Mlit`, so the deleted clauses are implied by the additions and
satisfiability is preserved.

Every touched literal has its count delta adjusted, its adjacency vector
dropped, and its queue entry re-recorded; the pivot and both polarities of
`f` are (re)queued as well.
*/

use rustc_hash::FxHashSet;

use crate::{
    context::Context,
    generic::index_heap::IndexHeap,
    misc::log::targets,
    procedures::{matrix::Matrix, OccurrenceScore},
    structures::{
        clause::Clause,
        literal::{CLiteral, Literal},
    },
};

impl Context {
    /// Replace `matrix` with a fresh atom, rewriting the formula and queue.
    pub(crate) fn apply_replacement(
        &mut self,
        matrix: &Matrix,
        queue: &mut IndexHeap<OccurrenceScore>,
    ) {
        let fresh = self.num_vars + 1;
        self.num_vars = fresh;
        self.literal_db.grow_to(fresh);
        self.adjacency.grow_to(fresh);

        let definition = CLiteral::new(fresh, true);

        log::info!(
            target: targets::REPLACEMENT,
            "Replacing a {} x {} matrix of {} with {fresh}",
            matrix.literals.len(),
            matrix.clauses.len(),
            matrix.pivot,
        );

        // Definition clauses (m ∨ f).
        for &matched in &matrix.literals {
            if let Some(proof) = &mut self.proof {
                // The fresh atom leads in the proof trace.
                proof.note_addition(vec![definition, matched]);
            }
            let index = self
                .clause_db
                .store(Clause::from_sorted(vec![matched, definition]));
            self.literal_db.note_occurrence(matched, index);
            self.literal_db.note_occurrence(definition, index);
        }

        // Body clauses (¬f ∨ C ∖ {l}).
        for &clause_index in &matrix.clauses {
            let mut literals = vec![definition.negate()];
            literals.extend(
                self.clause_db
                    .get(clause_index)
                    .literals()
                    .iter()
                    .filter(|&&literal| literal != matrix.pivot),
            );

            if let Some(proof) = &mut self.proof {
                proof.note_addition(literals.clone());
            }
            let index = self.clause_db.store(Clause::from_sorted(literals));
            for &literal in self.clause_db.get(index).literals() {
                self.literal_db.note_occurrence(literal, index);
            }
        }

        // The sole added model is one where every matched literal and every
        // matched clause is satisfied regardless of f; one clause blocks it.
        if self.config.preserve_model_count {
            let mut literals: Vec<CLiteral> = matrix
                .literals
                .iter()
                .map(|literal| literal.negate())
                .collect();
            literals.push(definition.negate());
            literals.sort_unstable();

            if let Some(proof) = &mut self.proof {
                proof.note_addition(literals.clone());
            }
            let index = self.clause_db.store(Clause::from_sorted(literals));
            for &literal in self.clause_db.get(index).literals() {
                self.literal_db.note_occurrence(literal, index);
            }
        }

        // Deletions, filtered to tags which survived to the final matrix.
        let final_tags: FxHashSet<usize> = matrix.clause_tags.iter().copied().collect();
        let mut touched: FxHashSet<CLiteral> = FxHashSet::default();

        for &(clause_index, tag) in &matrix.removals {
            if !final_tags.contains(&tag) {
                continue;
            }
            if !self.clause_db.delete(clause_index) {
                continue;
            }

            let literals = self.clause_db.get(clause_index).literals().to_vec();
            for &literal in &literals {
                self.literal_db.adjust_count(literal, -1);
                touched.insert(literal);
            }
            if let Some(proof) = &mut self.proof {
                proof.note_deletion(literals);
            }
        }

        // Queue refresh.
        for &literal in &touched {
            self.adjacency.invalidate(literal);
            self.requeue(literal, queue);
        }
        self.requeue(definition, queue);
        self.requeue(definition.negate(), queue);
        self.requeue(matrix.pivot, queue);

        self.counters.replacements += 1;
    }

    /// Record a fresh priority for `literal` and (re)activate it.
    fn requeue(&self, literal: CLiteral, queue: &mut IndexHeap<OccurrenceScore>) {
        let slot = literal.slot();
        queue.record(
            slot,
            OccurrenceScore::new(self.literal_db.effective_count(literal), slot),
        );
        queue.activate(slot);
    }
}
