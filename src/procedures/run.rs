/*!
The driver loop.

Roughly, a run is:

```none
          +-----------------------+
          | seed queue with every |
          | literal's count       |
          +-----------------------+
                      |
                      ⌄
          +-----------------------+
  +------>| budgets exhausted?    |-----> graceful stop
  |       +-----------------------+
  |                   |
  |                   ⌄
  |       +-----------------------+
  |       | pop (count, literal)  |-----> queue empty: stop
  |       +-----------------------+
  |                   |
  |   stale ----------+
  |                   ⌄
  |       +-----------------------+
  |       | discover matrix       |
  |       +-----------------------+
  |                   |
  |   unprofitable ---+
  |                   ⌄
  |       +-----------------------+
  +-------| replace, requeue      |
          +-----------------------+
```

An entry is stale when its recorded count is zero or no longer matches the
literal's effective count; such entries are discarded at pop time rather
than removed eagerly when counts change.

Budgets are examined only at these outer-iteration boundaries, so a stop
never interrupts a replacement and the partially transformed formula is
always complete and consistent.
*/

use std::time::Instant;

use crate::{
    config::Tiebreak,
    context::{Context, ContextState},
    generic::index_heap::IndexHeap,
    misc::log::targets,
    procedures::OccurrenceScore,
    structures::literal::{literal_of_slot, CLiteral, Literal},
};

impl Context {
    /// Transform the formula, replacing matrices until none is profitable or
    /// a budget is exhausted.
    pub fn run(&mut self, tiebreak: Tiebreak) {
        if self.state == ContextState::Input {
            self.finish();
        }

        let start = Instant::now();
        self.counters.steps_remaining = self.config.steps;

        let mut queue: IndexHeap<OccurrenceScore> = IndexHeap::default();
        for atom in 1..=self.num_vars {
            for literal in [CLiteral::new(atom, true), CLiteral::new(atom, false)] {
                let slot = literal.slot();
                queue.record(
                    slot,
                    OccurrenceScore::new(self.literal_db.effective_count(literal), slot),
                );
                queue.activate(slot);
            }
        }

        loop {
            if let Some(limit) = self.config.time_limit {
                if start.elapsed() >= limit {
                    log::info!(target: targets::BUDGET, "Time budget exhausted");
                    break;
                }
            }

            if self.config.max_replacements > 0
                && self.counters.replacements == self.config.max_replacements
            {
                log::info!(
                    target: targets::BUDGET,
                    "Replacement budget ({}) exhausted",
                    self.config.max_replacements
                );
                break;
            }

            if self.counters.steps_remaining <= 0 {
                log::info!(target: targets::BUDGET, "Step budget exhausted");
                break;
            }

            let Some(slot) = queue.pop_max() else {
                break;
            };
            let count = queue.value_at(slot).count();
            let pivot = literal_of_slot(slot);

            if count == 0 || count != self.literal_db.effective_count(pivot) {
                self.counters.stale_pops += 1;
                continue;
            }

            log::trace!(target: targets::QUEUE, "Trying {pivot} ({count})");
            self.counters.pivots_examined += 1;
            self.heuristic_memo.clear();

            let matrix = self.discover_matrix(pivot, tiebreak);
            if matrix.profitable(&self.config) {
                self.apply_replacement(&matrix, &mut queue);
            }
        }

        self.counters.time = start.elapsed();
        self.state = ContextState::Transformed;

        log::info!(
            target: targets::BUDGET,
            "Run complete: {} replacements, {} pivots, {} stale pops, {:?}",
            self.counters.replacements,
            self.counters.pivots_examined,
            self.counters.stale_pops,
            self.counters.time,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::time::Duration;

    fn canonical_context(config: Config) -> Context {
        let mut ctx = Context::init(8, config);
        for clause in [
            vec![1, 5],
            vec![2, 5],
            vec![3, 5],
            vec![4, 5],
            vec![1, 6],
            vec![2, 6],
            vec![3, 6],
            vec![4, 6],
            vec![1, 7],
            vec![2, 7],
            vec![1, 8],
            vec![2, 8],
            vec![3, 8],
        ] {
            ctx.add_clause(clause).unwrap();
        }
        ctx.finish();
        ctx
    }

    #[test]
    fn the_canonical_matrix_shrinks() {
        let mut ctx = canonical_context(Config::default());
        ctx.run(Tiebreak::ThreeHop);

        assert_eq!(ctx.state, ContextState::Transformed);
        assert!(ctx.counters.replacements >= 1);
        assert!(ctx.num_vars() >= 9);
        assert!(ctx.clause_db.current_clause_count() < 13);
    }

    #[test]
    fn zero_step_budget_is_idempotent() {
        let mut ctx = canonical_context(Config {
            steps: 0,
            ..Config::default()
        });
        ctx.run(Tiebreak::ThreeHop);

        assert_eq!(ctx.counters.replacements, 0);
        assert_eq!(ctx.num_vars(), 8);
        assert_eq!(ctx.clause_db.current_clause_count(), 13);
    }

    #[test]
    fn zero_time_budget_stops_immediately() {
        let mut ctx = canonical_context(Config {
            time_limit: Some(Duration::ZERO),
            ..Config::default()
        });
        ctx.run(Tiebreak::ThreeHop);

        assert_eq!(ctx.counters.replacements, 0);
        assert_eq!(ctx.clause_db.current_clause_count(), 13);
    }

    #[test]
    fn replacement_budget_is_honoured() {
        let mut ctx = canonical_context(Config {
            max_replacements: 1,
            ..Config::default()
        });
        ctx.run(Tiebreak::ThreeHop);

        assert_eq!(ctx.counters.replacements, 1);
    }

    #[test]
    fn no_profitable_match_leaves_the_formula_alone() {
        let mut ctx = Context::init(4, Config::default());
        ctx.add_clause(vec![1, 2]).unwrap();
        ctx.add_clause(vec![3, 4]).unwrap();
        ctx.finish();
        ctx.run(Tiebreak::ThreeHop);

        assert_eq!(ctx.counters.replacements, 0);
        assert_eq!(ctx.num_vars(), 4);
        assert_eq!(ctx.clause_db.current_clause_count(), 2);
    }

    #[test]
    fn unary_formulas_are_untouched() {
        let mut ctx = Context::init(3, Config::default());
        for clause in [vec![1], vec![2], vec![3]] {
            ctx.add_clause(clause).unwrap();
        }
        ctx.finish();
        ctx.run(Tiebreak::ThreeHop);

        assert_eq!(ctx.counters.replacements, 0);
        assert_eq!(ctx.clause_db.current_clause_count(), 3);
    }

    #[test]
    fn empty_formula_is_untouched() {
        let mut ctx = Context::init(0, Config::default());
        ctx.finish();
        ctx.run(Tiebreak::ThreeHop);

        assert_eq!(ctx.counters.replacements, 0);
        assert_eq!(ctx.num_vars(), 0);
    }
}
