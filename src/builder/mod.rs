/*!
Tools for building a formula in a context.

The two basic methods are [init](crate::context::Context::init) to establish
the atom range and [add_clause](crate::context::Context::add_clause) to add a
clause, closed by [finish](crate::context::Context::finish).
[read_dimacs](crate::context::Context::from_dimacs) performs the same
pipeline in one pass over DIMACS text.

Both paths funnel every clause through one internal insertion primitive, so
they produce identical formulas for the same logical input.

During ingestion a cache of clause fingerprints suppresses exact duplicates:
a repeated clause is appended in a deleted state and counted against the
effective clause count, keeping clause indices aligned with the input while
upholding the no-duplicate invariant of the live formula.
The cache is destroyed when ingestion finishes.
*/

mod dimacs;

use rustc_hash::FxHashMap;

use crate::{
    context::{Context, ContextState},
    db::ClauseIndex,
    misc::log::targets,
    structures::{
        clause::Clause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, BuildError},
};

/// Ok results when adding a clause to a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the formula.
    Added,

    /// The clause duplicated an earlier clause and was suppressed.
    Duplicate,
}

/// The ingestion duplicate cache: fingerprints to the clauses carrying them.
///
/// Contents are compared on a fingerprint hit, so colliding fingerprints
/// never suppress a distinct clause.
#[derive(Default)]
pub struct ClauseCache {
    clauses: FxHashMap<u32, Vec<ClauseIndex>>,
}

impl ClauseCache {
    fn contains(&self, clause: &Clause, db: &crate::db::clause::ClauseDB) -> bool {
        match self.clauses.get(&clause.fingerprint()) {
            None => false,
            Some(candidates) => candidates.iter().any(|&index| db.get(index) == clause),
        }
    }

    fn add(&mut self, fingerprint: u32, index: ClauseIndex) {
        self.clauses.entry(fingerprint).or_default().push(index);
    }
}

impl Context {
    /// Add a clause over the given literals to the formula.
    ///
    /// Literals are sorted and deduplicated; each must be nonzero over an
    /// atom within the declared range.
    pub fn add_clause(&mut self, mut literals: Vec<CLiteral>) -> Result<ClauseOk, err::ErrorKind> {
        for &literal in &literals {
            if literal == 0 {
                return Err(err::ErrorKind::from(BuildError::ZeroLiteral));
            }
            if literal.atom() > self.num_vars {
                return Err(err::ErrorKind::from(BuildError::OutOfRange(literal)));
            }
        }

        literals.sort_unstable();
        literals.dedup();

        self.insert_clause(Clause::from_sorted(literals))
    }

    /// The single insertion primitive behind both ingestion paths.
    fn insert_clause(&mut self, clause: Clause) -> Result<ClauseOk, err::ErrorKind> {
        let Some(cache) = self.cache.as_mut() else {
            return Err(err::ErrorKind::from(BuildError::InputClosed));
        };

        if cache.contains(&clause, &self.clause_db) {
            log::trace!(target: targets::INGESTION, "Suppressed duplicate: {}", clause.as_dimacs(false));
            let index = self.clause_db.store(clause);
            self.clause_db.delete(index);
            return Ok(ClauseOk::Duplicate);
        }

        let fingerprint = clause.fingerprint();
        let index = self.clause_db.store(clause);
        cache.add(fingerprint, index);
        for &literal in self.clause_db.get(index).literals() {
            self.literal_db.note_occurrence(literal, index);
        }
        Ok(ClauseOk::Added)
    }

    /// Close ingestion, destroying the duplicate cache.
    ///
    /// Adjacency vectors are left to be built lazily by the driver.
    pub fn finish(&mut self) {
        self.cache = None;
        self.state = ContextState::Ready;
        log::info!(
            target: targets::INGESTION,
            "Ingestion finished: {} atoms, {} clauses",
            self.num_vars,
            self.clause_db.current_clause_count()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn clauses_are_normalised() {
        let mut ctx = Context::init(4, Config::default());
        assert_eq!(ctx.add_clause(vec![3, 1, 3, -2]), Ok(ClauseOk::Added));
        assert_eq!(ctx.clause_db.get(0).literals(), &[-2, 1, 3]);
    }

    #[test]
    fn duplicates_are_suppressed() {
        let mut ctx = Context::init(4, Config::default());
        assert_eq!(ctx.add_clause(vec![1, 2]), Ok(ClauseOk::Added));
        assert_eq!(ctx.add_clause(vec![2, 1]), Ok(ClauseOk::Duplicate));
        assert_eq!(ctx.add_clause(vec![3, 4]), Ok(ClauseOk::Added));

        assert_eq!(ctx.clause_db.total(), 3);
        assert_eq!(ctx.clause_db.current_clause_count(), 2);
        // The suppressed clause contributes no occurrences.
        assert_eq!(ctx.literal_db.effective_count(1), 1);
    }

    #[test]
    fn literals_are_validated() {
        let mut ctx = Context::init(2, Config::default());
        assert_eq!(
            ctx.add_clause(vec![1, 0]),
            Err(err::ErrorKind::Build(BuildError::ZeroLiteral))
        );
        assert_eq!(
            ctx.add_clause(vec![1, -3]),
            Err(err::ErrorKind::Build(BuildError::OutOfRange(-3)))
        );
    }

    #[test]
    fn ingestion_closes() {
        let mut ctx = Context::init(2, Config::default());
        ctx.finish();
        assert_eq!(
            ctx.add_clause(vec![1]),
            Err(err::ErrorKind::Build(BuildError::InputClosed))
        );
    }
}
