//! The adjacency cache.
//!
//! For each atom `v`, a sparse vector counting, over all live clauses
//! containing either polarity of `v`, the literal appearances of either
//! polarity of each atom `u` (so the vector for `v` equals the vector for
//! `−v` by construction).
//!
//! Vectors are built on demand and dropped back to empty whenever an
//! occurrence list they were built from changes.
//! The cache carries a nominal backing width; when the atom count outgrows
//! the width every vector is dropped and the width is re-established at
//! twice the atom count, bounding peak residency.
//! Re-establishing the width at `2N` leaves headroom, so a reset recurs only
//! once the atom count has doubled again and cached vectors are reused
//! across the replacements in between.

use crate::db::{clause::ClauseDB, literal::LiteralDB};
use crate::generic::sparse_vec::SparseVec;
use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// Lazily built per-atom adjacency vectors.
pub struct AdjacencyCache {
    width: usize,
    vectors: Vec<SparseVec>,
}

impl AdjacencyCache {
    /// A cache for a formula over `num_vars` atoms.
    pub fn new(num_vars: Atom) -> Self {
        AdjacencyCache {
            width: num_vars as usize * 4,
            vectors: vec![SparseVec::default(); num_vars as usize],
        }
    }

    /// Grow the cache to cover `num_vars` atoms, dropping every vector if the
    /// atom count has outgrown the backing width.
    pub fn grow_to(&mut self, num_vars: Atom) {
        if num_vars as usize > self.width {
            self.width = num_vars as usize * 2;
            for vector in &mut self.vectors {
                vector.clear();
            }
        }
        if self.vectors.len() < num_vars as usize {
            self.vectors.resize(num_vars as usize, SparseVec::default());
        }
    }

    /// Drop the vector of the atom of `literal`.
    pub fn invalidate(&mut self, literal: CLiteral) {
        self.vectors[literal.atom_index()].clear();
    }

    /// Build the vector for `atom` from the current occurrence lists, unless cached.
    /// Returns the count of clause literals visited, for step accounting.
    pub fn ensure(&mut self, atom: Atom, clause_db: &ClauseDB, literal_db: &LiteralDB) -> usize {
        let index = atom as usize - 1;
        if !self.vectors[index].is_empty() {
            return 0;
        }

        let mut visited = 0;
        let mut vector = std::mem::take(&mut self.vectors[index]);
        for literal in [CLiteral::new(atom, true), CLiteral::new(atom, false)] {
            for &clause_index in literal_db.occurrences_of(literal) {
                let clause = clause_db.get(clause_index);
                if clause.is_deleted() {
                    continue;
                }
                for other in clause.literals() {
                    vector.add(other.atom_index(), 1);
                    visited += 1;
                }
            }
        }
        self.vectors[index] = vector;
        visited
    }

    /// The cached vector for `atom`.
    ///
    /// Empty unless [ensure](AdjacencyCache::ensure) was called since the
    /// last invalidation.
    pub fn vector(&self, atom: Atom) -> &SparseVec {
        &self.vectors[atom as usize - 1]
    }
}
