/*!
A sparse integer vector.

Entries are kept as (index, value) pairs sorted by index, supporting the
three operations the tie-break heuristic needs: indexed increment, iteration
over nonzeros, and a sparse dot product (a merge walk over two sorted entry
lists).
*/

/// A sparse integer vector as sorted (index, value) pairs.
#[derive(Clone, Debug, Default)]
pub struct SparseVec {
    entries: Vec<(usize, i64)>,
}

impl SparseVec {
    /// True if the vector has no nonzero entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The count of nonzero entries.
    pub fn nonzero_count(&self) -> usize {
        self.entries.len()
    }

    /// Add `value` to the entry at `index`.
    pub fn add(&mut self, index: usize, value: i64) {
        match self.entries.binary_search_by_key(&index, |entry| entry.0) {
            Ok(position) => self.entries[position].1 += value,
            Err(position) => self.entries.insert(position, (index, value)),
        }
    }

    /// An iterator over (index, value) pairs, ascending by index.
    pub fn nonzeros(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.entries.iter().copied()
    }

    /// The dot product of two sparse vectors.
    pub fn dot(&self, other: &SparseVec) -> i64 {
        let mut total = 0;
        let mut a = self.entries.iter().peekable();
        let mut b = other.entries.iter().peekable();

        while let (Some((index_a, value_a)), Some((index_b, value_b))) = (a.peek(), b.peek()) {
            match index_a.cmp(index_b) {
                std::cmp::Ordering::Less => {
                    a.next();
                }
                std::cmp::Ordering::Greater => {
                    b.next();
                }
                std::cmp::Ordering::Equal => {
                    total += value_a * value_b;
                    a.next();
                    b.next();
                }
            }
        }

        total
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
