/*!
Reports from a context: the transformed formula and the proof of the
transformation.

The formula is emitted in DIMACS form: a header over the (possibly grown)
atom count and the effective clause count, followed by the live clauses in
insertion order.
Writers are supplied by the caller and are neither opened nor closed here.
*/

pub mod proof;

use std::io::{self, Write};

use crate::{
    context::Context,
    structures::{atom::Atom, literal::CLiteral},
};

impl Context {
    /// Write the formula as DIMACS text.
    pub fn write_dimacs(&self, writer: &mut impl Write) -> io::Result<()> {
        writeln!(
            writer,
            "p cnf {} {}",
            self.num_vars,
            self.clause_db.current_clause_count()
        )?;
        for clause in self.clause_db.live_clauses() {
            writeln!(writer, "{}", clause.as_dimacs(true))?;
        }
        Ok(())
    }

    /// The formula as an atom count, a clause count, and a flat literal
    /// sequence with each clause terminated by `0`.
    pub fn cnf(&self) -> (Atom, usize, Vec<CLiteral>) {
        let mut flat = Vec::default();
        for clause in self.clause_db.live_clauses() {
            flat.extend_from_slice(clause.literals());
            flat.push(0);
        }
        (self.num_vars, self.clause_db.current_clause_count(), flat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn dimacs_reflects_suppressed_duplicates() {
        let mut ctx = Context::init(4, Config::default());
        ctx.add_clause(vec![1, 2]).unwrap();
        ctx.add_clause(vec![2, 1]).unwrap();
        ctx.add_clause(vec![3, 4]).unwrap();
        ctx.finish();

        let mut out = Vec::new();
        ctx.write_dimacs(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "p cnf 4 2\n1 2 0\n3 4 0\n");
    }

    #[test]
    fn flat_cnf_matches_dimacs() {
        let mut ctx = Context::init(3, Config::default());
        ctx.add_clause(vec![-1, 2]).unwrap();
        ctx.add_clause(vec![3]).unwrap();
        ctx.finish();

        let (vars, clauses, flat) = ctx.cnf();
        assert_eq!(vars, 3);
        assert_eq!(clauses, 2);
        assert_eq!(flat, vec![-1, 2, 0, 3, 0]);
    }
}
