//! The proof of a transformation, as an ordered record of clause additions
//! and deletions.
//!
//! Records are kept in the order the driver made them and serialize to
//! DRAT-style text: an addition is its literal sequence terminated by `0`, a
//! deletion is prefixed with `d `.
//! Replaying the records over the input formula yields the transformed
//! formula, so the trace can be checked by standard DRAT tooling.
//!
//! The proof is write-only during a run and read-only at serialization.

use std::io::{self, Write};

use crate::{context::Context, structures::literal::CLiteral};

/// A single proof record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofClause {
    /// True for an addition, false for a deletion.
    pub addition: bool,

    /// The literal sequence of the record.
    pub literals: Vec<CLiteral>,
}

/// An ordered sequence of proof records.
#[derive(Default)]
pub struct Proof {
    records: Vec<ProofClause>,
}

impl Proof {
    /// Record the addition of a clause over `literals`.
    pub fn note_addition(&mut self, literals: Vec<CLiteral>) {
        self.records.push(ProofClause {
            addition: true,
            literals,
        });
    }

    /// Record the deletion of a clause over `literals`.
    pub fn note_deletion(&mut self, literals: Vec<CLiteral>) {
        self.records.push(ProofClause {
            addition: false,
            literals,
        });
    }

    /// The records, in the order they were made.
    pub fn records(&self) -> &[ProofClause] {
        &self.records
    }
}

impl Context {
    /// Write the proof as DRAT-style text.
    ///
    /// Writes nothing when proof generation was not enabled.
    pub fn write_proof(&self, writer: &mut impl Write) -> io::Result<()> {
        let Some(proof) = &self.proof else {
            return Ok(());
        };

        for record in proof.records() {
            if !record.addition {
                write!(writer, "d ")?;
            }
            for literal in &record.literals {
                write!(writer, "{literal} ")?;
            }
            writeln!(writer, "0")?;
        }
        Ok(())
    }
}
