//! The abstract elements of a formula and their representation.
//!
//! - [Atoms](atom) are variables, identified by position in the DIMACS numbering.
//! - [Literals](literal) are atoms paired with a polarity, represented as signed integers.
//! - [Clauses](clause) are sorted, duplicate-free sequences of literals.

pub mod atom;
pub mod clause;
pub mod literal;
