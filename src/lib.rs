//! A library for shrinking boolean formulas in conjunctive normal form by structured bounded variable addition.
//!
//! sbva repeatedly discovers matrix-like redundancy between the literals and clauses of a formula and replaces each such matrix with a single fresh variable, producing a smaller, equisatisfiable formula.
//! Matrices are found greedily from the most frequent literals, and ties between equally attractive extensions are broken by a three-hop adjacency heuristic which favours structurally denser matrices (set the heuristic to [None](config::Tiebreak::None) to recover plain bounded variable addition).
//!
//! The engine never solves the formula, never removes variables, and never makes a formula unsatisfiable; it is a preprocessor, intended to run ahead of a solver.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](context::Context).
//!
//! A context is built with a [configuration](config::Config), filled with clauses either [programmatically](context::Context::add_clause) or from the [DIMACS](context::Context::from_dimacs) representation of a formula, and transformed by [run](context::Context::run).
//! The transformed formula is read back as [DIMACS text](context::Context::write_dimacs) or a [flat literal sequence](context::Context::cnf), and, when enabled, each clause addition and deletion of the transformation is recorded to a [proof](reports::proof) serialisable as DRAT-style text.
//!
//! Internally, a run is a loop over a handful of databases:
//! - The formula is stored in a [clause database](db::clause), append-only with logical deletion.
//! - Occurrence lists and lazily adjusted occurrence counts are stored in a [literal database](db::literal).
//! - Co-occurrence vectors for the tie-break heuristic are cached in an [adjacency cache](db::adjacency).
//!
//! A [priority queue](generic::index_heap) orders literals by their effective occurrence count, and [budgets](config::Config) on time, computation steps, and replacements bound the loop; every stop is graceful, leaving a complete and consistent formula.
//!
//! # Example
//!
//! + Shrink the formula (1 ∨ 5)(2 ∨ 5)(1 ∨ 6)(2 ∨ 6)(1 ∨ 7)(2 ∨ 7):
//!
//! ```rust
//! # use sbva::config::{Config, Tiebreak};
//! # use sbva::context::Context;
//! let mut ctx = Context::init(7, Config::default());
//!
//! for clause in [[1, 5], [2, 5], [1, 6], [2, 6], [1, 7], [2, 7]] {
//!     assert!(ctx.add_clause(clause.to_vec()).is_ok());
//! }
//! ctx.finish();
//!
//! ctx.run(Tiebreak::ThreeHop);
//!
//! let (vars, clauses, _literals) = ctx.cnf();
//! assert_eq!(vars, 8);
//! assert_eq!(clauses, 5);
//! ```
//!
//! + Parse and transform a DIMACS formula.
//!
//! ```rust
//! # use sbva::config::{Config, Tiebreak};
//! # use sbva::context::Context;
//! # use std::io::Write;
//! let mut dimacs = vec![];
//! let _ = dimacs.write(b"
//! p cnf 2 2
//!  1  2 0
//! -1  2 0
//! ");
//!
//! let mut ctx = Context::from_dimacs(dimacs.as_slice(), Config::default()).unwrap();
//! ctx.run(Tiebreak::ThreeHop);
//!
//! let mut out = vec![];
//! assert!(ctx.write_dimacs(&mut out).is_ok());
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made throughout, with a variety of targets defined in [misc::log] to narrow output to relevant parts of the engine.
//! No log implementation is provided; when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/), e.g. `RUST_LOG=matrix …` follows the growth of each matrix.

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
