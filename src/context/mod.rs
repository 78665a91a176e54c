//! The context --- to which a formula is added and within which the transformation takes place.
//!
//! A context owns every piece of state the engine touches: the clause and
//! literal databases, the adjacency cache, the budget counters, and the
//! optional proof.
//! Nothing is shared; distinct contexts may run in distinct threads so long
//! as each is exclusively owned.
//!
//! # Example
//! ```rust
//! # use sbva::config::{Config, Tiebreak};
//! # use sbva::context::Context;
//! let mut ctx = Context::init(4, Config::default());
//!
//! ctx.add_clause(vec![1, 3]).unwrap();
//! ctx.add_clause(vec![2, 3]).unwrap();
//! ctx.add_clause(vec![1, 4]).unwrap();
//! ctx.finish();
//!
//! ctx.run(Tiebreak::ThreeHop);
//!
//! let (vars, clauses, _lits) = ctx.cnf();
//! assert_eq!(vars, 4);
//! assert_eq!(clauses, 3);
//! ```

mod counters;
pub use counters::Counters;

use rustc_hash::FxHashMap;

use crate::{
    builder::ClauseCache,
    config::Config,
    db::{adjacency::AdjacencyCache, clause::ClauseDB, literal::LiteralDB},
    reports::proof::Proof,
    structures::atom::Atom,
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// Clauses may be added; the duplicate cache is live.
    Input,

    /// Ingestion has finished; the formula may be transformed.
    Ready,

    /// A run has completed (or stopped on a budget).
    Transformed,
}

/// The context structure.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to a run.
    pub counters: Counters,

    /// The clause database.
    pub clause_db: ClauseDB,

    /// The literal database.
    pub literal_db: LiteralDB,

    /// The adjacency cache backing the tie-break heuristic.
    pub adjacency: AdjacencyCache,

    /// The proof of additions and deletions, when enabled.
    pub proof: Option<Proof>,

    /// The status of the context.
    pub state: ContextState,

    /// The current atom count; grows with each replacement.
    pub(crate) num_vars: Atom,

    /// The ingestion duplicate cache; destroyed by [finish](Context::finish).
    pub(crate) cache: Option<ClauseCache>,

    /// The per-pivot memo of three-hop scores, cleared each outer iteration.
    pub(crate) heuristic_memo: FxHashMap<usize, i64>,
}

impl Context {
    /// A context over `num_vars` atoms, ready for clauses.
    pub fn init(num_vars: Atom, config: Config) -> Self {
        let proof = match config.generate_proof {
            true => Some(Proof::default()),
            false => None,
        };

        Context {
            counters: Counters::default(),
            clause_db: ClauseDB::default(),
            literal_db: LiteralDB::new(num_vars),
            adjacency: AdjacencyCache::new(num_vars),
            proof,
            state: ContextState::Input,
            num_vars,
            cache: Some(ClauseCache::default()),
            heuristic_memo: FxHashMap::default(),
            config,
        }
    }

    /// The current atom count.
    pub fn num_vars(&self) -> Atom {
        self.num_vars
    }
}
