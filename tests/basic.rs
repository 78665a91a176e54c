use sbva::{
    config::{Config, Tiebreak},
    context::Context,
};

/// The running example: an 8-atom formula whose clauses form a dense
/// literal-by-clause matrix.
///
/// ```none
/// (1 v 5)  (2 v 5)  (3 v 5)  (4 v 5)
/// (1 v 6)  (2 v 6)  (3 v 6)  (4 v 6)
/// (1 v 7)  (2 v 7)
/// (1 v 8)  (2 v 8)  (3 v 8)
/// ```
fn canonical_matrix(config: Config) -> Context {
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
        assert!(ctx.add_clause(clause).is_ok());
    }
    ctx.finish();
    ctx
}

fn live_clauses(ctx: &Context) -> Vec<Vec<i32>> {
    let (_, _, flat) = ctx.cnf();
    flat.split(|&l| l == 0)
        .filter(|clause| !clause.is_empty())
        .map(|clause| clause.to_vec())
        .collect()
}

mod basic {
    use super::*;

    #[test]
    fn canonical_matrix_is_factored() {
        let mut ctx = canonical_matrix(Config::default());
        ctx.run(Tiebreak::ThreeHop);

        let (vars, clauses, _) = ctx.cnf();
        assert_eq!(vars, 9);
        assert!(clauses < 13);

        let live = live_clauses(&ctx);
        for definition in [vec![1, 9], vec![2, 9]] {
            assert!(live.contains(&definition));
        }
        for body in [vec![-9, 5], vec![-9, 6], vec![-9, 8]] {
            assert!(live.contains(&body));
        }
        for deleted in [
            vec![1, 5],
            vec![2, 5],
            vec![1, 6],
            vec![2, 6],
            vec![1, 8],
            vec![2, 8],
        ] {
            assert!(!live.contains(&deleted));
        }
    }

    #[test]
    fn no_profitable_match() {
        let mut ctx = Context::init(4, Config::default());
        assert!(ctx.add_clause(vec![1, 2]).is_ok());
        assert!(ctx.add_clause(vec![3, 4]).is_ok());
        ctx.finish();
        ctx.run(Tiebreak::ThreeHop);

        let mut out = Vec::new();
        ctx.write_dimacs(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "p cnf 4 2\n1 2 0\n3 4 0\n");
    }

    #[test]
    fn unary_formula_passes_through() {
        let mut ctx = Context::init(3, Config::default());
        for clause in [vec![1], vec![2], vec![3]] {
            assert!(ctx.add_clause(clause).is_ok());
        }
        ctx.finish();
        ctx.run(Tiebreak::ThreeHop);

        let mut out = Vec::new();
        ctx.write_dimacs(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "p cnf 3 3\n1 0\n2 0\n3 0\n");
    }

    #[test]
    fn duplicate_clauses_are_suppressed() {
        let mut ctx = Context::init(4, Config::default());
        assert!(ctx.add_clause(vec![1, 2]).is_ok());
        assert!(ctx.add_clause(vec![2, 1]).is_ok());
        assert!(ctx.add_clause(vec![3, 4]).is_ok());
        ctx.finish();
        ctx.run(Tiebreak::ThreeHop);

        let mut out = Vec::new();
        ctx.write_dimacs(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "p cnf 4 2\n1 2 0\n3 4 0\n");
    }

    #[test]
    fn zero_step_budget_only_deduplicates() {
        // The canonical matrix would transform; a zero step budget leaves it
        // as ingested, duplicates removed.
        let mut ctx = canonical_matrix(Config {
            steps: 0,
            ..Config::default()
        });
        ctx.run(Tiebreak::ThreeHop);

        let (vars, clauses, _) = ctx.cnf();
        assert_eq!(vars, 8);
        assert_eq!(clauses, 13);

        let mut ctx = Context::init(2, Config {
            steps: 0,
            ..Config::default()
        });
        assert!(ctx.add_clause(vec![1, 2]).is_ok());
        assert!(ctx.add_clause(vec![2, 1]).is_ok());
        ctx.finish();
        ctx.run(Tiebreak::ThreeHop);

        let (_, clauses, flat) = ctx.cnf();
        assert_eq!(clauses, 1);
        assert_eq!(flat, vec![1, 2, 0]);
    }
}

mod tiebreaking {
    use super::*;

    /// Atoms 2 and 3 extend the matrix of pivot 1 equally well.
    fn tied_formula(config: Config) -> Context {
        let mut ctx = Context::init(6, config);
        for clause in [
            vec![1, 4],
            vec![1, 5],
            vec![1, 6],
            vec![2, 4],
            vec![2, 5],
            vec![2, 6],
            vec![3, 4],
            vec![3, 5],
            vec![3, 6],
        ] {
            assert!(ctx.add_clause(clause).is_ok());
        }
        ctx.finish();
        ctx
    }

    fn transformed(tiebreak: Tiebreak) -> String {
        let mut ctx = tied_formula(Config::default());
        ctx.run(tiebreak);
        let mut out = Vec::new();
        ctx.write_dimacs(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn ties_resolve_deterministically() {
        assert_eq!(
            transformed(Tiebreak::ThreeHop),
            transformed(Tiebreak::ThreeHop)
        );
        assert_eq!(transformed(Tiebreak::None), transformed(Tiebreak::None));
    }

    #[test]
    fn the_full_matrix_collapses() {
        let mut ctx = tied_formula(Config::default());
        ctx.run(Tiebreak::ThreeHop);

        // 3 x 3 matrix: 9 clauses fold into 3 definitions and 3 bodies.
        let (vars, clauses, _) = ctx.cnf();
        assert_eq!(vars, 7);
        assert_eq!(clauses, 6);

        let live = live_clauses(&ctx);
        for clause in [vec![1, 7], vec![2, 7], vec![3, 7], vec![-7, 4]] {
            assert!(live.contains(&clause));
        }
    }
}

mod cutoffs {
    use super::*;

    #[test]
    fn a_high_floor_suppresses_replacement() {
        let mut ctx = canonical_matrix(Config {
            clause_cutoff: Some(100),
            ..Config::default()
        });
        ctx.run(Tiebreak::ThreeHop);

        assert_eq!(ctx.num_vars(), 8);
        assert_eq!(ctx.clause_db.current_clause_count(), 13);
    }

    #[test]
    fn a_zero_floor_admits_break_even_matrices() {
        // A 2 x 2 matrix: skipped by the default gate, replaced under floors.
        let build = |config: Config| {
            let mut ctx = Context::init(4, config);
            for clause in [vec![1, 3], vec![1, 4], vec![2, 3], vec![2, 4]] {
                assert!(ctx.add_clause(clause).is_ok());
            }
            ctx.finish();
            ctx.run(Tiebreak::ThreeHop);
            ctx
        };

        let gated = build(Config::default());
        assert_eq!(gated.counters.replacements, 0);

        let floored = build(Config {
            clause_cutoff: Some(0),
            literal_cutoff: Some(0),
            ..Config::default()
        });
        assert_eq!(floored.counters.replacements, 1);
        assert_eq!(floored.num_vars(), 5);
    }
}

mod dimacs {
    use super::*;

    #[test]
    fn parse_transform_emit() {
        let input = b"c the canonical matrix, as text
p cnf 8 13
1 5 0
2 5 0
3 5 0
4 5 0
1 6 0
2 6 0
3 6 0
4 6 0
1 7 0
2 7 0
1 8 0
2 8 0
3 8 0
";
        let mut ctx = Context::from_dimacs(&input[..], Config::default()).unwrap();
        ctx.run(Tiebreak::ThreeHop);

        let mut out = Vec::new();
        ctx.write_dimacs(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("p cnf 9 10\n"));
        assert!(text.contains("-9 5 0\n"));
    }
}
