use walksat_lm::{
    config::{Config, Scoring},
    context::{Context, ContextState},
    reports::{Outcome, Report},
    structures::{
        clause::Clause,
        formula::{Formula, Semantics},
        literal::{CLiteral, Literal},
    },
    types::err,
};

mod common;
use common::planted;

fn x(atom: u32) -> CLiteral {
    CLiteral::new(atom, true)
}

fn not_x(atom: u32) -> CLiteral {
    CLiteral::new(atom, false)
}

fn three_clauses() -> Formula {
    Formula::from_clauses(
        Semantics::Standard,
        vec![
            Clause::new(vec![x(0), x(1), not_x(2)]),
            Clause::new(vec![not_x(0), x(1)]),
            Clause::new(vec![x(0), not_x(1), x(2)]),
        ],
    )
}

mod satisfiable {
    use super::*;

    #[test]
    fn three_clauses_any_seed() {
        common::init_logs();
        let formula = three_clauses();

        for seed in 0..32 {
            let mut the_context = Context::from_config(Config {
                seed,
                ..Config::default()
            });

            assert_eq!(the_context.solve(&formula), Ok(Report::Satisfied));
            assert_eq!(formula.is_satisfied(the_context.assignment()), Ok(true));
            assert_eq!(
                the_context.counters.flips,
                the_context.counters.freebies
                    + the_context.counters.noise_moves
                    + the_context.counters.greedy_moves
            );
        }
    }

    #[test]
    fn planted_k_sat() {
        for (index, (atoms, size)) in [(20, 3), (18, 4), (16, 5)].into_iter().enumerate() {
            let seed = index as u64;
            let planted = planted(Semantics::Standard, atoms, 4 * atoms, size, seed);

            let mut the_context = Context::from_config(Config {
                timeout: Some(200_000),
                seed,
                ..Config::default()
            });

            assert_eq!(the_context.solve(&planted.formula), Ok(Report::Satisfied));
            assert_eq!(
                planted.formula.is_satisfied(the_context.assignment()),
                Ok(true)
            );
            assert_eq!(
                the_context.counters.steps,
                the_context.counters.flips + 1
            );
        }
    }

    #[test]
    fn planted_not_all_equal_linear() {
        for seed in 0..4 {
            let planted = planted(Semantics::NotAllEqual, 16, 48, 4, seed);

            let mut the_context = Context::from_config(Config {
                scoring: Scoring::linear(&[(1, 1.0)], &[(0, 1.0)]),
                timeout: Some(200_000),
                seed,
                ..Config::default()
            });

            assert_eq!(the_context.solve(&planted.formula), Ok(Report::Satisfied));
        }
    }

    #[test]
    fn pure_noise() {
        let formula = three_clauses();
        let mut the_context = Context::from_config(Config {
            timeout: Some(100_000),
            ..Config::with_noise(1.0)
        });

        assert_eq!(the_context.solve(&formula), Ok(Report::Satisfied));
        assert_eq!(the_context.counters.greedy_moves, 0);
    }

    #[test]
    fn same_seed_same_outcome() {
        let planted = planted(Semantics::Standard, 20, 80, 3, 11);
        let config = Config {
            seed: 5,
            ..Config::default()
        };

        let mut first = Context::from_config(config.clone());
        let mut second = Context::from_config(config);
        assert!(first.solve(&planted.formula).is_ok());
        assert!(second.solve(&planted.formula).is_ok());

        assert_eq!(first.outcome(), second.outcome());
        assert_eq!(first.counters, second.counters);
    }

    #[test]
    fn shared_formula_across_threads() {
        let planted = planted(Semantics::Standard, 20, 80, 3, 3);
        let formula = &planted.formula;

        let outcomes = std::thread::scope(|scope| {
            let handles = (0..4)
                .map(|seed| {
                    scope.spawn(move || {
                        let mut the_context = Context::from_config(Config {
                            seed,
                            timeout: Some(200_000),
                            ..Config::default()
                        });
                        the_context.solve(formula).map(|_| the_context.outcome())
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect::<Vec<_>>()
        });

        for outcome in outcomes {
            let outcome = outcome.unwrap();
            assert!(outcome.satisfied());

            let assignment = outcome.result.iter().map(|bit| *bit == 1).collect::<Vec<_>>();
            assert_eq!(formula.is_satisfied(&assignment), Ok(true));
        }
    }
}

mod timeouts {
    use super::*;

    #[test]
    fn keeps_last_assignment() {
        // x0, ¬x0 on standard semantics.
        let formula = Formula::from_clauses(
            Semantics::Standard,
            vec![Clause::new(vec![x(0)]), Clause::new(vec![not_x(0)])],
        );
        let mut the_context = Context::from_config(Config {
            timeout: Some(50),
            ..Config::default()
        });

        assert_eq!(the_context.solve(&formula), Ok(Report::TimedOut));
        assert_eq!(the_context.state, ContextState::TimedOut);

        let outcome = the_context.outcome();
        assert_eq!(outcome.report, Report::TimedOut);
        assert_eq!(outcome.steps, 51);
        assert_eq!(outcome.result.len(), 1);
        assert!(!outcome.satisfied());
    }

    #[test]
    fn not_all_equal_single_literal() {
        // A clause of a single literal is never satisfied on not-all-equal semantics.
        let formula = Formula::from_clauses(Semantics::NotAllEqual, vec![Clause::new(vec![x(0)])]);
        let mut the_context = Context::from_config(Config {
            timeout: Some(10),
            ..Config::default()
        });

        assert_eq!(the_context.solve(&formula), Ok(Report::TimedOut));
    }

    #[test]
    fn repeat_search() {
        let formula = three_clauses();
        let mut the_context = Context::from_config(Config::default());

        assert_eq!(the_context.report(), Report::Unknown);
        assert_eq!(the_context.solve(&formula), Ok(Report::Satisfied));

        let unsatisfiable = Formula::from_clauses(
            Semantics::Standard,
            vec![Clause::new(vec![x(0)]), Clause::new(vec![not_x(0)])],
        );
        the_context.config.timeout = Some(5);
        assert_eq!(the_context.solve(&unsatisfiable), Ok(Report::TimedOut));
        assert_eq!(the_context.counters.steps, 6);
    }
}

mod rejected {
    use super::*;

    #[test]
    fn empty_clause() {
        let mut formula = three_clauses();
        formula.append(Clause::new(vec![]));

        let mut the_context = Context::from_config(Config::default());
        assert_eq!(
            the_context.solve(&formula),
            Err(err::ErrorKind::Formula(err::FormulaError::EmptyClause(3)))
        );
    }

    #[test]
    fn noise_out_of_range() {
        let mut the_context = Context::from_config(Config::with_noise(1.01));
        assert_eq!(
            the_context.solve(&three_clauses()),
            Err(err::ErrorKind::Config(err::ConfigError::Noise(1.01)))
        );
    }

    #[test]
    fn infinite_weight() {
        let mut the_context = Context::from_config(Config {
            scoring: Scoring::linear(&[(1, 1.0)], &[(-1, f64::NEG_INFINITY)]),
            ..Config::default()
        });
        assert_eq!(
            the_context.solve(&three_clauses()),
            Err(err::ErrorKind::Config(err::ConfigError::Weight(-1)))
        );
    }

    #[test]
    fn duplicate_level() {
        let mut the_context = Context::from_config(Config {
            scoring: Scoring::linear(&[(1, 5.0), (1, 5.0)], &[]),
            ..Config::default()
        });
        assert_eq!(
            the_context.solve(&three_clauses()),
            Err(err::ErrorKind::Config(err::ConfigError::DuplicateLevel(1)))
        );
        assert_eq!(the_context.report(), Report::Unknown);
    }

    #[test]
    fn unreachable_levels_are_accepted() {
        let mut the_context = Context::from_config(Config {
            scoring: Scoring::linear(&[(1, 5.0), (7, 1.0)], &[(-5, 1.0)]),
            ..Config::default()
        });
        assert_eq!(the_context.solve(&three_clauses()), Ok(Report::Satisfied));
    }
}

mod serialization {
    use super::*;
    use serde_json::json;

    #[test]
    fn outcome_shape() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.solve(&three_clauses()).is_ok());

        let outcome = the_context.outcome();
        let value = serde_json::to_value(&outcome).unwrap();

        let result = the_context
            .assignment()
            .iter()
            .map(|value| if *value { 1 } else { 0 })
            .collect::<Vec<u8>>();
        assert_eq!(
            value,
            json!({
                "report": "Satisfied",
                "result": result,
                "steps": the_context.counters.steps,
            })
        );

        let read: Outcome = serde_json::from_value(value).unwrap();
        assert_eq!(read, outcome);
    }

    #[test]
    fn config_record() {
        let value = serde_json::to_value(Config::default()).unwrap();

        assert_eq!(value["noise"]["value"], json!(0.15));
        assert_eq!(value["scoring"]["Linear"]["makes"], json!([[1, 5.0], [2, 6.0]]));
        assert_eq!(value["scoring"]["Linear"]["breaks"], json!([]));
        assert_eq!(value["timeout"], json!(null));
        assert_eq!(value["seed"], json!(0));
    }

    #[test]
    fn scoring_from_json() {
        let scoring: Scoring =
            serde_json::from_str(r#"{"Linear":{"makes":[[1,5.0]],"breaks":[[0,-2.5]]}}"#).unwrap();
        assert_eq!(scoring, Scoring::linear(&[(1, 5.0)], &[(0, -2.5)]));

        let scoring: Scoring = serde_json::from_str(r#""Balance""#).unwrap();
        assert_eq!(scoring, Scoring::Balance);
    }
}
