use walksat_lm::{
    config::{Config, Level, Scoring, Weight},
    context::Context,
    structures::{atom::Atom, formula::Semantics},
};

mod common;
use common::{made_and_broken, planted, random_assignment, reference_linear};

fn linear_context(makes: &[(Level, Weight)], breaks: &[(Level, Weight)]) -> Context {
    Context::from_config(Config {
        scoring: Scoring::linear(makes, breaks),
        ..Config::default()
    })
}

/// Some planted formulas, each paired with a few random assignments.
fn cases(semantics: Semantics) -> Vec<(common::Planted, Vec<Vec<bool>>)> {
    let mut cases = Vec::default();
    for (index, (atoms, size)) in [(12, 3), (13, 4), (14, 5), (16, 6)].into_iter().enumerate() {
        let seed = index as u64;
        let planted = planted(semantics, atoms, 4 * atoms, size, seed);
        let assignments = (0..4)
            .map(|offset| random_assignment(&planted.formula, 100 + seed * 10 + offset))
            .collect();
        cases.push((planted, assignments));
    }
    cases
}

mod standard {
    use super::*;

    #[test]
    fn make_one_counts_repaired_clauses() {
        common::init_logs();
        let the_context = linear_context(&[(1, 1.0)], &[]);

        for (planted, assignments) in cases(Semantics::Standard) {
            let formula = &planted.formula;
            for assignment in &assignments {
                for atom in 0..formula.atom_count() as Atom {
                    let scored = the_context.score(formula, atom, assignment).unwrap();
                    let (made, _) = made_and_broken(formula, atom, assignment);
                    assert_eq!(scored.score, made as f64);
                }
            }
        }
    }

    #[test]
    fn break_one_counts_broken_clauses() {
        let the_context = linear_context(&[], &[(1, 1.0)]);

        for (planted, assignments) in cases(Semantics::Standard) {
            let formula = &planted.formula;
            for assignment in &assignments {
                for atom in 0..formula.atom_count() as Atom {
                    let scored = the_context.score(formula, atom, assignment).unwrap();
                    let (_, broken) = made_and_broken(formula, atom, assignment);
                    assert_eq!(scored.score, broken as f64);
                    assert_eq!(scored.base_break, broken);
                }
            }
        }
    }

    #[test]
    fn occurrences_agree_with_every_clause() {
        let makes = [(1, 5.0), (2, 6.0), (0, -1.0)];
        let breaks = [(-1, 2.0), (1, 3.0), (9, 100.0)];
        let the_context = linear_context(&makes, &breaks);

        for (planted, assignments) in cases(Semantics::Standard) {
            let formula = &planted.formula;
            for assignment in &assignments {
                for atom in 0..formula.atom_count() as Atom {
                    let scored = the_context.score(formula, atom, assignment).unwrap();
                    assert_eq!(
                        scored.score,
                        reference_linear(formula, &makes, &breaks, atom, assignment)
                    );
                }
            }
        }
    }

    #[test]
    fn make_break_symmetry() {
        let the_context = linear_context(&[(1, 1.0)], &[(1, -1.0)]);

        for (planted, assignments) in cases(Semantics::Standard) {
            let formula = &planted.formula;
            for assignment in &assignments {
                for atom in 0..formula.atom_count() as Atom {
                    let there = the_context.score(formula, atom, assignment).unwrap();
                    let back = the_context
                        .score(formula, atom, &common::flipped(assignment, atom))
                        .unwrap();
                    assert_eq!(there.score, -back.score);
                }
            }
        }
    }

    #[test]
    fn freebies_break_nothing() {
        let the_context = linear_context(&[(1, 1.0)], &[]);

        for (planted, assignments) in cases(Semantics::Standard) {
            let formula = &planted.formula;
            for assignment in &assignments {
                let before = formula.unsatisfied_keys(assignment).unwrap();
                for atom in 0..formula.atom_count() as Atom {
                    let scored = the_context.score(formula, atom, assignment).unwrap();
                    if scored.is_freebie() {
                        let after = formula
                            .unsatisfied_keys(&common::flipped(assignment, atom))
                            .unwrap();
                        assert!(after.iter().all(|key| before.contains(key)));
                    }
                }
            }
        }
    }
}

mod not_all_equal {
    use super::*;

    #[test]
    fn repairs_at_either_end() {
        let the_context = linear_context(&[(1, 1.0)], &[(0, 1.0)]);

        for (planted, assignments) in cases(Semantics::NotAllEqual) {
            let formula = &planted.formula;
            for assignment in &assignments {
                for atom in 0..formula.atom_count() as Atom {
                    let scored = the_context.score(formula, atom, assignment).unwrap();
                    let (made, _) = made_and_broken(formula, atom, assignment);
                    assert_eq!(scored.score, made as f64);
                }
            }
        }
    }

    #[test]
    fn breaks_at_either_end() {
        let the_context = linear_context(&[(0, 1.0)], &[(1, 1.0)]);

        for (planted, assignments) in cases(Semantics::NotAllEqual) {
            let formula = &planted.formula;
            for assignment in &assignments {
                for atom in 0..formula.atom_count() as Atom {
                    let scored = the_context.score(formula, atom, assignment).unwrap();
                    let (_, broken) = made_and_broken(formula, atom, assignment);
                    assert_eq!(scored.score, broken as f64);
                    assert_eq!(scored.base_break, broken);
                }
            }
        }
    }
}
