#![allow(dead_code)]

use rand::{seq::index, Rng, SeedableRng};
use walksat_lm::{
    config::{Level, Weight},
    generic::random::MinimalPCG32,
    structures::{
        assignment::Assignment,
        atom::Atom,
        clause::Clause,
        formula::{Formula, Semantics},
        literal::{CLiteral, Literal},
    },
};

/// Installs a logger, if no logger has been installed.
pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A formula together with some assignment known to satisfy the formula.
pub struct Planted {
    pub formula: Formula,
    pub assignment: Vec<bool>,
}

/// A random formula of `clauses` clauses, each of `size` distinct atoms drawn from `atoms`, satisfied by a random planted assignment.
pub fn planted(
    semantics: Semantics,
    atoms: usize,
    clauses: usize,
    size: usize,
    seed: u64,
) -> Planted {
    let mut rng = MinimalPCG32::from_seed(seed.to_le_bytes());
    let mut assignment = (0..atoms).map(|_| rng.gen_bool(0.5)).collect::<Vec<_>>();

    let mut formula = Formula::new(semantics);
    while formula.clause_count() < clauses {
        let picked = index::sample(&mut rng, atoms, size);
        let clause = picked
            .into_iter()
            .map(|atom| CLiteral::new(atom as Atom, rng.gen_bool(0.5)))
            .collect::<Clause>();

        if formula.clause_satisfied(&clause, &assignment) == Ok(true) {
            formula.append(clause);
        }
    }

    // Atoms above the largest atom of the formula are not part of an assignment to the formula.
    assignment.truncate(formula.atom_count());

    Planted {
        formula,
        assignment,
    }
}

/// Some random assignment to the formula.
pub fn random_assignment(formula: &Formula, seed: u64) -> Vec<bool> {
    let mut rng = MinimalPCG32::from_seed(seed.to_le_bytes());
    formula.random_assignment(&mut rng)
}

/// A copy of the assignment with the value of the atom flipped.
pub fn flipped(assignment: &[bool], atom: Atom) -> Vec<bool> {
    let mut copy = assignment.to_vec();
    copy.flip(atom).unwrap();
    copy
}

/// The linear score of a flip, found by evaluating every clause on the assignment and its flip.
pub fn reference_linear(
    formula: &Formula,
    makes: &[(Level, Weight)],
    breaks: &[(Level, Weight)],
    atom: Atom,
    assignment: &[bool],
) -> Weight {
    let after = flipped(assignment, atom);
    let mut score = 0.0;

    for clause in formula.clauses() {
        let k = clause.size() as i32;
        let before_count = clause.true_count(assignment).unwrap() as i32;
        let after_count = clause.true_count(&after).unwrap() as i32;

        for (level, weight) in makes {
            let kappa = if *level <= 0 { k + level } else { *level };
            if before_count == kappa - 1 && after_count == kappa && kappa >= 1 && kappa <= k {
                score += weight;
            }
        }
        for (level, weight) in breaks {
            let kappa = if *level <= 0 { k + level } else { *level };
            if before_count == kappa && after_count == kappa - 1 && kappa >= 1 && kappa <= k {
                score += weight;
            }
        }
    }
    score
}

/// Counts of clauses unsatisfied on the assignment but satisfied after a flip of the atom, and vice versa.
pub fn made_and_broken(formula: &Formula, atom: Atom, assignment: &[bool]) -> (usize, usize) {
    let before = formula.unsatisfied_keys(assignment).unwrap();
    let after = formula.unsatisfied_keys(&flipped(assignment, atom)).unwrap();

    let made = before.iter().filter(|key| !after.contains(key)).count();
    let broken = after.iter().filter(|key| !before.contains(key)).count();
    (made, broken)
}
