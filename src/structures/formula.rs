/*!
Formulas, aka. a collection of clauses, interpreted as the conjunction of those clauses.

The reading of each clause is fixed by the [semantics](Semantics) of the formula:
- On [standard](Semantics::Standard) semantics a clause is satisfied if some literal of the clause is true (or the clause is a tautology).
- On [not-all-equal](Semantics::NotAllEqual) semantics a clause is satisfied if it is satisfied on standard semantics *and* the literals of the clause do not all share the same value.

```rust
# use walksat_lm::structures::assignment;
# use walksat_lm::structures::clause::Clause;
# use walksat_lm::structures::formula::{Formula, Semantics};
# use walksat_lm::structures::literal::{ABLiteral, Literal};
let x0 = ABLiteral::new(0, true);
let x1 = ABLiteral::new(1, true);

let mut formula = Formula::new(Semantics::NotAllEqual);
formula.append(Clause::new(vec![x0, x1]));

assert_eq!(formula.atom_count(), 2);

let both_true = assignment::from_bitstring("11").unwrap();
assert_eq!(formula.is_satisfied(&both_true), Ok(false));

let mixed = assignment::from_bitstring("01").unwrap();
assert_eq!(formula.assignment_weight(&mixed), Ok(0));
```

# Atoms

The atoms of a formula are taken to be [0..*m*), where *m - 1* is the largest atom in some clause of the formula.
It is not required for each atom in [0..*m*) to appear in some clause, though an atom which does not appear in any clause is valued by every assignment all the same.

# Occurrences

Alongside the clauses a formula stores, for each atom, the keys of clauses in which the atom occurs.
The occurrences of an atom are exactly the clauses whose status may change when the value of the atom changes, and so [scoring](crate::procedures::score) a flip only requires examining these clauses.

# Mutation

A formula is extended by [append](Formula::append) while being built.
During a search the formula is only read, and so a single formula may be shared by any number of searches.
*/

use rand::Rng;

use crate::{
    misc::log::targets::{self},
    structures::{
        assignment::{Assignment, CAssignment},
        atom::Atom,
        clause::Clause,
    },
    types::err::{self},
};

/// The index of a clause in a formula.
pub type ClauseKey = usize;

/// How the clauses of a formula are read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Semantics {
    /// A clause is satisfied if at least one literal is true.
    #[default]
    Standard,

    /// A clause is satisfied if at least one literal is true and not all literals share the same value.
    NotAllEqual,
}

impl Semantics {
    /// Whether the clause is satisfied, given the count of literals of the clause which are true.
    ///
    /// As the value of each literal is summarised by the count, this avoids a fresh evaluation of the clause after a flip.
    pub fn satisfied_on_count(&self, clause: &Clause, true_count: usize) -> bool {
        let some_true = clause.always_satisfied() || true_count > 0;
        match self {
            Self::Standard => some_true,
            Self::NotAllEqual => some_true && true_count != 0 && true_count != clause.size(),
        }
    }
}

impl std::fmt::Display for Semantics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "SAT"),
            Self::NotAllEqual => write!(f, "NAE-SAT"),
        }
    }
}

/// A formula, as a sequence of clauses read on some semantics.
#[derive(Clone, Debug, Default)]
pub struct Formula {
    clauses: Vec<Clause>,

    /// One more than the largest atom in the formula.
    atom_count: usize,

    semantics: Semantics,

    /// For each atom, the keys of the clauses in which the atom occurs (once per clause).
    occurrences: Vec<Vec<ClauseKey>>,
}

impl Formula {
    /// An empty formula, read on the given semantics.
    pub fn new(semantics: Semantics) -> Self {
        Formula {
            clauses: Vec::default(),
            atom_count: 0,
            semantics,
            occurrences: Vec::default(),
        }
    }

    /// A formula of the given clauses, read on the given semantics.
    pub fn from_clauses(semantics: Semantics, clauses: impl IntoIterator<Item = Clause>) -> Self {
        let mut formula = Formula::new(semantics);
        for clause in clauses {
            formula.append(clause);
        }
        formula
    }

    /// Adds a clause to the end of the formula, returning the key of the clause.
    pub fn append(&mut self, clause: Clause) -> ClauseKey {
        let key = self.clauses.len();

        for atom in clause.atoms() {
            let index = atom as usize;
            if self.atom_count <= index {
                self.atom_count = index + 1;
                self.occurrences.resize_with(self.atom_count, Vec::default);
            }
            let atom_occurrences = &mut self.occurrences[index];
            if atom_occurrences.last() != Some(&key) {
                atom_occurrences.push(key);
            }
        }

        log::trace!(target: targets::FORMULA, "Clause {key}: {clause}");
        self.clauses.push(clause);
        key
    }

    /// The semantics on which clauses of the formula are read.
    pub fn semantics(&self) -> Semantics {
        self.semantics
    }

    /// A count of the atoms of the formula, and so the length of any assignment to the formula.
    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    /// A count of the clauses of the formula.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// An iterator over the clauses of the formula, in order of addition.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    /// The clause with the given key, if it exists.
    pub fn clause(&self, key: ClauseKey) -> Option<&Clause> {
        self.clauses.get(key)
    }

    /// The keys of the clauses in which the atom occurs.
    pub fn occurrences(&self, atom: Atom) -> &[ClauseKey] {
        match self.occurrences.get(atom as usize) {
            Some(keys) => keys,
            None => &[],
        }
    }

    /// The key of some empty clause in the formula, if one exists.
    pub fn empty_clause(&self) -> Option<ClauseKey> {
        self.clauses.iter().position(|clause| clause.size() == 0)
    }

    /// An iterator over the (distinct) sizes of clauses in the formula.
    pub fn clause_sizes(&self) -> impl Iterator<Item = usize> {
        let mut sizes = self.clauses.iter().map(Clause::size).collect::<Vec<_>>();
        sizes.sort_unstable();
        sizes.dedup();
        sizes.into_iter()
    }

    /// Whether the clause is satisfied on the assignment, on the semantics of the formula.
    pub fn clause_satisfied(
        &self,
        clause: &Clause,
        assignment: &[bool],
    ) -> Result<bool, err::AssignmentError> {
        match self.semantics {
            Semantics::Standard => clause.is_satisfied(assignment),
            Semantics::NotAllEqual => {
                Ok(clause.is_satisfied(assignment)? && !clause.all_same(assignment)?)
            }
        }
    }

    fn length_check(&self, assignment: &[bool]) -> Result<(), err::AssignmentError> {
        match assignment.atom_count() == self.atom_count {
            true => Ok(()),
            false => {
                log::error!(target: targets::FORMULA, "Invalid assignment: expected length {}, actual length {}", self.atom_count, assignment.atom_count());
                Err(err::AssignmentError::Length {
                    expected: self.atom_count,
                    found: assignment.atom_count(),
                })
            }
        }
    }

    /// Whether every clause of the formula is satisfied on the assignment.
    ///
    /// Fails if the assignment is not exactly an assignment to the atoms of the formula.
    pub fn is_satisfied(&self, assignment: &[bool]) -> Result<bool, err::AssignmentError> {
        self.length_check(assignment)?;
        for clause in &self.clauses {
            if !self.clause_satisfied(clause, assignment)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// The weight of an assignment, aka. the count of clauses unsatisfied on the assignment.
    pub fn assignment_weight(&self, assignment: &[bool]) -> Result<usize, err::AssignmentError> {
        Ok(self.unsatisfied_keys(assignment)?.len())
    }

    /// The keys of all clauses unsatisfied on the assignment, in order of addition.
    ///
    /// The keys are found by examining every clause of the formula.
    pub fn unsatisfied_keys(
        &self,
        assignment: &[bool],
    ) -> Result<Vec<ClauseKey>, err::AssignmentError> {
        self.length_check(assignment)?;
        let mut keys = Vec::default();
        for (key, clause) in self.clauses.iter().enumerate() {
            if !self.clause_satisfied(clause, assignment)? {
                keys.push(key);
            }
        }
        Ok(keys)
    }

    /// All clauses unsatisfied on the assignment, in order of addition.
    pub fn unsatisfied_clauses(
        &self,
        assignment: &[bool],
    ) -> Result<Vec<&Clause>, err::AssignmentError> {
        Ok(self
            .unsatisfied_keys(assignment)?
            .into_iter()
            .map(|key| &self.clauses[key])
            .collect())
    }

    /// An assignment to the atoms of the formula, with each value decided by a fair coin.
    pub fn random_assignment<R: Rng>(&self, rng: &mut R) -> CAssignment {
        (0..self.atom_count).map(|_| rng.gen_bool(0.5)).collect()
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clauses = self
            .clauses
            .iter()
            .map(|clause| clause.to_string())
            .collect::<Vec<_>>();
        writeln!(f, "{}", clauses.join("∧\n"))
    }
}
