/*!
A (total) function from atoms to truth values.

The canonical representation of an assignment is a vector of booleans *v* whose length is the number of atoms of some formula, such that *v*\[a\] is the value of atom *a*.

The trait is implemented for slices of booleans, and so is available on anything which dereferences to such a slice.

```rust
# use walksat_lm::structures::assignment::{self, Assignment};
let assignment = assignment::from_bitstring("010").unwrap();

assert_eq!(assignment.value_of(1), Some(true));
assert_eq!(assignment.value_of(3), None);
assert_eq!(assignment.bitstring(), "010");
```

Externally, an assignment is often written as a bitstring, with the character at index *i* being the value of atom *i*.
The bitstring is kept for interaction (tests, reports, etc.) and all internal use is through the slice.

Each search owns exactly one assignment, and revises it one [flip](Assignment::flip) at a time.
*/

use crate::{
    structures::atom::Atom,
    types::err::{self},
};

/// The canonical representation of an assignment.
pub type CAssignment = Vec<bool>;

/// Something which stores a value for each atom of a formula.
pub trait Assignment {
    /// The value of an atom, or otherwise nothing if the atom is not part of the assignment.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// A count of all the atoms in the assignment.
    fn atom_count(&self) -> usize;

    /// Inverts the value of the given atom.
    fn flip(&mut self, atom: Atom) -> Result<(), err::AssignmentError>;

    /// The assignment written as a string of '0's and '1's.
    fn bitstring(&self) -> String;
}

impl Assignment for [bool] {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied()
    }

    fn atom_count(&self) -> usize {
        self.len()
    }

    fn flip(&mut self, atom: Atom) -> Result<(), err::AssignmentError> {
        match self.get_mut(atom as usize) {
            Some(value) => {
                *value = !*value;
                Ok(())
            }
            None => Err(err::AssignmentError::AtomOutOfRange(atom)),
        }
    }

    fn bitstring(&self) -> String {
        self.iter()
            .map(|value| match value {
                true => '1',
                false => '0',
            })
            .collect()
    }
}

/// An assignment from a bitstring, or the position of the first character which is not '0' or '1'.
pub fn from_bitstring(bits: &str) -> Result<CAssignment, err::AssignmentError> {
    bits.chars()
        .enumerate()
        .map(|(position, bit)| match bit {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(err::AssignmentError::Bitstring(position)),
        })
        .collect()
}
