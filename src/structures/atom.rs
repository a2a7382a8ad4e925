/*!
(The representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

```rust
# use walksat_lm::structures::atom::Atom;
let m = 12;
let atoms = (0..m).collect::<Vec<Atom>>();
```

That the atoms are [0..*m*) for some *m*, and so the value of an atom is found by using the atom as an index into an [assignment](crate::structures::assignment).

Unlike in complete solvers, there is no reserved 'top' atom, as every atom in a formula is valued by every assignment considered during a search.

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;
