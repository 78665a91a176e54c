/*!
(The internal representation of) an atom, aka. a 'variable'.

Atoms are numbered `1..=N` where `N` is the current variable count of a
formula. `0` is reserved as the clause terminator in the DIMACS text format
and never names an atom.

The engine only ever grows `N`, by allocating a fresh atom during a
replacement. Atoms present in the input keep their numbering in the output.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom, bounded so any literal over it fits an [i32].
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
