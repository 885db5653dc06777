//! Homogeneous growable container
//!
//! Backs both the weapons of a combatant and the combatants of a match.

pub mod sequence;

pub use sequence::Container;
