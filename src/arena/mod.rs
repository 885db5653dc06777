//! Matches: the roster of combatants and the winner rule

pub mod roster;

pub use roster::Match;
