//! Skirmish - turn-based duels over a homogeneous growable container

pub mod arena;
pub mod combat;
pub mod command;
pub mod container;
pub mod core;
