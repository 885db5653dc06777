//! Match roster
//!
//! Combatants are stored by value in insertion order. The winner is whoever
//! sits in slot 0, which is only meaningful once every defeated combatant has
//! been removed; [`Match::sole_survivor`] enforces that.

use crate::combat::Combatant;
use crate::container::Container;
use crate::core::error::Result;
use serde::Serialize;

/// A match between combatants
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    combatants: Container<Combatant>,
}

impl Match {
    pub fn new(initial_capacity: usize) -> Result<Self> {
        Ok(Self {
            combatants: Container::create(initial_capacity)?,
        })
    }

    /// Enter a copy of `combatant`
    pub fn insert(&mut self, combatant: &Combatant) -> Result<()> {
        self.combatants.push_back(combatant.clone())?;
        tracing::debug!(name = combatant.name(), count = self.count(), "combatant entered");
        Ok(())
    }

    /// Remove the first stored combatant equal to `combatant`.
    ///
    /// Equality covers every field, so a combatant whose health changed after
    /// insertion no longer matches its stored copy; use
    /// [`Match::remove_by_name`] for that.
    pub fn remove(&mut self, combatant: &Combatant) -> bool {
        let removed = self.combatants.remove_by_value(combatant);
        if removed {
            tracing::debug!(name = combatant.name(), "combatant left");
        }
        removed
    }

    /// Remove the first combatant with this name
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        let removed = self
            .combatants
            .remove_where(name, |combatant, name| combatant.name() == name);
        if removed {
            tracing::debug!(name, "combatant left");
        }
        removed
    }

    pub fn count(&self) -> usize {
        self.combatants.len()
    }

    /// Copy of the combatant at `index`
    pub fn combatant(&self, index: usize) -> Result<Combatant> {
        self.combatants.get(index)
    }

    pub fn combatants(&self) -> &Container<Combatant> {
        &self.combatants
    }

    /// Copy of slot 0, or `None` when nobody is left
    pub fn winner(&self) -> Option<Combatant> {
        self.combatants.get(0).ok()
    }

    /// The winner, but only when exactly one combatant remains
    pub fn sole_survivor(&self) -> Option<Combatant> {
        if self.count() != 1 {
            return None;
        }
        self.winner()
    }

    /// Release the roster. Safe to call twice.
    pub fn destroy(&mut self) {
        self.combatants.destroy();
    }
}
