//! Weapons carried by combatants
//!
//! A weapon has a name, a health pool that wears down as it deals damage,
//! and a flat damage value that armor resistance divides.

use crate::core::error::{Result, SkirmishError};
use serde::Serialize;
use std::fmt;

/// A named weapon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Weapon {
    name: String,
    health: u32,
    damage: u32,
}

impl Weapon {
    /// Create a weapon. Name must be non-empty, health and damage positive.
    pub fn new(name: &str, health: u32, damage: u32) -> Result<Self> {
        if name.is_empty() {
            return Err(SkirmishError::EmptyName);
        }
        if health == 0 {
            return Err(SkirmishError::ZeroHealth);
        }
        if damage == 0 {
            return Err(SkirmishError::ZeroDamage);
        }

        Ok(Self {
            name: name.to_string(),
            health,
            damage,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    /// Name comparator for container searches
    pub fn has_name(&self, name: &str) -> bool {
        self.name == name
    }

    /// Take `amount` points of wear, bottoming out at 0
    pub fn wear(&mut self, amount: u32) {
        if amount == 0 {
            return;
        }
        self.health = self.health.saturating_sub(amount);
    }

    pub fn repair(&mut self, amount: u32) {
        if amount == 0 {
            return;
        }
        self.health = self.health.saturating_add(amount);
    }

    /// Raise damage by `amount`
    pub fn enhance(&mut self, amount: u32) {
        if amount == 0 {
            return;
        }
        self.damage = self.damage.saturating_add(amount);
    }

    /// Clear the name and zero every field. Safe to call twice.
    pub fn destroy(&mut self) {
        if self.is_destroyed() {
            return;
        }
        self.name = String::new();
        self.health = 0;
        self.damage = 0;
    }

    pub fn is_destroyed(&self) -> bool {
        self.name.is_empty()
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} (health {})", self.name, self.damage, self.health)
    }
}
