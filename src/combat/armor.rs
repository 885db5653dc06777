//! Armor worn by combatants
//!
//! Armor divides incoming damage by its resistance. Its health is bounded by
//! a stored maximum; attacks do not currently consume it.

use crate::core::error::{Result, SkirmishError};
use serde::Serialize;
use std::fmt;

/// A named piece of armor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Armor {
    name: String,
    health: u32,
    max_health: u32,
    resistance: u32,
}

impl Armor {
    /// Create armor. Requires a name, `0 < health <= max_health` and a
    /// positive resistance.
    pub fn new(name: &str, health: u32, max_health: u32, resistance: u32) -> Result<Self> {
        if name.is_empty() {
            return Err(SkirmishError::EmptyName);
        }
        if health == 0 || max_health == 0 {
            return Err(SkirmishError::ZeroHealth);
        }
        if health > max_health {
            return Err(SkirmishError::HealthExceedsMax { health, max_health });
        }
        if resistance == 0 {
            return Err(SkirmishError::ZeroResistance);
        }

        Ok(Self {
            name: name.to_string(),
            health,
            max_health,
            resistance,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn resistance(&self) -> u32 {
        self.resistance
    }

    /// Replace resistance, but only with a strictly higher value
    pub fn enhance(&mut self, new_resistance: u32) {
        if new_resistance <= self.resistance {
            return;
        }
        self.resistance = new_resistance;
    }

    /// Restore health, clamped to `max_health`
    pub fn repair(&mut self, amount: u32) {
        if amount == 0 || self.health == self.max_health {
            return;
        }
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    /// Fuse two pieces: names joined with `:`, numeric fields summed
    pub fn combined(a: &Armor, b: &Armor) -> Armor {
        Armor {
            name: format!("{}:{}", a.name, b.name),
            health: a.health.saturating_add(b.health),
            max_health: a.max_health.saturating_add(b.max_health),
            resistance: a.resistance.saturating_add(b.resistance),
        }
    }

    /// Clear the name and zero every field. Safe to call twice.
    pub fn destroy(&mut self) {
        if self.is_destroyed() {
            return;
        }
        self.name = String::new();
        self.health = 0;
        self.max_health = 0;
        self.resistance = 0;
    }

    pub fn is_destroyed(&self) -> bool {
        self.name.is_empty()
    }
}

impl fmt::Display for Armor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Armor name: {}", self.name)?;
        writeln!(f, "Armor health: {}", self.health)?;
        writeln!(f, "Armor max health: {}", self.max_health)?;
        write!(f, "Armor resistance: {}", self.resistance)
    }
}
