//! Combatants: a name, a health pool, a weapon rack and worn armor
//!
//! A combatant owns its weapons container and its armor by value. Attacks
//! resolve against the target's armor and write the weapon's wear back into
//! the attacker's container.

use crate::combat::armor::Armor;
use crate::combat::resolution::{resolve_hit, Hit};
use crate::combat::weapons::Weapon;
use crate::container::Container;
use crate::core::config::{config, DuelConfig};
use crate::core::error::{Result, SkirmishError};
use crate::core::rng::global;
use rand::RngCore;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Operation accepted by [`Combatant::update_weapons`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaponOp {
    /// Append to the weapon rack
    Add,
    /// Remove the first equal weapon
    Remove,
}

impl FromStr for WeaponOp {
    type Err = SkirmishError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "add" => Ok(WeaponOp::Add),
            "remove" => Ok(WeaponOp::Remove),
            other => Err(SkirmishError::UnknownOperation(other.to_string())),
        }
    }
}

/// What an attack did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttackReport {
    pub weapon: String,
    pub hit: Hit,
    /// Target health after the hit
    pub target_health: u32,
    /// Weapon health after wear
    pub weapon_health: u32,
}

/// A participant in a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Combatant {
    name: String,
    health: u32,
    weapons: Container<Weapon>,
    armor: Armor,
    wearing_armor: bool,
}

impl Combatant {
    /// Create a combatant, taking ownership of its weapons and armor.
    pub fn new(name: &str, health: u32, weapons: Container<Weapon>, armor: Armor) -> Result<Self> {
        if name.is_empty() {
            return Err(SkirmishError::EmptyName);
        }
        if health == 0 {
            return Err(SkirmishError::ZeroHealth);
        }

        Ok(Self {
            name: name.to_string(),
            health,
            weapons,
            armor,
            wearing_armor: true,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn weapons(&self) -> &Container<Weapon> {
        &self.weapons
    }

    pub fn armor(&self) -> &Armor {
        &self.armor
    }

    pub fn is_wearing_armor(&self) -> bool {
        self.wearing_armor
    }

    /// Attack `target` with the named weapon, drawing from the process-wide
    /// RNG and the global config.
    pub fn attack(&mut self, weapon_name: &str, target: &mut Combatant) -> Option<AttackReport> {
        global::with(|rng| self.attack_with(rng, config(), weapon_name, target))
    }

    /// Attack `target` with the named weapon using an explicit RNG.
    ///
    /// Returns `None` without drawing when the weapon name is empty, the
    /// target is already down, or the attacker has no weapon of that name.
    pub fn attack_with<R: RngCore + ?Sized>(
        &mut self,
        rng: &mut R,
        config: &DuelConfig,
        weapon_name: &str,
        target: &mut Combatant,
    ) -> Option<AttackReport> {
        if weapon_name.is_empty() {
            tracing::trace!(attacker = %self.name, "attack ignored: empty weapon name");
            return None;
        }
        if target.health == 0 {
            tracing::trace!(target = %target.name, "attack ignored: target already down");
            return None;
        }
        let Some(index) = self.weapons.position(weapon_name, Weapon::has_name) else {
            tracing::trace!(attacker = %self.name, weapon_name, "attack ignored: weapon not carried");
            return None;
        };

        let mut weapon = self.weapons.get(index).ok()?;
        let hit = resolve_hit(rng, weapon.damage(), target.armor.resistance(), config);

        target.health = target.health.saturating_sub(hit.dealt);
        weapon.wear(hit.weapon_wear);
        let weapon_health = weapon.health();
        let weapon_name = weapon.name().to_string();
        self.weapons.replace(index, weapon).ok()?;

        tracing::debug!(
            attacker = %self.name,
            target = %target.name,
            weapon = %weapon_name,
            dealt = hit.dealt,
            critical = hit.critical,
            target_health = target.health,
            "attack resolved"
        );

        Some(AttackReport {
            weapon: weapon_name,
            hit,
            target_health: target.health,
            weapon_health,
        })
    }

    /// Add `amount` health. There is no stored maximum.
    pub fn heal(&mut self, amount: u32) {
        if amount == 0 {
            return;
        }
        self.health = self.health.saturating_add(amount);
    }

    /// Put on a copy of `armor`. Only succeeds when not already wearing armor.
    pub fn equip_armor(&mut self, armor: &Armor) -> bool {
        if self.wearing_armor {
            return false;
        }
        self.armor = armor.clone();
        self.wearing_armor = true;
        true
    }

    /// Apply a textual weapon operation (`"add"` or `"remove"`).
    ///
    /// Returns whether the rack changed. Unknown tags fail with
    /// [`SkirmishError::UnknownOperation`] and leave the rack untouched.
    pub fn update_weapons(&mut self, op: &str, weapon: &Weapon) -> Result<bool> {
        match op.parse::<WeaponOp>()? {
            WeaponOp::Add => {
                self.weapons.push_back(weapon.clone())?;
                Ok(true)
            }
            WeaponOp::Remove => Ok(self.weapons.remove_by_value(weapon)),
        }
    }

    /// Fuse two combatants: names joined with `:`, health summed, weapons
    /// interleaved, armor combined.
    pub fn combined(a: &Combatant, b: &Combatant) -> Result<Combatant> {
        let longest = a.weapons.len().max(b.weapons.len());
        let mut weapons = Container::create((longest * 2).max(1))?;
        for i in 0..longest {
            if let Ok(weapon) = a.weapons.get(i) {
                weapons.push_back(weapon)?;
            }
            if let Ok(weapon) = b.weapons.get(i) {
                weapons.push_back(weapon)?;
            }
        }

        Ok(Combatant {
            name: format!("{}:{}", a.name, b.name),
            health: a.health.saturating_add(b.health),
            weapons,
            armor: Armor::combined(&a.armor, &b.armor),
            wearing_armor: true,
        })
    }

    /// Tear down weapons, armor and name. Safe to call twice.
    pub fn destroy(&mut self) {
        if self.is_destroyed() {
            return;
        }
        self.weapons.destroy();
        self.armor.destroy();
        self.name = String::new();
        self.health = 0;
        self.wearing_armor = false;
    }

    pub fn is_destroyed(&self) -> bool {
        self.name.is_empty()
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----GETTING STATS FOR {}----", self.name)?;
        writeln!(f, "Health: {}", self.health)?;
        for weapon in &self.weapons {
            writeln!(f, "{}", weapon)?;
        }
        writeln!(f, "Total weapon size: {}", self.weapons.len())?;
        write!(f, "----STATS END----")
    }
}
