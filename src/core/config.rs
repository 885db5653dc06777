//! Duel configuration with documented constants
//!
//! Every tunable of the combat model and the scripted duel lives here. The
//! defaults reproduce the classic rules: a 1-in-4 critical worth 1.5x, weapon
//! wear of a tenth of the damage dealt, and the stock Sword / BASIC loadout.

use crate::core::error::{Result, SkirmishError};
use serde::Deserialize;
use std::path::Path;

/// Template for a weapon handed out by the driver
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WeaponTemplate {
    pub name: String,
    pub health: u32,
    pub damage: u32,
}

impl Default for WeaponTemplate {
    fn default() -> Self {
        Self {
            name: "Sword".into(),
            health: 100,
            damage: 10,
        }
    }
}

/// Template for the armor both combatants start in
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ArmorTemplate {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub resistance: u32,
}

impl Default for ArmorTemplate {
    fn default() -> Self {
        Self {
            name: "BASIC".into(),
            health: 10,
            max_health: 100,
            resistance: 1,
        }
    }
}

/// Configuration for combat resolution and the scripted duel
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DuelConfig {
    // === COMBAT ===
    /// Exclusive upper bound of the critical roll
    ///
    /// A roll of 0 is a critical hit, so the default of 4 gives a 25% chance.
    pub critical_roll_bound: u32,

    /// Critical multiplier numerator (3/2 = 1.5x, truncated)
    pub critical_numerator: u32,

    /// Critical multiplier denominator
    pub critical_denominator: u32,

    /// Weapon self-damage is damage dealt divided by this
    pub weapon_wear_divisor: u32,

    // === CONTAINERS ===
    /// Initial slot count of a combatant's weapon container
    pub weapon_capacity: usize,

    /// Initial slot count of a match
    pub match_capacity: usize,

    // === SCRIPTED DUEL ===
    /// Starting health of the human player
    pub player_health: u32,

    /// Starting health of the enemy
    pub enemy_health: u32,

    /// Health of the weapon the player names at the prompt
    pub starting_weapon_health: u32,

    /// Name of the enemy
    pub enemy_name: String,

    /// The enemy's weapon
    pub enemy_weapon: WeaponTemplate,

    /// Armor worn by both combatants
    pub armor: ArmorTemplate,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            critical_roll_bound: 4,
            critical_numerator: 3,
            critical_denominator: 2,
            weapon_wear_divisor: 10,

            weapon_capacity: 10,
            match_capacity: 2,

            player_health: 100,
            enemy_health: 50,
            starting_weapon_health: 100,
            enemy_name: "enemy".into(),
            enemy_weapon: WeaponTemplate::default(),
            armor: ArmorTemplate::default(),
        }
    }
}

impl DuelConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) TOML document; missing keys keep defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DuelConfig = toml::from_str(content)
            .map_err(|e| SkirmishError::ConfigError(format!("Failed to parse config TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SkirmishError::ConfigError(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.critical_roll_bound == 0 {
            return Err(SkirmishError::ConfigError(
                "critical_roll_bound must be positive".into(),
            ));
        }

        if self.critical_denominator == 0 {
            return Err(SkirmishError::ConfigError(
                "critical_denominator must be positive".into(),
            ));
        }

        // A critical never deals less than a normal hit
        if self.critical_numerator < self.critical_denominator {
            return Err(SkirmishError::ConfigError(format!(
                "critical multiplier {}/{} is below 1",
                self.critical_numerator, self.critical_denominator
            )));
        }

        if self.weapon_wear_divisor == 0 {
            return Err(SkirmishError::ConfigError(
                "weapon_wear_divisor must be positive".into(),
            ));
        }

        if self.weapon_capacity == 0 || self.match_capacity == 0 {
            return Err(SkirmishError::ConfigError("Capacities must be positive".into()));
        }

        if self.player_health == 0 || self.enemy_health == 0 || self.starting_weapon_health == 0 {
            return Err(SkirmishError::ConfigError("Starting health must be positive".into()));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<DuelConfig> = OnceLock::new();

/// Get the global duel config (initializes with defaults if not set)
pub fn config() -> &'static DuelConfig {
    CONFIG.get_or_init(DuelConfig::default)
}

/// Set the global duel config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: DuelConfig) -> std::result::Result<(), DuelConfig> {
    CONFIG.set(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(DuelConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_matches_classic_rules() {
        let config = DuelConfig::new();
        assert_eq!(config.critical_roll_bound, 4);
        assert_eq!((config.critical_numerator, config.critical_denominator), (3, 2));
        assert_eq!(config.weapon_wear_divisor, 10);
        assert_eq!(config.enemy_weapon.name, "Sword");
        assert_eq!(config.armor.name, "BASIC");
        assert_eq!(config.armor.resistance, 1);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = DuelConfig::from_toml_str(
            r#"
            enemy_health = 75

            [enemy_weapon]
            name = "Axe"
            "#,
        )
        .unwrap();
        assert_eq!(config.enemy_health, 75);
        assert_eq!(config.enemy_weapon.name, "Axe");
        assert_eq!(config.enemy_weapon.damage, 10);
        assert_eq!(config.player_health, 100);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = DuelConfig::default();
        config.weapon_wear_divisor = 0;
        assert!(config.validate().is_err());

        let mut config = DuelConfig::default();
        config.critical_numerator = 1;
        assert!(config.validate().is_err());

        assert!(DuelConfig::from_toml_str("match_capacity = 0").is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = DuelConfig::from_toml_str("critical_roll_bound = \"four\"").unwrap_err();
        assert!(matches!(err, SkirmishError::ConfigError(_)));
    }

    #[test]
    fn test_global_config_is_set_once() {
        // Either this call or an earlier config() read installs the defaults
        let _ = set_config(DuelConfig::default());
        assert_eq!(config(), &DuelConfig::default());
        assert!(set_config(DuelConfig::default()).is_err());
    }
}
