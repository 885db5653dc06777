//! Damage resolution
//!
//! Damage is the weapon's damage divided by the target's resistance. One roll
//! of `bounded(critical_roll_bound)` decides a critical: a roll of 0 scales the
//! base by the critical multiplier, truncated.

use crate::core::config::DuelConfig;
use crate::core::rng::bounded_u32;
use rand::RngCore;
use serde::Serialize;

/// Outcome of a single resolved hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hit {
    /// Value drawn for the critical check
    pub roll: u32,
    /// `damage / resistance`
    pub base: u32,
    /// Damage actually applied to the target
    pub dealt: u32,
    pub critical: bool,
    /// Self-damage taken by the weapon
    pub weapon_wear: u32,
}

/// Damage before the critical check. Zero when either input is zero.
pub fn base_damage(weapon_damage: u32, resistance: u32) -> u32 {
    if weapon_damage == 0 || resistance == 0 {
        return 0;
    }
    weapon_damage / resistance
}

/// Scale `base` by the configured critical multiplier, truncating
pub fn critical_damage(base: u32, config: &DuelConfig) -> u32 {
    let scaled = u64::from(base) * u64::from(config.critical_numerator)
        / u64::from(config.critical_denominator.max(1));
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Apply a given roll. Pure: no RNG involved.
pub fn resolve_with_roll(weapon_damage: u32, resistance: u32, roll: u32, config: &DuelConfig) -> Hit {
    let base = base_damage(weapon_damage, resistance);
    let critical = roll == 0;
    let dealt = if critical { critical_damage(base, config) } else { base };

    Hit {
        roll,
        base,
        dealt,
        critical,
        weapon_wear: dealt / config.weapon_wear_divisor.max(1),
    }
}

/// Roll for a critical and resolve the hit.
///
/// When either input is zero nothing is drawn and nothing is dealt.
pub fn resolve_hit<R: RngCore + ?Sized>(
    rng: &mut R,
    weapon_damage: u32,
    resistance: u32,
    config: &DuelConfig,
) -> Hit {
    if weapon_damage == 0 || resistance == 0 {
        return Hit {
            roll: 0,
            base: 0,
            dealt: 0,
            critical: false,
            weapon_wear: 0,
        };
    }
    let roll = bounded_u32(rng, config.critical_roll_bound);
    resolve_with_roll(weapon_damage, resistance, roll, config)
}
