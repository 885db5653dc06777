pub mod armor;
pub mod combatant;
pub mod resolution;
pub mod weapons;

pub use armor::Armor;
pub use combatant::{AttackReport, Combatant, WeaponOp};
pub use resolution::{base_damage, critical_damage, resolve_hit, resolve_with_roll, Hit};
pub use weapons::Weapon;
