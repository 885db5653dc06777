//! Scripted duel - the interactive player versus a stock enemy
//!
//! The player names themselves and a weapon, the enemy strikes first with its
//! configured weapon, then the player answers with a weapon of their choice.
//! Anyone brought to zero health leaves the match; slot 0 wins.

use crate::arena::Match;
use crate::combat::{Armor, AttackReport, Combatant, Weapon};
use crate::command::prompt::{parse_u32, read_line};
use crate::container::Container;
use crate::core::config::{ArmorTemplate, DuelConfig, WeaponTemplate};
use crate::core::error::Result;
use crate::core::rng::Pcg32;
use serde::Serialize;
use std::io::{BufRead, Write};

/// Line printed when nobody is left standing
pub const NO_WINNER_LINE: &str = "No body won!";

/// Summary of a finished duel
#[derive(Debug, Clone, Serialize)]
pub struct DuelOutcome {
    pub winner: Option<String>,
    pub player: Combatant,
    pub enemy: Combatant,
    /// Attacks that landed, in order
    pub attacks: Vec<AttackReport>,
}

/// Announcement for the winner slot
pub fn winner_line(winner: Option<&Combatant>) -> String {
    match winner {
        Some(combatant) if !combatant.name().is_empty() => {
            format!("{} has won!", combatant.name())
        }
        _ => NO_WINNER_LINE.to_string(),
    }
}

/// Runs the scripted duel against an explicit RNG
#[derive(Debug, Clone)]
pub struct DuelRunner {
    config: DuelConfig,
    rng: Pcg32,
    show_stats: bool,
}

impl DuelRunner {
    pub fn new(config: DuelConfig, rng: Pcg32) -> Self {
        Self {
            config,
            rng,
            show_stats: false,
        }
    }

    /// Dump combatant stats before and after the exchange
    pub fn with_stats(mut self, show_stats: bool) -> Self {
        self.show_stats = show_stats;
        self
    }

    pub fn rng(&self) -> &Pcg32 {
        &self.rng
    }

    /// Play one duel, prompting on `output` and reading answers from `input`.
    ///
    /// Fails on unreadable input, a malformed weapon damage, or answers that
    /// cannot build a valid weapon or combatant.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<DuelOutcome> {
        let player_name = read_line(input, output, "Enter your player name: ")?;
        let weapon_name = read_line(input, output, "Enter weapon name: ")?;
        let damage_text = read_line(input, output, "Enter weapon damage: ")?;
        let damage = parse_u32(&damage_text)?;

        let weapon = Weapon::new(&weapon_name, self.config.starting_weapon_health, damage)?;
        let mut player = self.build_combatant(&player_name, self.config.player_health, weapon)?;

        let enemy_weapon = build_weapon(&self.config.enemy_weapon)?;
        let enemy_weapon_name = enemy_weapon.name().to_string();
        let enemy_name = self.config.enemy_name.clone();
        let mut enemy = self.build_combatant(&enemy_name, self.config.enemy_health, enemy_weapon)?;

        let mut game = Match::new(self.config.match_capacity)?;
        game.insert(&player)?;
        game.insert(&enemy)?;

        if self.show_stats {
            writeln!(output, "{}", player)?;
            writeln!(output, "{}", enemy)?;
        }

        let mut attacks = Vec::new();

        if let Some(report) = enemy.attack_with(&mut self.rng, &self.config, &enemy_weapon_name, &mut player) {
            attacks.push(report);
        }
        if !player.is_alive() {
            game.remove_by_name(player.name());
        }

        // A downed player does not get a turn
        if player.is_alive() {
            let choice = read_line(input, output, "Enter the name of the weapon you want to use: ")?;
            if let Some(report) = player.attack_with(&mut self.rng, &self.config, &choice, &mut enemy) {
                attacks.push(report);
            }
            if !enemy.is_alive() {
                game.remove_by_name(enemy.name());
            }
        }

        if self.show_stats {
            writeln!(output, "{}", player)?;
            writeln!(output, "{}", enemy)?;
        }

        let winner = game.winner();
        writeln!(output, "{}", winner_line(winner.as_ref()))?;
        tracing::info!(
            winner = winner.as_ref().map(Combatant::name).unwrap_or("nobody"),
            attacks = attacks.len(),
            "duel finished"
        );

        Ok(DuelOutcome {
            winner: winner.map(|w| w.name().to_string()),
            player,
            enemy,
            attacks,
        })
    }

    fn build_combatant(&self, name: &str, health: u32, weapon: Weapon) -> Result<Combatant> {
        let mut weapons = Container::create(self.config.weapon_capacity)?;
        weapons.push_back(weapon)?;
        Combatant::new(name, health, weapons, build_armor(&self.config.armor)?)
    }
}

fn build_weapon(template: &WeaponTemplate) -> Result<Weapon> {
    Weapon::new(&template.name, template.health, template.damage)
}

fn build_armor(template: &ArmorTemplate) -> Result<Armor> {
    Armor::new(&template.name, template.health, template.max_health, template.resistance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::SkirmishError;
    use std::io::Cursor;

    fn run(script: &str, config: DuelConfig) -> (Result<DuelOutcome>, String) {
        let mut runner = DuelRunner::new(config, Pcg32::default());
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        let result = runner.run(&mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_both_standing_slot_zero_wins() {
        let (result, output) = run("cata\nFist\n8\nFist\n", DuelConfig::default());
        let outcome = result.unwrap();

        // Default stream rolls 1 then 3: no criticals
        assert_eq!(outcome.player.health(), 90);
        assert_eq!(outcome.enemy.health(), 42);
        assert_eq!(outcome.attacks.len(), 2);
        assert_eq!(outcome.winner.as_deref(), Some("cata"));
        assert!(output.ends_with("cata has won!\n"));
    }

    #[test]
    fn test_player_knocks_out_enemy() {
        let (result, _) = run("cata\nAxe\n60\nAxe\n", DuelConfig::default());
        let outcome = result.unwrap();
        assert_eq!(outcome.enemy.health(), 0);
        assert_eq!(outcome.winner.as_deref(), Some("cata"));
    }

    #[test]
    fn test_enemy_knocks_out_player() {
        let mut config = DuelConfig::default();
        config.enemy_weapon.damage = 500;
        let (result, output) = run("cata\nFist\n8\n", config);
        let outcome = result.unwrap();
        assert_eq!(outcome.player.health(), 0);
        assert_eq!(outcome.attacks.len(), 1);
        assert_eq!(outcome.winner.as_deref(), Some("enemy"));
        assert!(!output.contains("Enter the name of the weapon"));
        assert!(output.ends_with("enemy has won!\n"));
    }

    #[test]
    fn test_unknown_weapon_choice_is_ignored() {
        let (result, _) = run("cata\nFist\n8\nBazooka\n", DuelConfig::default());
        let outcome = result.unwrap();
        assert_eq!(outcome.attacks.len(), 1);
        assert_eq!(outcome.enemy.health(), 50);
    }

    #[test]
    fn test_bad_damage_fails() {
        let (result, _) = run("cata\nFist\n8x\nFist\n", DuelConfig::default());
        assert!(matches!(result, Err(SkirmishError::InvalidNumber(_))));

        let (result, _) = run("cata\nFist\n4294967296\n", DuelConfig::default());
        assert!(matches!(result, Err(SkirmishError::NumberOutOfRange(_))));
    }

    #[test]
    fn test_empty_player_name_fails() {
        let (result, _) = run("\nFist\n8\n", DuelConfig::default());
        assert!(matches!(result, Err(SkirmishError::EmptyName)));
    }

    #[test]
    fn test_stats_are_printed() {
        let mut runner = DuelRunner::new(DuelConfig::default(), Pcg32::default()).with_stats(true);
        let mut input = Cursor::new("cata\nFist\n8\nFist\n");
        let mut output = Vec::new();
        runner.run(&mut input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("----GETTING STATS FOR cata----").count(), 2);
        assert!(text.contains("Sword:10 (health 99)"));
    }

    #[test]
    fn test_winner_line() {
        assert_eq!(winner_line(None), "No body won!");
    }
}
