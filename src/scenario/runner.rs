//! Scenario execution
//!
//! Builds the roster, runs each step against it in order and collects the
//! narration. Soft rejections are warned about and the run continues; the
//! only errors that stop a run are configuration errors found before the
//! first step.

use serde::Serialize;
use std::path::Path;

use crate::character::{Character, CharacterClass, Grimoire, Hero, Mage, Warrior};
use crate::combat::log::{CombatLog, CombatLogEventType};
use crate::combat::ActionError;
use crate::error::{self, ConfigError};

use super::config::{RosterEntry, ScenarioConfig, Step};

/// Final state of one character, for programmatic access and saved logs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombatantSummary {
    pub name: String,
    /// Class name (e.g., "Warrior", "Mage")
    pub class_name: String,
    pub level: u32,
    pub max_health: u32,
    pub final_health: u32,
    pub survived: bool,
    /// Warrior only
    pub rage: Option<u32>,
    /// Mage only: (current, max)
    pub mana: Option<(u32, u32)>,
    /// Mage only
    pub spells: Option<Vec<String>>,
    /// Actions of this character that were rejected
    pub rejections: usize,
}

/// Result of a completed scenario
#[derive(Debug, Clone)]
pub struct ScenarioResult {
    /// Characters in their final state, in roster order
    pub roster: Vec<Hero>,
    /// Everything that was narrated
    pub log: CombatLog,
    /// Number of steps executed
    pub steps_run: usize,
}

impl ScenarioResult {
    pub fn find(&self, name: &str) -> Option<&Hero> {
        self.roster.iter().find(|h| h.name() == name)
    }

    pub fn summaries(&self) -> Vec<CombatantSummary> {
        self.roster
            .iter()
            .map(|hero| {
                let character = hero.as_combatant().character();
                CombatantSummary {
                    name: character.name().to_string(),
                    class_name: hero.class().name().to_string(),
                    level: character.level(),
                    max_health: character.max_health(),
                    final_health: character.current_health(),
                    survived: character.is_alive(),
                    rage: hero.as_warrior().map(|w| w.rage),
                    mana: hero.as_mage().map(|m| (m.current_mana(), m.max_mana())),
                    spells: hero.as_mage().map(|m| m.spells().to_vec()),
                    rejections: self.log.rejections_for(character.name()),
                }
            })
            .collect()
    }

    /// Save the combat log plus final summaries as pretty JSON
    pub fn save_to_file(&self, path: &Path) -> error::Result<()> {
        #[derive(Serialize)]
        struct ScenarioMetadata {
            steps_run: usize,
            roster: Vec<CombatantSummary>,
        }

        let metadata = ScenarioMetadata {
            steps_run: self.steps_run,
            roster: self.summaries(),
        };
        self.log
            .save_to_file(&metadata, path)
            .map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })
    }
}

/// A roster ready to run a validated scenario
pub struct Scenario {
    config: ScenarioConfig,
    roster: Vec<Hero>,
    log: CombatLog,
    /// Print narration to stdout as each step completes
    echo: bool,
}

impl Scenario {
    /// Validate the configuration and create its characters.
    ///
    /// Every mage gets its own copy of `grimoire`.
    pub fn new(config: ScenarioConfig, grimoire: &Grimoire) -> error::Result<Self> {
        config.validate()?;
        let roster = config
            .roster
            .iter()
            .map(|entry| build_hero(entry, grimoire))
            .collect();

        Ok(Self {
            config,
            roster,
            log: CombatLog::default(),
            echo: false,
        })
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Run every step and return the final state
    pub fn run(mut self) -> ScenarioResult {
        self.log.clear();
        let steps = std::mem::take(&mut self.config.steps);
        let mut printed_any = false;

        for step in &steps {
            let first_new = self.log.entries.len();
            let step_no = self.log.advance_step();

            if let Err(e) = self.apply(step) {
                tracing::warn!(step = step_no, kind = ?e.kind(), "{}", e);
            }

            if self.echo {
                for entry in self.log.since(first_new) {
                    let is_header = entry.event_type == CombatLogEventType::ScenarioEvent
                        && entry.actor.is_none();
                    if is_header && printed_any {
                        println!();
                    }
                    println!("{}", entry.message);
                    printed_any = true;
                }
            }
        }

        tracing::info!(
            "Scenario complete: {} steps, {} rejected actions",
            steps.len(),
            self.log.filter_by_type(CombatLogEventType::Rejected).len()
        );

        ScenarioResult {
            roster: self.roster,
            log: self.log,
            steps_run: steps.len(),
        }
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.roster.iter().position(|h| h.name() == name)
    }

    /// Indices of an actor/target pair, or `None` if either is missing or they coincide
    fn pair(&self, actor: &str, target: &str) -> Option<(usize, usize)> {
        let a = self.index_of(actor)?;
        let b = self.index_of(target)?;
        (a != b).then_some((a, b))
    }

    fn apply(&mut self, step: &Step) -> Result<(), ActionError> {
        match step {
            Step::Section { title } => {
                self.log.log(
                    CombatLogEventType::ScenarioEvent,
                    format!("===== {} =====", title),
                );
            }
            Step::Status { actor } => {
                for hero in &self.roster {
                    if actor.as_deref().map_or(true, |name| name == hero.name()) {
                        self.log.log_for(
                            CombatLogEventType::ScenarioEvent,
                            hero.name(),
                            hero.as_combatant().describe(),
                        );
                    }
                }
            }
            Step::Attack { actor, target } => {
                let Some((a, b)) = self.pair(actor, target) else {
                    return skip(step);
                };
                let (attacker, defender) = pair_mut(&mut self.roster, a, b);
                let Some(warrior) = attacker.as_warrior_mut() else {
                    return skip(step);
                };
                warrior.attack(defender.as_combatant_mut(), &mut self.log);
            }
            Step::Execute { actor, target } => {
                let Some((a, b)) = self.pair(actor, target) else {
                    return skip(step);
                };
                let (attacker, defender) = pair_mut(&mut self.roster, a, b);
                let Some(warrior) = attacker.as_warrior_mut() else {
                    return skip(step);
                };
                warrior.execute(defender.as_combatant_mut(), &mut self.log)?;
            }
            Step::CastSpell {
                actor,
                spell,
                target,
            } => {
                let Some((a, b)) = self.pair(actor, target) else {
                    return skip(step);
                };
                let (caster, victim) = pair_mut(&mut self.roster, a, b);
                let Some(mage) = caster.as_mage_mut() else {
                    return skip(step);
                };
                mage.cast_spell(spell, victim.as_combatant_mut(), &mut self.log)?;
            }
            Step::TakeDamage { target, amount } => {
                let Some(i) = self.index_of(target) else {
                    return skip(step);
                };
                self.roster[i]
                    .as_combatant_mut()
                    .take_damage(*amount, &mut self.log);
            }
            Step::Heal { target, amount } => {
                let Some(i) = self.index_of(target) else {
                    return skip(step);
                };
                self.roster[i]
                    .as_combatant_mut()
                    .heal(*amount, &mut self.log)?;
            }
            Step::LevelUp { actor } => {
                let Some(i) = self.index_of(actor) else {
                    return skip(step);
                };
                self.roster[i].as_combatant_mut().level_up(&mut self.log)?;
            }
            Step::Meditate { actor } => {
                let Some(mage) = self.index_of(actor).and_then(|i| self.roster[i].as_mage_mut())
                else {
                    return skip(step);
                };
                mage.meditate(&mut self.log);
            }
            Step::LearnSpell { actor, spell } => {
                let Some(mage) = self.index_of(actor).and_then(|i| self.roster[i].as_mage_mut())
                else {
                    return skip(step);
                };
                mage.learn_spell(spell, &mut self.log)?;
            }
        }
        Ok(())
    }
}

/// Steps are validated before the run, so this only fires if the roster
/// and the steps disagree after construction.
fn skip(step: &Step) -> Result<(), ActionError> {
    tracing::error!(?step, "step does not match the roster, skipping");
    Ok(())
}

/// Borrow two distinct roster slots mutably. `a` and `b` must differ.
fn pair_mut(roster: &mut [Hero], a: usize, b: usize) -> (&mut Hero, &mut Hero) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = roster.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = roster.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

fn build_hero(entry: &RosterEntry, grimoire: &Grimoire) -> Hero {
    let level = entry.level.unwrap_or(1);
    match entry.class {
        CharacterClass::Base => {
            Character::with_level(entry.name.as_str(), entry.health.unwrap_or(1), level).into()
        }
        CharacterClass::Warrior => {
            let mut warrior = Warrior::new(entry.name.as_str()).with_level(level);
            if let Some(health) = entry.health {
                warrior = warrior.with_health(health);
            }
            if let Some(strength) = entry.strength {
                warrior = warrior.with_strength(strength);
            }
            if let Some(armor) = entry.armor {
                warrior = warrior.with_armor(armor);
            }
            warrior.into()
        }
        CharacterClass::Mage => {
            let mut mage = Mage::with_grimoire(entry.name.as_str(), grimoire.clone()).with_level(level);
            if let Some(health) = entry.health {
                mage = mage.with_health(health);
            }
            if let Some(intelligence) = entry.intelligence {
                mage = mage.with_intelligence(intelligence);
            }
            if let Some(mana) = entry.mana {
                mage = mage.with_mana(mana);
            }
            mage.into()
        }
    }
}

/// Run a scenario with narration printed to stdout
pub fn run_scenario(config: ScenarioConfig, grimoire: &Grimoire) -> error::Result<ScenarioResult> {
    tracing::info!(
        "Starting scenario: {} characters, {} steps",
        config.roster.len(),
        config.steps.len()
    );
    Ok(Scenario::new(config, grimoire)?.with_echo(true).run())
}
