//! Mage
//!
//! Caster class: spends mana on spells from its known list, regains it by
//! meditating or levelling up, and learns new spells from its grimoire.

use smallvec::SmallVec;
use std::fmt;

use crate::combat::log::{CombatLog, CombatLogEventType};
use crate::combat::{ActionError, ResourceKind};

use super::base::Character;
use super::constants::*;
use super::spells::{Grimoire, SpellEffect};
use super::{CharacterClass, Combatant};

/// Outcome of a successful cast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellCast {
    pub spell: String,
    pub mana_spent: u32,
    pub effect: SpellEffect,
    /// Damage sent to the target, before the target's own mitigation
    pub damage: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mage {
    base: Character,
    pub intelligence: u32,
    max_mana: u32,
    current_mana: u32,
    spells: SmallVec<[String; 6]>,
    grimoire: Grimoire,
}

impl Mage {
    /// Level 1 mage with the class defaults and the default grimoire.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_grimoire(name, Grimoire::default())
    }

    /// Level 1 mage with the class defaults, knowing the grimoire's starting spells.
    pub fn with_grimoire(name: impl Into<String>, grimoire: Grimoire) -> Self {
        let mut spells: SmallVec<[String; 6]> = SmallVec::new();
        for spell in &grimoire.starting_spells {
            if !spells.contains(spell) {
                spells.push(spell.clone());
            }
        }

        Self {
            base: Character::new(name, MAGE_DEFAULT_HEALTH),
            intelligence: MAGE_DEFAULT_INTELLIGENCE,
            max_mana: MAGE_DEFAULT_MANA,
            current_mana: MAGE_DEFAULT_MANA,
            spells,
            grimoire,
        }
    }

    pub fn with_health(mut self, health: u32) -> Self {
        self.base = Character::with_level(self.base.name(), health, self.base.level());
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.base = Character::with_level(self.base.name(), self.base.max_health(), level);
        self
    }

    pub fn with_intelligence(mut self, intelligence: u32) -> Self {
        self.intelligence = intelligence;
        self
    }

    /// Set max mana and fill the pool.
    pub fn with_mana(mut self, mana: u32) -> Self {
        self.max_mana = mana;
        self.current_mana = mana;
        self
    }

    pub fn max_mana(&self) -> u32 {
        self.max_mana
    }

    pub fn current_mana(&self) -> u32 {
        self.current_mana
    }

    /// Known spells in the order they were learned
    pub fn spells(&self) -> &[String] {
        &self.spells
    }

    pub fn knows(&self, spell_name: &str) -> bool {
        self.spells.iter().any(|s| s == spell_name)
    }

    pub fn grimoire(&self) -> &Grimoire {
        &self.grimoire
    }

    /// Cast a known spell at `target`.
    ///
    /// Checks, in order: the spell is known, it has a mana cost, there is
    /// enough mana. Any failed check rejects the cast without spending mana.
    pub fn cast_spell(
        &mut self,
        spell_name: &str,
        target: &mut dyn Combatant,
        log: &mut CombatLog,
    ) -> Result<SpellCast, ActionError> {
        let name = self.base.name().to_string();

        if !self.knows(spell_name) {
            return Err(log.reject(
                &name,
                ActionError::UnknownSpell {
                    actor: name.clone(),
                    spell: spell_name.to_string(),
                },
            ));
        }

        let Some(mana_cost) = self.grimoire.mana_cost(spell_name) else {
            return Err(log.reject(
                &name,
                ActionError::Uncosted {
                    spell: spell_name.to_string(),
                },
            ));
        };

        if self.current_mana < mana_cost {
            return Err(log.reject(
                &name,
                ActionError::InsufficientResource {
                    actor: name.clone(),
                    action: format!("cast {}", spell_name),
                    resource: ResourceKind::Mana,
                    current: self.current_mana,
                    required: mana_cost,
                },
            ));
        }

        self.current_mana -= mana_cost;

        let effect = self.grimoire.effect(spell_name);
        let damage = effect.damage(self.intelligence, self.base.level());
        match (damage, effect.flavor(target.name())) {
            (Some(damage), Some(flavor)) => {
                log.log_for(
                    CombatLogEventType::AbilityUsed,
                    &name,
                    format!(
                        "{} casts {}, {} for {} damage!",
                        name, spell_name, flavor, damage
                    ),
                );
                target.take_damage(damage, log);
            }
            _ => {
                log.log_for(
                    CombatLogEventType::AbilityUsed,
                    &name,
                    format!("{} casts {}.", name, spell_name),
                );
            }
        }

        log.log_for(
            CombatLogEventType::Resource,
            &name,
            format!(
                "{}'s remaining mana: {}/{}",
                name, self.current_mana, self.max_mana
            ),
        );

        Ok(SpellCast {
            spell: spell_name.to_string(),
            mana_spent: mana_cost,
            effect,
            damage,
        })
    }

    /// Recover 30% of max mana (floored), capped at max. Works even when defeated.
    ///
    /// Returns the mana actually gained.
    pub fn meditate(&mut self, log: &mut CombatLog) -> u32 {
        let recover = scale(self.max_mana, MEDITATION_RESTORE);
        let before = self.current_mana;
        self.current_mana = self.current_mana.saturating_add(recover).min(self.max_mana);
        log.log_for(
            CombatLogEventType::Resource,
            self.base.name(),
            format!(
                "{} meditates and recovers {} mana. Current mana: {}/{}",
                self.base.name(),
                recover,
                self.current_mana,
                self.max_mana
            ),
        );
        self.current_mana - before
    }

    /// Add a spell from the grimoire to the known list.
    pub fn learn_spell(&mut self, spell_name: &str, log: &mut CombatLog) -> Result<(), ActionError> {
        let name = self.base.name().to_string();

        if self.knows(spell_name) {
            return Err(log.reject(
                &name,
                ActionError::AlreadyKnown {
                    actor: name.clone(),
                    spell: spell_name.to_string(),
                },
            ));
        }

        if !self.grimoire.is_learnable(spell_name) {
            return Err(log.reject(
                &name,
                ActionError::NotLearnable {
                    spell: spell_name.to_string(),
                },
            ));
        }

        self.spells.push(spell_name.to_string());
        log.log_for(
            CombatLogEventType::Progression,
            &name,
            format!("{} has learned the spell: {}!", name, spell_name),
        );
        Ok(())
    }
}

impl Combatant for Mage {
    fn character(&self) -> &Character {
        &self.base
    }

    fn character_mut(&mut self) -> &mut Character {
        &mut self.base
    }

    fn class(&self) -> CharacterClass {
        CharacterClass::Mage
    }

    fn level_up(&mut self, log: &mut CombatLog) -> Result<(), ActionError> {
        self.base.level_up(log)?;
        self.intelligence = self
            .intelligence
            .saturating_add(MAGE_INTELLIGENCE_PER_LEVEL);
        self.max_mana = self.max_mana.saturating_add(MAGE_MANA_PER_LEVEL);
        self.current_mana = self.max_mana;
        log.log_for(
            CombatLogEventType::Progression,
            self.base.name(),
            format!(
                "{}'s intelligence increased to {} and max mana to {}!",
                self.base.name(),
                self.intelligence,
                self.max_mana
            ),
        );
        Ok(())
    }
}

impl fmt::Display for Mage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - INT: {} - MANA: {}/{} - SPELLS: {}",
            self.base,
            self.intelligence,
            self.current_mana,
            self.max_mana,
            self.spells.len()
        )
    }
}
