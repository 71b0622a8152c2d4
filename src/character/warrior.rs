//! Warrior
//!
//! Melee class: armor mitigates every hit, rage builds from attacking and
//! from being hit, and Execute spends it. Rage has no upper bound.

use std::fmt;

use crate::combat::log::{CombatLog, CombatLogEventType};
use crate::combat::{ActionError, ResourceKind};

use super::base::Character;
use super::constants::*;
use super::{CharacterClass, Combatant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warrior {
    base: Character,
    pub strength: u32,
    pub armor: u32,
    pub rage: u32,
}

impl Warrior {
    /// Level 1 warrior with the class defaults (150 health, 10 strength, 5 armor).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: Character::new(name, WARRIOR_DEFAULT_HEALTH),
            strength: WARRIOR_DEFAULT_STRENGTH,
            armor: WARRIOR_DEFAULT_ARMOR,
            rage: 0,
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

    pub fn with_strength(mut self, strength: u32) -> Self {
        self.strength = strength;
        self
    }

    pub fn with_armor(mut self, armor: u32) -> Self {
        self.armor = armor;
        self
    }

    /// Damage of a basic attack: `strength + level * 2`
    pub fn attack_damage(&self) -> u32 {
        self.strength
            .saturating_add(self.base.level().saturating_mul(2))
    }

    /// Damage of Execute: `strength * 2 + level * 3`
    pub fn execute_damage(&self) -> u32 {
        self.strength
            .saturating_mul(2)
            .saturating_add(self.base.level().saturating_mul(3))
    }

    /// Incoming damage after armor, never below [`MIN_MITIGATED_DAMAGE`]
    pub fn mitigate(&self, amount: u32) -> u32 {
        amount.saturating_sub(self.armor).max(MIN_MITIGATED_DAMAGE)
    }

    /// Basic weapon attack. Always grants rage, even against a defeated target.
    ///
    /// Returns the damage dealt before the target's own mitigation.
    pub fn attack(&mut self, target: &mut dyn Combatant, log: &mut CombatLog) -> u32 {
        let damage = self.attack_damage();
        log.log_for(
            CombatLogEventType::AbilityUsed,
            self.base.name(),
            format!(
                "{} attacks {} with their weapon for {} damage!",
                self.base.name(),
                target.name(),
                damage
            ),
        );
        target.take_damage(damage, log);
        self.rage = self.rage.saturating_add(RAGE_ON_ATTACK);
        damage
    }

    /// Rage-gated heavy strike. Rejected without any change below
    /// [`EXECUTE_RAGE_COST`] rage.
    pub fn execute(
        &mut self,
        target: &mut dyn Combatant,
        log: &mut CombatLog,
    ) -> Result<u32, ActionError> {
        if self.rage < EXECUTE_RAGE_COST {
            return Err(log.reject(
                self.base.name(),
                ActionError::InsufficientResource {
                    actor: self.base.name().to_string(),
                    action: "execute".to_string(),
                    resource: ResourceKind::Rage,
                    current: self.rage,
                    required: EXECUTE_RAGE_COST,
                },
            ));
        }

        let damage = self.execute_damage();
        log.log_for(
            CombatLogEventType::AbilityUsed,
            self.base.name(),
            format!(
                "{} executes a devastating blow on {} for {} damage!",
                self.base.name(),
                target.name(),
                damage
            ),
        );
        target.take_damage(damage, log);
        self.rage -= EXECUTE_RAGE_COST;
        Ok(damage)
    }
}

impl Combatant for Warrior {
    fn character(&self) -> &Character {
        &self.base
    }

    fn character_mut(&mut self) -> &mut Character {
        &mut self.base
    }

    fn class(&self) -> CharacterClass {
        CharacterClass::Warrior
    }

    /// Armor first, then the shared damage routine with what got through.
    fn take_damage(&mut self, amount: u32, log: &mut CombatLog) -> u32 {
        let mitigated = self.mitigate(amount);
        self.rage = self.rage.saturating_add(RAGE_ON_HIT);
        log.log_for(
            CombatLogEventType::Damage,
            self.base.name(),
            format!(
                "{}'s armor absorbs {} damage!",
                self.base.name(),
                amount.saturating_sub(mitigated)
            ),
        );
        self.base.take_damage(mitigated, log)
    }

    fn level_up(&mut self, log: &mut CombatLog) -> Result<(), ActionError> {
        self.base.level_up(log)?;
        self.strength = self.strength.saturating_add(WARRIOR_STRENGTH_PER_LEVEL);
        self.armor = self.armor.saturating_add(WARRIOR_ARMOR_PER_LEVEL);
        log.log_for(
            CombatLogEventType::Progression,
            self.base.name(),
            format!(
                "{}'s strength increased to {} and armor to {}!",
                self.base.name(),
                self.strength,
                self.armor
            ),
        );
        Ok(())
    }
}

impl fmt::Display for Warrior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - STR: {} - ARM: {} - RAGE: {}",
            self.base, self.strength, self.armor, self.rage
        )
    }
}
