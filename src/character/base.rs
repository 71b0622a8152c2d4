//! Base character
//!
//! The shared health/level component. Warriors and mages embed one of these
//! and call into it after their own class-specific pre-step.

use std::fmt;

use crate::combat::log::{CombatLog, CombatLogEventType};
use crate::combat::ActionError;

use super::constants::{scale, LEVEL_HEALTH_GROWTH};

/// Identity, health pool and level shared by every class.
///
/// `current_health` is kept within `[0, max_health]` by every mutation, and
/// once the character is defeated it stays defeated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    name: String,
    max_health: u32,
    current_health: u32,
    level: u32,
    is_alive: bool,
}

impl Character {
    /// Create a level 1 character at full health.
    pub fn new(name: impl Into<String>, health: u32) -> Self {
        Self::with_level(name, health, 1)
    }

    /// Create a character at full health on the given level (clamped to at least 1).
    pub fn with_level(name: impl Into<String>, health: u32, level: u32) -> Self {
        Self {
            name: name.into(),
            max_health: health,
            current_health: health,
            level: level.max(1),
            is_alive: health > 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn current_health(&self) -> u32 {
        self.current_health
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_alive(&self) -> bool {
        self.is_alive
    }

    /// Apply `amount` damage and return the health actually lost.
    ///
    /// Does not check whether the character is already defeated; hitting a
    /// defeated character loses nothing and reports the defeat again.
    pub fn take_damage(&mut self, amount: u32, log: &mut CombatLog) -> u32 {
        let before = self.current_health;
        self.current_health = self.current_health.saturating_sub(amount);

        if self.current_health == 0 {
            self.is_alive = false;
            log.log_for(
                CombatLogEventType::Death,
                &self.name,
                format!("{} has been defeated!", self.name),
            );
        } else {
            log.log_for(
                CombatLogEventType::Damage,
                &self.name,
                format!(
                    "{} takes {} damage! Health: {}/{}",
                    self.name, amount, self.current_health, self.max_health
                ),
            );
        }

        self.debug_validate();
        before - self.current_health
    }

    /// Restore up to `amount` health and return the health actually gained.
    pub fn heal(&mut self, amount: u32, log: &mut CombatLog) -> Result<u32, ActionError> {
        if !self.is_alive {
            return Err(log.reject(
                &self.name,
                ActionError::Defeated {
                    actor: self.name.clone(),
                    action: "be healed",
                },
            ));
        }

        let before = self.current_health;
        self.current_health = self
            .current_health
            .saturating_add(amount)
            .min(self.max_health);
        log.log_for(
            CombatLogEventType::Healing,
            &self.name,
            format!(
                "{} heals for {}! Health: {}/{}",
                self.name, amount, self.current_health, self.max_health
            ),
        );

        self.debug_validate();
        Ok(self.current_health - before)
    }

    /// Gain a level: +10% max health (floored) and a full heal.
    pub fn level_up(&mut self, log: &mut CombatLog) -> Result<(), ActionError> {
        if !self.is_alive {
            return Err(log.reject(
                &self.name,
                ActionError::Defeated {
                    actor: self.name.clone(),
                    action: "level up",
                },
            ));
        }

        self.level = self.level.saturating_add(1);
        self.max_health = scale(self.max_health, LEVEL_HEALTH_GROWTH);
        self.current_health = self.max_health;
        log.log_for(
            CombatLogEventType::Progression,
            &self.name,
            format!(
                "{} levels up to level {}! Max health increased to {}",
                self.name, self.level, self.max_health
            ),
        );
        tracing::debug!(name = %self.name, level = self.level, "level up");

        self.debug_validate();
        Ok(())
    }

    #[inline]
    fn debug_validate(&self) {
        debug_assert!(
            self.current_health <= self.max_health,
            "Character health ({}) cannot exceed max_health ({})",
            self.current_health,
            self.max_health
        );
        debug_assert!(
            self.is_alive == (self.current_health > 0),
            "Character {} alive flag out of sync with health {}",
            self.name,
            self.current_health
        );
        debug_assert!(self.level >= 1, "Character level must be at least 1");
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_alive { "Alive" } else { "Defeated" };
        write!(
            f,
            "{} (Lvl {}) - HP: {}/{} - Status: {}",
            self.name, self.level, self.current_health, self.max_health, status
        )
    }
}
