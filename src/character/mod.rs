//! Character model
//!
//! Three archetypes share one health/level component:
//! - [`Character`]: the base entity on its own
//! - [`Warrior`]: armor, rage, Attack and Execute
//! - [`Mage`]: mana, a known-spell list and a grimoire
//!
//! Specializations embed a [`Character`] and reach it through the
//! [`Combatant`] trait. Where a class changes a shared operation it runs its
//! own step first and then calls the base routine explicitly.

pub mod base;
pub mod constants;
pub mod mage;
pub mod spells;
pub mod warrior;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::combat::log::CombatLog;
use crate::combat::ActionError;

pub use base::Character;
pub use mage::{Mage, SpellCast};
pub use spells::{Grimoire, SpellDefinition, SpellEffect};
pub use warrior::Warrior;

/// Available character classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    /// A plain character with no specialization
    #[serde(rename = "Character")]
    Base,
    Warrior,
    Mage,
}

impl CharacterClass {
    /// Get all available character classes
    pub fn all() -> &'static [CharacterClass] {
        &[
            CharacterClass::Base,
            CharacterClass::Warrior,
            CharacterClass::Mage,
        ]
    }

    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            CharacterClass::Base => "Character",
            CharacterClass::Warrior => "Warrior",
            CharacterClass::Mage => "Mage",
        }
    }

    /// Get a short description
    pub fn description(&self) -> &'static str {
        match self {
            CharacterClass::Base => "Health and levels, nothing more",
            CharacterClass::Warrior => "Armored melee fighter fuelled by rage",
            CharacterClass::Mage => "Spellcaster limited by mana",
        }
    }
}

/// Shared interface over every character class.
///
/// The default methods run the base routines on the embedded [`Character`];
/// classes override the ones they extend.
pub trait Combatant: fmt::Display {
    fn character(&self) -> &Character;

    fn character_mut(&mut self) -> &mut Character;

    fn class(&self) -> CharacterClass;

    fn name(&self) -> &str {
        self.character().name()
    }

    fn is_alive(&self) -> bool {
        self.character().is_alive()
    }

    /// Apply incoming damage and return the health actually lost
    fn take_damage(&mut self, amount: u32, log: &mut CombatLog) -> u32 {
        self.character_mut().take_damage(amount, log)
    }

    fn heal(&mut self, amount: u32, log: &mut CombatLog) -> Result<u32, ActionError> {
        self.character_mut().heal(amount, log)
    }

    fn level_up(&mut self, log: &mut CombatLog) -> Result<(), ActionError> {
        self.character_mut().level_up(log)
    }

    /// One-line status for narration
    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Combatant for Character {
    fn character(&self) -> &Character {
        self
    }

    fn character_mut(&mut self) -> &mut Character {
        self
    }

    fn class(&self) -> CharacterClass {
        CharacterClass::Base
    }
}

/// A combatant of any class, for rosters that mix them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hero {
    Character(Character),
    Warrior(Warrior),
    Mage(Mage),
}

impl Hero {
    pub fn as_combatant(&self) -> &dyn Combatant {
        match self {
            Hero::Character(c) => c,
            Hero::Warrior(w) => w,
            Hero::Mage(m) => m,
        }
    }

    pub fn as_combatant_mut(&mut self) -> &mut dyn Combatant {
        match self {
            Hero::Character(c) => c,
            Hero::Warrior(w) => w,
            Hero::Mage(m) => m,
        }
    }

    pub fn as_warrior_mut(&mut self) -> Option<&mut Warrior> {
        match self {
            Hero::Warrior(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_mage_mut(&mut self) -> Option<&mut Mage> {
        match self {
            Hero::Mage(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_warrior(&self) -> Option<&Warrior> {
        match self {
            Hero::Warrior(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_mage(&self) -> Option<&Mage> {
        match self {
            Hero::Mage(m) => Some(m),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        self.as_combatant().name()
    }

    pub fn class(&self) -> CharacterClass {
        self.as_combatant().class()
    }
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hero::Character(c) => c.fmt(f),
            Hero::Warrior(w) => w.fmt(f),
            Hero::Mage(m) => m.fmt(f),
        }
    }
}

impl From<Character> for Hero {
    fn from(character: Character) -> Self {
        Hero::Character(character)
    }
}

impl From<Warrior> for Hero {
    fn from(warrior: Warrior) -> Self {
        Hero::Warrior(warrior)
    }
}

impl From<Mage> for Hero {
    fn from(mage: Mage) -> Self {
        Hero::Mage(mage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_dispatches_per_class() {
        let roster: Vec<Hero> = vec![
            Character::new("Aldric", 80).into(),
            Warrior::new("Brom").into(),
            Mage::new("Vex").into(),
        ];

        let lines: Vec<String> = roster.iter().map(|h| h.as_combatant().describe()).collect();

        assert_eq!(lines[0], "Aldric (Lvl 1) - HP: 80/80 - Status: Alive");
        assert!(lines[1].ends_with("STR: 10 - ARM: 5 - RAGE: 0"));
        assert!(lines[2].ends_with("INT: 15 - MANA: 100/100 - SPELLS: 3"));
    }

    #[test]
    fn test_take_damage_dispatches_through_trait_object() {
        let mut log = CombatLog::default();
        let mut hero: Hero = Warrior::new("Brom").into();

        let lost = hero.as_combatant_mut().take_damage(20, &mut log);

        assert_eq!(lost, 15, "Warrior armor should apply through dyn Combatant");
        assert_eq!(hero.as_warrior().map(|w| w.rage), Some(5));
    }

    #[test]
    fn test_class_names() {
        for class in CharacterClass::all() {
            assert!(!class.name().is_empty());
            assert!(!class.description().is_empty());
        }
        assert_eq!(Hero::from(Mage::new("Vex")).class(), CharacterClass::Mage);
    }
}
