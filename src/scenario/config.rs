//! JSON configuration for scripted scenarios
//!
//! A scenario is a roster of named characters plus an ordered list of steps.
//! Everything that can be checked before the first step runs is checked here,
//! so a scenario that loads will only ever hit in-game soft rejections.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::character::CharacterClass;
use crate::error::{self, ConfigError};

/// Scenario loaded from JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Characters created before the first step
    pub roster: Vec<RosterEntry>,
    /// Steps executed in order
    pub steps: Vec<Step>,
}

/// One character of the roster. Unset stats fall back to class defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub class: CharacterClass,
    pub name: String,
    /// Starting (and max) health. Required for a plain `Character`.
    #[serde(default)]
    pub health: Option<u32>,
    #[serde(default)]
    pub level: Option<u32>,
    /// Warrior only
    #[serde(default)]
    pub strength: Option<u32>,
    /// Warrior only
    #[serde(default)]
    pub armor: Option<u32>,
    /// Mage only
    #[serde(default)]
    pub intelligence: Option<u32>,
    /// Mage only: max and starting mana
    #[serde(default)]
    pub mana: Option<u32>,
}

impl RosterEntry {
    pub fn new(class: CharacterClass, name: &str) -> Self {
        Self {
            class,
            name: name.to_string(),
            health: None,
            level: None,
            strength: None,
            armor: None,
            intelligence: None,
            mana: None,
        }
    }
}

/// A single scripted operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Print a section header
    Section { title: String },
    /// Print status lines (one character, or the whole roster)
    Status {
        #[serde(default)]
        actor: Option<String>,
    },
    /// Warrior basic attack
    Attack { actor: String, target: String },
    /// Warrior rage-gated strike
    Execute { actor: String, target: String },
    /// Mage spell
    CastSpell {
        actor: String,
        spell: String,
        target: String,
    },
    /// Raw damage from the environment
    TakeDamage { target: String, amount: u32 },
    Heal { target: String, amount: u32 },
    LevelUp { actor: String },
    /// Mage mana recovery
    Meditate { actor: String },
    /// Mage learns a spell
    LearnSpell { actor: String, spell: String },
}

impl Step {
    /// Class the acting character must have, if the step is class-specific
    pub fn required_class(&self) -> Option<CharacterClass> {
        match self {
            Step::Attack { .. } | Step::Execute { .. } => Some(CharacterClass::Warrior),
            Step::CastSpell { .. } | Step::Meditate { .. } | Step::LearnSpell { .. } => {
                Some(CharacterClass::Mage)
            }
            _ => None,
        }
    }

    /// Character performing the step (or receiving it, for damage and heals)
    pub fn actor(&self) -> Option<&str> {
        match self {
            Step::Section { .. } => None,
            Step::Status { actor } => actor.as_deref(),
            Step::Attack { actor, .. }
            | Step::Execute { actor, .. }
            | Step::CastSpell { actor, .. }
            | Step::LevelUp { actor }
            | Step::Meditate { actor }
            | Step::LearnSpell { actor, .. } => Some(actor),
            Step::TakeDamage { target, .. } | Step::Heal { target, .. } => Some(target),
        }
    }

    /// Second character involved in the step, if any
    pub fn target(&self) -> Option<&str> {
        match self {
            Step::Attack { target, .. }
            | Step::Execute { target, .. }
            | Step::CastSpell { target, .. } => Some(target),
            _ => None,
        }
    }
}

impl ScenarioConfig {
    /// Load a scenario from a JSON file and validate it
    pub fn load_from_file(path: &Path) -> error::Result<Self> {
        let contents = error::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        tracing::info!(
            "Loaded scenario from {:?}: {} characters, {} steps",
            path,
            config.roster.len(),
            config.steps.len()
        );
        Ok(config)
    }

    /// Parse a scenario from JSON text and validate it
    pub fn from_json(contents: &str) -> error::Result<Self> {
        let config: ScenarioConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn class_of(&self, name: &str) -> Option<CharacterClass> {
        self.roster.iter().find(|e| e.name == name).map(|e| e.class)
    }

    /// Validate the configuration
    pub fn validate(&self) -> error::Result<()> {
        if self.roster.is_empty() {
            return Err(invalid("roster must have at least one character"));
        }

        let mut names = HashSet::new();
        for entry in &self.roster {
            validate_entry(entry)?;
            if !names.insert(entry.name.as_str()) {
                return Err(invalid(format!(
                    "character name '{}' is used more than once",
                    entry.name
                )));
            }
        }

        for (i, step) in self.steps.iter().enumerate() {
            let step_no = i + 1;

            if let Some(actor) = step.actor() {
                let Some(class) = self.class_of(actor) else {
                    return Err(invalid(format!(
                        "step {}: unknown character '{}'",
                        step_no, actor
                    )));
                };
                if let Some(required) = step.required_class() {
                    if class != required {
                        return Err(invalid(format!(
                            "step {}: '{}' is a {}, this action needs a {}",
                            step_no,
                            actor,
                            class.name(),
                            required.name()
                        )));
                    }
                }
            }

            if let Some(target) = step.target() {
                if self.class_of(target).is_none() {
                    return Err(invalid(format!(
                        "step {}: unknown target '{}'",
                        step_no, target
                    )));
                }
                if step.actor() == Some(target) {
                    return Err(invalid(format!(
                        "step {}: '{}' cannot target themselves",
                        step_no, target
                    )));
                }
            }
        }

        Ok(())
    }

    /// The built-in showcase: one warrior and one mage trading blows,
    /// then developing.
    pub fn showcase() -> Self {
        let warrior = "Thorgar";
        let mage = "Elindra";

        let mut thorgar = RosterEntry::new(CharacterClass::Warrior, warrior);
        thorgar.health = Some(200);
        thorgar.strength = Some(12);

        let mut elindra = RosterEntry::new(CharacterClass::Mage, mage);
        elindra.health = Some(120);
        elindra.intelligence = Some(18);
        elindra.mana = Some(150);

        let section = |title: &str| Step::Section {
            title: title.to_string(),
        };

        Self {
            roster: vec![thorgar, elindra],
            steps: vec![
                section("Initial Character Stats"),
                Step::Status { actor: None },
                section("Combat Simulation"),
                Step::Attack {
                    actor: warrior.to_string(),
                    target: mage.to_string(),
                },
                Step::CastSpell {
                    actor: mage.to_string(),
                    spell: "Fireball".to_string(),
                    target: warrior.to_string(),
                },
                section("Special Abilities"),
                Step::Execute {
                    actor: warrior.to_string(),
                    target: mage.to_string(),
                },
                Step::TakeDamage {
                    target: warrior.to_string(),
                    amount: 30,
                },
                Step::Execute {
                    actor: warrior.to_string(),
                    target: mage.to_string(),
                },
                section("Character Development"),
                Step::Meditate {
                    actor: mage.to_string(),
                },
                Step::LearnSpell {
                    actor: mage.to_string(),
                    spell: "Teleport".to_string(),
                },
                Step::LevelUp {
                    actor: warrior.to_string(),
                },
                Step::LevelUp {
                    actor: mage.to_string(),
                },
                section("Updated Character Stats"),
                Step::Status { actor: None },
            ],
        }
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(message.into())
}

fn validate_entry(entry: &RosterEntry) -> error::Result<()> {
    if entry.name.trim().is_empty() {
        return Err(invalid("character names cannot be empty"));
    }
    if entry.health == Some(0) {
        return Err(invalid(format!("'{}' must start with health above 0", entry.name)));
    }
    if entry.level == Some(0) {
        return Err(invalid(format!("'{}' must start at level 1 or higher", entry.name)));
    }

    let warrior_stats = entry.strength.is_some() || entry.armor.is_some();
    let mage_stats = entry.intelligence.is_some() || entry.mana.is_some();
    match entry.class {
        CharacterClass::Base => {
            if entry.health.is_none() {
                return Err(invalid(format!(
                    "'{}' is a plain Character and needs an explicit health",
                    entry.name
                )));
            }
            if warrior_stats || mage_stats {
                return Err(invalid(format!(
                    "'{}' is a plain Character and cannot have class stats",
                    entry.name
                )));
            }
        }
        CharacterClass::Warrior if mage_stats => {
            return Err(invalid(format!(
                "'{}' is a Warrior and cannot have intelligence or mana",
                entry.name
            )));
        }
        CharacterClass::Mage if warrior_stats => {
            return Err(invalid(format!(
                "'{}' is a Mage and cannot have strength or armor",
                entry.name
            )));
        }
        _ => {}
    }

    Ok(())
}
