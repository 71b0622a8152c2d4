//! Spell Data
//!
//! The spell table a mage consults when casting and learning. The defaults
//! live in code; `assets/config/spells.ron` carries the same data so balance
//! changes don't need a recompile.
//!
//! A spell can be:
//! - learnable but uncosted (Polymorph): learning works, casting is rejected
//! - costed without an effect (Teleport): casting spends mana and does nothing else
//! - costed with a damage effect (Fireball)

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{self, ConfigError};

/// Combat effect of a successful cast
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellEffect {
    /// `intelligence * 2 + level * 3`
    Fireball,
    /// `intelligence + level * 2`
    IceShard,
    /// `floor(intelligence * 0.8) + level`
    ArcaneMissile,
    /// Mana is spent, nothing else happens
    #[default]
    None,
}

impl SpellEffect {
    /// Damage dealt by this effect for the given caster stats, or `None` if
    /// the effect does no damage.
    pub fn damage(&self, intelligence: u32, level: u32) -> Option<u32> {
        match self {
            SpellEffect::Fireball => Some(
                intelligence
                    .saturating_mul(2)
                    .saturating_add(level.saturating_mul(3)),
            ),
            SpellEffect::IceShard => Some(intelligence.saturating_add(level.saturating_mul(2))),
            SpellEffect::ArcaneMissile => {
                Some(super::constants::scale(intelligence, (8, 10)).saturating_add(level))
            }
            SpellEffect::None => None,
        }
    }

    /// How the spell hits its target in narration
    pub fn flavor(&self, target: &str) -> Option<String> {
        match self {
            SpellEffect::Fireball => Some(format!("engulfing {} in flames", target)),
            SpellEffect::IceShard => Some(format!("piercing {}", target)),
            SpellEffect::ArcaneMissile => Some(format!("striking {}", target)),
            SpellEffect::None => None,
        }
    }
}

/// One entry of the spell table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellDefinition {
    /// Exact spell name used for casting and learning
    pub name: String,
    /// Mana cost. Spells without a cost can be learned but not cast.
    #[serde(default)]
    pub mana_cost: Option<u32>,
    #[serde(default)]
    pub effect: SpellEffect,
}

impl SpellDefinition {
    fn new(name: &str, mana_cost: Option<u32>, effect: SpellEffect) -> Self {
        Self {
            name: name.to_string(),
            mana_cost,
            effect,
        }
    }
}

/// Mana-cost table, learnable-spell registry and starting spells.
///
/// Every spell in the table is learnable. Each mage owns its grimoire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grimoire {
    pub spells: Vec<SpellDefinition>,
    /// Spells every new mage knows
    pub starting_spells: Vec<String>,
}

impl Default for Grimoire {
    fn default() -> Self {
        Self {
            spells: vec![
                SpellDefinition::new("Fireball", Some(20), SpellEffect::Fireball),
                SpellDefinition::new("Ice Shard", Some(15), SpellEffect::IceShard),
                SpellDefinition::new("Arcane Missile", Some(10), SpellEffect::ArcaneMissile),
                SpellDefinition::new("Teleport", Some(30), SpellEffect::None),
                SpellDefinition::new("Polymorph", None, SpellEffect::None),
                SpellDefinition::new("Arcane Intellect", None, SpellEffect::None),
            ],
            starting_spells: vec![
                "Fireball".to_string(),
                "Ice Shard".to_string(),
                "Arcane Missile".to_string(),
            ],
        }
    }
}

impl Grimoire {
    /// Load a grimoire from a RON file and validate it
    pub fn load_from_file(path: &Path) -> error::Result<Self> {
        let contents = error::read_to_string(path)?;
        let grimoire = Self::from_ron(&contents)?;
        tracing::info!(
            "Loaded {} spells from {:?}",
            grimoire.spells.len(),
            path
        );
        Ok(grimoire)
    }

    /// Parse a grimoire from RON text and validate it
    pub fn from_ron(contents: &str) -> error::Result<Self> {
        let grimoire: Grimoire = ron::from_str(contents)?;
        grimoire.validate()?;
        Ok(grimoire)
    }

    fn validate(&self) -> error::Result<()> {
        let mut seen = HashSet::new();
        for spell in &self.spells {
            if spell.name.trim().is_empty() {
                return Err(ConfigError::Invalid("spell names cannot be empty".to_string()));
            }
            if !seen.insert(spell.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "spell '{}' is defined more than once",
                    spell.name
                )));
            }
        }

        let mut starting = HashSet::new();
        for name in &self.starting_spells {
            if !seen.contains(name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "starting spell '{}' is not in the spell table",
                    name
                )));
            }
            if !starting.insert(name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "starting spell '{}' is listed more than once",
                    name
                )));
            }
        }

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&SpellDefinition> {
        self.spells.iter().find(|s| s.name == name)
    }

    /// Mana cost of a castable spell
    pub fn mana_cost(&self, name: &str) -> Option<u32> {
        self.get(name).and_then(|s| s.mana_cost)
    }

    pub fn is_learnable(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn effect(&self, name: &str) -> SpellEffect {
        self.get(name).map(|s| s.effect).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_costs() {
        let grimoire = Grimoire::default();
        assert_eq!(grimoire.mana_cost("Fireball"), Some(20));
        assert_eq!(grimoire.mana_cost("Ice Shard"), Some(15));
        assert_eq!(grimoire.mana_cost("Arcane Missile"), Some(10));
        assert_eq!(grimoire.mana_cost("Teleport"), Some(30));
        assert_eq!(grimoire.mana_cost("Polymorph"), None);
        assert_eq!(grimoire.mana_cost("Meteor"), None);
    }

    #[test]
    fn test_learnable_set() {
        let grimoire = Grimoire::default();
        for name in ["Teleport", "Polymorph", "Arcane Intellect", "Fireball"] {
            assert!(grimoire.is_learnable(name), "{} should be learnable", name);
        }
        assert!(!grimoire.is_learnable("Meteor"));
        assert!(!grimoire.is_learnable("fireball"), "names are case-sensitive");
    }

    #[test]
    fn test_effect_formulas() {
        assert_eq!(SpellEffect::Fireball.damage(18, 1), Some(39));
        assert_eq!(SpellEffect::IceShard.damage(18, 1), Some(20));
        assert_eq!(SpellEffect::ArcaneMissile.damage(18, 1), Some(15));
        assert_eq!(SpellEffect::ArcaneMissile.damage(21, 2), Some(18));
        assert_eq!(SpellEffect::None.damage(18, 1), None);
        assert_eq!(Grimoire::default().effect("Teleport"), SpellEffect::None);
    }

    #[test]
    fn test_from_ron() {
        let grimoire = Grimoire::from_ron(
            r#"(
                spells: [
                    (name: "Fireball", mana_cost: Some(25), effect: Fireball),
                    (name: "Blink"),
                ],
                starting_spells: ["Fireball"],
            )"#,
        )
        .unwrap();

        assert_eq!(grimoire.mana_cost("Fireball"), Some(25));
        assert_eq!(grimoire.mana_cost("Blink"), None);
        assert_eq!(grimoire.effect("Blink"), SpellEffect::None);
    }

    #[test]
    fn test_shipped_spell_file_matches_defaults() {
        let grimoire = Grimoire::from_ron(include_str!("../../assets/config/spells.ron")).unwrap();
        assert_eq!(grimoire, Grimoire::default());
    }

    #[test]
    fn test_from_ron_rejects_unknown_starting_spell() {
        let result = Grimoire::from_ron(
            r#"(spells: [(name: "Fireball")], starting_spells: ["Frostbolt"])"#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_from_ron_rejects_duplicate_starting_spells() {
        let result = Grimoire::from_ron(
            r#"(
                spells: [(name: "Fireball", mana_cost: Some(20), effect: Fireball)],
                starting_spells: ["Fireball", "Fireball"],
            )"#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_from_ron_rejects_duplicates() {
        let result = Grimoire::from_ron(
            r#"(spells: [(name: "Fireball"), (name: "Fireball")], starting_spells: [])"#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
