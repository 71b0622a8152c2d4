//! classforge - Character Archetype Model
//!
//! A base character plus warrior and mage specializations with shared
//! health and level mechanics, rage- and mana-gated abilities, and a runner
//! for scripted scenarios.
//!
//! This library exposes the model for testing and reuse.

pub mod character;
pub mod cli;
pub mod combat;
pub mod error;
pub mod scenario;

// Re-export commonly used types
pub use character::{Character, CharacterClass, Combatant, Grimoire, Hero, Mage, Warrior};
pub use combat::log::{CombatLog, CombatLogEventType};
pub use combat::{ActionError, RejectionKind, ResourceKind};
pub use error::ConfigError;
pub use scenario::{ScenarioConfig, ScenarioResult};
