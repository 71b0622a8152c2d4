//! Combat outcomes
//!
//! Every gated operation on a combatant either succeeds or is softly rejected.
//! A rejection never mutates state: the operation records a narration line in
//! the [`log::CombatLog`] and hands the reason back as an [`ActionError`] so
//! the caller can decide what to do with it (the scenario runner just warns
//! and carries on).

pub mod log;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Spendable pools that gate class abilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Rage,
    Mana,
}

impl ResourceKind {
    pub fn name(&self) -> &'static str {
        match self {
            ResourceKind::Rage => "rage",
            ResourceKind::Mana => "mana",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse classification of a soft rejection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionKind {
    /// Rage or mana below the action's cost
    InsufficientResource,
    /// Spell name not recognised for casting or learning
    UnknownCapability,
    /// The actor or target is in a state where the action makes no sense
    InvalidState,
}

/// Reason an action was rejected. No state was changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("{actor} doesn't have enough {resource} to {action}! (Current: {current}/{required})")]
    InsufficientResource {
        actor: String,
        /// What was attempted, e.g. "execute" or "cast Fireball"
        action: String,
        resource: ResourceKind,
        current: u32,
        required: u32,
    },

    #[error("{actor} doesn't know the spell '{spell}'!")]
    UnknownSpell { actor: String, spell: String },

    #[error("Unknown spell: {spell}!")]
    Uncosted { spell: String },

    #[error("{spell} is not a valid spell to learn!")]
    NotLearnable { spell: String },

    #[error("{actor} already knows {spell}!")]
    AlreadyKnown { actor: String, spell: String },

    #[error("{actor} cannot {action} because they are defeated!")]
    Defeated { actor: String, action: &'static str },
}

impl ActionError {
    pub fn kind(&self) -> RejectionKind {
        match self {
            ActionError::InsufficientResource { .. } => RejectionKind::InsufficientResource,
            ActionError::UnknownSpell { .. }
            | ActionError::Uncosted { .. }
            | ActionError::NotLearnable { .. } => RejectionKind::UnknownCapability,
            ActionError::AlreadyKnown { .. } | ActionError::Defeated { .. } => {
                RejectionKind::InvalidState
            }
        }
    }
}
