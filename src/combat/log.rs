//! Combat logging
//!
//! Records every operation performed on a combatant, successful or rejected,
//! as a human-readable line. The scenario runner prints new entries after each
//! step and can save the whole log as JSON when the run ends.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::ActionError;

/// A single entry in the combat log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatLogEntry {
    /// Scenario step that produced this entry (0 before the first step)
    pub step: u32,
    /// The type of event
    pub event_type: CombatLogEventType,
    /// Name of the combatant the event is about
    pub actor: Option<String>,
    /// Human-readable description of the event
    pub message: String,
}

/// Types of combat log events for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatLogEventType {
    /// Health lost (including the armor-absorb line)
    Damage,
    /// Health restored
    Healing,
    /// Attack, execute or spell used
    AbilityUsed,
    /// Rage or mana gained or spent outside of an ability line
    Resource,
    /// Level-up, stat growth, spell learned
    Progression,
    /// Combatant defeated
    Death,
    /// Soft rejection, nothing changed
    Rejected,
    /// Scenario event (section headers, status lines)
    ScenarioEvent,
}

/// Ordered record of all narration produced during a run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatLog {
    /// All log entries in chronological order
    pub entries: Vec<CombatLogEntry>,
    /// Current scenario step
    pub step: u32,
}

impl CombatLog {
    /// Clear the log for a new run
    pub fn clear(&mut self) {
        self.entries.clear();
        self.step = 0;
    }

    /// Add a new entry to the log
    pub fn log(&mut self, event_type: CombatLogEventType, message: String) {
        self.push(event_type, None, message);
    }

    /// Add a new entry attributed to a combatant
    pub fn log_for(&mut self, event_type: CombatLogEventType, actor: &str, message: String) {
        self.push(event_type, Some(actor.to_string()), message);
    }

    fn push(&mut self, event_type: CombatLogEventType, actor: Option<String>, message: String) {
        tracing::trace!(step = self.step, ?event_type, "{}", message);
        self.entries.push(CombatLogEntry {
            step: self.step,
            event_type,
            actor,
            message,
        });
    }

    /// Record a soft rejection and hand the error back to the caller
    pub fn reject(&mut self, actor: &str, error: ActionError) -> ActionError {
        tracing::debug!(actor, kind = ?error.kind(), "action rejected");
        self.log_for(CombatLogEventType::Rejected, actor, error.to_string());
        error
    }

    /// Move on to the next scenario step
    pub fn advance_step(&mut self) -> u32 {
        self.step += 1;
        self.step
    }

    /// Get entries filtered by event type
    pub fn filter_by_type(&self, event_type: CombatLogEventType) -> Vec<&CombatLogEntry> {
        self.entries
            .iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Get only HP-changing events (damage and healing)
    pub fn hp_changes_only(&self) -> Vec<&CombatLogEntry> {
        self.entries
            .iter()
            .filter(|e| {
                matches!(
                    e.event_type,
                    CombatLogEventType::Damage | CombatLogEventType::Healing
                )
            })
            .collect()
    }

    /// Get the last N entries
    pub fn recent(&self, count: usize) -> Vec<&CombatLogEntry> {
        self.entries.iter().rev().take(count).rev().collect()
    }

    /// Entries appended after the first `index` entries
    pub fn since(&self, index: usize) -> &[CombatLogEntry] {
        self.entries.get(index..).unwrap_or(&[])
    }

    /// Entries attributed to the given combatant
    pub fn entries_for(&self, actor: &str) -> Vec<&CombatLogEntry> {
        self.entries
            .iter()
            .filter(|e| e.actor.as_deref() == Some(actor))
            .collect()
    }

    /// Number of rejected actions attributed to the given combatant
    pub fn rejections_for(&self, actor: &str) -> usize {
        self.entries
            .iter()
            .filter(|e| e.event_type == CombatLogEventType::Rejected)
            .filter(|e| e.actor.as_deref() == Some(actor))
            .count()
    }

    /// Save the log, together with caller-provided metadata, as pretty JSON
    pub fn save_to_file<M: Serialize>(&self, metadata: &M, path: &Path) -> std::io::Result<()> {
        #[derive(Serialize)]
        struct SavedLog<'a, M> {
            metadata: &'a M,
            entries: &'a [CombatLogEntry],
        }

        let saved = SavedLog {
            metadata,
            entries: &self.entries,
        };
        let contents = serde_json::to_string_pretty(&saved)?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved combat log to {:?}", path);
        Ok(())
    }
}
