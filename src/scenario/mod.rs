//! Scripted scenarios
//!
//! This module runs a linear script of character operations with narration
//! printed as it goes. Without a scenario file the built-in showcase runs.
//!
//! ## Usage
//!
//! ```bash
//! # Run the built-in showcase
//! cargo run --release
//!
//! # Run a scenario file and save the log
//! cargo run --release -- --scenario scenarios/duel.json --output duel_log.json
//! ```
//!
//! ## JSON Configuration
//!
//! ```json
//! {
//!   "roster": [
//!     {"class": "Warrior", "name": "Thorgar", "health": 200, "strength": 12},
//!     {"class": "Mage", "name": "Elindra", "health": 120, "intelligence": 18, "mana": 150}
//!   ],
//!   "steps": [
//!     {"action": "section", "title": "Combat Simulation"},
//!     {"action": "attack", "actor": "Thorgar", "target": "Elindra"},
//!     {"action": "cast_spell", "actor": "Elindra", "spell": "Fireball", "target": "Thorgar"}
//!   ]
//! }
//! ```

pub mod config;
pub mod runner;

pub use config::{RosterEntry, ScenarioConfig, Step};
pub use runner::{run_scenario, CombatantSummary, Scenario, ScenarioResult};
