//! Class Constants
//!
//! Centralized location for the numbers that drive the character model.
//! Ratios are expressed as integer numerator/denominator pairs so that the
//! floor semantics of the formulas stay exact.

// ============================================================================
// Progression
// ============================================================================

/// Max health grows by 10% per level: `max * 11 / 10`, floored.
pub const LEVEL_HEALTH_GROWTH: (u32, u32) = (11, 10);

/// Strength gained by a warrior on level-up
pub const WARRIOR_STRENGTH_PER_LEVEL: u32 = 2;

/// Armor gained by a warrior on level-up
pub const WARRIOR_ARMOR_PER_LEVEL: u32 = 1;

/// Intelligence gained by a mage on level-up
pub const MAGE_INTELLIGENCE_PER_LEVEL: u32 = 3;

/// Max mana gained by a mage on level-up
pub const MAGE_MANA_PER_LEVEL: u32 = 20;

// ============================================================================
// Rage
// ============================================================================

/// Rage gained whenever a warrior is hit, regardless of mitigation
pub const RAGE_ON_HIT: u32 = 5;

/// Rage gained whenever a warrior attacks, regardless of the target's state
pub const RAGE_ON_ATTACK: u32 = 3;

/// Rage required and spent by Execute
pub const EXECUTE_RAGE_COST: u32 = 20;

/// Armor never reduces a hit below this much damage
pub const MIN_MITIGATED_DAMAGE: u32 = 1;

// ============================================================================
// Mana
// ============================================================================

/// Meditation restores 30% of max mana, floored.
pub const MEDITATION_RESTORE: (u32, u32) = (3, 10);

// ============================================================================
// Class defaults
// ============================================================================

pub const WARRIOR_DEFAULT_HEALTH: u32 = 150;
pub const WARRIOR_DEFAULT_STRENGTH: u32 = 10;
pub const WARRIOR_DEFAULT_ARMOR: u32 = 5;

pub const MAGE_DEFAULT_HEALTH: u32 = 100;
pub const MAGE_DEFAULT_INTELLIGENCE: u32 = 15;
pub const MAGE_DEFAULT_MANA: u32 = 100;

/// `floor(value * num / den)` without intermediate overflow, saturating at `u32::MAX`.
pub fn scale(value: u32, (num, den): (u32, u32)) -> u32 {
    let scaled = u64::from(value) * u64::from(num) / u64::from(den);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}
