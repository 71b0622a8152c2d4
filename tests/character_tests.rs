//! Integration tests for the character model
//!
//! These tests verify that:
//! - Warrior and mage combat formulas produce the documented numbers
//! - Rage and mana gating reject actions without changing state
//! - Spells with a cost but no effect spend mana and deal nothing
//! - Level-ups grow stats and refill pools

use classforge::character::constants::{EXECUTE_RAGE_COST, RAGE_ON_ATTACK, RAGE_ON_HIT};
use classforge::{
    ActionError, Character, Combatant, CombatLog, CombatLogEventType, Mage, RejectionKind,
    ResourceKind, Warrior,
};

fn thorgar() -> Warrior {
    Warrior::new("Thorgar").with_health(200).with_strength(12)
}

fn elindra() -> Mage {
    Mage::new("Elindra")
        .with_health(120)
        .with_intelligence(18)
        .with_mana(150)
}

// =============================================================================
// Documented Examples
// =============================================================================

#[test]
fn test_warrior_attacks_mage() {
    let mut log = CombatLog::default();
    let mut warrior = thorgar();
    let mut mage = elindra();

    let damage = warrior.attack(&mut mage, &mut log);

    assert_eq!(damage, 14, "12 strength + 1 level * 2");
    assert_eq!(mage.character().current_health(), 106);
    assert_eq!(warrior.rage, RAGE_ON_ATTACK);
}

#[test]
fn test_mage_fireballs_warrior() {
    let mut log = CombatLog::default();
    let mut warrior = thorgar();
    let mut mage = elindra();

    let cast = mage.cast_spell("Fireball", &mut warrior, &mut log).unwrap();

    assert_eq!(cast.damage, Some(39), "18 * 2 + 1 * 3");
    assert_eq!(mage.current_mana(), 130);
    assert_eq!(
        warrior.character().current_health(),
        200 - (39 - 5),
        "Fireball should be mitigated by the warrior's armor"
    );
    assert_eq!(warrior.rage, RAGE_ON_HIT);
}

#[test]
fn test_execute_with_three_rage_does_nothing() {
    let mut log = CombatLog::default();
    let mut warrior = thorgar();
    let mut mage = elindra();
    warrior.rage = 3;

    let result = warrior.execute(&mut mage, &mut log);

    assert_eq!(
        result,
        Err(ActionError::InsufficientResource {
            actor: "Thorgar".to_string(),
            action: "execute".to_string(),
            resource: ResourceKind::Rage,
            current: 3,
            required: EXECUTE_RAGE_COST,
        })
    );
    assert_eq!(warrior.rage, 3);
    assert_eq!(mage.character().current_health(), 120);
    assert!(log.hp_changes_only().is_empty());
}

#[test]
fn test_execute_at_exactly_twenty_rage() {
    let mut log = CombatLog::default();
    let mut warrior = thorgar();
    let mut mage = elindra();
    warrior.rage = EXECUTE_RAGE_COST;

    let damage = warrior.execute(&mut mage, &mut log).unwrap();

    assert_eq!(damage, 12 * 2 + 3);
    assert_eq!(warrior.rage, 0);
    assert_eq!(mage.character().current_health(), 120 - 27);
}

#[test]
fn test_teleport_learn_and_cast() {
    let mut log = CombatLog::default();
    let mut warrior = thorgar();
    let mut mage = elindra();

    mage.learn_spell("Teleport", &mut log).unwrap();
    assert!(mage.knows("Teleport"));

    let err = mage.learn_spell("Teleport", &mut log).unwrap_err();
    assert_eq!(err.kind(), RejectionKind::InvalidState);
    assert_eq!(mage.spells().len(), 4, "Relearning should not duplicate the spell");

    let cast = mage.cast_spell("Teleport", &mut warrior, &mut log).unwrap();
    assert_eq!(cast.mana_spent, 30);
    assert_eq!(cast.damage, None);
    assert_eq!(mage.current_mana(), 120);
    assert_eq!(warrior.character().current_health(), 200);
    assert_eq!(warrior.rage, 0, "A spell with no effect never hits the target");
}

// =============================================================================
// Cast Validation Order
// =============================================================================

#[test]
fn test_unknown_spell_checked_before_mana() {
    let mut log = CombatLog::default();
    let mut mage = elindra().with_mana(0);
    let mut dummy = Character::new("Dummy", 50);

    let err = mage.cast_spell("Teleport", &mut dummy, &mut log).unwrap_err();

    assert!(matches!(err, ActionError::UnknownSpell { .. }));
}

#[test]
fn test_uncosted_spell_checked_before_mana() {
    let mut log = CombatLog::default();
    let mut mage = elindra().with_mana(0);
    let mut dummy = Character::new("Dummy", 50);
    mage.learn_spell("Arcane Intellect", &mut log).unwrap();

    let err = mage
        .cast_spell("Arcane Intellect", &mut dummy, &mut log)
        .unwrap_err();

    assert!(matches!(err, ActionError::Uncosted { .. }));
    assert_eq!(err.to_string(), "Unknown spell: Arcane Intellect!");
}

#[test]
fn test_mana_runs_dry() {
    let mut log = CombatLog::default();
    let mut mage = elindra();
    let mut dummy = Character::new("Dummy", 10_000);

    let mut casts = 0;
    while mage.cast_spell("Fireball", &mut dummy, &mut log).is_ok() {
        casts += 1;
    }

    assert_eq!(casts, 7, "150 mana buys seven 20-mana Fireballs");
    assert_eq!(mage.current_mana(), 10);
    assert_eq!(log.filter_by_type(CombatLogEventType::Rejected).len(), 1);

    mage.cast_spell("Arcane Missile", &mut dummy, &mut log).unwrap();
    assert_eq!(mage.current_mana(), 0);
}

// =============================================================================
// Defeat
// =============================================================================

#[test]
fn test_warrior_can_defeat_mage() {
    let mut log = CombatLog::default();
    let mut warrior = thorgar();
    let mut mage = elindra();

    for _ in 0..9 {
        warrior.attack(&mut mage, &mut log);
    }

    assert_eq!(mage.character().current_health(), 0);
    assert!(!mage.is_alive());
    assert_eq!(warrior.rage, RAGE_ON_ATTACK * 9);
    assert!(!log.filter_by_type(CombatLogEventType::Death).is_empty());

    let err = mage.heal(50, &mut log).unwrap_err();
    assert_eq!(err.kind(), RejectionKind::InvalidState);
    assert_eq!(mage.character().current_health(), 0);
}

#[test]
fn test_defeated_mage_can_still_meditate() {
    let mut log = CombatLog::default();
    let mut mage = elindra();
    let mut dummy = Character::new("Dummy", 500);
    mage.cast_spell("Fireball", &mut dummy, &mut log).unwrap();
    mage.take_damage(500, &mut log);

    let gained = mage.meditate(&mut log);

    assert_eq!(gained, 20);
    assert!(!mage.is_alive());
}

#[test]
fn test_heal_is_shared_by_all_classes() {
    let mut log = CombatLog::default();
    let mut warrior = thorgar();
    warrior.take_damage(55, &mut log);

    let gained = warrior.heal(20, &mut log).unwrap();

    assert_eq!(gained, 20);
    assert_eq!(warrior.character().current_health(), 200 - 50 + 20);
}

// =============================================================================
// Level-Up
// =============================================================================

#[test]
fn test_level_up_both_classes() {
    let mut log = CombatLog::default();
    let mut warrior = thorgar();
    let mut mage = elindra();
    warrior.attack(&mut mage, &mut log);
    mage.cast_spell("Fireball", &mut warrior, &mut log).unwrap();

    warrior.level_up(&mut log).unwrap();
    mage.level_up(&mut log).unwrap();

    assert_eq!(
        warrior.to_string(),
        "Thorgar (Lvl 2) - HP: 220/220 - Status: Alive - STR: 14 - ARM: 6 - RAGE: 8"
    );
    assert_eq!(
        mage.to_string(),
        "Elindra (Lvl 2) - HP: 132/132 - Status: Alive - INT: 21 - MANA: 170/170 - SPELLS: 3"
    );
}

#[test]
fn test_higher_level_hits_harder() {
    let mut log = CombatLog::default();
    let mut warrior = thorgar().with_level(4);
    let mut mage = elindra().with_level(3);
    let mut dummy = Character::new("Dummy", 1_000);

    assert_eq!(warrior.attack(&mut dummy, &mut log), 12 + 4 * 2);

    let cast = mage.cast_spell("Ice Shard", &mut dummy, &mut log).unwrap();
    assert_eq!(cast.damage, Some(18 + 3 * 2));
}
