//! Unit tests for combat log query methods
//!
//! These tests verify that the CombatLog correctly:
//! - Attributes entries to the acting combatant
//! - Filters by event type
//! - Counts rejected actions per combatant
//! - Returns recent entries in chronological order

use classforge::{Character, Combatant, CombatLog, CombatLogEventType, Mage, Warrior};

fn create_test_log() -> CombatLog {
    CombatLog::default()
}

#[test]
fn test_empty_log_queries() {
    let log = create_test_log();
    assert!(log.hp_changes_only().is_empty());
    assert!(log.recent(5).is_empty());
    assert_eq!(log.rejections_for("Thorgar"), 0);
}

#[test]
fn test_warrior_hit_produces_two_damage_lines() {
    let mut log = create_test_log();
    let mut warrior = Warrior::new("Brom");

    warrior.take_damage(12, &mut log);

    let damage = log.filter_by_type(CombatLogEventType::Damage);
    assert_eq!(damage.len(), 2, "armor line plus health line");
    assert_eq!(damage[0].message, "Brom's armor absorbs 5 damage!");
    assert_eq!(damage[1].message, "Brom takes 7 damage! Health: 143/150");
    assert!(damage.iter().all(|e| e.actor.as_deref() == Some("Brom")));
}

#[test]
fn test_attack_entries_attributed_to_both_sides() {
    let mut log = create_test_log();
    let mut warrior = Warrior::new("Brom");
    let mut dummy = Character::new("Dummy", 100);

    warrior.attack(&mut dummy, &mut log);

    assert_eq!(log.entries_for("Brom").len(), 1);
    assert_eq!(
        log.entries_for("Brom")[0].event_type,
        CombatLogEventType::AbilityUsed
    );
    assert_eq!(log.entries_for("Dummy").len(), 1);
    assert_eq!(
        log.entries_for("Dummy")[0].event_type,
        CombatLogEventType::Damage
    );
}

#[test]
fn test_rejections_counted_per_actor() {
    let mut log = create_test_log();
    let mut warrior = Warrior::new("Brom");
    let mut mage = Mage::new("Vex");

    let _ = warrior.execute(&mut mage, &mut log);
    let _ = warrior.execute(&mut mage, &mut log);
    let _ = mage.learn_spell("Meteor", &mut log);

    assert_eq!(log.rejections_for("Brom"), 2);
    assert_eq!(log.rejections_for("Vex"), 1);
    assert_eq!(log.filter_by_type(CombatLogEventType::Rejected).len(), 3);
}

#[test]
fn test_hp_changes_include_healing() {
    let mut log = create_test_log();
    let mut dummy = Character::new("Dummy", 100);

    dummy.take_damage(40, &mut log);
    dummy.heal(15, &mut log).unwrap();
    let _ = dummy.level_up(&mut log);

    let hp = log.hp_changes_only();
    assert_eq!(hp.len(), 2);
    assert_eq!(hp[1].event_type, CombatLogEventType::Healing);
    assert_eq!(hp[1].message, "Dummy heals for 15! Health: 75/100");
}

#[test]
fn test_recent_keeps_order() {
    let mut log = create_test_log();
    let mut mage = Mage::new("Vex");
    let mut dummy = Character::new("Dummy", 100);

    mage.cast_spell("Ice Shard", &mut dummy, &mut log).unwrap();
    mage.meditate(&mut log);

    let recent = log.recent(2);
    assert_eq!(recent[0].message, "Vex's remaining mana: 85/100");
    assert!(recent[1].message.starts_with("Vex meditates"));
}

#[test]
fn test_cast_without_effect_logs_plain_line() {
    let mut log = create_test_log();
    let mut mage = Mage::new("Vex");
    let mut dummy = Character::new("Dummy", 100);
    mage.learn_spell("Teleport", &mut log).unwrap();

    mage.cast_spell("Teleport", &mut dummy, &mut log).unwrap();

    let abilities = log.filter_by_type(CombatLogEventType::AbilityUsed);
    assert_eq!(abilities.len(), 1);
    assert_eq!(abilities[0].message, "Vex casts Teleport.");
    assert!(log.entries_for("Dummy").is_empty());
}
