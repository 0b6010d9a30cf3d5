//! Integration test: combat arithmetic and equipment
//!
//! Damage is attack minus defense floored at zero, and equipment only ever
//! changes the stat its boost type names.

use battle_arena::combat::{calculate_damage, enemy_roster, resolve_exchange};
use battle_arena::constants::*;
use battle_arena::{Archetype, Combatant, Entity, Item, ItemType, Player};

#[test]
fn test_damage_matches_formula_for_all_stat_pairs() {
    let stats = [0.0_f32, 5.0, 10.0, 15.0, 25.0, 35.0, 60.0];
    for attack in stats {
        for defense in stats {
            let attacker = Entity::new("A", 10.0, attack, 0.0);
            let mut defender = Entity::new("D", 50.0, 0.0, defense);

            let dealt = attacker.attack(&mut defender);

            let expected = (attack - defense).max(0.0);
            assert_eq!(dealt, expected, "atk {} def {}", attack, defense);
            assert_eq!(defender.health, 50.0 - expected);
            assert!(defender.health <= 50.0);
        }
    }
}

#[test]
fn test_brute_force_vs_little_dude_scenario() {
    let mut player = Player::from_archetype("Aria", Archetype::BruteForce);
    let mut little_dude = enemy_roster().remove(0);
    assert_eq!(little_dude.name, LITTLE_DUDE_NAME);

    assert_eq!(calculate_damage(player.attack_power(), little_dude.defense_power), 20.0);
    assert_eq!(calculate_damage(little_dude.attack_power, player.defense_power()), 15.0);

    let events = resolve_exchange(&mut player, &mut little_dude);
    assert_eq!(events.len(), 2);
    assert_eq!(little_dude.health, 0.0);
    assert!(!little_dude.is_alive());
    assert_eq!(player.health(), BRUTE_FORCE_HEALTH - 15.0);
}

#[test]
fn test_each_pool_item_boosts_only_its_category() {
    for archetype in Archetype::all() {
        let mut player = Player::from_archetype("Aria", archetype);
        let base_attack = player.base().attack_power;
        let base_defense = player.base().defense_power;

        for (index, item) in archetype.item_pool().iter().enumerate() {
            assert!(player.try_equip_item(index));

            let attack_bonus = match item.boost_type() {
                ItemType::Attack => item.stat_boost(),
                _ => 0.0,
            };
            let defense_bonus = match item.boost_type() {
                ItemType::Defense => item.stat_boost(),
                _ => 0.0,
            };
            assert_eq!(player.effective_attack_power(), base_attack + attack_bonus);
            assert_eq!(player.effective_defense_power(), base_defense + defense_bonus);

            assert!(player.try_unequip_item());
            assert_eq!(player.effective_attack_power(), base_attack);
            assert_eq!(player.effective_defense_power(), base_defense);
        }
    }
}

#[test]
fn test_out_of_range_equip_leaves_state_unchanged() {
    let mut player = Player::new(
        Entity::new("Aria", 100.0, 35.0, 10.0),
        vec![
            Item::new("Sword", 10.0, ItemType::Attack),
            Item::new("Shield", 10.0, ItemType::Defense),
        ],
    );
    player.try_equip_item(0);
    let before = player.clone();

    for index in [2, 3, 100, usize::MAX] {
        assert!(!player.try_equip_item(index));
        assert_eq!(player, before);
    }
}

#[test]
fn test_equipped_shield_stops_boss_damage() {
    let mut player = Player::from_archetype("Aria", Archetype::DefensiveTactics);
    let roster = enemy_roster();
    let boss = &roster[2];
    assert_eq!(boss.name, FINAL_BOSS_NAME);

    let unshielded = calculate_damage(boss.attack_power, player.defense_power());
    player.try_equip_item(0);
    let shielded = calculate_damage(boss.attack_power, player.defense_power());

    assert_eq!(unshielded, 5.0);
    assert_eq!(shielded, 0.0);
}
