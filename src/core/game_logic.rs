//! Scene transitions, free of console I/O.
//!
//! Each function applies one player decision to a [`GameState`] and returns
//! the events the UI should show. Calls made in the wrong scene are ignored.

use super::game_state::{GameState, RunOutcome, Scene};
use crate::character::{Archetype, Player};
use crate::combat::{resolve_exchange, CombatEvent, Combatant};
use crate::input::parse_player_name;
use crate::items::Item;

/// A choice from the battle menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleAction {
    Attack,
    Equip(usize),
    Unequip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverChoice {
    Restart,
    Quit,
}

/// Something that happened and should be reported to the player.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Combat(CombatEvent),
    EnemyDefeated { name: String },
    Victory,
    PlayerSlain,
    Equipped { item: Item },
    EquipFailed,
    Unequipped { item: Item },
    NothingEquipped,
    LoadoutRestored { item: Item },
}

impl GameEvent {
    /// Whether this event changed the equipped slot.
    pub fn changes_loadout(&self) -> bool {
        matches!(
            self,
            GameEvent::Equipped { .. } | GameEvent::Unequipped { .. }
        )
    }
}

fn change_scene(state: &mut GameState, scene: Scene) {
    if state.scene != scene {
        tracing::info!(from = ?state.scene, to = ?scene, "scene changed");
        state.scene = scene;
    }
}

/// Records a typed name. Returns false for a blank name.
pub fn submit_name(state: &mut GameState, input: &str) -> bool {
    if state.scene != Scene::NamingPlayer {
        return false;
    }
    match parse_player_name(input) {
        Some(name) => {
            state.player_name = name;
            true
        }
        None => false,
    }
}

/// Answer to "keep your name?". Declining leaves the game in the naming scene.
pub fn confirm_name(state: &mut GameState, keep: bool) {
    if state.scene != Scene::NamingPlayer || state.player_name.is_empty() {
        return;
    }
    if keep {
        state.name_kept = true;
        change_scene(state, Scene::SelectingCharacter);
    }
}

/// Skips naming on a restart once a name has been kept. Returns true if skipped.
pub fn skip_naming_if_kept(state: &mut GameState) -> bool {
    if state.scene != Scene::NamingPlayer || !state.name_kept {
        return false;
    }
    change_scene(state, Scene::SelectingCharacter);
    true
}

/// Builds the player from the archetype preset and starts the first battle.
pub fn select_archetype(state: &mut GameState, archetype: Archetype) {
    if state.scene != Scene::SelectingCharacter {
        return;
    }
    tracing::info!(name = %state.player_name, ?archetype, "character selected");
    state.player = Some(Player::from_archetype(state.player_name.clone(), archetype));
    state.archetype = Some(archetype);
    state.current_enemy_index = 0;
    state.outcome = None;
    change_scene(state, Scene::Battling);
}

/// Re-equips a saved item index. Invalid indices are ignored.
pub fn restore_loadout(state: &mut GameState, equipped_index: Option<usize>) -> Option<GameEvent> {
    let player = state.player.as_mut()?;
    let index = equipped_index?;
    if !player.try_equip_item(index) {
        tracing::warn!(index, "saved loadout index out of range, ignoring");
        return None;
    }
    let item = player.equipped_item()?.clone();
    tracing::info!(item = item.name(), "loadout restored");
    Some(GameEvent::LoadoutRestored { item })
}

/// Applies one battle-menu choice. Only [`BattleAction::Attack`] lets the
/// enemy strike back.
pub fn battle_turn(state: &mut GameState, action: BattleAction) -> Vec<GameEvent> {
    if state.scene != Scene::Battling {
        return Vec::new();
    }

    match action {
        BattleAction::Attack => {
            let (Some(player), Some(enemy)) = (
                state.player.as_mut(),
                state.enemies.get_mut(state.current_enemy_index),
            ) else {
                return Vec::new();
            };
            let mut events: Vec<GameEvent> = resolve_exchange(player, enemy)
                .into_iter()
                .map(GameEvent::Combat)
                .collect();
            events.extend(check_battle_result(state));
            events
        }
        BattleAction::Equip(index) => {
            let Some(player) = state.player.as_mut() else {
                return Vec::new();
            };
            if !player.try_equip_item(index) {
                return vec![GameEvent::EquipFailed];
            }
            match player.equipped_item() {
                Some(item) => {
                    tracing::info!(item = item.name(), "item equipped");
                    vec![GameEvent::Equipped { item: item.clone() }]
                }
                None => Vec::new(),
            }
        }
        BattleAction::Unequip => {
            let Some(player) = state.player.as_mut() else {
                return Vec::new();
            };
            let previous = player.equipped_item().cloned();
            match previous {
                Some(item) if player.try_unequip_item() => {
                    tracing::info!(item = item.name(), "item unequipped");
                    vec![GameEvent::Unequipped { item }]
                }
                _ => vec![GameEvent::NothingEquipped],
            }
        }
    }
}

/// Settles the current battle after an exchange.
///
/// Player death wins over an enemy kill. A kill moves to the next enemy, and
/// clearing the roster ends the run in victory.
pub fn check_battle_result(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.scene != Scene::Battling {
        return events;
    }

    let player_alive = state.player.as_ref().is_some_and(|p| p.is_alive());
    if !player_alive {
        tracing::info!(
            enemy = state.current_enemy().map(|e| e.name.as_str()),
            "player slain"
        );
        state.outcome = Some(RunOutcome::Defeat);
        events.push(GameEvent::PlayerSlain);
        change_scene(state, Scene::GameOverMenu);
        return events;
    }

    let Some(enemy) = state.current_enemy() else {
        return events;
    };
    if enemy.is_alive() {
        return events;
    }

    let name = enemy.name.clone();
    tracing::info!(enemy = %name, "enemy defeated");
    events.push(GameEvent::EnemyDefeated { name });
    state.current_enemy_index += 1;

    if state.current_enemy_index >= state.enemies.len() {
        tracing::info!(name = %state.player_name, "roster cleared");
        state.outcome = Some(RunOutcome::Victory);
        events.push(GameEvent::Victory);
        change_scene(state, Scene::GameOverMenu);
    }

    events
}

/// Restart or quit from the game-over menu.
pub fn game_over_choice(state: &mut GameState, choice: GameOverChoice) {
    if state.scene != Scene::GameOverMenu {
        return;
    }
    match choice {
        GameOverChoice::Restart => {
            tracing::info!("run restarted");
            state.reset_for_restart();
        }
        GameOverChoice::Quit => {
            tracing::info!("player quit");
            state.game_over = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    fn battling_state(archetype: Archetype) -> GameState {
        let mut state = GameState::new();
        assert!(submit_name(&mut state, "Aria"));
        confirm_name(&mut state, true);
        select_archetype(&mut state, archetype);
        state
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut state = GameState::new();
        assert!(!submit_name(&mut state, "   "));
        assert!(state.player_name.is_empty());
    }

    #[test]
    fn test_declining_name_stays_in_naming() {
        let mut state = GameState::new();
        submit_name(&mut state, "Aria");
        confirm_name(&mut state, false);
        assert_eq!(state.scene, Scene::NamingPlayer);
        assert!(!state.name_kept);
    }

    #[test]
    fn test_confirm_without_name_is_ignored() {
        let mut state = GameState::new();
        confirm_name(&mut state, true);
        assert_eq!(state.scene, Scene::NamingPlayer);
    }

    #[test]
    fn test_keeping_name_moves_to_selection() {
        let mut state = GameState::new();
        submit_name(&mut state, "Aria");
        confirm_name(&mut state, true);
        assert_eq!(state.scene, Scene::SelectingCharacter);
        assert!(state.name_kept);
    }

    #[test]
    fn test_select_archetype_starts_battle() {
        let state = battling_state(Archetype::BruteForce);
        assert_eq!(state.scene, Scene::Battling);
        assert_eq!(state.archetype, Some(Archetype::BruteForce));
        let player = state.player.as_ref().unwrap();
        assert_eq!(player.name(), "Aria");
        assert_eq!(player.attack_power(), BRUTE_FORCE_ATTACK);
    }

    #[test]
    fn test_attack_exchange_damage() {
        let mut state = battling_state(Archetype::BruteForce);

        let events = battle_turn(&mut state, BattleAction::Attack);

        assert_eq!(
            events,
            vec![
                GameEvent::Combat(CombatEvent::Hit {
                    attacker: "Aria".to_string(),
                    defender: LITTLE_DUDE_NAME.to_string(),
                    damage: 20.0,
                }),
                GameEvent::Combat(CombatEvent::Hit {
                    attacker: LITTLE_DUDE_NAME.to_string(),
                    defender: "Aria".to_string(),
                    damage: 15.0,
                }),
                GameEvent::EnemyDefeated {
                    name: LITTLE_DUDE_NAME.to_string(),
                },
            ]
        );
        assert_eq!(state.enemies[0].health, 0.0);
        assert_eq!(state.player.as_ref().unwrap().health(), 85.0);
    }

    #[test]
    fn test_mutual_kill_ends_in_defeat() {
        let mut state = battling_state(Archetype::BruteForce);
        // One hit kills Little Dude; its dying blow takes the last 15.
        let player = state.player.as_mut().unwrap();
        player.take_damage(player.health() - 15.0);

        let events = battle_turn(&mut state, BattleAction::Attack);

        assert!(!state.enemies[0].is_alive());
        assert_eq!(state.player.as_ref().unwrap().health(), 0.0);
        assert_eq!(events.last(), Some(&GameEvent::PlayerSlain));
        assert!(!events
            .iter()
            .any(|e| matches!(e, GameEvent::EnemyDefeated { .. } | GameEvent::Victory)));
        assert_eq!(state.current_enemy_index, 0);
        assert_eq!(state.outcome, Some(RunOutcome::Defeat));
        assert_eq!(state.scene, Scene::GameOverMenu);
    }

    #[test]
    fn test_enemy_kill_advances_roster() {
        let mut state = battling_state(Archetype::BruteForce);

        let events = battle_turn(&mut state, BattleAction::Attack);

        assert!(events.contains(&GameEvent::EnemyDefeated {
            name: LITTLE_DUDE_NAME.to_string()
        }));
        assert_eq!(state.current_enemy_index, 1);
        assert_eq!(state.scene, Scene::Battling);
        assert_eq!(
            state.current_enemy().map(|e| e.name.as_str()),
            Some(BIG_DUDE_NAME)
        );
    }

    #[test]
    fn test_victory_only_after_last_enemy() {
        let mut state = battling_state(Archetype::BruteForce);
        state.player.as_mut().unwrap().take_damage(-10_000.0);

        let mut defeated = Vec::new();
        while state.scene == Scene::Battling {
            for event in battle_turn(&mut state, BattleAction::Attack) {
                match event {
                    GameEvent::EnemyDefeated { name } => defeated.push(name),
                    GameEvent::Victory => assert_eq!(defeated.len(), 3),
                    _ => {}
                }
            }
        }

        assert_eq!(defeated, vec![LITTLE_DUDE_NAME, BIG_DUDE_NAME, FINAL_BOSS_NAME]);
        assert_eq!(state.outcome, Some(RunOutcome::Victory));
        assert_eq!(state.scene, Scene::GameOverMenu);
    }

    #[test]
    fn test_player_at_exactly_zero_is_defeat() {
        let mut state = battling_state(Archetype::BruteForce);
        state.enemies[0].health = 1000.0;
        // Little Dude hits for 15 against 10 defense.
        let player = state.player.as_mut().unwrap();
        player.take_damage(player.health() - 15.0);

        let events = battle_turn(&mut state, BattleAction::Attack);

        assert_eq!(state.player.as_ref().unwrap().health(), 0.0);
        assert!(events.contains(&GameEvent::PlayerSlain));
        assert!(!events.contains(&GameEvent::Victory));
        assert_eq!(state.outcome, Some(RunOutcome::Defeat));
        assert_eq!(state.scene, Scene::GameOverMenu);
    }

    #[test]
    fn test_equip_does_not_trigger_retaliation() {
        let mut state = battling_state(Archetype::BruteForce);

        let events = battle_turn(&mut state, BattleAction::Equip(1));

        assert!(matches!(events.as_slice(), [GameEvent::Equipped { item }] if item.name() == "Battle Axe"));
        let player = state.player.as_ref().unwrap();
        assert_eq!(player.health(), BRUTE_FORCE_HEALTH);
        assert_eq!(player.attack_power(), BRUTE_FORCE_ATTACK + 15.0);
        assert_eq!(state.enemies[0].health, LITTLE_DUDE_HEALTH);
    }

    #[test]
    fn test_equip_out_of_range_fails() {
        let mut state = battling_state(Archetype::BruteForce);
        let events = battle_turn(&mut state, BattleAction::Equip(7));
        assert_eq!(events, vec![GameEvent::EquipFailed]);
        assert_eq!(state.player.as_ref().unwrap().equipped_index(), None);
    }

    #[test]
    fn test_unequip_reports_item_or_nothing() {
        let mut state = battling_state(Archetype::DefensiveTactics);
        assert_eq!(
            battle_turn(&mut state, BattleAction::Unequip),
            vec![GameEvent::NothingEquipped]
        );

        battle_turn(&mut state, BattleAction::Equip(0));
        let events = battle_turn(&mut state, BattleAction::Unequip);

        assert!(matches!(events.as_slice(), [GameEvent::Unequipped { item }] if item.name() == "Big Shield"));
        assert_eq!(
            state.player.as_ref().unwrap().defense_power(),
            DEFENSIVE_TACTICS_DEFENSE
        );
    }

    #[test]
    fn test_restore_loadout_validates_index() {
        let mut state = battling_state(Archetype::DefensiveTactics);
        assert_eq!(restore_loadout(&mut state, Some(9)), None);
        assert_eq!(restore_loadout(&mut state, None), None);

        let event = restore_loadout(&mut state, Some(0));

        assert!(matches!(event, Some(GameEvent::LoadoutRestored { item }) if item.name() == "Big Shield"));
        assert_eq!(state.player.as_ref().unwrap().equipped_index(), Some(0));
    }

    #[test]
    fn test_battle_turn_outside_battle_is_ignored() {
        let mut state = GameState::new();
        assert!(battle_turn(&mut state, BattleAction::Attack).is_empty());
        assert_eq!(state.scene, Scene::NamingPlayer);
    }

    #[test]
    fn test_restart_skips_naming_once_kept() {
        let mut state = battling_state(Archetype::BruteForce);
        state.scene = Scene::GameOverMenu;

        game_over_choice(&mut state, GameOverChoice::Restart);
        assert_eq!(state.scene, Scene::NamingPlayer);
        assert!(skip_naming_if_kept(&mut state));
        assert_eq!(state.scene, Scene::SelectingCharacter);
        assert_eq!(state.player_name, "Aria");
    }

    #[test]
    fn test_quit_sets_game_over() {
        let mut state = GameState::new();
        state.scene = Scene::GameOverMenu;
        game_over_choice(&mut state, GameOverChoice::Quit);
        assert!(state.game_over);
    }

    #[test]
    fn test_changes_loadout() {
        let item = Item::new("Thing", 1.0, crate::items::ItemType::Attack);
        assert!(GameEvent::Equipped { item: item.clone() }.changes_loadout());
        assert!(GameEvent::Unequipped { item }.changes_loadout());
        assert!(!GameEvent::NothingEquipped.changes_loadout());
    }
}
