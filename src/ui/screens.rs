//! Text for stats panels, menus and event messages.

use super::console::Tone;
use crate::character::Player;
use crate::combat::{CombatEvent, Combatant};
use crate::core::GameEvent;

pub fn stats_lines(combatant: &dyn Combatant) -> Vec<String> {
    vec![
        format!("{}'s stats:", combatant.name()),
        format!("Health: {}", combatant.health()),
        format!("Attack: {}", combatant.attack_power()),
        format!("Defense: {}", combatant.defense_power()),
    ]
}

/// Player stats plus the equipped item, if any.
pub fn player_stats_lines(player: &Player) -> Vec<String> {
    let mut lines = stats_lines(player);
    let equipped = match player.equipped_item() {
        Some(item) if item.summary().is_empty() => item.name().to_string(),
        Some(item) => format!("{} ({})", item.name(), item.summary()),
        None => "Nothing".to_string(),
    };
    lines.push(format!("Equipped: {}", equipped));
    lines
}

/// Numbered 1-based option lines.
pub fn option_lines(options: &[String]) -> Vec<String> {
    options
        .iter()
        .enumerate()
        .map(|(i, option)| format!("{}. {}", i + 1, option))
        .collect()
}

/// Menu labels for the player's inventory, marking the equipped one.
pub fn inventory_labels(player: &Player) -> Vec<String> {
    player
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let mut label = item.name().to_string();
            let summary = item.summary();
            if !summary.is_empty() {
                label.push_str(&format!(" ({})", summary));
            }
            if player.equipped_index() == Some(i) {
                label.push_str(" [equipped]");
            }
            label
        })
        .collect()
}

pub fn event_line(event: &GameEvent) -> (String, Tone) {
    match event {
        GameEvent::Combat(CombatEvent::Hit {
            attacker,
            defender,
            damage,
        }) => (
            format!("{} deals {} to {}!", attacker, damage, defender),
            Tone::Plain,
        ),
        GameEvent::EnemyDefeated { name } => (format!("You defeated {}!", name), Tone::Good),
        GameEvent::Victory => ("You are victorious!".to_string(), Tone::Good),
        GameEvent::PlayerSlain => ("You have been slain.".to_string(), Tone::Bad),
        GameEvent::Equipped { item } => (format!("You equipped {}.", item.name()), Tone::Info),
        GameEvent::EquipFailed => ("You couldn't equip that.".to_string(), Tone::Bad),
        GameEvent::Unequipped { item } => (format!("You put away {}.", item.name()), Tone::Info),
        GameEvent::NothingEquipped => ("You have nothing equipped.".to_string(), Tone::Bad),
        GameEvent::LoadoutRestored { item } => (
            format!("You ready your trusty {} once more.", item.name()),
            Tone::Info,
        ),
    }
}
