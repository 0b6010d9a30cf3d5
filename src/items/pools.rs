//! Fixed item pools handed to a new player.

use super::types::{Item, ItemType};

/// Items for the Brute Force archetype.
pub fn offensive_pool() -> Vec<Item> {
    vec![
        Item::new("Big Wand", 5.0, ItemType::Attack),
        Item::new("Battle Axe", 15.0, ItemType::Attack),
        Item::new("Lucky Charm", 0.0, ItemType::None),
    ]
}

/// Items for the Defensive Tactics archetype.
pub fn defensive_pool() -> Vec<Item> {
    vec![
        Item::new("Big Shield", 15.0, ItemType::Defense),
        Item::new("Iron Helm", 5.0, ItemType::Defense),
        Item::new("Throwing Dagger", 5.0, ItemType::Attack),
    ]
}
