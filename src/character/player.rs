use super::archetype::Archetype;
use crate::combat::{Combatant, Entity};
use crate::items::{Item, ItemType};

/// The player's fighter: an [`Entity`] holding the base stats, plus an
/// inventory and one equipped-item slot.
///
/// `equipped` is always `None` or a valid index into `items`; the only ways
/// to change it are [`Player::try_equip_item`] and [`Player::try_unequip_item`].
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    entity: Entity,
    items: Vec<Item>,
    equipped: Option<usize>,
}

impl Player {
    pub fn new(entity: Entity, items: Vec<Item>) -> Self {
        Self {
            entity,
            items,
            equipped: None,
        }
    }

    /// A fresh player with the archetype's preset stats and item pool.
    pub fn from_archetype(name: impl Into<String>, archetype: Archetype) -> Self {
        let preset = archetype.preset();
        Self::new(
            Entity::new(
                name,
                preset.health,
                preset.attack_power,
                preset.defense_power,
            ),
            archetype.item_pool(),
        )
    }

    /// Base stats without equipment.
    pub fn base(&self) -> &Entity {
        &self.entity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn equipped_index(&self) -> Option<usize> {
        self.equipped
    }

    pub fn equipped_item(&self) -> Option<&Item> {
        self.equipped.and_then(|index| self.items.get(index))
    }

    /// Equips the item at `index`. Returns false and changes nothing when the
    /// index is out of range.
    pub fn try_equip_item(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.equipped = Some(index);
        true
    }

    /// Clears the equipped slot. Returns false if nothing was equipped.
    pub fn try_unequip_item(&mut self) -> bool {
        self.equipped.take().is_some()
    }

    fn equipment_bonus(&self, category: ItemType) -> f32 {
        self.equipped_item()
            .map_or(0.0, |item| item.boost_for(category))
    }

    pub fn effective_attack_power(&self) -> f32 {
        self.entity.attack_power + self.equipment_bonus(ItemType::Attack)
    }

    pub fn effective_defense_power(&self) -> f32 {
        self.entity.defense_power + self.equipment_bonus(ItemType::Defense)
    }

    /// Inventory names in inventory order.
    pub fn item_names(&self) -> Vec<String> {
        self.items.iter().map(|item| item.name().to_string()).collect()
    }
}

impl Combatant for Player {
    fn name(&self) -> &str {
        &self.entity.name
    }

    fn health(&self) -> f32 {
        self.entity.health
    }

    fn attack_power(&self) -> f32 {
        self.effective_attack_power()
    }

    fn defense_power(&self) -> f32 {
        self.effective_defense_power()
    }

    fn take_damage(&mut self, amount: f32) {
        self.entity.take_damage(amount);
    }
}
