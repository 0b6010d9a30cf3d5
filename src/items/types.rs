use serde::{Deserialize, Serialize};

/// Which combat stat an item's boost applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemType {
    Attack,
    Defense,
    None,
}

impl ItemType {
    /// Short label for menus, e.g. "ATK".
    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Attack => "ATK",
            ItemType::Defense => "DEF",
            ItemType::None => "---",
        }
    }
}

/// An equippable item. Fields are private so an item never changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    stat_boost: f32,
    boost_type: ItemType,
}

impl Item {
    pub fn new(name: impl Into<String>, stat_boost: f32, boost_type: ItemType) -> Self {
        Self {
            name: name.into(),
            stat_boost,
            boost_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stat_boost(&self) -> f32 {
        self.stat_boost
    }

    pub fn boost_type(&self) -> ItemType {
        self.boost_type
    }

    /// The boost this item grants to `category`, zero when the types differ.
    pub fn boost_for(&self, category: ItemType) -> f32 {
        if category != ItemType::None && self.boost_type == category {
            self.stat_boost
        } else {
            0.0
        }
    }

    /// Stat summary for menus, e.g. "+15 ATK". Empty for items with no boost.
    pub fn summary(&self) -> String {
        match self.boost_type {
            ItemType::None => String::new(),
            kind => format!("+{} {}", self.stat_boost, kind.label()),
        }
    }
}
