//! Fighting styles offered at character selection.

use crate::constants::*;
use crate::items::{defensive_pool, offensive_pool, Item};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Archetype {
    BruteForce,
    DefensiveTactics,
}

/// Base stats an archetype starts a run with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatPreset {
    pub health: f32,
    pub attack_power: f32,
    pub defense_power: f32,
}

impl Archetype {
    pub fn all() -> [Archetype; 2] {
        [Archetype::BruteForce, Archetype::DefensiveTactics]
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Archetype::BruteForce => "Brute Force!",
            Archetype::DefensiveTactics => "Defensive Tactics.",
        }
    }

    pub fn preset(&self) -> StatPreset {
        match self {
            Archetype::BruteForce => StatPreset {
                health: BRUTE_FORCE_HEALTH,
                attack_power: BRUTE_FORCE_ATTACK,
                defense_power: BRUTE_FORCE_DEFENSE,
            },
            Archetype::DefensiveTactics => StatPreset {
                health: DEFENSIVE_TACTICS_HEALTH,
                attack_power: DEFENSIVE_TACTICS_ATTACK,
                defense_power: DEFENSIVE_TACTICS_DEFENSE,
            },
        }
    }

    pub fn item_pool(&self) -> Vec<Item> {
        match self {
            Archetype::BruteForce => offensive_pool(),
            Archetype::DefensiveTactics => defensive_pool(),
        }
    }
}
