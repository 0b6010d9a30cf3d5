//! Battle Arena - a console text RPG.
//!
//! Name a fighter, pick a fighting style, and beat three enemies in
//! turn-based combat. The library holds all game logic; the binary wires it
//! to the terminal.

pub mod build_info;
pub mod character;
pub mod combat;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod input;
pub mod items;
pub mod ui;

pub use crate::character::{Archetype, Player, SaveManager};
pub use crate::combat::{Combatant, Entity};
pub use crate::config::GameConfig;
pub use crate::core::{Game, GameState, Scene};
pub use crate::error::{GameError, Result};
pub use crate::items::{Item, ItemType};
