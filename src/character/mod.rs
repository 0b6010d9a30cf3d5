//! The player character: archetypes, the player fighter, and the loadout save.

pub mod archetype;
pub mod player;
pub mod save;

pub use archetype::*;
pub use player::*;
pub use save::*;
