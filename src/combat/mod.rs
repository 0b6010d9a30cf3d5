//! Combat system: entities, damage math, and the enemy roster.

pub mod logic;
pub mod roster;
pub mod types;

pub use logic::*;
pub use roster::*;
pub use types::*;
