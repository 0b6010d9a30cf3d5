//! Core game state, scene transitions, and the run loop.

pub mod game_logic;
pub mod game_loop;
pub mod game_state;

pub use game_logic::*;
pub use game_loop::*;
pub use game_state::*;
