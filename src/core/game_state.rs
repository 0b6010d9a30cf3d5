use crate::character::{Archetype, Player};
use crate::combat::{enemy_roster, Entity};

/// Stage of a run. The game loop dispatches on this and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    NamingPlayer,
    SelectingCharacter,
    Battling,
    GameOverMenu,
}

/// How the last run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Victory,
    Defeat,
}

/// All mutable state of one game session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub scene: Scene,
    pub player_name: String,
    /// Set once the player confirms a name; restarts then skip the naming prompt.
    pub name_kept: bool,
    pub archetype: Option<Archetype>,
    pub player: Option<Player>,
    pub enemies: Vec<Entity>,
    /// Valid roster index while battling; equals `enemies.len()` after a victory.
    pub current_enemy_index: usize,
    pub outcome: Option<RunOutcome>,
    /// Set by the quit choice; ends the run loop.
    pub game_over: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            scene: Scene::NamingPlayer,
            player_name: String::new(),
            name_kept: false,
            archetype: None,
            player: None,
            enemies: enemy_roster(),
            current_enemy_index: 0,
            outcome: None,
            game_over: false,
        }
    }

    /// The enemy being fought, if the index is inside the roster.
    pub fn current_enemy(&self) -> Option<&Entity> {
        self.enemies.get(self.current_enemy_index)
    }

    pub fn enemies_remaining(&self) -> usize {
        self.enemies.len().saturating_sub(self.current_enemy_index)
    }

    /// Back to the start of a run. The confirmed name survives.
    pub fn reset_for_restart(&mut self) {
        self.scene = Scene::NamingPlayer;
        self.archetype = None;
        self.player = None;
        self.enemies = enemy_roster();
        self.current_enemy_index = 0;
        self.outcome = None;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
