// Player archetype presets (health, attack, defense)
pub const BRUTE_FORCE_HEALTH: f32 = 100.0;
pub const BRUTE_FORCE_ATTACK: f32 = 35.0;
pub const BRUTE_FORCE_DEFENSE: f32 = 10.0;

pub const DEFENSIVE_TACTICS_HEALTH: f32 = 75.0;
pub const DEFENSIVE_TACTICS_ATTACK: f32 = 20.0;
pub const DEFENSIVE_TACTICS_DEFENSE: f32 = 15.0;

// Enemy roster, fought in this order
pub const LITTLE_DUDE_NAME: &str = "A Little Dude";
pub const LITTLE_DUDE_HEALTH: f32 = 20.0;
pub const LITTLE_DUDE_ATTACK: f32 = 25.0;
pub const LITTLE_DUDE_DEFENSE: f32 = 15.0;

pub const BIG_DUDE_NAME: &str = "A Big Dude";
pub const BIG_DUDE_HEALTH: f32 = 25.0;
pub const BIG_DUDE_ATTACK: f32 = 30.0;
pub const BIG_DUDE_DEFENSE: f32 = 10.0;

pub const FINAL_BOSS_NAME: &str = "Krazarackaraodareda the World Eater";
pub const FINAL_BOSS_HEALTH: f32 = 40.0;
pub const FINAL_BOSS_ATTACK: f32 = 20.0;
pub const FINAL_BOSS_DEFENSE: f32 = 5.0;

// Console text
pub const INVALID_INPUT_MESSAGE: &str = "Invalid Input";
pub const PROMPT_MARKER: &str = "> ";

// Persistence
pub const DATA_DIR_NAME: &str = ".battle-arena";
pub const LOADOUT_FILE_NAME: &str = "loadout.json";
pub const LOG_FILE_NAME: &str = "battle-arena.log";
