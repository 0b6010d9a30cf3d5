//! Runtime configuration read from the environment.

use crate::constants::DATA_DIR_NAME;
use std::env;
use std::path::PathBuf;

/// Settings for one run of the game.
///
/// Environment variables:
/// - `BATTLE_ARENA_HOME` - data directory for the loadout and log files
///   (default: `~/.battle-arena`)
/// - `BATTLE_ARENA_CLEAR_SCREEN` - clear the terminal between steps (default: true)
/// - `BATTLE_ARENA_PAUSE` - wait for Enter after battle messages (default: true)
/// - `BATTLE_ARENA_SAVE` - write the loadout file on equip changes (default: true)
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub data_dir: PathBuf,
    pub clear_screen: bool,
    pub pause_after_messages: bool,
    pub save_loadout: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            clear_screen: true,
            pause_after_messages: true,
            save_loadout: true,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = env::var_os("BATTLE_ARENA_HOME").filter(|d| !d.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(flag) = read_env::<bool>("BATTLE_ARENA_CLEAR_SCREEN") {
            config.clear_screen = flag;
        }
        if let Some(flag) = read_env::<bool>("BATTLE_ARENA_PAUSE") {
            config.pause_after_messages = flag;
        }
        if let Some(flag) = read_env::<bool>("BATTLE_ARENA_SAVE") {
            config.save_loadout = flag;
        }

        config
    }
}

/// `~/.battle-arena`, or a relative `.battle-arena` when no home directory is known.
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(DATA_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(DATA_DIR_NAME))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().to_ascii_lowercase().parse().ok()
}
