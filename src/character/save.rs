use super::archetype::Archetype;
use crate::constants::LOADOUT_FILE_NAME;
use crate::error::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What gets written whenever the equipped slot changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadoutRecord {
    pub archetype: Archetype,
    pub equipped_index: Option<usize>,
    /// Unix seconds.
    pub saved_at: i64,
}

/// Reads and writes `loadout.json` in the data directory.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Creates the data directory if it does not exist yet.
    pub fn new(data_dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            save_path: data_dir.join(LOADOUT_FILE_NAME),
        })
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Writes the equipped index for `archetype`, replacing any earlier record.
    pub fn save(&self, archetype: Archetype, equipped_index: Option<usize>) -> Result<()> {
        let record = LoadoutRecord {
            archetype,
            equipped_index,
            saved_at: Utc::now().timestamp(),
        };
        let json = serde_json::to_string_pretty(&record)?;
        fs::write(&self.save_path, json)?;
        Ok(())
    }

    /// Returns `Ok(None)` when no loadout has been saved yet.
    pub fn load(&self) -> Result<Option<LoadoutRecord>> {
        let json = match fs::read_to_string(&self.save_path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&json)?))
    }
}
