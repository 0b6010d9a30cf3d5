//! The interactive run loop.
//!
//! [`Game`] owns the [`GameState`] and a [`Console`], reads one decision per
//! prompt, feeds it to the transition functions in `game_logic`, and prints
//! the resulting events.

use super::game_logic::{
    battle_turn, confirm_name, game_over_choice, restore_loadout, select_archetype,
    skip_naming_if_kept, submit_name, BattleAction, GameEvent, GameOverChoice,
};
use super::game_state::{GameState, Scene};
use crate::character::{Archetype, SaveManager};
use crate::constants::{INVALID_INPUT_MESSAGE, PROMPT_MARKER};
use crate::error::{GameError, Result};
use crate::input::parse_menu_choice;
use crate::ui::screens::{event_line, inventory_labels, option_lines, player_stats_lines, stats_lines};
use crate::ui::{Console, Tone};

const BATTLE_OPTIONS: [&str; 3] = ["Attack!", "Equip Item", "Remove Item"];

pub struct Game<C: Console> {
    state: GameState,
    console: C,
    saves: Option<SaveManager>,
}

impl<C: Console> Game<C> {
    /// A new session. Pass `None` for `saves` to disable the loadout file.
    pub fn new(console: C, saves: Option<SaveManager>) -> Self {
        Self {
            state: GameState::new(),
            console,
            saves,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Runs scenes until the player quits.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("game started");
        while !self.state.game_over {
            self.update()?;
        }
        self.end()
    }

    /// Handles exactly one scene step.
    pub fn update(&mut self) -> Result<()> {
        match self.state.scene {
            Scene::NamingPlayer => self.naming_scene(),
            Scene::SelectingCharacter => self.selection_scene(),
            Scene::Battling => self.battle_scene(),
            Scene::GameOverMenu => self.game_over_scene(),
        }
    }

    fn end(&mut self) -> Result<()> {
        let farewell = format!("Farewell {}!", self.state.player_name);
        self.console.write_line(&farewell, Tone::Heading)?;
        tracing::info!("game ended");
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        self.console.read_line()?.ok_or(GameError::InputClosed)
    }

    /// Shows a numbered menu until a valid option is picked; returns its
    /// 0-based index.
    fn get_input(&mut self, description: &str, options: &[String]) -> Result<usize> {
        loop {
            self.console.write_line(description, Tone::Heading)?;
            for line in option_lines(options) {
                self.console.write_line(&line, Tone::Plain)?;
            }
            self.console.write_prompt(PROMPT_MARKER)?;

            let input = self.read_line()?;
            match parse_menu_choice(&input, options.len()) {
                Some(choice) => {
                    self.console.clear()?;
                    return Ok(choice);
                }
                None => {
                    tracing::debug!(input = %input, "invalid menu input");
                    self.console.write_line(INVALID_INPUT_MESSAGE, Tone::Bad)?;
                    self.console.pause()?;
                    self.console.clear()?;
                }
            }
        }
    }

    fn get_yes_no(&mut self, description: &str, yes: &str, no: &str) -> Result<bool> {
        let choice = self.get_input(description, &[yes.to_string(), no.to_string()])?;
        Ok(choice == 0)
    }

    fn show_events(&mut self, events: &[GameEvent]) -> Result<()> {
        for event in events {
            let (line, tone) = event_line(event);
            self.console.write_line(&line, tone)?;
        }
        Ok(())
    }

    fn write_lines(&mut self, lines: Vec<String>) -> Result<()> {
        for line in lines {
            self.console.write_line(&line, Tone::Plain)?;
        }
        Ok(())
    }

    fn naming_scene(&mut self) -> Result<()> {
        if skip_naming_if_kept(&mut self.state) {
            return Ok(());
        }

        self.console
            .write_line("What is your name, adventurer?", Tone::Heading)?;
        self.console.write_prompt(PROMPT_MARKER)?;
        let name = self.read_line()?;
        self.console.clear()?;

        if !submit_name(&mut self.state, &name) {
            self.console.write_line(INVALID_INPUT_MESSAGE, Tone::Bad)?;
            self.console.pause()?;
            self.console.clear()?;
            return Ok(());
        }

        let keep = self.get_yes_no("Would you like to keep your name?", "Yes.", "No.")?;
        confirm_name(&mut self.state, keep);
        Ok(())
    }

    fn selection_scene(&mut self) -> Result<()> {
        let description = format!(
            "{}, which style of fighting do you align with?",
            self.state.player_name
        );
        let archetypes = Archetype::all();
        let labels: Vec<String> = archetypes.iter().map(|a| a.label().to_string()).collect();
        let choice = self.get_input(&description, &labels)?;

        select_archetype(&mut self.state, archetypes[choice]);

        if let Some(event) = self.load_saved_loadout(archetypes[choice]) {
            self.show_events(&[event])?;
            self.console.pause()?;
            self.console.clear()?;
        }
        Ok(())
    }

    fn battle_scene(&mut self) -> Result<()> {
        let (Some(player), Some(enemy)) = (self.state.player.as_ref(), self.state.current_enemy())
        else {
            // Battling without a player or enemy cannot be resumed; start over.
            tracing::error!("battle scene entered without combatants, restarting");
            self.state.reset_for_restart();
            return Ok(());
        };

        let mut lines = player_stats_lines(player);
        lines.push(String::new());
        lines.extend(stats_lines(enemy));
        lines.push(String::new());
        let description = format!("{} stands before you! What will you do?", enemy.name);
        self.write_lines(lines)?;

        let options: Vec<String> = BATTLE_OPTIONS.iter().map(|o| o.to_string()).collect();
        let events = match self.get_input(&description, &options)? {
            0 => battle_turn(&mut self.state, BattleAction::Attack),
            1 => match self.equip_menu()? {
                Some(index) => battle_turn(&mut self.state, BattleAction::Equip(index)),
                None => return Ok(()),
            },
            _ => {
                if !self.remove_menu()? {
                    return Ok(());
                }
                battle_turn(&mut self.state, BattleAction::Unequip)
            }
        };

        self.show_events(&events)?;
        if events.iter().any(GameEvent::changes_loadout) {
            self.save_loadout();
        }
        self.console.pause()?;
        self.console.clear()?;
        Ok(())
    }

    /// Item sub-menu. `None` when the player has nothing to equip.
    fn equip_menu(&mut self) -> Result<Option<usize>> {
        let labels = match self.state.player.as_ref() {
            Some(player) => inventory_labels(player),
            None => return Ok(None),
        };
        if labels.is_empty() {
            self.console.write_line("You have no items.", Tone::Bad)?;
            self.console.pause()?;
            self.console.clear()?;
            return Ok(None);
        }
        let choice = self.get_input("Which item would you like to equip?", &labels)?;
        Ok(Some(choice))
    }

    /// Remove sub-menu: confirms putting the equipped item away. Returns true
    /// to go ahead. With nothing equipped there is nothing to confirm.
    fn remove_menu(&mut self) -> Result<bool> {
        let equipped = self
            .state
            .player
            .as_ref()
            .and_then(|player| player.equipped_item())
            .map(|item| item.name().to_string());
        match equipped {
            Some(name) => {
                let description = format!("Put away {}?", name);
                self.get_yes_no(&description, "Yes.", "No.")
            }
            None => Ok(true),
        }
    }

    fn game_over_scene(&mut self) -> Result<()> {
        let restart = self.get_yes_no("Would you like to restart the game?", "Yes!", "No.")?;
        let choice = if restart {
            GameOverChoice::Restart
        } else {
            GameOverChoice::Quit
        };
        game_over_choice(&mut self.state, choice);
        Ok(())
    }

    /// Writes the current equipped index. Failures are logged, never fatal.
    fn save_loadout(&self) {
        let (Some(saves), Some(archetype), Some(player)) = (
            self.saves.as_ref(),
            self.state.archetype,
            self.state.player.as_ref(),
        ) else {
            return;
        };
        match saves.save(archetype, player.equipped_index()) {
            Ok(()) => tracing::debug!(
                path = %saves.save_path().display(),
                equipped = ?player.equipped_index(),
                "loadout saved"
            ),
            Err(e) => tracing::warn!(error = %e, "failed to save loadout"),
        }
    }

    fn load_saved_loadout(&mut self, archetype: Archetype) -> Option<GameEvent> {
        let record = match self.saves.as_ref()?.load() {
            Ok(record) => record?,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable loadout");
                return None;
            }
        };
        if record.archetype != archetype {
            return None;
        }
        restore_loadout(&mut self.state, record.equipped_index)
    }
}
