//! Console presentation.

pub mod console;
pub mod screens;

pub use console::{Console, ScriptedConsole, TerminalConsole, Tone};
