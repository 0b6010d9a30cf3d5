use battle_arena::build_info;
use battle_arena::constants::LOG_FILE_NAME;
use battle_arena::ui::TerminalConsole;
use battle_arena::{Game, GameConfig, GameError, SaveManager};
use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Sends logs to a file in the data directory; stdout belongs to the game.
fn init_logging(data_dir: &Path) -> io::Result<WorkerGuard> {
    fs::create_dir_all(data_dir)?;

    let file_appender = tracing_appender::rolling::never(data_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    tracing::info!(log_file = %data_dir.join(LOG_FILE_NAME).display(), "logging initialized");
    Ok(guard)
}

fn main() -> Result<(), GameError> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Battle Arena - Console Text RPG\n");
                println!("Usage: battle-arena [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("Environment:");
                println!("  BATTLE_ARENA_HOME          Data directory (default ~/.battle-arena)");
                println!("  BATTLE_ARENA_CLEAR_SCREEN  Clear the screen between steps (true/false)");
                println!("  BATTLE_ARENA_PAUSE         Wait for Enter after messages (true/false)");
                println!("  BATTLE_ARENA_SAVE          Save the equipped item (true/false)");
                println!("  RUST_LOG                   Log filter");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'battle-arena --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let config = GameConfig::from_env();

    // Held for the whole run so buffered log lines are flushed on exit.
    let _log_guard = match init_logging(&config.data_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    };
    tracing::info!(?config, "configuration loaded");

    let saves = if config.save_loadout {
        match SaveManager::new(&config.data_dir) {
            Ok(saves) => Some(saves),
            Err(e) => {
                tracing::warn!(error = %e, "loadout saving disabled");
                None
            }
        }
    } else {
        None
    };

    let console = TerminalConsole::new(config.clear_screen, config.pause_after_messages);
    let mut game = Game::new(console, saves);

    match game.run() {
        Err(GameError::InputClosed) => {
            tracing::info!("input closed, exiting");
            Ok(())
        }
        result => result,
    }
}
