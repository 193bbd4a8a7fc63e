mod command;
mod config;
mod game_ui;
mod offline;

use std::path::PathBuf;

use clap::Parser;
use common::config::Validate;
use common::games::tictactoe::{Difficulty, FirstPlayerMode, GameMode, Mark, TicTacToeSession};
use common::{log, logger};

use config::{Config, get_config_manager};
use offline::run_tictactoe_game;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Tic-tac-toe against a friend or the computer")]
struct Args {
    /// YAML config file; defaults to one next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// pvp or pve
    #[arg(long)]
    mode: Option<GameMode>,

    /// easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Mark that opens the game: x or o
    #[arg(long)]
    first_mark: Option<Mark>,

    /// Who opens a game against the computer: human, computer or random
    #[arg(long)]
    first_player: Option<FirstPlayerMode>,

    #[arg(long)]
    delay_ms: Option<u64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective settings back to the config file.
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

impl Args {
    fn apply_to(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.game.mode = mode;
        }
        if let Some(difficulty) = self.difficulty {
            config.game.difficulty = difficulty;
        }
        if let Some(first_mark) = self.first_mark {
            config.game.first_mark = first_mark;
        }
        if let Some(first_player) = self.first_player {
            config.game.first_player = first_player;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.game.computer_delay_ms = delay_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager = get_config_manager(args.config.clone());
    let mut config = config_manager.get_config()?;
    args.apply_to(&mut config);
    config.validate()?;

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Settings saved");
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut session = TicTacToeSession::new(config.game, seed)?;
    log!(
        "Starting {:?} session ({} difficulty), seed {}",
        config.game.mode,
        config.game.difficulty,
        seed
    );

    run_tictactoe_game(&mut session).await
}
