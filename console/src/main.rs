mod console_io;
mod game_controller;

use std::io;

use clap::{Parser, ValueEnum};
use common::config::{ConfigManager, GameConfig, MAX_SEARCH_DEPTH, Validate, config_path_near_executable};
use common::games::SessionRng;
use common::games::tictactoe::{BotType, Piece, PlayerInfo, TicTacToeGameState};
use common::{log, logger};
use console_io::Console;
use game_controller::{GameController, Outcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FirstMover {
    Ask,
    Human,
    Robot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum BotChoice {
    Random,
    Minimax,
}

impl From<BotChoice> for BotType {
    fn from(choice: BotChoice) -> Self {
        match choice {
            BotChoice::Random => BotType::Random,
            BotChoice::Minimax => BotType::Minimax,
        }
    }
}

/// Tic-tac-toe against a minimax robot
#[derive(Parser)]
#[command(name = "ttt_console")]
#[command(version, about, long_about = None)]
struct Args {
    /// YAML config file; defaults to ttt_console_config.yaml next to the binary
    #[arg(long)]
    config: Option<String>,

    /// Who plays X and moves first
    #[arg(long, value_enum)]
    first: Option<FirstMover>,

    /// Let two robots play each other
    #[arg(long)]
    robots: bool,

    /// Plies the robot looks ahead
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_SEARCH_DEPTH as u64))]
    depth: Option<u64>,

    /// How the robot picks its moves
    #[arg(long, value_enum)]
    bot: Option<BotChoice>,

    /// Seed for the opening move randomness
    #[arg(long)]
    seed: Option<u64>,

    /// Log search and session events to stderr
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_to(&self, config: &mut GameConfig) {
        match self.first {
            Some(FirstMover::Human) => config.human_first = Some(true),
            Some(FirstMover::Robot) => config.human_first = Some(false),
            Some(FirstMover::Ask) => config.human_first = None,
            None => {}
        }
        if self.robots {
            config.robot_vs_robot = true;
        }
        if let Some(depth) = self.depth {
            config.search_depth = depth as usize;
        }
        if let Some(bot) = self.bot {
            config.robot_strategy = bot.into();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

fn build_players(config: &GameConfig, human_first: bool) -> (PlayerInfo, PlayerInfo) {
    let robot = |name: String, piece: Piece| {
        PlayerInfo::robot(name, piece, config.search_depth).with_bot_type(config.robot_strategy)
    };

    if config.robot_vs_robot {
        return (
            robot(format!("{} X", config.robot_name), Piece::X),
            robot(format!("{} O", config.robot_name), Piece::O),
        );
    }

    if human_first {
        (
            PlayerInfo::human(config.player_name.clone(), Piece::X),
            robot(config.robot_name.clone(), Piece::O),
        )
    } else {
        (
            robot(config.robot_name.clone(), Piece::X),
            PlayerInfo::human(config.player_name.clone(), Piece::O),
        )
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        let prefix = args.use_log_prefix.then(|| "Console".to_string());
        logger::init_logger(prefix);
    }

    let config_path = args.config.clone().unwrap_or_else(config_path_near_executable);
    let manager: ConfigManager<_, GameConfig> = ConfigManager::from_yaml_file(&config_path);
    let mut config = manager.get_config()?;
    args.apply_to(&mut config);
    config.validate()?;
    log!("Loaded config from {}: {:?}", config_path, config);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let human_first = match (config.robot_vs_robot, config.human_first) {
        (true, _) => false,
        (false, Some(human_first)) => human_first,
        (false, None) => match console.confirm("Are you first? (y/n):")? {
            Some(answer) => answer,
            None => return Ok(()),
        },
    };

    let (first, second) = build_players(&config, human_first);
    let state = TicTacToeGameState::new(first, second)?;
    let rng = SessionRng::from_optional_seed(config.seed);

    let mut controller = GameController::new(console, state, rng);
    match controller.run()? {
        Outcome::Finished(status) => log!("Finished with {:?}", status),
        Outcome::InputClosed => log!("Stopped, input closed"),
    }

    Ok(())
}
