use serde::{Deserialize, Serialize};

use crate::games::tictactoe::{BotType, DEFAULT_SEARCH_DEPTH};
use super::Validate;

/// A game never lasts more than nine plies, so looking further is pointless.
pub const MAX_SEARCH_DEPTH: usize = 9;

const CONFIG_FILE_NAME: &str = "ttt_console_config.yaml";

pub fn config_path_near_executable() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub player_name: String,
    pub robot_name: String,
    /// `None` asks at startup.
    pub human_first: Option<bool>,
    pub search_depth: usize,
    pub robot_strategy: BotType,
    pub robot_vs_robot: bool,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: "Joe".to_string(),
            robot_name: "Computer".to_string(),
            human_first: None,
            search_depth: DEFAULT_SEARCH_DEPTH,
            robot_strategy: BotType::Minimax,
            robot_vs_robot: false,
            seed: None,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.player_name.trim().is_empty() {
            return Err("Player name must not be empty".to_string());
        }
        if self.robot_name.trim().is_empty() {
            return Err("Robot name must not be empty".to_string());
        }
        if self.search_depth == 0 || self.search_depth > MAX_SEARCH_DEPTH {
            return Err(format!(
                "Search depth must be between 1 and {}, got {}",
                MAX_SEARCH_DEPTH, self.search_depth
            ));
        }
        Ok(())
    }
}
