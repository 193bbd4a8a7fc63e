use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::TicTacToeSessionSettings;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: TicTacToeSessionSettings,
    /// Fixed seed for reproducible sessions; a fresh one is drawn when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};
    use common::games::tictactoe::{Difficulty, GameMode, MAX_COMPUTER_DELAY_MS};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!(
            "temp_tictactoe_client_config_{}.yaml",
            random_number
        ))
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_file() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());

        let serialized_string = serializer.serialize(&default_config).unwrap();
        content_provider
            .set_config_content(&serialized_string)
            .unwrap();

        let read_string = content_provider.get_config_content().unwrap().unwrap();
        let deserialized_config: Config = serializer.deserialize(&read_string).unwrap();
        assert_eq!(default_config, deserialized_config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let file_path = get_temp_file_path();
        let config = Config {
            game: TicTacToeSessionSettings {
                mode: GameMode::Pvp,
                difficulty: Difficulty::Medium,
                ..TicTacToeSessionSettings::default()
            },
            seed: Some(1234),
        };

        get_config_manager(Some(file_path.clone()))
            .set_config(&config)
            .unwrap();
        let loaded = get_config_manager(Some(file_path.clone()))
            .get_config()
            .unwrap();
        assert_eq!(config, loaded);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_file_gives_default_config() {
        let manager = get_config_manager(Some(get_temp_file_path()));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_delay_fails_validation() {
        let mut config = Config::default();
        config.game.computer_delay_ms = MAX_COMPUTER_DELAY_MS + 1;
        assert!(config.validate().is_err());
        assert!(
            get_config_manager(Some(get_temp_file_path()))
                .set_config(&config)
                .is_err()
        );
    }

    #[test]
    fn test_config_without_seed_field_loads() {
        let yaml = "game:\n  mode: pve\n  difficulty: easy\n  first_mark: O\n  first_player: random\n  computer_delay_ms: 0\n";
        let config: Config = YamlConfigSerializer::new().deserialize(yaml).unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.game.difficulty, Difficulty::Easy);
    }
}
