use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tictactoe_common::config::{
    ConfigError, ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_common::games::tictactoe::TicTacToeSettings;
use tictactoe_common::logger::DEFAULT_LOG_LEVEL;

const CONFIG_FILE_NAME: &str = "tictactoe_console.yaml";

fn default_config_path() -> PathBuf {
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
    ConfigManager::from_yaml_file(path.unwrap_or_else(default_config_path))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tictactoe: TicTacToeSettings,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tictactoe: TicTacToeSettings::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), ConfigError> {
        self.tictactoe.validate()?;
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log level must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::config::{ConfigContentProvider, ConfigSerializer};
    use tictactoe_common::games::tictactoe::{ExtensionScope, GameMode};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_console_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_round_trips_through_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_round_trips_through_manager() {
        let file_path = get_temp_file_path();
        let config = Config {
            tictactoe: TicTacToeSettings {
                field_size: 7,
                win_length: 5,
                mode: GameMode::TwoPlayers,
                seed: Some(1234),
                extension_scope: ExtensionScope::AllOwnMarks,
                ..Default::default()
            },
            log_level: "debug".to_string(),
        };

        let manager = get_config_manager(Some(file_path.clone()));
        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh = get_config_manager(Some(file_path.clone()));
        assert_eq!(fresh.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_file_returns_default_config() {
        let manager = get_config_manager(Some(PathBuf::from("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            tictactoe:
              field_size: 12
              win_length: 3
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(matches!(manager.get_config(), Err(ConfigError::Invalid(_))));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_empty_log_level_is_invalid() {
        let config = Config {
            log_level: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
