use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const KNOWN_KEYS: &[&str] = &["start_page"];

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Page visited once at launch. Blank means start with an empty history.
    #[serde(default)]
    pub start_page: String,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = get_config_file_path()?;

        if !config_path.exists() {
            return Err(ConfigError::ConfigNotFound);
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::from_toml(&content)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::load() {
            Ok(config) => Ok(config),
            Err(ConfigError::ConfigNotFound) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = get_config_file_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content = self.to_toml()?;

        fs::write(&config_path, content).map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }

    pub fn get(&self, key: &str) -> Result<&str, ConfigError> {
        match key {
            "start_page" => Ok(&self.start_page),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    pub fn set(&mut self, key: &str, value: String) -> Result<(), ConfigError> {
        match key {
            "start_page" => {
                self.start_page = value;
                Ok(())
            }
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    /// The trimmed start page, if one is configured.
    pub fn start_page(&self) -> Option<&str> {
        let page = self.start_page.trim();
        if page.is_empty() { None } else { Some(page) }
    }
}

fn get_config_file_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirNotFound)?;

    Ok(config_dir.join("history-browser").join("config.toml"))
}

#[derive(Debug)]
pub enum ConfigError {
    ConfigNotFound,
    ConfigDirNotFound,
    UnknownKey(String),
    ReadError(String),
    WriteError(String),
    ParseError(String),
    SerializeError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ConfigNotFound => {
                write!(
                    f,
                    "Configuration not found. Run 'history-browser config set start_page <url>' to create one."
                )
            }
            ConfigError::ConfigDirNotFound => {
                write!(f, "Could not find config directory")
            }
            ConfigError::UnknownKey(key) => {
                write!(
                    f,
                    "Unknown configuration key '{}'. Supported keys: {}",
                    key,
                    KNOWN_KEYS.join(", ")
                )
            }
            ConfigError::ReadError(msg) => {
                write!(f, "Failed to read config file: {}", msg)
            }
            ConfigError::WriteError(msg) => {
                write!(f, "Failed to write config file: {}", msg)
            }
            ConfigError::ParseError(msg) => {
                write!(f, "Failed to parse config file: {}", msg)
            }
            ConfigError::SerializeError(msg) => {
                write!(f, "Failed to serialize config: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start_page() {
        let config = Config::from_toml("start_page = \"https://example.com\"\n").unwrap();
        assert_eq!(config.start_page(), Some("https://example.com"));
    }

    #[test]
    fn test_missing_key_uses_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.start_page(), None);
    }

    #[test]
    fn test_blank_start_page_is_none() {
        let config = Config {
            start_page: "   ".to_string(),
        };
        assert_eq!(config.start_page(), None);
    }

    #[test]
    fn test_start_page_is_trimmed() {
        let config = Config {
            start_page: "  rust-lang.org \n".to_string(),
        };
        assert_eq!(config.start_page(), Some("rust-lang.org"));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let result = Config::from_toml("start_page = ");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_get_and_set_known_key() {
        let mut config = Config::default();
        config.set("start_page", "a.com".to_string()).unwrap();
        assert_eq!(config.get("start_page").unwrap(), "a.com");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("file_path", "x".to_string()),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(config.get("theme"), Err(ConfigError::UnknownKey(_))));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = Config {
            start_page: "example.com".to_string(),
        };
        let text = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }
}
