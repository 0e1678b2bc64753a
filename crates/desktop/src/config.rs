//! Configuration management using config.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the dropped-items JSON export to load on startup
    #[serde(default = "default_items_path")]
    pub items_path: String,

    /// Window position X (None = system default)
    #[serde(default)]
    pub window_x: Option<f32>,

    /// Window position Y (None = system default)
    #[serde(default)]
    pub window_y: Option<f32>,

    /// Window width (None = default 900)
    #[serde(default)]
    pub window_width: Option<f32>,

    /// Window height (None = default 600)
    #[serde(default)]
    pub window_height: Option<f32>,

    /// Window maximized state
    #[serde(default)]
    pub window_maximized: bool,
}

fn default_items_path() -> String {
    "items.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            items_path: default_items_path(),
            window_x: None,
            window_y: None,
            window_width: None,
            window_height: None,
            window_maximized: false,
        }
    }
}

impl Config {
    /// Load config from file, creating default if it doesn't exist
    pub fn load() -> Self {
        if Path::new(CONFIG_PATH).exists() {
            match fs::read_to_string(CONFIG_PATH) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Error parsing config.toml: {}", e);
                    }
                },
                Err(e) => {
                    eprintln!("Error reading config.toml: {}", e);
                }
            }
        }

        let config = Config::default();
        let _ = config.save(); // Try to create the file
        config
    }

    /// Save config to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(CONFIG_PATH, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.items_path, "items.json");
        assert!(!parsed.window_maximized);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("window_maximized = true").unwrap();
        assert_eq!(parsed.items_path, "items.json");
        assert!(parsed.window_maximized);
        assert_eq!(parsed.window_width, None);
    }
}
