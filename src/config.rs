use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub line_ending: LineEnding,
    #[serde(default)]
    pub show_input: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { format: OutputFormat::Text, line_ending: LineEnding::Lf, show_input: false }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        // If config doesn't exist, create default
        if !config_path.exists() {
            log::debug!("No config at {}, writing defaults", config_path.display());
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(config_path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Look up a setting by its dotted key, e.g. `display.format`
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "display.format" => match self.display.format {
                OutputFormat::Text => "text",
                OutputFormat::Json => "json",
            }
            .to_string(),
            "display.line_ending" => match self.display.line_ending {
                LineEnding::Lf => "lf",
                LineEnding::Crlf => "crlf",
            }
            .to_string(),
            "display.show_input" => self.display.show_input.to_string(),
            _ => return Err(anyhow!("Unknown config key: {}", key)),
        };
        Ok(value)
    }

    /// Update a setting by its dotted key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "display.format" => {
                self.display.format = match value.to_lowercase().as_str() {
                    "text" => OutputFormat::Text,
                    "json" => OutputFormat::Json,
                    _ => return Err(anyhow!("Invalid format '{}'. Expected text or json", value)),
                }
            }
            "display.line_ending" => {
                self.display.line_ending = match value.to_lowercase().as_str() {
                    "lf" => LineEnding::Lf,
                    "crlf" => LineEnding::Crlf,
                    _ => {
                        return Err(anyhow!("Invalid line ending '{}'. Expected lf or crlf", value))
                    }
                }
            }
            "display.show_input" => {
                self.display.show_input = value
                    .parse()
                    .with_context(|| format!("Invalid boolean '{}' for {}", value, key))?
            }
            _ => return Err(anyhow!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["display.format", "display.line_ending", "display.show_input"]
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "berlinclock", "berlin-clock")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.display.format, OutputFormat::Text);
        assert_eq!(config.display.line_ending, LineEnding::Lf);
        assert!(!config.display.show_input);
    }

    #[test]
    fn test_config_save_load() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("display.format", "json")?;
        config.set("display.line_ending", "CRLF")?;
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        assert_eq!(loaded.display.line_ending.as_str(), "\r\n");

        Ok(())
    }

    #[test]
    fn test_missing_config_is_created() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("config.toml");

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, Config::default());
        assert!(config_path.exists());

        Ok(())
    }

    #[test]
    fn test_partial_config_uses_defaults() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[display]\nshow_input = true\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert!(loaded.display.show_input);
        assert_eq!(loaded.display.format, OutputFormat::Text);

        Ok(())
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("display.format", "xml").is_err());
        assert!(config.set("display.show_input", "maybe").is_err());
        assert!(config.set("calendar.default", "x").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_get_round_trips_keys() -> Result<()> {
        let config = Config::default();
        for key in Config::keys() {
            let mut copy = config.clone();
            copy.set(key, &config.get(key)?)?;
            assert_eq!(copy, config);
        }
        Ok(())
    }
}
