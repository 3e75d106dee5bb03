use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

const ENV_PREFIX: &str = "podium";
const LOGGING_SECTION: &str = "logging";

/// Configuration for podium.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (PODIUM_* prefix)
/// 3. Config file (~/.config/podium/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the speaker data file.
    ///
    /// Can be set via:
    /// - CLI: --data /path/to/presentations.json
    /// - ENV: PODIUM_DATA_PATH
    /// - Config: data_path = "/path/to/presentations.json"
    /// - Default: data/presentations.json
    pub data_path: PathBuf,

    /// Column at which talk summaries are wrapped.
    ///
    /// - ENV: PODIUM_WRAP_WIDTH
    #[serde(deserialize_with = "native_or_text")]
    pub wrap_width: usize,

    pub logging: LoggingConfig,
}

/// Logger settings handed to twyg at startup.
///
/// Read from the `[logging]` table, or from PODIUM_LOGGING_LEVEL and
/// PODIUM_LOGGING_COLOURED.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of: trace, debug, info, warn, error.
    pub level: String,

    #[serde(deserialize_with = "native_or_text")]
    pub coloured: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            wrap_width: DEFAULT_WRAP_WIDTH,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("warn"),
            coloured: true,
        }
    }
}

pub const DEFAULT_WRAP_WIDTH: usize = 80;

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/podium/config.toml
    /// Reads environment variables with PODIUM_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let file = if config_path.exists() {
            Some(
                config_path
                    .to_str()
                    .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?,
            )
        } else {
            None
        };

        let env_toml = env::scan(ENV_PREFIX, &[String::from(LOGGING_SECTION)]).toml();

        Self::from_sources(file, &env_toml)
    }

    /// Merge an optional config file with environment settings already
    /// rendered as TOML, the environment taking precedence.
    fn from_sources(file: Option<&str>, env_toml: &str) -> Result<Self> {
        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if let Some(path) = file {
            builder
                .add_file(path)
                .context("Failed to load config file")?;
        }

        builder
            .add_str(env_toml)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration, letting an explicit data path win.
    ///
    /// This is used when the --data CLI flag is provided.
    pub fn load_with_data_path(data_path: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::load()?;
        if let Some(path) = data_path {
            config.data_path = path;
        }
        Ok(config)
    }
}

/// Accept a native TOML value or its string form. confyg renders every
/// environment variable as a quoted string.
fn native_or_text<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NativeOrText<T> {
        Native(T),
        Text(String),
    }

    match NativeOrText::<T>::deserialize(deserializer)? {
        NativeOrText::Native(value) => Ok(value),
        NativeOrText::Text(text) => text.trim().parse().map_err(de::Error::custom),
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data").join("presentations.json")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/podium/config.toml
/// - macOS: ~/Library/Application Support/podium/config.toml
/// - Windows: %APPDATA%\podium\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("podium")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Podium Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (PODIUM_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Speaker data file: a JSON list of speaker records, or an object with a
# "speakers" list.
#
# Can also be set via:
# - CLI: podium --data /custom/presentations.json
# - Environment: PODIUM_DATA_PATH=/custom/presentations.json
data_path = "data/presentations.json"

# Column at which talk summaries are wrapped
wrap_width = 80

[logging]
# One of: trace, debug, info, warn, error
level = "warn"
coloured = true
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data_path, PathBuf::from("data/presentations.json"));
        assert_eq!(config.wrap_width, 80);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_example_config_matches_defaults() {
        let parsed: Config = toml::from_str(example_config()).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = toml::from_str("wrap_width = 60").unwrap();
        assert_eq!(parsed.wrap_width, 60);
        assert_eq!(parsed.data_path, Config::default().data_path);
        assert!(parsed.logging.coloured);
    }

    fn env_toml(top_level: Vec<(&str, &str)>, logging: Vec<(&str, &str)>) -> String {
        let kvs = |pairs: Vec<(&str, &str)>| {
            pairs
                .into_iter()
                .map(|(k, v)| env::KV::new(k.to_string(), v.to_string()))
                .collect::<Vec<env::KV>>()
        };
        let mut map = env::KVMap::new(ENV_PREFIX);
        map.insert(ENV_PREFIX, kvs(top_level));
        map.insert(LOGGING_SECTION, kvs(logging));
        map.toml()
    }

    #[test]
    fn test_string_values_are_parsed() {
        let parsed: Config =
            toml::from_str("wrap_width = '40'\n[logging]\ncoloured = 'false'\n").unwrap();
        assert_eq!(parsed.wrap_width, 40);
        assert!(!parsed.logging.coloured);
    }

    #[test]
    fn test_env_settings_override_defaults() {
        let env = env_toml(
            vec![("wrap_width", "40"), ("data_path", "/tmp/talks.json")],
            vec![("level", "debug"), ("coloured", "false")],
        );
        let config = Config::from_sources(None, &env).unwrap();

        assert_eq!(config.wrap_width, 40);
        assert_eq!(config.data_path, PathBuf::from("/tmp/talks.json"));
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.coloured);
    }

    #[test]
    fn test_env_settings_without_values_use_defaults() {
        let config = Config::from_sources(None, &env_toml(vec![], vec![])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_env_number_is_reported() {
        let env = env_toml(vec![("wrap_width", "wide")], vec![]);
        assert!(Config::from_sources(None, &env).is_err());
    }

    #[test]
    fn test_load_reads_process_environment() {
        std::env::set_var("PODIUM_WRAP_WIDTH", "40");
        std::env::set_var("PODIUM_LOGGING_LEVEL", "debug");
        let result = Config::load();
        std::env::remove_var("PODIUM_WRAP_WIDTH");
        std::env::remove_var("PODIUM_LOGGING_LEVEL");

        let config = result.unwrap();
        assert_eq!(config.wrap_width, 40);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_config_with_custom_data_path() {
        let custom_path = PathBuf::from("/tmp/speakers.json");
        let config = Config::load_with_data_path(Some(custom_path.clone()));
        assert!(config.is_ok());
        assert_eq!(config.unwrap().data_path, custom_path);
    }
}
