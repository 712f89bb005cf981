//! Configuration for folio.
//!
//! Settings live in `config.toml` under the platform config directory
//! (for example `~/.config/folio/config.toml` on Linux). Every field has a
//! default, so a missing file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use folio_core::ColorTheme;
use serde::{Deserialize, Serialize};

/// File name of the config file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Errors from reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no config directory could be determined for this platform")]
    NoConfigDir,
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Host signal overrides, for hosts that report nothing useful.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Device memory in GB.
    pub memory_gb: Option<f64>,
    /// Logical processor count.
    pub cores: Option<usize>,
}

/// Contact form delivery settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// HTTP endpoint that receives `{name, email, message}` as JSON. Without
    /// one, sending is simulated.
    pub endpoint: Option<String>,
    /// Delay of the simulated send, in milliseconds.
    pub simulated_delay_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            simulated_delay_ms: 1500,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub color_theme: ColorTheme,
    /// Force reduced motion on or off. Unset defers to the environment.
    pub reduced_motion: Option<bool>,
    /// Delay between typed characters in the hero title, in milliseconds.
    pub typing_delay_ms: u64,
    /// Fixed hero particle count instead of the device-tier estimate.
    pub particle_count: Option<usize>,
    /// Log filter directive, e.g. `info` or `folio=debug`.
    pub log_level: String,
    pub device: DeviceConfig,
    pub contact: ContactConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_theme: ColorTheme::default(),
            reduced_motion: None,
            typing_delay_ms: 100,
            particle_count: None,
            log_level: "info".to_string(),
            device: DeviceConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "folio")
}

/// Default path of the config file.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    project_dirs()
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
        .ok_or(ConfigError::NoConfigDir)
}

/// Directory for the log file.
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
}

impl Config {
    /// Load from the default path, falling back to defaults when the file
    /// does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path()?)
    }

    /// Load from `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse TOML contents.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Save to the default path.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_path()?)
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.typing_delay_ms, 100);
        assert_eq!(config.contact.simulated_delay_ms, 1500);
        assert_eq!(config.reduced_motion, None);
        assert_eq!(config.color_theme, ColorTheme::Purple);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::parse(
            r#"
            color_theme = "cyan"
            reduced_motion = true

            [contact]
            endpoint = "https://example.com/contact"
            "#,
        )
        .unwrap();
        assert_eq!(config.color_theme, ColorTheme::Cyan);
        assert_eq!(config.reduced_motion, Some(true));
        assert_eq!(config.contact.endpoint.as_deref(), Some("https://example.com/contact"));
        assert_eq!(config.contact.simulated_delay_ms, 1500);
        assert_eq!(config.typing_delay_ms, 100);
    }

    #[test]
    fn test_device_overrides_parse() {
        let config = Config::parse("[device]\nmemory_gb = 2.0\ncores = 2\n").unwrap();
        assert_eq!(config.device.memory_gb, Some(2.0));
        assert_eq!(config.device.cores, Some(2));
    }

    #[test]
    fn test_invalid_theme_is_a_parse_error() {
        assert!(Config::parse("color_theme = \"plaid\"").is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = Config {
            color_theme: ColorTheme::Amber,
            particle_count: Some(4),
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_unreadable_contents_report_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "typing_delay_ms = \"fast\"").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(CONFIG_FILE));
    }
}
