use crate::error::DirViewError;
use crate::scope::{AllowedDirectory, FsScope};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub scope: ScopeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Include entries whose name starts with "." or "$"
    #[serde(default)]
    pub show_hidden: bool,
    #[serde(default = "default_true")]
    pub directories_first: bool,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            show_hidden: false,
            directories_first: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeConfig {
    #[serde(default)]
    pub allowed_directories: Vec<AllowedDirectory>,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            allowed_directories: vec![AllowedDirectory {
                path: filesystem_root(),
                recursive: true,
            }],
        }
    }
}

#[cfg(windows)]
fn filesystem_root() -> PathBuf {
    let drive = std::env::var("SystemDrive").unwrap_or_else(|_| "C:".to_string());
    PathBuf::from(format!("{}\\", drive))
}

#[cfg(not(windows))]
fn filesystem_root() -> PathBuf {
    PathBuf::from("/")
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Load configuration from `config_path`
    /// If the config file doesn't exist, create it with default values
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            log::info!("Config file not found, creating default config at {:?}", config_path);
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let contents = fs::read_to_string(config_path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .context("Failed to parse config file")?;

        log::info!("Loaded config from {:?}", config_path);
        Ok(config)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .context("Failed to write config file")?;

        log::info!("Saved config to {:?}", config_path);
        Ok(())
    }

    /// Build the listing scope, rejecting relative allowed directories
    pub fn build_scope(&self) -> crate::error::Result<FsScope> {
        for dir in &self.scope.allowed_directories {
            if dir.path.is_relative() {
                return Err(DirViewError::config(format!(
                    "allowed directory must be absolute: {:?}",
                    dir.path
                )));
            }
        }

        Ok(FsScope::new(self.scope.allowed_directories.clone()))
    }

    fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?;
        Ok(config_dir.join("dirview").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_created() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path)?;

        assert!(path.exists());
        assert!(!config.listing.show_hidden);
        assert!(config.listing.directories_first);
        Ok(())
    }

    #[test]
    fn test_round_trip_through_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.listing.show_hidden = true;
        config.scope.allowed_directories = vec![AllowedDirectory {
            path: temp_dir.path().to_path_buf(),
            recursive: false,
        }];
        config.save_to(&path)?;

        assert_eq!(Config::load_from(&path)?, config);
        Ok(())
    }

    #[test]
    fn test_partial_config_uses_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[listing]\nshow_hidden = true\n")?;

        let config = Config::load_from(&path)?;

        assert!(config.listing.show_hidden);
        assert!(config.listing.directories_first);
        Ok(())
    }

    #[test]
    fn test_invalid_config() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[listing\n")?;

        assert!(Config::load_from(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_default_scope_covers_whole_filesystem() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let nested = temp_dir.path().join("deep").join("er");
        fs::create_dir_all(&nested)?;

        let scope = Config::default().build_scope()?;

        assert!(scope.is_allowed(temp_dir.path()));
        assert!(scope.is_allowed(&nested));
        assert!(scope.is_allowed(&std::env::temp_dir()));
        Ok(())
    }

    #[test]
    fn test_relative_scope_rejected() {
        let mut config = Config::default();
        config.scope.allowed_directories = vec![AllowedDirectory {
            path: PathBuf::from("relative/dir"),
            recursive: true,
        }];

        assert!(matches!(config.build_scope(), Err(DirViewError::Config(_))));
    }
}
