use std::path::{Path, PathBuf};

use crate::{BotStripConfig, ConfigError, find_top_of_repo};

pub const DEFAULT_CONFIG_FILENAME: &str = ".botstrip.toml";

pub fn find_local_config_path(path: impl AsRef<Path>) -> Option<PathBuf> {
    tracing::debug!("Searching for configuration file under: {}", path.as_ref().display());
    let result = build_config_paths(path)
        .into_iter()
        .inspect(|p| tracing::trace!("Searching for config file: {}", p.display()))
        .find(|p| p.is_file());
    match result {
        Some(path) => {
            tracing::debug!("Found configuration: {}", path.display());
            Some(path)
        }
        None => {
            tracing::debug!("No local configuration file found.");
            None
        }
    }
}

pub fn find_canonical_config_path() -> Option<PathBuf> {
    build_canonical_config_paths().into_iter().find(|p| p.is_file())
}

pub fn load_config(path: impl AsRef<Path>) -> Result<BotStripConfig, ConfigError> {
    // Maybe path _is_ the config?
    if path.as_ref().is_file() {
        return read_config(path);
    }
    if !path.as_ref().exists() {
        return Err(ConfigError::ConfigNotFound(path.as_ref().to_path_buf()));
    }
    match find_local_config_path(path).or_else(find_canonical_config_path) {
        Some(path) => read_config(path),
        None => {
            tracing::debug!("No configuration file found, using default configuration");
            Ok(BotStripConfig::default())
        }
    }
}

fn read_config(path: impl AsRef<Path>) -> Result<BotStripConfig, ConfigError> {
    let path = path.as_ref();
    tracing::debug!("Loading configuration path: {}", path.display());
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(why) => {
            tracing::error!("Could not read configuration file: {}.  {why}", path.display());
            return Err(ConfigError::CouldNotReadConfig(path.to_path_buf(), why.to_string()));
        }
    };
    let config = match toml::from_str::<BotStripConfig>(&data) {
        Ok(config) => config,
        Err(why) => {
            tracing::error!("Could not parse configuration file: {}.  {why}", path.display());
            return Err(ConfigError::InvalidConfig(why.to_string()));
        }
    };
    tracing::trace!("Config = {:?}", config);
    Ok(config)
}

fn build_config_paths(path: impl AsRef<Path>) -> Vec<PathBuf> {
    let mut paths = vec![
        // Right where we were pointed
        path.as_ref().join(DEFAULT_CONFIG_FILENAME),
    ];
    // At the root of the repository
    if let Ok(repo_path) = find_top_of_repo(&path) {
        paths.push(repo_path.join(DEFAULT_CONFIG_FILENAME));
    }
    paths
}

fn build_canonical_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(2);
    // $XDG_CONFIG_HOME/botstrip/config.toml, or the platform equivalent
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("botstrip").join("config.toml"));
    } else if let Some(home_dir) = dirs::home_dir() {
        paths.push(home_dir.join(".config/botstrip/config.toml"));
    }
    // In the system configuration directory
    paths.push(PathBuf::from("/etc/botstrip/config.toml"));
    paths
}
