mod botstrip_config;
mod config_loader;

pub use botstrip_config::BotStripConfig;
pub use config_loader::{DEFAULT_CONFIG_FILENAME, find_canonical_config_path, find_local_config_path, load_config};
