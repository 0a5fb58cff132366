mod config;
mod errors;
mod git;
mod message;
mod patterns;

pub use config::{BotStripConfig, DEFAULT_CONFIG_FILENAME, find_canonical_config_path, find_local_config_path, load_config};
pub use errors::{ConfigError, MessageError, PatternError, RepositoryError};
pub use git::{find_top_of_repo, is_repo};
pub use message::{AuthorIdentity, AuthorSource, CleanedMessage, CoAuthor, MessageCleaner, SignOff, clean_message, is_bot_co_author_line, is_co_author_line, is_sign_off_line};
pub use patterns::{BotMatcher, DEFAULT_PATTERN_SOURCES, FALLBACK_PATTERN_SOURCE, PatternSet, PatternStore, validate_patterns};
