mod core;
pub use self::core::{
    AuthorIdentity, AuthorSource, BotMatcher, BotStripConfig, CleanedMessage, CoAuthor, ConfigError, DEFAULT_CONFIG_FILENAME, DEFAULT_PATTERN_SOURCES, FALLBACK_PATTERN_SOURCE, MessageCleaner,
    MessageError, PatternError, PatternSet, PatternStore, RepositoryError, SignOff, clean_message, find_canonical_config_path, find_local_config_path, find_top_of_repo, is_bot_co_author_line,
    is_co_author_line, is_repo, is_sign_off_line, load_config, validate_patterns,
};

mod util;
pub use util::{read_message, write_message};
