mod matcher;
mod pattern_set;
mod pattern_store;

pub use matcher::BotMatcher;
pub use pattern_set::{DEFAULT_PATTERN_SOURCES, FALLBACK_PATTERN_SOURCE, PatternSet, validate_patterns};
pub use pattern_store::PatternStore;
