use std::fmt;

use fancy_regex::Regex;

use crate::PatternError;

/// A single case-insensitive bot pattern.
///
/// Patterns follow the JavaScript flavour users already write for the
/// browser settings page, so look-around and back-references are accepted.
/// Those features backtrack, and a backtracking run can fail at match time;
/// such a failure counts as "no match".
#[derive(Clone)]
pub struct BotMatcher {
    source: String,
    regex: Regex,
}

impl BotMatcher {
    pub fn new(source: impl AsRef<str>) -> Result<Self, PatternError> {
        let source = source.as_ref();
        let regex = Regex::new(&format!("(?i){source}")).map_err(|why| PatternError::InvalidPattern(source.to_string(), why.to_string()))?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, text: impl AsRef<str>) -> bool {
        match self.regex.is_match(text.as_ref()) {
            Ok(found) => found,
            Err(why) => {
                tracing::debug!("Pattern {:?} failed while matching {:?}: {why}", self.source, text.as_ref());
                false
            }
        }
    }
}

impl fmt::Debug for BotMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BotMatcher").field(&self.source).finish()
    }
}

impl fmt::Display for BotMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl PartialEq for BotMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for BotMatcher {}
