use crate::{AuthorIdentity, DEFAULT_PATTERN_SOURCES};

/// Contents of `.botstrip.toml`:
///
/// ```toml
/// [botstrip]
/// patterns = ["\\[bot\\]", "Copilot"]
/// author = "alice"
/// ```
#[derive(Default, Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BotStripConfig {
    #[serde(default)]
    botstrip: BotStrip,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BotStrip {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    patterns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author: Option<AuthorIdentity>,
}

impl BotStripConfig {
    /// Configured sources, trimmed with blank entries dropped; the built-in defaults when unset.
    pub fn pattern_sources(&self) -> Vec<String> {
        match &self.botstrip.patterns {
            Some(patterns) => patterns
                .iter()
                .map(|pattern| pattern.trim())
                .filter(|pattern| !pattern.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_PATTERN_SOURCES.iter().map(|pattern| pattern.to_string()).collect(),
        }
    }

    pub fn author(&self) -> Option<&AuthorIdentity> {
        self.botstrip.author.as_ref()
    }

    pub fn with_patterns(mut self, patterns: &[impl AsRef<str>]) -> Self {
        self.botstrip.patterns = Some(patterns.iter().map(|pattern| pattern.as_ref().to_string()).collect());
        self
    }

    pub fn with_author(mut self, author: Option<AuthorIdentity>) -> Self {
        if author.is_some() {
            self.botstrip.author = author;
        }
        self
    }
}
