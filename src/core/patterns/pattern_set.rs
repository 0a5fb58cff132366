use std::fmt;

use super::BotMatcher;
use crate::PatternError;

/// Sources used when nothing has been configured.
pub const DEFAULT_PATTERN_SOURCES: &[&str] = &[
    // dependabot[bot], github-actions[bot]@users.noreply.github.com
    r"\[bot\]",
    // renovate-bot, bot.release, ci+bot
    r"(?:^|[+\-._])bot(?:$|[+\-._])",
    // GitHub Copilot co-author lines
    "Copilot",
];

/// Substituted when every configured source was rejected.
pub const FALLBACK_PATTERN_SOURCE: &str = r"\[bot\]";

/// An ordered, never empty, collection of bot matchers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternSet {
    matchers: Vec<BotMatcher>,
}

impl PatternSet {
    pub fn compile<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::compile_reporting(sources).0
    }

    /// Same as [`PatternSet::compile`], also handing back every rejected source.
    pub fn compile_reporting<I, S>(sources: I) -> (Self, Vec<PatternError>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (matchers, rejected): (Vec<_>, Vec<_>) = sources.into_iter().map(BotMatcher::new).partition(Result::is_ok);
        let matchers = matchers.into_iter().flatten().collect::<Vec<_>>();
        let rejected = rejected.into_iter().filter_map(Result::err).collect::<Vec<_>>();
        tracing::debug!("Compiled {} bot pattern(s), rejected {}", matchers.len(), rejected.len());
        let set = match matchers.is_empty() {
            true => {
                tracing::debug!("No usable bot patterns, falling back to {FALLBACK_PATTERN_SOURCE}");
                Self::fallback()
            }
            false => Self { matchers },
        };
        (set, rejected)
    }

    fn fallback() -> Self {
        let matchers = BotMatcher::new(FALLBACK_PATTERN_SOURCE).into_iter().collect();
        Self { matchers }
    }

    /// True if any matcher matches any of the given texts.
    pub fn is_bot<I, S>(&self, texts: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let texts = texts.into_iter().collect::<Vec<_>>();
        self.matchers.iter().any(|matcher| texts.iter().any(|text| matcher.matches(text)))
    }

    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.matchers.iter().map(BotMatcher::source)
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::compile(DEFAULT_PATTERN_SOURCES)
    }
}

impl fmt::Display for PatternSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sources().collect::<Vec<_>>().join("\n"))
    }
}

/// Checks every non-blank source, collecting all compile failures.
pub fn validate_patterns(sources: &[impl AsRef<str>]) -> Result<(), Vec<PatternError>> {
    let errors = sources
        .iter()
        .map(|source| source.as_ref().trim())
        .filter(|source| !source.is_empty())
        .filter_map(|source| BotMatcher::new(source).err())
        .collect::<Vec<_>>();
    match errors.is_empty() {
        true => Ok(()),
        false => Err(errors),
    }
}
