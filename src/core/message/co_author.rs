use once_cell::sync::Lazy;
use regex::Regex;

use crate::PatternSet;

static CO_AUTHOR_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*Co-authored-by:\s+").expect("co-author label regex"));
static CO_AUTHOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*Co-authored-by:\s*(.+?)\s*<([^>]+)>\s*$").expect("co-author regex"));

pub fn is_co_author_line(line: impl AsRef<str>) -> bool {
    CO_AUTHOR_LABEL.is_match(line.as_ref())
}

/// `Co-authored-by: Name <email>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoAuthor {
    pub name: String,
    pub email: String,
    pub local: String,
}

impl CoAuthor {
    pub fn parse(line: impl AsRef<str>) -> Option<Self> {
        let captures = CO_AUTHOR.captures(line.as_ref())?;
        let name = captures.get(1).map(|m| m.as_str().trim()).unwrap_or_default().to_string();
        let email = captures.get(2).map(|m| m.as_str().trim()).unwrap_or_default().to_string();
        let local = email.split('@').next().unwrap_or_default().to_string();
        Some(Self { name, email, local })
    }

    /// A bot co-author is one where any pattern hits the name, email, local part or the raw line.
    pub fn is_bot(&self, line: impl AsRef<str>, patterns: &PatternSet) -> bool {
        patterns.is_bot([self.name.as_str(), self.email.as_str(), self.local.as_str(), line.as_ref()])
    }
}

/// Lines that parse as a co-author and match a bot pattern.
pub fn is_bot_co_author_line(line: impl AsRef<str>, patterns: &PatternSet) -> bool {
    let line = line.as_ref();
    if !is_co_author_line(line) {
        return false;
    }
    match CoAuthor::parse(line) {
        Some(co_author) => co_author.is_bot(line, patterns),
        None => {
            tracing::trace!("Unparseable co-author line kept: {line:?}");
            false
        }
    }
}
