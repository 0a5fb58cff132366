use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::AuthorIdentity;

// Hyphens and spaces inside "signed off by" are interchangeable.
static SIGN_OFF_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*Signed[-\s]*off[-\s]*by:\s+").expect("sign-off label regex"));
static SIGN_OFF: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*Signed[-\s]*off[-\s]*by:\s*(.+?)\s*<([^>]+)>\s*$").expect("sign-off regex"));

const GITHUB_NOREPLY_DOMAIN: &str = "users.noreply.github.com";

pub fn is_sign_off_line(line: impl AsRef<str>) -> bool {
    SIGN_OFF_LABEL.is_match(line.as_ref())
}

/// `Signed-off-by: Name <email>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignOff {
    pub name: String,
    pub email: String,
}

impl SignOff {
    pub fn parse(line: impl AsRef<str>) -> Option<Self> {
        let captures = SIGN_OFF.captures(line.as_ref())?;
        let name = captures.get(1).map(|m| m.as_str().trim()).unwrap_or_default().to_string();
        let email = captures.get(2).map(|m| m.as_str().trim()).unwrap_or_default().to_string();
        Some(Self { name, email })
    }

    /// Usernames this sign-off could plausibly belong to.
    ///
    /// GitHub's anonymised addresses look like `12345+username@users.noreply.github.com`,
    /// so both sides of a `+` in the local part are candidates, as is the display
    /// name squashed down to username characters.
    pub fn username_candidates(&self) -> BTreeSet<String> {
        let mut candidates = BTreeSet::new();
        let email = self.email.to_lowercase();
        let mut parts = email.split('@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();

        if !local.is_empty() {
            candidates.insert(local.to_string());
        }
        // Only the segments either side of the first `+`: `1+fay+x` gives `1` and `fay`.
        if local.contains('+') {
            let mut halves = local.split('+');
            let left = halves.next().unwrap_or_default();
            let right = halves.next().unwrap_or_default();
            candidates.extend([left, right].into_iter().filter(|part| !part.is_empty()).map(str::to_string));
            if domain.ends_with(GITHUB_NOREPLY_DOMAIN) && !right.is_empty() {
                candidates.insert(right.to_string());
            }
        }

        let squashed = self
            .name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        if !squashed.is_empty() {
            candidates.insert(squashed);
        }
        candidates
    }

    pub fn belongs_to(&self, author: &AuthorIdentity) -> bool {
        let author = author.as_str();
        let name = self.name.to_lowercase();
        self.username_candidates().contains(author) || name == author || name.contains(&format!("@{author}"))
    }
}
