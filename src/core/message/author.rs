use std::fmt;
use std::str::FromStr;

/// Lowercased username of the person who opened the pull request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AuthorIdentity(String);

impl AuthorIdentity {
    /// Returns `None` for text that cannot be a username (blank, or no word characters at all).
    pub fn new(username: impl AsRef<str>) -> Option<Self> {
        let username = username.as_ref().trim();
        let plausible = username.chars().any(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        match plausible {
            true => Some(Self(username.to_lowercase())),
            false => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AuthorIdentity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for AuthorIdentity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AuthorIdentity::new(s).ok_or_else(|| format!("not a username: {s:?}"))
    }
}

impl TryFrom<String> for AuthorIdentity {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AuthorIdentity> for String {
    fn from(author: AuthorIdentity) -> Self {
        author.0
    }
}

/// Supplies the pull request author, if one can be determined.
pub trait AuthorSource {
    fn author(&self) -> Option<AuthorIdentity>;
}

impl AuthorSource for Option<AuthorIdentity> {
    fn author(&self) -> Option<AuthorIdentity> {
        self.clone()
    }
}

impl AuthorSource for AuthorIdentity {
    fn author(&self) -> Option<AuthorIdentity> {
        Some(self.clone())
    }
}

impl<F> AuthorSource for F
where
    F: Fn() -> Option<AuthorIdentity>,
{
    fn author(&self) -> Option<AuthorIdentity> {
        self()
    }
}
