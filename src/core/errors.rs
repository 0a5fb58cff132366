use std::path::PathBuf;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0}")]
    InvalidRepositoryError(#[from] RepositoryError),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Invalid config path: {0}")]
    ConfigNotFound(PathBuf),
    #[error("Could not read config: {0}. {1}")]
    CouldNotReadConfig(PathBuf, String),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Invalid repository path: {0}")]
    InvalidRepositoryPath(PathBuf),
    #[error("Repository has no working directory: {0}")]
    BareRepository(PathBuf),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum PatternError {
    #[error("Invalid pattern `{0}`: {1}")]
    InvalidPattern(String, String),
}

impl PatternError {
    pub fn source_text(&self) -> &str {
        match self {
            PatternError::InvalidPattern(source, _) => source,
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MessageError {
    #[error("Could not read message from {0}. {1}")]
    CouldNotRead(String, String),
    #[error("Could not write message to {0}. {1}")]
    CouldNotWrite(PathBuf, String),
    #[error("Nothing to write in place: no message file given")]
    NoMessageFile,
}
