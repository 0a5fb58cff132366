use std::path::{Path, PathBuf};

use crate::RepositoryError;

pub fn is_repo(path: impl AsRef<Path>) -> bool {
    git2::Repository::discover(path.as_ref()).is_ok()
}

/// Walks up from `path` to the working directory of the enclosing repository.
pub fn find_top_of_repo(path: impl AsRef<Path>) -> Result<PathBuf, RepositoryError> {
    let repo_path = path.as_ref().to_path_buf();
    let repo = git2::Repository::discover(&repo_path).map_err(|why| {
        tracing::trace!("No repository above {}: {why}", repo_path.display());
        RepositoryError::InvalidRepositoryPath(repo_path.clone())
    })?;
    let top = repo.workdir().ok_or_else(|| RepositoryError::BareRepository(repo.path().to_path_buf()))?;
    tracing::debug!("Found top of repository: {}", top.display());
    Ok(top.to_path_buf())
}
