//! Repository registry

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;

use parking_lot::RwLock;
use pfs_api::{DeleteTarget, Repo, RepoInfo, validate_repo_name};

use crate::error::{PfsError, PfsResult};

/// Authoritative set of repository records
///
/// Clones share the same records. Every operation takes the lock once, and
/// any validation happens before the first mutation inside that critical
/// section, so a failed call leaves the registry untouched.
#[derive(Debug, Clone, Default)]
pub struct RepoRegistry {
    repos: Arc<RwLock<BTreeMap<String, RepoInfo>>>,
}

impl RepoRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository
    ///
    /// Fails with [`PfsError::AlreadyExists`] if the name is taken.
    #[tracing::instrument(skip(self, description))]
    pub fn create(&self, name: &str, description: &str) -> PfsResult<RepoInfo> {
        validate_repo_name(name)?;

        let mut repos = self.repos.write();
        match repos.entry(name.to_owned()) {
            Entry::Occupied(_) => Err(PfsError::AlreadyExists(name.to_owned())),
            Entry::Vacant(entry) => {
                let info = entry.insert(RepoInfo::new(name, description)).clone();
                tracing::info!("created repo");
                Ok(info)
            }
        }
    }

    /// All repositories, ordered by name
    pub fn list(&self) -> Vec<RepoInfo> {
        self.repos.read().values().cloned().collect()
    }

    /// Look up a single repository
    #[tracing::instrument(skip(self))]
    pub fn inspect(&self, name: &str) -> PfsResult<RepoInfo> {
        self.repos
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| PfsError::NotFound(name.to_owned()))
    }

    /// Delete one repository or all of them
    ///
    /// Returns the repositories that were removed.
    #[tracing::instrument(skip(self))]
    pub fn delete(&self, target: &DeleteTarget) -> PfsResult<Vec<Repo>> {
        match target {
            DeleteTarget::Single(name) => {
                let info = self
                    .repos
                    .write()
                    .remove(name)
                    .ok_or_else(|| PfsError::NotDeletable(name.clone()))?;

                tracing::info!("deleted repo");
                Ok(vec![info.repo])
            }
            DeleteTarget::All => Ok(self.delete_all()),
        }
    }

    /// Delete every repository, returning what was removed
    pub fn delete_all(&self) -> Vec<Repo> {
        let removed = std::mem::take(&mut *self.repos.write());
        tracing::info!(count = removed.len(), "deleted all repos");

        removed.into_values().map(|info| info.repo).collect()
    }

    /// Whether a repository with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.repos.read().contains_key(name)
    }

    /// Number of repositories
    pub fn len(&self) -> usize {
        self.repos.read().len()
    }

    /// True if no repositories exist
    pub fn is_empty(&self) -> bool {
        self.repos.read().is_empty()
    }
}
