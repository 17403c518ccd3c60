//! Target selection for `DeleteRepo`.

/// What a `DeleteRepo` call removes.
///
/// Built from the raw optional arguments with [`DeleteTarget::from_parts`],
/// which is where the mutually exclusive `name` / `all` inputs are checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeleteTarget {
    /// Remove one repository by name
    Single(String),

    /// Remove every repository
    All,
}

/// The `name` / `all` arguments of a delete call do not select a target.
///
/// The messages are part of the public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum DeleteTargetError {
    /// Neither a name nor `all` was given
    #[error("Either a repo_name or all=True needs to be provided")]
    Missing,

    /// Both a name and `all` were given
    #[error("Cannot specify a repo_name if all=True")]
    Conflicting,
}

impl DeleteTarget {
    /// Select a target from optional arguments.
    ///
    /// An empty name counts as no name.
    pub fn from_parts(name: Option<String>, all: bool) -> Result<Self, DeleteTargetError> {
        match (name.filter(|name| !name.is_empty()), all) {
            (None, false) => Err(DeleteTargetError::Missing),
            (Some(_), true) => Err(DeleteTargetError::Conflicting),
            (Some(name), false) => Ok(DeleteTarget::Single(name)),
            (None, true) => Ok(DeleteTarget::All),
        }
    }

    /// The repository name, for single deletes.
    pub fn name(&self) -> Option<&str> {
        match self {
            DeleteTarget::Single(name) => Some(name),
            DeleteTarget::All => None,
        }
    }

    /// True for bulk deletes.
    pub fn is_all(&self) -> bool {
        matches!(self, DeleteTarget::All)
    }
}
