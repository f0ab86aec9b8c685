//! Queryable collection of fetched pull requests.
//!
//! The store accumulates records for the lifetime of the process. Reads
//! always hand back owned clones, so nothing a caller does with a returned
//! record can reach the stored copy.

mod error;
mod in_memory;
pub mod predicates;

use std::fmt;

pub use error::StoreError;
pub use in_memory::InMemoryStore;

use crate::github::models::PullRequestRecord;

/// Index key for a stored pull request.
///
/// Pull request identifiers are only trusted within one repository, so the
/// key pairs the identifier with the full name of the target repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PullRequestKey {
    repository: String,
    id: u64,
}

impl PullRequestKey {
    /// Creates a key from a repository full name and identifier.
    #[must_use]
    pub fn new(repository: impl Into<String>, id: u64) -> Self {
        Self {
            repository: repository.into(),
            id,
        }
    }

    /// Key under which `record` is indexed.
    ///
    /// Records without a base repository are keyed under an empty
    /// repository name.
    #[must_use]
    pub fn of(record: &PullRequestRecord) -> Self {
        Self::new(record.repository_full_name().unwrap_or_default(), record.id)
    }

    /// Repository full name component.
    #[must_use]
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Identifier component.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Display for PullRequestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.repository, self.id)
    }
}

/// Predicate deciding whether a record is returned by
/// [`PullRequestStore::filtered`].
pub type PullRequestFilter<'a> =
    dyn FnMut(&PullRequestRecord) -> Result<bool, StoreError> + 'a;

/// Storage for fetched pull requests.
///
/// Implementations take `&mut self` for writes and provide no internal
/// locking; callers sharing a store across threads must serialise access
/// themselves (for example behind a `Mutex`).
pub trait PullRequestStore {
    /// Appends a record and indexes it.
    ///
    /// A record whose key is already indexed replaces the earlier entry in
    /// the index; both remain in [`all`](Self::all).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the backing store rejects the
    /// write.
    fn insert_one(&mut self, record: PullRequestRecord) -> Result<(), StoreError>;

    /// Inserts records in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`insert_one`](Self::insert_one).
    fn insert_batch(&mut self, records: Vec<PullRequestRecord>) -> Result<(), StoreError> {
        for record in records {
            self.insert_one(record)?;
        }
        Ok(())
    }

    /// Every stored record in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the backing store cannot be
    /// read.
    fn all(&self) -> Result<Vec<PullRequestRecord>, StoreError>;

    /// Stored records accepted by `predicate`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `predicate`; no partial result is
    /// returned.
    fn filtered(
        &self,
        predicate: &mut PullRequestFilter<'_>,
    ) -> Result<Vec<PullRequestRecord>, StoreError>;

    /// Record indexed under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the backing store cannot be
    /// read.
    fn by_key(&self, key: &PullRequestKey) -> Result<Option<PullRequestRecord>, StoreError>;

    /// Most recently inserted record with identifier `id`, regardless of
    /// repository.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the backing store cannot be
    /// read.
    fn by_id(&self, id: u64) -> Result<Option<PullRequestRecord>, StoreError>;

    /// Number of stored records.
    fn len(&self) -> usize;

    /// Returns true when nothing has been stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
