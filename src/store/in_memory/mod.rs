//! Process-lifetime store backed by a vector and two position indexes.

use std::collections::HashMap;

use crate::github::models::PullRequestRecord;

use super::{PullRequestFilter, PullRequestKey, PullRequestStore, StoreError};

/// In-memory [`PullRequestStore`].
///
/// Records are only ever appended. The indexes hold positions into the
/// backing vector and are updated together with it on every insert.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    pull_requests: Vec<PullRequestRecord>,
    by_key: HashMap<PullRequestKey, usize>,
    by_id: HashMap<u64, usize>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn record_at(&self, position: Option<&usize>) -> Option<PullRequestRecord> {
        position
            .and_then(|index| self.pull_requests.get(*index))
            .cloned()
    }
}

impl PullRequestStore for InMemoryStore {
    fn insert_one(&mut self, record: PullRequestRecord) -> Result<(), StoreError> {
        let position = self.pull_requests.len();
        let key = PullRequestKey::of(&record);
        let id = record.id;

        self.pull_requests.push(record);
        if self.by_key.insert(key.clone(), position).is_some() {
            tracing::warn!("pull request {key} stored twice; index now points at the latest copy");
        }
        self.by_id.insert(id, position);
        Ok(())
    }

    fn insert_batch(&mut self, records: Vec<PullRequestRecord>) -> Result<(), StoreError> {
        tracing::debug!("storing {} pull request(s)", records.len());
        self.pull_requests.reserve(records.len());
        for record in records {
            self.insert_one(record)?;
        }
        Ok(())
    }

    fn all(&self) -> Result<Vec<PullRequestRecord>, StoreError> {
        Ok(self.pull_requests.clone())
    }

    fn filtered(
        &self,
        predicate: &mut PullRequestFilter<'_>,
    ) -> Result<Vec<PullRequestRecord>, StoreError> {
        let mut selected = Vec::new();
        for record in &self.pull_requests {
            if predicate(record)? {
                selected.push(record.clone());
            }
        }
        Ok(selected)
    }

    fn by_key(&self, key: &PullRequestKey) -> Result<Option<PullRequestRecord>, StoreError> {
        Ok(self.record_at(self.by_key.get(key)))
    }

    fn by_id(&self, id: u64) -> Result<Option<PullRequestRecord>, StoreError> {
        Ok(self.record_at(self.by_id.get(&id)))
    }

    fn len(&self) -> usize {
        self.pull_requests.len()
    }
}
