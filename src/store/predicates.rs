//! Ready-made filters for [`PullRequestStore::filtered`].
//!
//! [`PullRequestStore::filtered`]: super::PullRequestStore::filtered

use crate::github::models::PullRequestRecord;

use super::StoreError;

/// Accepts records whose state matches `state`, ignoring ASCII case.
pub fn state_is(state: &str) -> impl FnMut(&PullRequestRecord) -> Result<bool, StoreError> + '_ {
    move |record| Ok(record.state.eq_ignore_ascii_case(state))
}

/// Accepts records with identifier `id`.
pub fn id_is(id: u64) -> impl FnMut(&PullRequestRecord) -> Result<bool, StoreError> {
    move |record| Ok(record.id == id)
}

/// Accepts records targeting the repository `full_name`.
pub fn repository_is(
    full_name: &str,
) -> impl FnMut(&PullRequestRecord) -> Result<bool, StoreError> + '_ {
    move |record| Ok(record.repository_full_name() == Some(full_name))
}

/// Accepts records opened by `login`, ignoring ASCII case.
pub fn author_is(login: &str) -> impl FnMut(&PullRequestRecord) -> Result<bool, StoreError> + '_ {
    move |record| {
        Ok(record
            .author()
            .is_some_and(|author| author.eq_ignore_ascii_case(login)))
    }
}
