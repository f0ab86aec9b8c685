//! Loads pull requests into a store and reports on them.

use std::io::{self, Write};

use crate::error::AppError;
use crate::github::{GitHubApi, PullRequestArgs, PullRequestRecord, ResourceGateway, Transport};
use crate::store::PullRequestStore;
use crate::store::predicates::author_is;

/// Fetches pull requests for `args` and appends them to `store`.
///
/// Returns the number of records inserted. Nothing is inserted when the
/// fetch fails.
///
/// # Errors
///
/// Returns [`AppError::GitHub`] when fetching fails and [`AppError::Store`]
/// when the store rejects an insert.
pub fn load_pull_requests<T: Transport>(
    api: &GitHubApi<T>,
    args: &PullRequestArgs,
    store: &mut dyn PullRequestStore,
) -> Result<usize, AppError> {
    let pull_requests = api.pull_requests().fetch(args)?;
    let count = pull_requests.len();
    store.insert_batch(pull_requests)?;
    Ok(count)
}

/// Stored records to report, optionally restricted to one author.
///
/// # Errors
///
/// Returns [`AppError::Store`] when the store cannot be read.
pub fn select_pull_requests(
    store: &dyn PullRequestStore,
    author: Option<&str>,
) -> Result<Vec<PullRequestRecord>, AppError> {
    let selected = match author.map(str::trim).filter(|login| !login.is_empty()) {
        Some(login) => store.filtered(&mut author_is(login))?,
        None => store.all()?,
    };
    Ok(selected)
}

/// Writes a one-line summary of the selection.
///
/// # Errors
///
/// Returns [`AppError::Io`] when writing fails.
pub fn write_summary<W: Write>(
    writer: &mut W,
    selected: &[PullRequestRecord],
    stored: usize,
) -> Result<(), AppError> {
    let open = selected
        .iter()
        .filter(|record| record.state.eq_ignore_ascii_case("open"))
        .count();
    let merged = selected.iter().filter(|record| record.is_merged()).count();
    writeln!(
        writer,
        "Stored {stored} pull request(s); reporting {} ({open} open, {merged} merged)",
        selected.len()
    )
    .map_err(|error| io_error(&error))
}

/// Writes each record as one JSON line.
///
/// # Errors
///
/// Returns [`AppError::Io`] when serialisation or writing fails.
pub fn write_json_lines<W: Write>(
    writer: &mut W,
    selected: &[PullRequestRecord],
) -> Result<(), AppError> {
    for record in selected {
        serde_json::to_writer(&mut *writer, record).map_err(|error| AppError::Io {
            message: error.to_string(),
        })?;
        writeln!(writer).map_err(|error| io_error(&error))?;
    }
    Ok(())
}

fn io_error(error: &io::Error) -> AppError {
    AppError::Io {
        message: error.to_string(),
    }
}
