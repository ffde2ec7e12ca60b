//! Shared error types for the services crate.

use thiserror::Error;

use storage::sqlite::SqliteInitError;

/// Errors emitted while bootstrapping the progress service.
///
/// Note that load/save/delete failures during a running session are not
/// represented here: those are non-fatal by design, reported through
/// [`crate::SyncEvent`] and the log instead of the call stack.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
