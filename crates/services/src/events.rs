use serde::Serialize;

/// Outcome notifications from the sync layer.
///
/// The view layer (out of scope here) subscribes to these to render its
/// transient toasts; none of them is fatal to the running session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SyncEvent {
    /// A saved document was found and loaded for this user.
    Loaded,
    /// No saved document existed; the session starts from the seed.
    StartedFromSeed,
    /// Loading failed; the session starts from the seed instead.
    LoadFellBack { reason: String },
    /// The debounced save wrote the latest document.
    Saved,
    /// The debounced save failed; the in-memory document is unaffected and
    /// the next change will retry.
    SaveFailed { reason: String },
    /// Reset deleted the remote record.
    ResetComplete,
    /// Reset could not delete the remote record; the in-memory reset still
    /// applied.
    ResetFailed { reason: String },
}
