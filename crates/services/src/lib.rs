#![forbid(unsafe_code)]

pub mod error;
pub mod events;
pub mod progress_service;
pub mod sync;

pub use error::ProgressServiceError;
pub use events::SyncEvent;
pub use progress_service::ProgressService;
pub use sync::{DEFAULT_QUIET_PERIOD, SyncHandle};
pub use tracker_core::Clock;
