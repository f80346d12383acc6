//! Error types for jamf-rename-sync.

use thiserror::Error;

use jamf_rename_core::RemoteError;

/// Errors that end a run before any device is processed.
///
/// Per-device failures never surface here; they are recorded in the
/// [`crate::SyncReport`].
#[derive(Debug, Error)]
pub enum SyncError {
    /// No serial numbers were given and "all devices" was not requested.
    #[error("no serial numbers given; pass serial numbers or request all devices explicitly")]
    SelectionMissing,

    /// The device listing failed, so there is nothing to iterate.
    #[error("failed to list mobile devices: {0}")]
    ListDevices(#[from] RemoteError),
}
