//! # jamf-rename-sync
//!
//! Sync orchestration: rename Jamf mobile devices after their
//! GivenIOSShortname extension attribute.
//!
//! Call [`pipeline::run`] with a [`jamf_rename_core::SyncRequest`], or drive a
//! [`DeviceSyncRunner`] directly.

pub mod error;
pub mod pipeline;
pub mod report;
pub mod runner;

pub use error::SyncError;
pub use report::{DeviceOutcome, SkipReason, Step, StepFailure, SyncReport};
pub use runner::DeviceSyncRunner;
