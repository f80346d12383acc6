//! Per-device outcomes and the run summary.

use serde::Serialize;

use jamf_rename_core::{Device, RemoteError, SerialNumber};

/// Why a selected device was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No GivenIOSShortname attribute on the device.
    MissingShortname,
    /// The attribute exists but its value is empty.
    EmptyShortname,
}

/// The remote step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    ReadShortname,
    UpdateRecord,
    SendCommand,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepFailure {
    pub step: Step,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub message: String,
}

impl StepFailure {
    pub(crate) fn new(step: Step, err: &RemoteError) -> Self {
        Self {
            step,
            status: err.status(),
            message: err.to_string(),
        }
    }
}

/// Outcome of processing one selected device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DeviceOutcome {
    /// Record updated and rename command accepted.
    Renamed { device: Device, name: String },
    /// Dry-run: the device *would* have been renamed.
    WouldRename { device: Device, name: String },
    /// Nothing to apply.
    Skipped { device: Device, reason: SkipReason },
    /// At least one remote step failed.
    Failed {
        device: Device,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        failures: Vec<StepFailure>,
    },
}

impl DeviceOutcome {
    pub fn device(&self) -> &Device {
        match self {
            DeviceOutcome::Renamed { device, .. }
            | DeviceOutcome::WouldRename { device, .. }
            | DeviceOutcome::Skipped { device, .. }
            | DeviceOutcome::Failed { device, .. } => device,
        }
    }
}

/// Everything one run did.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SyncReport {
    pub dry_run: bool,
    pub outcomes: Vec<DeviceOutcome>,
    /// Requested serial numbers that no listed device carried.
    pub unmatched_serials: Vec<SerialNumber>,
}

impl SyncReport {
    pub fn renamed(&self) -> usize {
        self.count(|o| matches!(o, DeviceOutcome::Renamed { .. }))
    }

    pub fn would_rename(&self) -> usize {
        self.count(|o| matches!(o, DeviceOutcome::WouldRename { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, DeviceOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, DeviceOutcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&DeviceOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(*o)).count()
    }
}
