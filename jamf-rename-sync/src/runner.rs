//! Device name synchronization.
//!
//! ## `run` — per-device protocol
//!
//! 1. List every device on the server (failure ends the run).
//! 2. Skip devices whose serial is not selected.
//! 3. Read the GivenIOSShortname extension attribute.
//! 4. Skip empty or missing shortnames.
//! 5. Dry-run stops here.
//! 6. Update the device record, then send the DeviceName MDM command.
//!
//! Steps 3–6 never abort the loop: failures are logged and recorded, and the
//! next device is processed.

use std::collections::BTreeSet;

use jamf_rename_core::{Device, DeviceId, MobileDeviceApi, RemoteError, SerialNumber};

use crate::error::SyncError;
use crate::report::{DeviceOutcome, SkipReason, Step, StepFailure, SyncReport};

/// Renames devices after their GivenIOSShortname attribute.
pub struct DeviceSyncRunner<A> {
    api: A,
    dry_run: bool,
}

impl<A: MobileDeviceApi> DeviceSyncRunner<A> {
    pub fn new(api: A, dry_run: bool) -> Self {
        if dry_run {
            tracing::warn!("dry run enabled; no changes will be applied");
        }
        Self { api, dry_run }
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Every device registered on the server.
    pub fn list_devices(&self) -> Result<Vec<Device>, RemoteError> {
        self.api.list_devices()
    }

    /// The GivenIOSShortname value of a device, `None` if the attribute is absent.
    ///
    /// Warns once when no attribute matches.
    pub fn get_shortname(&self, device_id: DeviceId) -> Result<Option<String>, RemoteError> {
        let attributes = self.api.extension_attributes(device_id)?;
        let shortname = attributes
            .into_iter()
            .find(|attr| attr.is_shortname())
            .map(|attr| attr.value);
        if shortname.is_none() {
            tracing::warn!(device_id = %device_id, "device has no GivenIOSShortname attribute");
        }
        Ok(shortname)
    }

    /// Write `name` into the device record.
    pub fn update_device(&self, name: &str, device_id: DeviceId) -> Result<(), RemoteError> {
        match self.api.update_device_name(device_id, name) {
            Ok(()) => {
                tracing::info!(device_id = %device_id, new_name = %name, "device record updated");
                Ok(())
            }
            Err(err) => {
                tracing::error!(device_id = %device_id, new_name = %name, error = %err, "device record update failed");
                Err(err)
            }
        }
    }

    /// Push `name` to the physical device.
    pub fn send_rename_command(&self, name: &str, device_id: DeviceId) -> Result<(), RemoteError> {
        tracing::info!(device_id = %device_id, new_name = %name, "sending DeviceName command");
        match self.api.send_device_name_command(device_id, name) {
            Ok(()) => {
                tracing::info!(device_id = %device_id, "DeviceName command accepted");
                Ok(())
            }
            Err(err) => {
                tracing::error!(device_id = %device_id, new_name = %name, error = %err, "DeviceName command failed");
                Err(err)
            }
        }
    }

    /// Process the selected devices.
    ///
    /// `None` refuses to run and touches nothing; an empty set selects every
    /// device.
    pub fn run(&self, serials: Option<&BTreeSet<SerialNumber>>) -> Result<SyncReport, SyncError> {
        let Some(serials) = serials else {
            tracing::error!(
                "no serial numbers given; pass serial numbers or request all devices explicitly"
            );
            return Err(SyncError::SelectionMissing);
        };
        if serials.is_empty() {
            tracing::warn!("empty serial number list; every device on the server will be processed");
        }

        let devices = self.list_devices().map_err(|err| {
            tracing::error!(error = %err, "failed to list mobile devices");
            SyncError::ListDevices(err)
        })?;
        tracing::info!(count = devices.len(), "listed mobile devices");

        let mut report = SyncReport {
            dry_run: self.dry_run,
            ..SyncReport::default()
        };
        let mut seen = BTreeSet::new();

        for device in devices {
            if !serials.is_empty() && !serials.contains(&device.serial_number) {
                continue;
            }
            seen.insert(device.serial_number.clone());
            report.outcomes.push(self.sync_device(device));
        }

        report.unmatched_serials = serials.difference(&seen).cloned().collect();
        for serial in &report.unmatched_serials {
            tracing::warn!(serial = %serial, "no device with this serial number on the server");
        }

        Ok(report)
    }

    fn sync_device(&self, device: Device) -> DeviceOutcome {
        let shortname = match self.get_shortname(device.id) {
            Ok(shortname) => shortname,
            Err(err) => {
                tracing::error!(
                    serial = %device.serial_number,
                    device_id = %device.id,
                    error = %err,
                    "failed to read extension attributes"
                );
                return DeviceOutcome::Failed {
                    device,
                    name: None,
                    failures: vec![StepFailure::new(Step::ReadShortname, &err)],
                };
            }
        };

        let name = match shortname {
            // get_shortname already warned.
            None => {
                return DeviceOutcome::Skipped {
                    device,
                    reason: SkipReason::MissingShortname,
                }
            }
            Some(value) if value.is_empty() => {
                tracing::warn!(serial = %device.serial_number, "given shortname empty; skipping");
                return DeviceOutcome::Skipped {
                    device,
                    reason: SkipReason::EmptyShortname,
                };
            }
            Some(value) => value,
        };

        if self.dry_run {
            tracing::info!(serial = %device.serial_number, new_name = %name, "[dry-run] would rename device");
            return DeviceOutcome::WouldRename { device, name };
        }

        tracing::info!(serial = %device.serial_number, new_name = %name, "updating device");
        let mut failures = Vec::new();
        if let Err(err) = self.update_device(&name, device.id) {
            failures.push(StepFailure::new(Step::UpdateRecord, &err));
        }
        // The command goes out even when the record update failed.
        if let Err(err) = self.send_rename_command(&name, device.id) {
            failures.push(StepFailure::new(Step::SendCommand, &err));
        }

        if failures.is_empty() {
            DeviceOutcome::Renamed { device, name }
        } else {
            DeviceOutcome::Failed {
                device,
                name: Some(name),
                failures,
            }
        }
    }
}
