//! Shared sync entrypoint used by the CLI.

use jamf_rename_core::{MobileDeviceApi, SyncRequest};

use crate::{DeviceSyncRunner, SyncError, SyncReport};

/// Run one sync for a request.
///
/// This is the canonical entrypoint for `jamf-rename`; it builds a
/// [`DeviceSyncRunner`] over `api` and runs it with the requested selection.
pub fn run<A: MobileDeviceApi>(api: A, request: &SyncRequest) -> Result<SyncReport, SyncError> {
    DeviceSyncRunner::new(api, request.dry_run).run(request.serials.as_ref())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use jamf_rename_core::{Device, DeviceId, ExtensionAttribute, RemoteError, SerialNumber};

    use super::*;

    /// One device with a shortname; counts mutating calls.
    #[derive(Default)]
    struct SingleDevice {
        mutations: Cell<usize>,
    }

    impl MobileDeviceApi for SingleDevice {
        fn list_devices(&self) -> Result<Vec<Device>, RemoteError> {
            Ok(vec![Device {
                id: DeviceId(1),
                serial_number: SerialNumber::from("SN-1"),
                name: "old".into(),
            }])
        }

        fn extension_attributes(&self, _: DeviceId) -> Result<Vec<ExtensionAttribute>, RemoteError> {
            Ok(vec![ExtensionAttribute {
                id: 1,
                name: "GivenIOSShortname".into(),
                value: "new".into(),
            }])
        }

        fn update_device_name(&self, _: DeviceId, _: &str) -> Result<(), RemoteError> {
            self.mutations.set(self.mutations.get() + 1);
            Ok(())
        }

        fn send_device_name_command(&self, _: DeviceId, _: &str) -> Result<(), RemoteError> {
            self.mutations.set(self.mutations.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn unset_request_is_rejected() {
        let api = SingleDevice::default();
        let err = run(&api, &SyncRequest::default()).unwrap_err();
        assert!(matches!(err, SyncError::SelectionMissing));
    }

    #[test]
    fn all_request_renames_the_device() {
        let api = SingleDevice::default();
        let report = run(&api, &SyncRequest::all(false)).expect("run");
        assert_eq!(report.renamed(), 1);
        assert_eq!(api.mutations.get(), 2);
    }

    #[test]
    fn dry_run_request_is_carried_into_report() {
        let api = SingleDevice::default();
        let report = run(&api, &SyncRequest::serials(["SN-1"], true)).expect("run");
        assert!(report.dry_run);
        assert_eq!(report.would_rename(), 1);
        assert_eq!(api.mutations.get(), 0);
    }
}
