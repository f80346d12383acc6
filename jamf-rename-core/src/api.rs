//! The remote operations the sync runner depends on.

use crate::error::RemoteError;
use crate::types::{Device, DeviceId, ExtensionAttribute};

/// Mobile-device endpoints of a Jamf server.
///
/// Implemented over HTTP by `jamf-rename-client`; tests substitute an
/// in-memory fake.
pub trait MobileDeviceApi {
    /// Every mobile device registered on the server.
    fn list_devices(&self) -> Result<Vec<Device>, RemoteError>;

    /// Extension attributes of a single device.
    fn extension_attributes(&self, id: DeviceId) -> Result<Vec<ExtensionAttribute>, RemoteError>;

    /// Set the display name, device name, and name of the device record.
    fn update_device_name(&self, id: DeviceId, name: &str) -> Result<(), RemoteError>;

    /// Queue an MDM `DeviceName` command so the device applies `name`.
    fn send_device_name_command(&self, id: DeviceId, name: &str) -> Result<(), RemoteError>;
}

impl<T: MobileDeviceApi + ?Sized> MobileDeviceApi for &T {
    fn list_devices(&self) -> Result<Vec<Device>, RemoteError> {
        (**self).list_devices()
    }

    fn extension_attributes(&self, id: DeviceId) -> Result<Vec<ExtensionAttribute>, RemoteError> {
        (**self).extension_attributes(id)
    }

    fn update_device_name(&self, id: DeviceId, name: &str) -> Result<(), RemoteError> {
        (**self).update_device_name(id, name)
    }

    fn send_device_name_command(&self, id: DeviceId, name: &str) -> Result<(), RemoteError> {
        (**self).send_device_name_command(id, name)
    }
}
