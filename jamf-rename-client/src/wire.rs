//! Request and response bodies of the Jamf Classic API.
//!
//! Responses are decoded strictly: a missing envelope field or a device
//! without `id`/`serial_number` is a decode error rather than an empty list.

use serde::{Deserialize, Deserializer, Serialize};

use jamf_rename_core::{Device, DeviceId, ExtensionAttribute, SerialNumber};

// ---------------------------------------------------------------------------
// GET /JSSResource/mobiledevices
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct MobileDeviceList {
    pub mobile_devices: Vec<MobileDeviceSummary>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MobileDeviceSummary {
    pub id: u64,
    pub serial_number: String,
    #[serde(default)]
    pub name: String,
}

impl From<MobileDeviceSummary> for Device {
    fn from(d: MobileDeviceSummary) -> Self {
        Device {
            id: DeviceId(d.id),
            serial_number: SerialNumber(d.serial_number),
            name: d.name,
        }
    }
}

// ---------------------------------------------------------------------------
// GET /JSSResource/mobiledevices/id/{id}/subset/extension_attributes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct ExtensionAttributesEnvelope {
    pub mobile_device: ExtensionAttributesSubset,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExtensionAttributesSubset {
    pub extension_attributes: Vec<ExtensionAttributeRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExtensionAttributeRecord {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value: String,
}

/// Unset attributes come back as `null`; treat them like an empty string.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<ExtensionAttributeRecord> for ExtensionAttribute {
    fn from(a: ExtensionAttributeRecord) -> Self {
        ExtensionAttribute {
            id: a.id,
            name: a.name,
            value: a.value,
        }
    }
}

// ---------------------------------------------------------------------------
// PUT /JSSResource/mobiledevices/id/{id}
// ---------------------------------------------------------------------------

/// XML body renaming a device record. Serializes as
/// `<mobile_device><general>…</general></mobile_device>`.
#[derive(Debug, Serialize)]
#[serde(rename = "mobile_device")]
pub(crate) struct MobileDeviceUpdate<'a> {
    general: GeneralNames<'a>,
}

#[derive(Debug, Serialize)]
struct GeneralNames<'a> {
    display_name: &'a str,
    device_name: &'a str,
    name: &'a str,
}

impl<'a> MobileDeviceUpdate<'a> {
    pub fn rename(name: &'a str) -> Self {
        Self {
            general: GeneralNames {
                display_name: name,
                device_name: name,
                name,
            },
        }
    }

    pub fn to_xml(&self) -> Result<String, String> {
        quick_xml::se::to_string(self).map_err(|e| e.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
