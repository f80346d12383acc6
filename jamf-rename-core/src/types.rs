//! Domain types for Jamf mobile devices.
//!
//! These are the in-memory records the runner works with. Wire formats live
//! in `jamf-rename-client`; nothing here knows about HTTP, JSON field names,
//! or XML.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Id of the extension attribute that carries the desired device name.
pub const SHORTNAME_ATTRIBUTE_ID: i64 = 1;

/// Name of the extension attribute that carries the desired device name.
pub const SHORTNAME_ATTRIBUTE_NAME: &str = "GivenIOSShortname";

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Jamf's numeric identifier for a mobile device record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DeviceId(pub u64);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for DeviceId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Hardware serial number of a mobile device.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SerialNumber(pub String);

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for SerialNumber {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SerialNumber {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A managed mobile device as listed by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub serial_number: SerialNumber,
    /// Current display name; may be empty.
    pub name: String,
}

/// A custom key/value field attached to a device record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionAttribute {
    pub id: i64,
    pub name: String,
    pub value: String,
}

impl ExtensionAttribute {
    /// True for the attribute whose value is the desired device name.
    pub fn is_shortname(&self) -> bool {
        self.id == SHORTNAME_ATTRIBUTE_ID && self.name == SHORTNAME_ATTRIBUTE_NAME
    }
}

/// What to process in one run.
///
/// `serials` distinguishes three cases:
/// - `None`: nothing was requested; the run refuses to start.
/// - `Some(empty)`: every device on the server.
/// - `Some(set)`: only devices whose serial is in the set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyncRequest {
    pub serials: Option<BTreeSet<SerialNumber>>,
    pub dry_run: bool,
}

impl SyncRequest {
    /// Request covering every device on the server.
    pub fn all(dry_run: bool) -> Self {
        Self {
            serials: Some(BTreeSet::new()),
            dry_run,
        }
    }

    /// Request covering the given serial numbers.
    pub fn serials<I, S>(serials: I, dry_run: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SerialNumber>,
    {
        Self {
            serials: Some(serials.into_iter().map(Into::into).collect()),
            dry_run,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
