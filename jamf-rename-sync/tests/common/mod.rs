#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io::Write;
use std::sync::{Arc, Mutex};

use jamf_rename_core::{
    Device, DeviceId, ExtensionAttribute, MobileDeviceApi, RemoteError, SerialNumber,
};

/// Every call the runner makes, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Attributes(DeviceId),
    Update(DeviceId, String),
    Command(DeviceId, String),
}

/// In-memory Jamf server.
#[derive(Default)]
pub struct FakeApi {
    pub devices: Vec<Device>,
    pub attributes: HashMap<DeviceId, Vec<ExtensionAttribute>>,
    pub list_status: Option<u16>,
    pub attribute_status: HashMap<DeviceId, u16>,
    pub failing_updates: HashSet<DeviceId>,
    pub failing_commands: HashSet<DeviceId>,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeApi {
    /// Add a device; `shortname: None` gives it no GivenIOSShortname attribute.
    pub fn with_device(mut self, id: u64, serial: &str, shortname: Option<&str>) -> Self {
        let id = DeviceId(id);
        self.devices.push(Device {
            id,
            serial_number: SerialNumber::from(serial),
            name: format!("old-{id}"),
        });
        let mut attrs = vec![ExtensionAttribute {
            id: 4,
            name: "AssetTag".into(),
            value: format!("AT-{id}"),
        }];
        if let Some(value) = shortname {
            attrs.push(shortname_attr(value));
        }
        self.attributes.insert(id, attrs);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn mutating_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Update(..) | Call::Command(..)))
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

pub fn shortname_attr(value: &str) -> ExtensionAttribute {
    ExtensionAttribute {
        id: 1,
        name: "GivenIOSShortname".into(),
        value: value.into(),
    }
}

fn status_error(path: String, status: u16) -> RemoteError {
    RemoteError::Status {
        url: format!("https://jamf.test{path}"),
        status,
        body: "scripted failure".into(),
    }
}

impl MobileDeviceApi for FakeApi {
    fn list_devices(&self) -> Result<Vec<Device>, RemoteError> {
        self.record(Call::List);
        match self.list_status {
            Some(status) => Err(status_error("/JSSResource/mobiledevices".into(), status)),
            None => Ok(self.devices.clone()),
        }
    }

    fn extension_attributes(&self, id: DeviceId) -> Result<Vec<ExtensionAttribute>, RemoteError> {
        self.record(Call::Attributes(id));
        if let Some(status) = self.attribute_status.get(&id) {
            return Err(status_error(format!("/mobiledevices/id/{id}"), *status));
        }
        Ok(self.attributes.get(&id).cloned().unwrap_or_default())
    }

    fn update_device_name(&self, id: DeviceId, name: &str) -> Result<(), RemoteError> {
        self.record(Call::Update(id, name.to_string()));
        if self.failing_updates.contains(&id) {
            return Err(status_error(format!("/mobiledevices/id/{id}"), 409));
        }
        Ok(())
    }

    fn send_device_name_command(&self, id: DeviceId, name: &str) -> Result<(), RemoteError> {
        self.record(Call::Command(id, name.to_string()));
        if self.failing_commands.contains(&id) {
            return Err(status_error(format!("/mobiledevicecommands/id/{id}"), 400));
        }
        Ok(())
    }
}

/// Run `f` with a subscriber that captures formatted log lines.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buf = Arc::new(Mutex::new(Vec::<u8>::new()));
    let writer_buf = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .without_time()
        .with_writer(move || CaptureWriter(writer_buf.clone()))
        .finish();

    let value = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8(buf.lock().expect("log buffer").clone()).expect("utf8 logs");
    (value, logs)
}

struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl Write for CaptureWriter {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
