//! Blocking HTTPS client for the Jamf Classic API.
//!
//! One [`ureq::Agent`] is built per client and reused for every request, so
//! the connection pool and TLS session survive across the whole run.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::de::DeserializeOwned;
use url::Url;

use jamf_rename_core::{
    Device, DeviceId, ExtensionAttribute, JamfConfig, MobileDeviceApi, RemoteError,
};

use crate::error::ClientBuildError;
use crate::tls;
use crate::wire::{ExtensionAttributesEnvelope, MobileDeviceList, MobileDeviceUpdate};

const HTTP_OK: u16 = 200;
const HTTP_CREATED: u16 = 201;

/// Authenticated client bound to one Jamf server.
pub struct JamfClient {
    config: JamfConfig,
    agent: ureq::Agent,
    authorization: String,
}

impl JamfClient {
    pub fn new(config: JamfConfig) -> Result<Self, ClientBuildError> {
        let mut builder = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(concat!("jamf-rename/", env!("CARGO_PKG_VERSION")));
        if let Some(path) = config.cert_file.as_deref() {
            builder = builder.tls_config(tls::pinned_config(path)?);
        }

        let authorization = basic_auth(&config.username, &config.password);
        Ok(Self {
            agent: builder.build(),
            authorization,
            config,
        })
    }

    pub fn config(&self) -> &JamfConfig {
        &self.config
    }

    /// `{base}/JSSResource/mobiledevices`
    pub fn devices_url(&self) -> Url {
        self.config.endpoint(["JSSResource", "mobiledevices"])
    }

    /// `{base}/JSSResource/mobiledevices/id/{id}/subset/extension_attributes`
    pub fn extension_attributes_url(&self, id: DeviceId) -> Url {
        let id = id.to_string();
        self.config.endpoint([
            "JSSResource",
            "mobiledevices",
            "id",
            id.as_str(),
            "subset",
            "extension_attributes",
        ])
    }

    /// `{base}/JSSResource/mobiledevices/id/{id}`
    pub fn device_url(&self, id: DeviceId) -> Url {
        let id = id.to_string();
        self.config
            .endpoint(["JSSResource", "mobiledevices", "id", id.as_str()])
    }

    /// `{base}/JSSResource/mobiledevicecommands/command/DeviceName/{name}/id/{id}`
    pub fn device_name_command_url(&self, id: DeviceId, name: &str) -> Url {
        let id = id.to_string();
        self.config.endpoint([
            "JSSResource",
            "mobiledevicecommands",
            "command",
            "DeviceName",
            name,
            "id",
            id.as_str(),
        ])
    }

    fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, RemoteError> {
        let response = self.send(self.agent.get(url.as_str()), url, None, HTTP_OK)?;
        // into_string caps bodies at 10 MB; large fleet listings can exceed it.
        serde_json::from_reader(response.into_reader()).map_err(|source| RemoteError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Attach the common headers, issue the request, and insist on `expected`.
    fn send(
        &self,
        request: ureq::Request,
        url: &Url,
        xml_body: Option<&str>,
        expected: u16,
    ) -> Result<ureq::Response, RemoteError> {
        let request = request
            .set("Accept", "application/json")
            .set("Authorization", &self.authorization);
        let method = request.method().to_string();

        let result = match xml_body {
            Some(body) => request
                .set("Content-Type", "application/xml")
                .send_string(body),
            None => request.call(),
        };

        let response = match result {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(other) => return Err(transport_err(url, other)),
        };

        let status = response.status();
        tracing::debug!(%method, url = %url, status, "jamf response");
        if status != expected {
            let body = response.into_string().unwrap_or_default();
            return Err(RemoteError::Status {
                url: url.to_string(),
                status,
                body,
            });
        }
        Ok(response)
    }
}

impl MobileDeviceApi for JamfClient {
    fn list_devices(&self) -> Result<Vec<Device>, RemoteError> {
        let list: MobileDeviceList = self.get_json(&self.devices_url())?;
        Ok(list.mobile_devices.into_iter().map(Device::from).collect())
    }

    fn extension_attributes(&self, id: DeviceId) -> Result<Vec<ExtensionAttribute>, RemoteError> {
        let envelope: ExtensionAttributesEnvelope =
            self.get_json(&self.extension_attributes_url(id))?;
        Ok(envelope
            .mobile_device
            .extension_attributes
            .into_iter()
            .map(ExtensionAttribute::from)
            .collect())
    }

    fn update_device_name(&self, id: DeviceId, name: &str) -> Result<(), RemoteError> {
        let body = MobileDeviceUpdate::rename(name)
            .to_xml()
            .map_err(RemoteError::Encode)?;
        let url = self.device_url(id);
        self.send(self.agent.put(url.as_str()), &url, Some(&body), HTTP_CREATED)?;
        Ok(())
    }

    fn send_device_name_command(&self, id: DeviceId, name: &str) -> Result<(), RemoteError> {
        let url = self.device_name_command_url(id, name);
        self.send(self.agent.post(url.as_str()), &url, None, HTTP_CREATED)?;
        Ok(())
    }
}

fn basic_auth(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

fn transport_err(url: &Url, err: impl std::fmt::Display) -> RemoteError {
    RemoteError::Transport {
        url: url.to_string(),
        message: err.to_string(),
    }
}
