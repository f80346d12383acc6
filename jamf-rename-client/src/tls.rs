//! Trust anchors from a pinned server certificate file.

use std::path::Path;
use std::sync::Arc;

use rustls::{ClientConfig, RootCertStore};

use crate::error::{cert_err, ClientBuildError};

/// Build a rustls config that trusts only the certificates in `path`.
pub(crate) fn pinned_config(path: &Path) -> Result<Arc<ClientConfig>, ClientBuildError> {
    let pem = std::fs::read(path).map_err(|e| cert_err(path, e))?;
    let roots = load_roots(path, &pem)?;

    let tls_err = |source| ClientBuildError::Tls {
        path: path.to_path_buf(),
        source,
    };
    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let config = ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .map_err(tls_err)?
        .with_root_certificates(roots)
        .with_no_client_auth();
    Ok(Arc::new(config))
}

fn load_roots(path: &Path, pem: &[u8]) -> Result<RootCertStore, ClientBuildError> {
    let mut roots = RootCertStore::empty();
    let mut reader = pem;
    for cert in rustls_pemfile::certs(&mut reader) {
        let cert = cert.map_err(|e| cert_err(path, e))?;
        roots.add(cert).map_err(|source| ClientBuildError::Tls {
            path: path.to_path_buf(),
            source,
        })?;
    }
    if roots.is_empty() {
        return Err(ClientBuildError::NoCertificates {
            path: path.to_path_buf(),
        });
    }
    tracing::debug!(path = %path.display(), roots = roots.len(), "loaded pinned certificates");
    Ok(roots)
}
