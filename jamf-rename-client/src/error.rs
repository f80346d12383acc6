//! Error types for jamf-rename-client.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a [`crate::JamfClient`].
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// Certificate file could not be read.
    #[error("cannot read certificate file {path}: {source}")]
    CertFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Certificate file was readable but held no PEM certificate.
    #[error("no PEM certificate found in {path}")]
    NoCertificates { path: PathBuf },

    /// rustls rejected a certificate or the protocol configuration.
    #[error("TLS configuration error for {path}: {source}")]
    Tls {
        path: PathBuf,
        #[source]
        source: rustls::Error,
    },
}

/// Convenience constructor for [`ClientBuildError::CertFile`].
pub(crate) fn cert_err(path: impl Into<PathBuf>, source: std::io::Error) -> ClientBuildError {
    ClientBuildError::CertFile {
        path: path.into(),
        source,
    }
}
