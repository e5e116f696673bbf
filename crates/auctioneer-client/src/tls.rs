use {
    crate::client::ConfigError,
    reqwest::{Certificate, Identity},
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

/// Locations of the PEM encoded TLS material used for mutual TLS towards the
/// auctioneer. Parsing of the material itself is left to the TLS backend.
#[derive(Clone, Debug)]
pub struct TlsConfig {
    pub ca_file: PathBuf,
    pub cert_file: PathBuf,
    pub key_file: PathBuf,
}

impl TlsConfig {
    /// Loads the CA bundle the auctioneer's server certificate is verified
    /// against.
    pub fn ca_certificate(&self) -> Result<Certificate, ConfigError> {
        let pem = read(&self.ca_file)?;
        Certificate::from_pem(&pem).map_err(|source| ConfigError::InvalidTlsMaterial {
            path: self.ca_file.clone(),
            source,
        })
    }

    /// Loads the client certificate and PKCS#8 key presented to the
    /// auctioneer during the handshake.
    pub fn identity(&self) -> Result<Identity, ConfigError> {
        let cert = read(&self.cert_file)?;
        let key = read(&self.key_file)?;
        Identity::from_pkcs8_pem(&cert, &key).map_err(|source| ConfigError::InvalidTlsMaterial {
            path: self.cert_file.clone(),
            source,
        })
    }
}

fn read(path: &Path) -> Result<Vec<u8>, ConfigError> {
    fs::read(path).map_err(|source| ConfigError::ReadTlsMaterial {
        path: path.to_path_buf(),
        source,
    })
}
