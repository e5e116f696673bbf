//! Command line arguments for configuring the auctioneer client.

use {
    crate::{
        client::{AuctioneerHttpClient, ConfigError},
        http_client::HttpClientFactory,
        tls::TlsConfig,
    },
    std::{
        fmt::{self, Display, Formatter},
        path::PathBuf,
    },
    url::Url,
};

#[derive(clap::Parser)]
#[group(skip)]
pub struct Arguments {
    /// Base address of the auctioneer API.
    #[clap(
        long,
        env,
        default_value = "https://auctioneer.service.cf.internal:9016"
    )]
    pub auctioneer_url: Url,

    /// Refuse to fall back to plain HTTP when the secure transport cannot
    /// reach the auctioneer.
    #[clap(long, env)]
    pub auctioneer_require_tls: bool,

    /// Path to the PEM encoded CA bundle the auctioneer's server certificate
    /// is verified against.
    #[clap(long, env)]
    pub auctioneer_ca_file: Option<PathBuf>,

    /// Path to the PEM encoded client certificate presented to the
    /// auctioneer.
    #[clap(long, env)]
    pub auctioneer_cert_file: Option<PathBuf>,

    /// Path to the PEM encoded PKCS#8 key belonging to the client
    /// certificate.
    #[clap(long, env)]
    pub auctioneer_key_file: Option<PathBuf>,
}

impl Arguments {
    /// Builds the client described by these arguments. TLS material has to
    /// be configured either completely or not at all.
    pub fn client(&self, factory: &HttpClientFactory) -> Result<AuctioneerHttpClient, ConfigError> {
        let tls = match (
            &self.auctioneer_ca_file,
            &self.auctioneer_cert_file,
            &self.auctioneer_key_file,
        ) {
            (Some(ca_file), Some(cert_file), Some(key_file)) => Some(TlsConfig {
                ca_file: ca_file.clone(),
                cert_file: cert_file.clone(),
                key_file: key_file.clone(),
            }),
            (None, None, None) => None,
            _ => return Err(ConfigError::MissingTlsMaterial),
        };

        match tls {
            Some(tls) => AuctioneerHttpClient::with_tls(
                factory,
                self.auctioneer_url.clone(),
                &tls,
                self.auctioneer_require_tls,
            ),
            None if self.auctioneer_require_tls => Err(ConfigError::MissingTlsMaterial),
            None => Ok(AuctioneerHttpClient::new(
                factory,
                self.auctioneer_url.clone(),
            )),
        }
    }
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Self {
            auctioneer_url,
            auctioneer_require_tls,
            auctioneer_ca_file,
            auctioneer_cert_file,
            auctioneer_key_file,
        } = self;

        writeln!(f, "auctioneer_url: {}", auctioneer_url)?;
        writeln!(f, "auctioneer_require_tls: {}", auctioneer_require_tls)?;
        writeln!(f, "auctioneer_ca_file: {:?}", auctioneer_ca_file)?;
        writeln!(f, "auctioneer_cert_file: {:?}", auctioneer_cert_file)?;
        writeln!(f, "auctioneer_key_file: {:?}", auctioneer_key_file)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {super::*, clap::Parser};

    #[test]
    fn minimal_arguments_build_an_insecure_client() {
        let args = Arguments::try_parse_from([
            "test",
            "--auctioneer-url",
            "http://auctioneer.service.cf.internal:9016",
        ])
        .unwrap();

        assert!(args.client(&HttpClientFactory::default()).is_ok());
    }

    #[test]
    fn partial_tls_material_is_rejected() {
        let args = Arguments::try_parse_from([
            "test",
            "--auctioneer-ca-file",
            "/etc/auctioneer/ca.pem",
        ])
        .unwrap();

        assert!(matches!(
            args.client(&HttpClientFactory::default()),
            Err(ConfigError::MissingTlsMaterial)
        ));
    }

    #[test]
    fn require_tls_without_material_is_rejected() {
        let args = Arguments::try_parse_from(["test", "--auctioneer-require-tls"]).unwrap();

        assert!(matches!(
            args.client(&HttpClientFactory::default()),
            Err(ConfigError::MissingTlsMaterial)
        ));
    }

    #[test]
    fn displays_every_field() {
        let args = Arguments::try_parse_from(["test"]).unwrap();
        let displayed = args.to_string();

        assert!(displayed.contains("auctioneer_url"));
        assert!(displayed.contains("auctioneer_require_tls: false"));
    }
}
