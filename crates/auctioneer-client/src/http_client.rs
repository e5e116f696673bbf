use {
    reqwest::{Client, ClientBuilder},
    std::{
        fmt::{self, Display, Formatter},
        time::Duration,
    },
};

const USER_AGENT: &str = "auctioneer-client/0.1.0";

/// An HTTP client factory.
///
/// This ensures a common configuration for the transports built by this
/// crate, while allowing the secure transport its own TLS settings and a
/// separate connection pool from the plain HTTP fallback transport.
#[derive(Clone, Debug)]
pub struct HttpClientFactory {
    timeout: Duration,
}

impl HttpClientFactory {
    pub fn new(args: &Arguments) -> Self {
        Self {
            timeout: args.http_timeout,
        }
    }

    /// Creates a new HTTP client with the default settings.
    pub fn create(&self) -> Client {
        self.builder().build().unwrap()
    }

    /// Creates a new HTTP client, allowing for additional configuration.
    /// Unlike [`create`](Self::create) the configuration may be one the
    /// transport cannot actually be built with, so the failure is returned.
    pub fn configure(
        &self,
        config: impl FnOnce(ClientBuilder) -> ClientBuilder,
    ) -> reqwest::Result<Client> {
        config(self.builder()).build()
    }

    /// Returns a `ClientBuilder` with the default settings.
    pub fn builder(&self) -> ClientBuilder {
        ClientBuilder::new()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
    }
}

impl Default for HttpClientFactory {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}

/// Command line arguments for the common HTTP factory.
#[derive(clap::Parser)]
#[group(skip)]
pub struct Arguments {
    /// Default timeout in seconds for http requests.
    #[clap(
        long,
        env,
        default_value = "10s",
        value_parser = humantime::parse_duration,
    )]
    pub http_timeout: Duration,
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Self { http_timeout } = self;

        writeln!(f, "http_timeout: {:?}", http_timeout)
    }
}
