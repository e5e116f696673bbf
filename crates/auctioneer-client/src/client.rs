use {
    crate::{http_client::HttpClientFactory, routes::Route, tls::TlsConfig},
    model::{LrpStartRequest, TaskStartRequest},
    reqwest::{Client, Request, Response, StatusCode, header},
    serde::Serialize,
    std::path::PathBuf,
    thiserror::Error,
    url::Url,
};

/// Abstract auctioneer API. Provides a mockable implementation.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait AuctioneerApi: Send + Sync {
    /// Asks the auctioneer to run placement auctions for a batch of one shot
    /// tasks. 202 means the batch was queued for auctioning, not that
    /// placement succeeded.
    async fn request_task_auctions(&self, tasks: &[TaskStartRequest]) -> Result<(), Error>;

    /// Asks the auctioneer to run placement auctions for a batch of long
    /// running process instances.
    async fn request_lrp_auctions(&self, lrp_starts: &[LrpStartRequest]) -> Result<(), Error>;
}

/// A failure while constructing a client. Fatal: the client is not created
/// and construction is never retried.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read TLS material from {path:?}")]
    ReadTlsMaterial {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TLS material in {path:?}")]
    InvalidTlsMaterial {
        path: PathBuf,
        #[source]
        source: reqwest::Error,
    },
    #[error("mutual TLS requires ca file, cert file and key file to all be configured")]
    MissingTlsMaterial,
    #[error("failed to configure the TLS transport")]
    Transport(#[source] reqwest::Error),
}

/// A failure of a single auction request call.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to encode the request batch")]
    Encoding(#[from] serde_json::Error),
    #[error("no route to the auctioneer API from {base}")]
    Routing {
        base: Url,
        #[source]
        source: url::ParseError,
    },
    #[error("transport error")]
    Transport(#[source] reqwest::Error),
    #[error(
        "http error: status code {} ({})",
        .status.as_u16(),
        .status.canonical_reason().unwrap_or("unknown")
    )]
    Service { status: StatusCode },
}

/// Auctioneer HTTP API client implementation.
///
/// Immutable once constructed and safe to share across tasks: all mutable
/// state lives inside the pooled transports.
#[derive(Clone, Debug)]
pub struct AuctioneerHttpClient {
    client: Client,
    insecure_client: Option<Client>,
    base: Url,
    require_tls: bool,
}

impl AuctioneerHttpClient {
    /// Creates a client that only ever speaks plain HTTP. TLS is never
    /// required and no fallback transport exists.
    pub fn new(factory: &HttpClientFactory, base: Url) -> Self {
        Self {
            client: factory.create(),
            insecure_client: None,
            base,
            require_tls: false,
        }
    }

    /// Creates a client that speaks mutual TLS. Unless `require_tls` is set
    /// a plain HTTP transport is kept around and used as a one shot fallback
    /// when the secure transport cannot establish a connection.
    pub fn with_tls(
        factory: &HttpClientFactory,
        base: Url,
        tls: &TlsConfig,
        require_tls: bool,
    ) -> Result<Self, ConfigError> {
        let ca_certificate = tls.ca_certificate()?;
        let identity = tls.identity()?;
        let client = factory
            .configure(|builder| {
                builder
                    .add_root_certificate(ca_certificate)
                    .identity(identity)
            })
            .map_err(ConfigError::Transport)?;

        Ok(Self {
            client,
            insecure_client: Some(factory.create()),
            base,
            require_tls,
        })
    }

    async fn submit<T: Serialize>(&self, route: Route, batch: &[T]) -> Result<(), Error> {
        let payload = serde_json::to_vec(batch)?;
        let url = route.url(&self.base).map_err(|source| Error::Routing {
            base: self.base.clone(),
            source,
        })?;
        tracing::debug!(%url, len = batch.len(), "requesting auctions");

        let request = self
            .client
            .request(route.method(), url)
            .headers(observe::distributed::headers::tracing_headers())
            .header(header::CONTENT_TYPE, "application/json")
            .body(payload)
            .build()
            .map_err(Error::Transport)?;

        let response = self.execute(request).await?;
        match response.status() {
            StatusCode::ACCEPTED => Ok(()),
            status => Err(Error::Service { status }),
        }
    }

    /// Dispatches the request on the secure transport, falling back to plain
    /// HTTP exactly once if the connection could not be established and the
    /// configuration allows it. HTTP level failures never fall back: the
    /// channel worked, the service rejected the request.
    async fn execute(&self, request: Request) -> Result<Response, Error> {
        let fallback = self.fallback(&request);
        match self.client.execute(request).await {
            Ok(response) => Ok(response),
            Err(err) => match fallback.filter(|_| is_connection_failure(&err)) {
                Some((insecure_client, request)) => {
                    tracing::warn!(error = ?err, "retrying auction request on plain http");
                    insecure_client
                        .execute(request)
                        .await
                        .map_err(Error::Transport)
                }
                None => Err(Error::Transport(err)),
            },
        }
    }

    /// The plain HTTP rendition of `request`, if this client is allowed to
    /// fall back at all. Scheme aside, the request is left untouched.
    fn fallback(&self, request: &Request) -> Option<(&Client, Request)> {
        if self.require_tls {
            return None;
        }
        let insecure_client = self.insecure_client.as_ref()?;
        let mut request = request.try_clone()?;
        request.url_mut().set_scheme("http").ok()?;
        Some((insecure_client, request))
    }
}

/// Whether the request failed before the auctioneer produced a response,
/// i.e. while establishing the connection. Deadline expiry does not count: a
/// call whose deadline already passed must not start a second attempt.
fn is_connection_failure(err: &reqwest::Error) -> bool {
    err.is_connect() && !err.is_timeout()
}

#[async_trait::async_trait]
impl AuctioneerApi for AuctioneerHttpClient {
    async fn request_task_auctions(&self, tasks: &[TaskStartRequest]) -> Result<(), Error> {
        self.submit(Route::CreateTaskAuctions, tasks).await
    }

    async fn request_lrp_auctions(&self, lrp_starts: &[LrpStartRequest]) -> Result<(), Error> {
        self.submit(Route::CreateLrpAuctions, lrp_starts).await
    }
}
