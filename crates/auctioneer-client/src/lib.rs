//! Auctioneer HTTP API client implementation.
//!
//! The auctioneer is the scheduling service that runs placement auctions to
//! assign tasks and long running process instances to cells. This crate only
//! asks it to run auctions; whether placement succeeds is communicated out of
//! band. The client serializes batches of start requests into JSON, posts
//! them against the auctioneer's routes and reduces the HTTP outcome to
//! success or a typed error. Deployments that are still rolling out TLS can
//! allow a one shot fallback to plain HTTP when the secure transport cannot
//! establish a connection.

pub mod arguments;
pub mod client;
pub mod http_client;
pub mod routes;
pub mod tls;

pub use self::{
    client::{AuctioneerApi, AuctioneerHttpClient, ConfigError, Error},
    http_client::HttpClientFactory,
    routes::Route,
    tls::TlsConfig,
};

#[cfg(any(test, feature = "test-util"))]
pub use self::client::MockAuctioneerApi;
