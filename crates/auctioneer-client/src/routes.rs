use {reqwest::Method, url::Url};

/// The operations exposed by the auctioneer's HTTP API. The mapping from
/// operation to method and path is fixed for the lifetime of the process.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Route {
    CreateTaskAuctions,
    CreateLrpAuctions,
}

impl Route {
    pub fn method(&self) -> Method {
        match self {
            Self::CreateTaskAuctions | Self::CreateLrpAuctions => Method::POST,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::CreateTaskAuctions => "/v1/tasks",
            Self::CreateLrpAuctions => "/v1/lrps",
        }
    }

    /// Resolves the route against the configured base address.
    pub fn url(&self, base: &Url) -> Result<Url, url::ParseError> {
        base.join(self.path())
    }
}
