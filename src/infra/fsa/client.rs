use async_trait::async_trait;
use tracing::{debug, info};

use crate::authority::AuthorityEntry;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::fetch::{ApiVersion, BasicClient, HttpClient, fetch_bytes};
use crate::parser::{parse_authorities, parse_establishments};
use crate::ratings::EstablishmentRecord;
use crate::services::ratings_api::RatingsApi;

/// [`RatingsApi`] backed by the FSA ratings HTTP API.
pub struct FsaClient<C = ApiVersion<BasicClient>> {
    http: C,
    config: ApiConfig,
}

impl FsaClient {
    /// Builds a client with the configured timeouts that sends the
    /// configured `x-api-version` header.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let basic = BasicClient::with_timeouts(config.timeout, config.connect_timeout)
            .map_err(|e| ApiError::Client(e.to_string()))?;
        let http = ApiVersion::new(basic, &config.api_version)
            .map_err(|e| ApiError::Client(format!("invalid api version header: {e}")))?;
        Ok(Self { http, config })
    }
}

impl<C: HttpClient> FsaClient<C> {
    pub fn with_client(http: C, config: ApiConfig) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl<C: HttpClient> RatingsApi for FsaClient<C> {
    #[tracing::instrument(skip(self), fields(url = %self.config.authorities_url))]
    async fn fetch_authorities(&self) -> Result<Vec<AuthorityEntry>, ApiError> {
        let bytes = fetch_bytes(&self.http, &self.config.authorities_url)
            .await
            .map_err(ApiError::DirectoryUnavailable)?;

        let authorities = parse_authorities(&bytes)?;
        info!(count = authorities.len(), "Authority list fetched");
        Ok(authorities)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_establishments(
        &self,
        authority_id: i64,
    ) -> Result<Vec<EstablishmentRecord>, ApiError> {
        let url = self.config.establishments_url(authority_id);
        debug!(url = %url, "Fetching establishments");

        let bytes = fetch_bytes(&self.http, &url)
            .await
            .map_err(|source| ApiError::EstablishmentsUnavailable {
                authority_id,
                source,
            })?;

        let establishments = parse_establishments(&bytes)?;
        info!(count = establishments.len(), "Establishments fetched");
        Ok(establishments)
    }
}
