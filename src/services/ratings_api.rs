//! Trait for interacting with a food-hygiene ratings provider.

use async_trait::async_trait;

use crate::authority::{AuthorityDirectory, AuthorityEntry, build_authority_directory};
use crate::error::ApiError;
use crate::ratings::{EstablishmentRecord, RatingDistribution, aggregate_ratings};

/// Abstraction over a ratings provider (e.g. the FSA ratings API).
#[async_trait]
pub trait RatingsApi: Send + Sync {
    /// Returns every authority the provider knows about.
    async fn fetch_authorities(&self) -> Result<Vec<AuthorityEntry>, ApiError>;

    /// Returns the establishments registered with one authority.
    async fn fetch_establishments(
        &self,
        authority_id: i64,
    ) -> Result<Vec<EstablishmentRecord>, ApiError>;

    async fn fetch_authority_directory(&self) -> Result<AuthorityDirectory, ApiError> {
        Ok(build_authority_directory(self.fetch_authorities().await?))
    }

    /// Fetches an authority's establishments and aggregates their ratings.
    /// Only successfully retrieved data ever reaches the aggregator.
    async fn fetch_rating_distribution(
        &self,
        authority_id: i64,
    ) -> Result<RatingDistribution, ApiError> {
        let records = self.fetch_establishments(authority_id).await?;
        Ok(aggregate_ratings(&records))
    }
}
