//! Authority selection: name in, typed outcome out.
//!
//! Replaces a UI listener callback with a plain request/response call so
//! that lookup, fetch, and aggregation can be driven from any front end.

use tracing::{info, warn};

use crate::authority::AuthorityDirectory;
use crate::error::ApiError;
use crate::ratings::RatingDistribution;
use crate::services::ratings_api::RatingsApi;

/// What a front end should show after the user picks an entry.
#[derive(Debug)]
pub enum SelectionOutcome {
    /// The selection is not an authority (for example a "please select"
    /// placeholder); any previous result should be cleared.
    Cleared,
    Ratings {
        authority: String,
        authority_id: i64,
        distribution: RatingDistribution,
    },
    /// The authority has no establishment with a wanted rating.
    NoRatings { authority: String },
    Failed { authority: String, error: ApiError },
}

/// Holds the authority directory and resolves selections against a
/// [`RatingsApi`]. The directory is fetched once, on [`RatingsBrowser::load`].
pub struct RatingsBrowser<A> {
    api: A,
    directory: AuthorityDirectory,
}

impl<A: RatingsApi> RatingsBrowser<A> {
    /// Fetches the authority directory.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError::DirectoryUnavailable`] and malformed-document
    /// errors from the directory fetch.
    pub async fn load(api: A) -> Result<Self, ApiError> {
        let directory = api.fetch_authority_directory().await?;
        info!(authorities = directory.len(), "Authority directory loaded");
        Ok(Self { api, directory })
    }

    pub fn with_directory(api: A, directory: AuthorityDirectory) -> Self {
        Self { api, directory }
    }

    pub fn directory(&self) -> &AuthorityDirectory {
        &self.directory
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Looks `name` up, fetches that authority's establishments, and
    /// aggregates them.
    #[tracing::instrument(skip(self))]
    pub async fn select(&self, name: &str) -> SelectionOutcome {
        let Some(authority_id) = self.directory.get(name) else {
            return SelectionOutcome::Cleared;
        };

        match self.api.fetch_rating_distribution(authority_id).await {
            Ok(distribution) if distribution.is_empty() => {
                info!(authority_id, "No applicable ratings");
                SelectionOutcome::NoRatings {
                    authority: name.to_string(),
                }
            }
            Ok(distribution) => SelectionOutcome::Ratings {
                authority: name.to_string(),
                authority_id,
                distribution,
            },
            Err(error) => {
                warn!(authority_id, error = %error, "Failed to load ratings");
                SelectionOutcome::Failed {
                    authority: name.to_string(),
                    error,
                }
            }
        }
    }
}
