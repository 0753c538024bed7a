//! Rating aggregation.
//!
//! Classifies an authority's establishments into the fixed bucket set of
//! their rating scheme and converts the counts into percentages.

pub mod aggregate;
pub mod scheme;
pub mod types;

pub use aggregate::{aggregate_ratings, tally, BucketCount, RatingTally};
pub use scheme::RatingScheme;
pub use types::{EstablishmentRecord, RatingDistribution, RatingShare, SchemeType};
