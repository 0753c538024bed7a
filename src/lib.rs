pub mod authority;
pub mod config;
pub mod error;
pub mod fetch;
pub mod infra;
pub mod output;
pub mod parser;
pub mod ratings;
pub mod selection;
pub mod services;

pub use authority::{AuthorityDirectory, AuthorityEntry, build_authority_directory};
pub use error::{ApiError, DataFormatError, FetchError};
pub use ratings::{EstablishmentRecord, RatingDistribution, aggregate_ratings};
