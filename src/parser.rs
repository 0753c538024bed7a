//! JSON parser for ratings API documents.

use serde::Deserialize;

use crate::authority::AuthorityEntry;
use crate::error::DataFormatError;
use crate::ratings::EstablishmentRecord;

#[derive(Deserialize)]
struct AuthoritiesDocument {
    authorities: Vec<AuthorityEntry>,
}

#[derive(Deserialize)]
struct EstablishmentsDocument {
    establishments: Vec<EstablishmentRecord>,
}

/// Decodes the `authorities` array from an authorities document.
///
/// # Errors
///
/// Returns a [`DataFormatError`] if the body is not JSON, the array is
/// missing, or any entry lacks `Name` or `LocalAuthorityId`.
pub fn parse_authorities(bytes: &[u8]) -> Result<Vec<AuthorityEntry>, DataFormatError> {
    serde_json::from_slice::<AuthoritiesDocument>(bytes)
        .map(|doc| doc.authorities)
        .map_err(|source| DataFormatError {
            document: "authorities",
            source,
        })
}

/// Decodes the `establishments` array from an establishments document.
///
/// # Errors
///
/// Returns a [`DataFormatError`] if the body is not JSON, the array is
/// missing, or any entry lacks `RatingValue` or `SchemeType` as strings.
pub fn parse_establishments(bytes: &[u8]) -> Result<Vec<EstablishmentRecord>, DataFormatError> {
    serde_json::from_slice::<EstablishmentsDocument>(bytes)
        .map(|doc| doc.establishments)
        .map_err(|source| DataFormatError {
            document: "establishments",
            source,
        })
}
