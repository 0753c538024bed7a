//! Data types used by the rating aggregation pipeline.

use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rating taxonomy declared by an establishment.
///
/// Anything other than `FHRS` or `FHIS` is kept verbatim in
/// [`SchemeType::Other`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum SchemeType {
    /// Food Hygiene Rating Scheme (England, Wales, Northern Ireland).
    Fhrs,
    /// Food Hygiene Information Scheme (Scotland).
    Fhis,
    Other(String),
}

impl From<String> for SchemeType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "FHRS" => SchemeType::Fhrs,
            "FHIS" => SchemeType::Fhis,
            _ => SchemeType::Other(value),
        }
    }
}

impl From<&str> for SchemeType {
    fn from(value: &str) -> Self {
        SchemeType::from(value.to_string())
    }
}

impl fmt::Display for SchemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemeType::Fhrs => f.write_str("FHRS"),
            SchemeType::Fhis => f.write_str("FHIS"),
            SchemeType::Other(raw) => f.write_str(raw),
        }
    }
}

/// A single establishment as returned by the establishments endpoint.
/// Only the two fields the aggregator needs are kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EstablishmentRecord {
    #[serde(rename = "RatingValue")]
    pub rating_value: String,
    #[serde(rename = "SchemeType")]
    pub scheme_type: SchemeType,
}

impl EstablishmentRecord {
    pub fn new(rating_value: impl Into<String>, scheme_type: impl Into<SchemeType>) -> Self {
        Self {
            rating_value: rating_value.into(),
            scheme_type: scheme_type.into(),
        }
    }
}

/// Percentage share of one rating bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingShare {
    pub label: String,
    pub percentage: f64,
}

/// Ordered mapping from rating label to percentage, in the scheme's
/// canonical bucket order.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingDistribution {
    shares: Vec<RatingShare>,
}

impl RatingDistribution {
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    /// Returns the percentage recorded for `label`, if the bucket exists.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.shares
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.percentage)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RatingShare> {
        self.shares.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.shares.iter().map(|s| s.label.as_str())
    }

    /// Sum of every bucket's percentage. 100.0 (within rounding) for any
    /// non-empty distribution.
    pub fn total_percentage(&self) -> f64 {
        self.shares.iter().map(|s| s.percentage).sum()
    }
}

impl<L: Into<String>> FromIterator<(L, f64)> for RatingDistribution {
    fn from_iter<I: IntoIterator<Item = (L, f64)>>(iter: I) -> Self {
        Self {
            shares: iter
                .into_iter()
                .map(|(label, percentage)| RatingShare {
                    label: label.into(),
                    percentage,
                })
                .collect(),
        }
    }
}

impl Serialize for RatingDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.shares.iter().map(|s| (&s.label, s.percentage)))
    }
}
