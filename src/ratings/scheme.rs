use crate::ratings::types::SchemeType;
use serde::Serialize;

/// Wanted ratings for the FHRS scheme, in display order.
/// Excludes "Awaiting Inspection" and every other label not listed here.
static FHRS_RATINGS: &[&str] = &["5", "4", "3", "2", "1", "0", "Exempt"];

/// Wanted ratings for the Scottish FHIS scheme, in display order.
/// Excludes "Awaiting Inspection", "Pass and Eat Safe" and the like.
static FHIS_RATINGS: &[&str] = &["Pass", "Improvement Required", "Exempt"];

/// A fixed, ordered set of rating buckets belonging to one scheme type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RatingScheme {
    Fhrs,
    Fhis,
}

impl RatingScheme {
    /// Maps a declared scheme type onto its bucket set. Unknown scheme
    /// types have none.
    pub fn for_scheme_type(scheme_type: &SchemeType) -> Option<Self> {
        match scheme_type {
            SchemeType::Fhrs => Some(RatingScheme::Fhrs),
            SchemeType::Fhis => Some(RatingScheme::Fhis),
            SchemeType::Other(_) => None,
        }
    }

    pub fn labels(self) -> &'static [&'static str] {
        match self {
            RatingScheme::Fhrs => FHRS_RATINGS,
            RatingScheme::Fhis => FHIS_RATINGS,
        }
    }
}
