use crate::ratings::scheme::RatingScheme;
use crate::ratings::types::{EstablishmentRecord, RatingDistribution};
use serde::Serialize;

const NO_RATINGS: &[&str] = &[];

/// Count of establishments holding one rating label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketCount {
    pub label: &'static str,
    pub count: usize,
}

/// Result of the counting pass over an authority's establishments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RatingTally {
    /// Scheme inferred from the first record; `None` for empty input or an
    /// unknown scheme type.
    pub scheme: Option<RatingScheme>,
    pub buckets: Vec<BucketCount>,
    /// Records whose rating matched one of the scheme's buckets.
    pub wanted: usize,
    /// Records discarded because their rating is not a wanted label.
    pub excluded: usize,
}

impl RatingTally {
    /// Converts counts into percentages of the wanted total, keeping every
    /// bucket (zero counts included) in scheme order.
    ///
    /// Returns an empty distribution when nothing was wanted.
    pub fn distribution(&self) -> RatingDistribution {
        if self.wanted == 0 {
            return RatingDistribution::default();
        }

        self.buckets
            .iter()
            .map(|b| (b.label, (b.count * 100) as f64 / self.wanted as f64))
            .collect()
    }
}

/// Counts establishments per wanted rating.
///
/// All establishments within one authority are assumed to share a scheme
/// type, so only the first record is inspected to choose the bucket set.
/// Later records are classified against that set whatever their own
/// `scheme_type` says; a mixed-scheme input is misclassified, not rejected.
pub fn tally(records: &[EstablishmentRecord]) -> RatingTally {
    let Some(first) = records.first() else {
        return RatingTally::default();
    };

    let scheme = RatingScheme::for_scheme_type(&first.scheme_type);
    let labels = scheme.map_or(NO_RATINGS, RatingScheme::labels);

    let mut buckets: Vec<BucketCount> = labels
        .iter()
        .map(|&label| BucketCount { label, count: 0 })
        .collect();
    let mut wanted = 0;

    for record in records {
        if let Some(bucket) = buckets.iter_mut().find(|b| b.label == record.rating_value) {
            bucket.count += 1;
            wanted += 1;
        }
    }

    RatingTally {
        scheme,
        buckets,
        wanted,
        excluded: records.len() - wanted,
    }
}

/// Turns an authority's establishments into a percentage distribution over
/// the scheme's wanted ratings. See [`tally`] for the scheme inference rule.
pub fn aggregate_ratings(records: &[EstablishmentRecord]) -> RatingDistribution {
    tally(records).distribution()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(rows: &[(&str, &str, usize)]) -> Vec<EstablishmentRecord> {
        rows.iter()
            .flat_map(|&(rating, scheme, n)| {
                std::iter::repeat_with(move || EstablishmentRecord::new(rating, scheme)).take(n)
            })
            .collect()
    }

    #[test]
    fn test_empty_input_gives_empty_distribution() {
        let dist = aggregate_ratings(&[]);
        assert!(dist.is_empty());

        let t = tally(&[]);
        assert_eq!(t.scheme, None);
        assert_eq!(t.wanted, 0);
    }

    #[test]
    fn test_scotland_ignores_unwanted_ratings() {
        let input = records(&[
            ("Pass", "FHIS", 5),
            ("Exempt", "FHIS", 3),
            ("Awaiting Inspection", "FHIS", 2),
        ]);

        let dist = aggregate_ratings(&input);

        let expected: RatingDistribution =
            [("Pass", 62.5), ("Improvement Required", 0.0), ("Exempt", 37.5)]
                .into_iter()
                .collect();
        assert_eq!(dist, expected);
    }

    #[test]
    fn test_not_scotland_ignores_unwanted_ratings() {
        let input = records(&[
            ("5", "FHRS", 3),
            ("4", "FHRS", 1),
            ("2", "FHRS", 1),
            ("0", "FHRS", 1),
            ("Exempt", "FHRS", 2),
            ("Awaiting Inspection", "FHRS", 3),
        ]);

        let dist = aggregate_ratings(&input);

        let expected: RatingDistribution = [
            ("5", 37.5),
            ("4", 12.5),
            ("3", 0.0),
            ("2", 12.5),
            ("1", 0.0),
            ("0", 12.5),
            ("Exempt", 25.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(dist, expected);
    }

    #[test]
    fn test_only_unwanted_ratings_gives_empty_distribution() {
        for n in [1, 3, 50] {
            let input = records(&[("Awaiting Inspection", "FHRS", n)]);
            assert!(aggregate_ratings(&input).is_empty());
        }
    }

    #[test]
    fn test_unknown_scheme_gives_empty_distribution() {
        let input = records(&[("5", "XYZ", 2), ("5", "FHRS", 2)]);

        let t = tally(&input);
        assert_eq!(t.scheme, None);
        assert!(t.buckets.is_empty());
        assert_eq!(t.excluded, 4);
        assert!(t.distribution().is_empty());
    }

    #[test]
    fn test_scheme_comes_from_first_record_only() {
        // Later FHRS records are judged against the FHIS buckets.
        let input = records(&[("Pass", "FHIS", 1), ("5", "FHRS", 3), ("Exempt", "FHRS", 1)]);

        let dist = aggregate_ratings(&input);

        assert_eq!(
            dist.labels().collect::<Vec<_>>(),
            vec!["Pass", "Improvement Required", "Exempt"]
        );
        assert_eq!(dist.get("Pass"), Some(50.0));
        assert_eq!(dist.get("Exempt"), Some(50.0));
        assert_eq!(dist.get("5"), None);
    }

    #[test]
    fn test_matching_is_case_sensitive_and_untrimmed() {
        let input = records(&[("pass", "FHIS", 1), ("Pass ", "FHIS", 1), ("Pass", "FHIS", 1)]);

        let t = tally(&input);
        assert_eq!(t.wanted, 1);
        assert_eq!(t.excluded, 2);
        assert_eq!(t.distribution().get("Pass"), Some(100.0));
    }

    #[test]
    fn test_order_follows_scheme_not_counts_or_input() {
        let input = records(&[("Exempt", "FHRS", 4), ("1", "FHRS", 2), ("5", "FHRS", 1)]);

        let dist = aggregate_ratings(&input);

        assert_eq!(
            dist.labels().collect::<Vec<_>>(),
            vec!["5", "4", "3", "2", "1", "0", "Exempt"]
        );
    }

    #[test]
    fn test_fhrs_percentages_sum_to_one_hundred() {
        let input = records(&[
            ("5", "FHRS", 7),
            ("4", "FHRS", 3),
            ("3", "FHRS", 11),
            ("1", "FHRS", 1),
            ("Exempt", "FHRS", 5),
            ("Awaiting Inspection", "FHRS", 9),
        ]);

        let total = aggregate_ratings(&input).total_percentage();
        assert!((total - 100.0).abs() < 1e-9, "total was {total}");
    }

    #[test]
    fn test_tally_counts() {
        let input = records(&[("5", "FHRS", 2), ("Exempt", "FHRS", 1), ("Awaiting Inspection", "FHRS", 1)]);

        let t = tally(&input);

        assert_eq!(t.scheme, Some(RatingScheme::Fhrs));
        assert_eq!(t.wanted, 3);
        assert_eq!(t.excluded, 1);
        assert_eq!(t.buckets[0], BucketCount { label: "5", count: 2 });
        assert_eq!(t.buckets[6], BucketCount { label: "Exempt", count: 1 });
    }
}
