//! Presentation of rating distributions and selection outcomes.
//!
//! Supports a plain-text table and a JSON report. Nothing here feeds back
//! into aggregation; values are only rounded for display.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt::Write;

use crate::authority::AuthorityDirectory;
use crate::ratings::{BucketCount, RatingDistribution, RatingScheme, RatingTally};
use crate::selection::SelectionOutcome;

/// Display name for a rating label. Single-character labels are star
/// ratings (`"5"` becomes `"5-star"`); everything else is shown as is.
pub fn format_rating_label(label: &str) -> Cow<'_, str> {
    if label.chars().count() == 1 {
        Cow::Owned(format!("{label}-star"))
    } else {
        Cow::Borrowed(label)
    }
}

/// Two decimal places and a percent sign.
pub fn format_percentage(percentage: f64) -> String {
    format!("{percentage:.2}%")
}

/// Renders a two-column `Rating` / `Percentage` table.
pub fn render_table(distribution: &RatingDistribution) -> String {
    let rows: Vec<(Cow<'_, str>, String)> = distribution
        .iter()
        .map(|s| (format_rating_label(&s.label), format_percentage(s.percentage)))
        .collect();

    let width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .chain(std::iter::once("Rating".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{:<width$}  {:>10}", "Rating", "Percentage");
    for (label, pct) in rows {
        let _ = writeln!(out, "{label:<width$}  {pct:>10}");
    }
    out
}

/// Text a front end shows for a selection outcome. Cleared selections
/// render as an empty string.
pub fn render_outcome(outcome: &SelectionOutcome) -> String {
    match outcome {
        SelectionOutcome::Cleared => String::new(),
        SelectionOutcome::Ratings {
            authority,
            distribution,
            ..
        } => format!("{authority}\n\n{}", render_table(distribution)),
        SelectionOutcome::NoRatings { authority } => {
            format!("No results were found for {authority}")
        }
        SelectionOutcome::Failed { authority, .. } => {
            format!("An error occurred while loading results for {authority}")
        }
    }
}

/// Numbered listing of the directory, as offered by the interactive picker.
pub fn render_directory(directory: &AuthorityDirectory) -> String {
    let mut out = String::new();
    for (i, (name, id)) in directory.iter().enumerate() {
        let _ = writeln!(out, "{:>4}. {name} ({id})", i + 1);
    }
    out
}

/// JSON document emitted by `ratings --json`.
#[derive(Debug, Serialize)]
pub struct RatingReport<'a> {
    pub authority: &'a str,
    pub authority_id: i64,
    pub generated_at: DateTime<Utc>,
    pub scheme: Option<RatingScheme>,
    pub wanted: usize,
    pub excluded: usize,
    pub counts: &'a [BucketCount],
    pub ratings: RatingDistribution,
}

impl<'a> RatingReport<'a> {
    pub fn new(authority: &'a str, authority_id: i64, tally: &'a RatingTally) -> Self {
        Self {
            authority,
            authority_id,
            generated_at: Utc::now(),
            scheme: tally.scheme,
            wanted: tally.wanted,
            excluded: tally.excluded,
            counts: &tally.buckets,
            ratings: tally.distribution(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
