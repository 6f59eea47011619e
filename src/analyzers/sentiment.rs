use std::collections::{BTreeMap, BTreeSet};

use crate::analyzers::types::{SentimentCount, SentimentMatrix};
use crate::analyzers::utility::group_by_canteen;
use crate::review::Review;

/// Matrix key for rows that carry no sentiment label at all.
///
/// Empty cells load as `None`, so no real label can collide with it.
pub const MISSING_LABEL_KEY: &str = "";

fn label_key(review: &Review) -> &str {
    review
        .sentiment_label
        .as_deref()
        .unwrap_or(MISSING_LABEL_KEY)
}

/// Counts each sentiment label per canteen over the commented subset.
///
/// Every canteen row carries every label observed anywhere in the subset,
/// with zero for combinations that never occur.
pub fn sentiment_by_canteen(commented: &[&Review]) -> SentimentMatrix {
    let labels: BTreeSet<&str> = commented.iter().map(|r| label_key(r)).collect();

    group_by_canteen(commented.iter().copied())
        .into_iter()
        .map(|(canteen, rows)| {
            let mut counts: BTreeMap<String, usize> =
                labels.iter().map(|l| (l.to_string(), 0)).collect();
            for row in rows {
                *counts.entry(label_key(row).to_string()).or_default() += 1;
            }
            (canteen.to_string(), counts)
        })
        .collect()
}

/// Counts each sentiment label across the whole commented subset.
///
/// Sorted by count, most frequent first, ties broken by label.
pub fn sentiment_totals(commented: &[&Review]) -> Vec<SentimentCount> {
    let mut counts: BTreeMap<Option<&str>, usize> = BTreeMap::new();
    for review in commented {
        *counts.entry(review.sentiment_label.as_deref()).or_default() += 1;
    }

    let mut totals: Vec<SentimentCount> = counts
        .into_iter()
        .map(|(label, count)| SentimentCount {
            label: label.map(str::to_string),
            count,
        })
        .collect();
    totals.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    totals
}
