use std::collections::BTreeMap;

use crate::review::Review;

/// Computes the arithmetic mean of a slice of values. Returns `None` for empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean over the present values only; `None` when every value is missing.
pub fn mean_present(values: impl IntoIterator<Item = Option<f64>>) -> Option<f64> {
    let present: Vec<f64> = values.into_iter().flatten().collect();
    mean(&present)
}

/// Groups rows by canteen, keys in sorted order, rows in input order.
pub fn group_by_canteen<'a>(
    rows: impl IntoIterator<Item = &'a Review>,
) -> BTreeMap<&'a str, Vec<&'a Review>> {
    let mut groups: BTreeMap<&str, Vec<&Review>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.canteen.as_str()).or_default().push(row);
    }
    groups
}
