use crate::analyzers::types::{CanteenAverage, ReviewCount};
use crate::analyzers::utility::{group_by_canteen, mean_present};
use crate::review::Review;

/// Computes the mean hygiene, price and service rating per canteen, plus an
/// overall score.
///
/// Missing ratings are skipped. A column with no ratings in a group has an
/// undefined (`None`) mean, and the overall score is the mean of whichever
/// component means are defined, so it always lies between their min and max.
pub fn canteen_averages(reviews: &[Review]) -> Vec<CanteenAverage> {
    group_by_canteen(reviews)
        .into_iter()
        .map(|(canteen, rows)| {
            let hygiene = mean_present(rows.iter().map(|r| r.hygiene));
            let price = mean_present(rows.iter().map(|r| r.price));
            let service = mean_present(rows.iter().map(|r| r.service));

            CanteenAverage {
                canteen: canteen.to_string(),
                hygiene,
                price,
                service,
                overall: mean_present([hygiene, price, service]),
            }
        })
        .collect()
}

/// Counts survey rows per canteen. Incomplete rows count like any other.
pub fn review_counts(reviews: &[Review]) -> Vec<ReviewCount> {
    group_by_canteen(reviews)
        .into_iter()
        .map(|(canteen, rows)| ReviewCount {
            canteen: canteen.to_string(),
            reviews: rows.len(),
        })
        .collect()
}

/// Mean of the three column means over the whole table.
///
/// Each column is averaged on its own first, so this differs from the pooled
/// mean of every rating when columns have different numbers of values.
pub fn global_mean(reviews: &[Review]) -> Option<f64> {
    let hygiene = mean_present(reviews.iter().map(|r| r.hygiene));
    let price = mean_present(reviews.iter().map(|r| r.price));
    let service = mean_present(reviews.iter().map(|r| r.service));

    mean_present([hygiene, price, service])
}
