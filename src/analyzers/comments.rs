use crate::analyzers::types::{CanteenComments, CommentDetail};
use crate::analyzers::utility::group_by_canteen;
use crate::review::Review;

impl CommentDetail {
    fn from_review(review: &Review) -> Self {
        CommentDetail {
            comment: review.comment.clone().unwrap_or_default(),
            label: review.sentiment_label.clone(),
            hygiene: review.hygiene,
            price: review.price,
            service: review.service,
        }
    }
}

/// Lists every written comment per canteen, keeping survey order.
///
/// Rows whose comment is missing or empty are left out even when their
/// sentiment label made it through the filter.
pub fn comment_details(commented: &[&Review]) -> Vec<CanteenComments> {
    let written = commented
        .iter()
        .copied()
        .filter(|r| r.comment.as_deref().is_some_and(|c| !c.is_empty()));

    group_by_canteen(written)
        .into_iter()
        .map(|(canteen, rows)| CanteenComments {
            canteen: canteen.to_string(),
            details: rows.into_iter().map(CommentDetail::from_review).collect(),
        })
        .collect()
}
