//! Derivation of the commented subset of the survey.

use crate::review::Review;

/// Sentiment label the classifier assigns to rows without a comment.
pub const NO_COMMENT_LABEL: &str = "Sem comentário";

/// Returns the rows whose sentiment label is not exactly [`NO_COMMENT_LABEL`].
///
/// The match is exact and case-sensitive. Rows with no label at all are kept.
pub fn commented(reviews: &[Review]) -> Vec<&Review> {
    reviews
        .iter()
        .filter(|r| r.sentiment_label.as_deref() != Some(NO_COMMENT_LABEL))
        .collect()
}
