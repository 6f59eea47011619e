use serde::Deserialize;

/// One survey row after its columns have been renamed to canonical names.
///
/// Ratings and the sentiment score are optional: an empty cell loads as
/// `None` and is skipped by every mean computed over the table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Review {
    #[serde(rename = "cantina")]
    pub canteen: String,
    #[serde(rename = "higiene")]
    pub hygiene: Option<f64>,
    #[serde(rename = "precos")]
    pub price: Option<f64>,
    #[serde(rename = "atendimento")]
    pub service: Option<f64>,
    #[serde(rename = "comentarios")]
    pub comment: Option<String>,
    #[serde(rename = "sentimento_label")]
    pub sentiment_label: Option<String>,
    #[serde(rename = "sentimento_score")]
    pub sentiment_score: Option<f64>,
}

#[cfg(test)]
impl Review {
    /// Builds a fully rated review.
    pub(crate) fn rated(canteen: &str, hygiene: f64, price: f64, service: f64) -> Self {
        Review {
            canteen: canteen.to_string(),
            hygiene: Some(hygiene),
            price: Some(price),
            service: Some(service),
            ..Default::default()
        }
    }

    pub(crate) fn with_sentiment(mut self, label: &str) -> Self {
        self.sentiment_label = Some(label.to_string());
        self
    }

    pub(crate) fn with_comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }
}
