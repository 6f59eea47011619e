//! Data types produced by the aggregation pipeline.
//!
//! Field names are serialized with the keys the dashboard reads.

use serde::Serialize;
use std::collections::BTreeMap;

/// Mean ratings for a single canteen. `None` marks an undefined mean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanteenAverage {
    #[serde(rename = "cantina")]
    pub canteen: String,
    #[serde(rename = "higiene")]
    pub hygiene: Option<f64>,
    #[serde(rename = "precos")]
    pub price: Option<f64>,
    #[serde(rename = "atendimento")]
    pub service: Option<f64>,
    #[serde(rename = "nota_geral")]
    pub overall: Option<f64>,
}

/// Number of survey rows for a canteen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewCount {
    #[serde(rename = "cantina")]
    pub canteen: String,
    #[serde(rename = "num_avaliacoes")]
    pub reviews: usize,
}

/// Canteen → sentiment label → count, zero filled over every observed label.
pub type SentimentMatrix = BTreeMap<String, BTreeMap<String, usize>>;

/// Occurrences of one sentiment label across the commented subset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentCount {
    #[serde(rename = "sentimento_label")]
    pub label: Option<String>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentDetail {
    #[serde(rename = "comentarios")]
    pub comment: String,
    #[serde(rename = "sentimento_label")]
    pub label: Option<String>,
    #[serde(rename = "higiene")]
    pub hygiene: Option<f64>,
    #[serde(rename = "precos")]
    pub price: Option<f64>,
    #[serde(rename = "atendimento")]
    pub service: Option<f64>,
}

/// Every written comment for a canteen, in survey order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanteenComments {
    #[serde(rename = "cantina")]
    pub canteen: String,
    #[serde(rename = "detalhes_comentarios")]
    pub details: Vec<CommentDetail>,
}

/// All views computed from one survey table.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub averages: Vec<CanteenAverage>,
    pub review_counts: Vec<ReviewCount>,
    pub sentiment_by_canteen: SentimentMatrix,
    pub sentiment_totals: Vec<SentimentCount>,
    pub comment_details: Vec<CanteenComments>,
    /// Mean of the hygiene, price and service column means. Not written to disk.
    pub global_mean: Option<f64>,
}

/// Headline figures for a run, logged by the `summary` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub total_reviews: usize,
    pub commented_reviews: usize,
    pub canteens: usize,
    pub global_mean: Option<f64>,
    pub mean_overall_score: Option<f64>,
}
