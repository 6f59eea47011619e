use crate::analyzers::aggregate::{canteen_averages, global_mean, review_counts};
use crate::analyzers::comments::comment_details;
use crate::analyzers::sentiment::{sentiment_by_canteen, sentiment_totals};
use crate::analyzers::types::{Report, RunSummary};
use crate::analyzers::utility::mean_present;
use crate::filter::commented;
use crate::loader::load_reviews;
use crate::output::write_reports;
use crate::review::Review;
use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

/// Computes every view from a loaded survey table.
#[tracing::instrument(skip_all, fields(rows = reviews.len()))]
pub fn build_report(reviews: &[Review]) -> Report {
    let subset = commented(reviews);
    info!(
        commented = subset.len(),
        excluded = reviews.len() - subset.len(),
        "Commented subset derived"
    );

    let report = Report {
        averages: canteen_averages(reviews),
        review_counts: review_counts(reviews),
        sentiment_by_canteen: sentiment_by_canteen(&subset),
        sentiment_totals: sentiment_totals(&subset),
        comment_details: comment_details(&subset),
        global_mean: global_mean(reviews),
    };

    debug!(
        canteens = report.averages.len(),
        labels = report.sentiment_totals.len(),
        commented_canteens = report.comment_details.len(),
        global_mean = ?report.global_mean,
        "Report built"
    );

    report
}

impl RunSummary {
    pub fn from_report(total_reviews: usize, report: &Report) -> Self {
        RunSummary {
            total_reviews,
            commented_reviews: report.sentiment_totals.iter().map(|t| t.count).sum(),
            canteens: report.review_counts.len(),
            global_mean: report.global_mean,
            mean_overall_score: mean_present(report.averages.iter().map(|a| a.overall)),
        }
    }
}

/// Loads the survey at `input`, computes every view and writes them to
/// `output_dir`.
#[tracing::instrument(skip_all, fields(input = %input.display(), output_dir = %output_dir.display()))]
pub fn analyze(input: &Path, output_dir: &Path) -> Result<Report> {
    let reviews = load_reviews(input)?;
    let report = build_report(&reviews);

    write_reports(output_dir, &report)?;

    info!(
        rows = reviews.len(),
        global_mean = ?report.global_mean,
        "Analysis complete, results saved as JSON"
    );
    Ok(report)
}

/// Loads the survey at `input` and returns its headline figures without
/// writing anything.
pub fn summarize(input: &Path) -> Result<RunSummary> {
    let reviews = load_reviews(input)?;
    let report = build_report(&reviews);
    Ok(RunSummary::from_report(reviews.len(), &report))
}
