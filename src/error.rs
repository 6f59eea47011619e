//! Data-shape errors raised while loading the survey table.

use thiserror::Error;

/// Failures that are not plain I/O or CSV parse errors.
///
/// These travel inside an `anyhow::Error`; callers that need to tell them
/// apart can use `downcast_ref::<LoadError>()`.
#[derive(Error, Debug, PartialEq)]
pub enum LoadError {
    /// A canonical column is absent after the header rename
    #[error("missing column `{0}` after renaming headers")]
    MissingColumn(String),

    /// A data row has an empty canteen identifier
    #[error("record on line {line} has no canteen identifier")]
    MissingCanteen { line: u64 },
}
