//! Survey aggregation.
//!
//! Groups the loaded table by canteen and computes the averages, review
//! counts, sentiment distributions and comment listings that the dashboard
//! reads.

pub mod aggregate;
pub mod analyzer;
pub mod comments;
pub mod sentiment;
pub mod types;
pub mod utility;
