pub mod analyzers;
pub mod error;
pub mod filter;
pub mod loader;
pub mod output;
pub mod review;
