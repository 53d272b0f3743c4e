pub mod analysis;
pub mod baseline;
pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod error;
pub mod reporting;
pub mod types;
