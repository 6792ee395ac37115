//! Command-line surface over the prediction pipeline.

pub mod commands;

pub use commands::run;
