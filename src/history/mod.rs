//! In-memory prediction history: append-only log, aggregate statistics,
//! and CSV export. One store per session; never process-global.

pub mod store;

pub use store::{HistoryStore, export_filename};
