//! Batch prediction over uploaded tabular files.

pub mod reader;
pub mod table;

pub use reader::read_batch_file;
pub use table::{BatchOutcome, BatchTable};
