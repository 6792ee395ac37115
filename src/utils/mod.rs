pub mod csv;
pub mod environment;
pub mod files;

pub use environment::{max_batch_rows, model_path};
pub use files::validate_file_size;
