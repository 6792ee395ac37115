use std::env;
use std::path::PathBuf;

/// Environment variable overriding the model artifact location.
pub const MODEL_PATH_ENV: &str = "AGRIYIELD_MODEL";

/// Environment variable overriding the batch row cap.
pub const MAX_BATCH_ROWS_ENV: &str = "AGRIYIELD_MAX_BATCH_ROWS";

pub const DEFAULT_MODEL_PATH: &str = "final_best_model.json";
pub const DEFAULT_MAX_BATCH_ROWS: usize = 10_000;

/// Resolve the model artifact path: `AGRIYIELD_MODEL` if set, else the
/// default artifact name in the working directory.
pub fn model_path() -> PathBuf {
    env::var(MODEL_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH))
}

/// Resolve the maximum accepted batch row count: `AGRIYIELD_MAX_BATCH_ROWS`
/// if set and parsable, else the default. Unparsable values are warned
/// about and ignored.
pub fn max_batch_rows() -> usize {
    match env::var(MAX_BATCH_ROWS_ENV) {
        Ok(raw) => match raw.parse::<usize>() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("Warning: ignoring unparsable {MAX_BATCH_ROWS_ENV}={raw}");
                DEFAULT_MAX_BATCH_ROWS
            }
        },
        Err(_) => DEFAULT_MAX_BATCH_ROWS,
    }
}
