use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

// Maximum size for uploaded batch files: 10MB
const MAX_BATCH_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Validates that an uploaded file's size is within acceptable limits (10MB)
///
/// Takes an open file handle to avoid TOCTOU (time-of-check-time-of-use)
/// race conditions where the file could be modified between the size check
/// and subsequent file operations.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 10MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_BATCH_FILE_BYTES {
        bail!(
            "File too large: {} is {} bytes (maximum {} bytes)",
            path.display(),
            file_size,
            MAX_BATCH_FILE_BYTES
        );
    }

    Ok(())
}
