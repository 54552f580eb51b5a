use serde::{Deserialize, Serialize};

/// Metadata returned for a temporarily stored upload.
///
/// `temp_name` is the generated on-disk name (opaque id plus the original
/// extension) and is what a later publish request references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagedFile {
    pub original_name: String,
    pub temp_name: String,
    pub size: u64,
}
