use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::AppError;
use crate::models::StagedFile;

/// Filesystem staging area for transient uploads.
///
/// Files are keyed by a generated opaque identifier that preserves the
/// original extension. Staged files are consumed by the publisher or left
/// orphaned; there is no garbage collection.
pub struct StagingArea {
    dir: PathBuf,
}

impl StagingArea {
    pub async fn open(dir: &Path) -> Result<Self, AppError> {
        tokio::fs::create_dir_all(dir).await?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// Writes one uploaded file under a generated name and returns its
    /// metadata. Files with an empty original name are skipped (`None`).
    pub async fn stage(
        &self,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<Option<StagedFile>, AppError> {
        if original_name.is_empty() {
            return Ok(None);
        }

        let id = Uuid::new_v4().simple().to_string();
        let temp_name = match Path::new(original_name).extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{id}.{ext}"),
            None => id,
        };

        tokio::fs::write(self.dir.join(&temp_name), bytes).await?;
        tracing::debug!(
            original = %original_name,
            staged = %temp_name,
            size = bytes.len(),
            "staged upload"
        );

        Ok(Some(StagedFile {
            original_name: original_name.to_string(),
            temp_name,
            size: bytes.len() as u64,
        }))
    }

    /// Removes a staged file. Missing references are a no-op, so discarding
    /// the same reference twice is safe.
    pub async fn discard(&self, temp_name: &str) -> Result<(), AppError> {
        // Honor only the final path component so a reference cannot reach
        // outside the staging directory.
        let Some(file_name) = Path::new(temp_name).file_name() else {
            return Ok(());
        };

        match tokio::fs::remove_file(self.dir.join(file_name)).await {
            Ok(()) => {
                tracing::debug!(staged = %temp_name, "discarded staged file");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
