use std::path::{Path, PathBuf};

use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::AdminSettings;
use crate::error::AppError;

/// The single admin login record. Mutable only by editing the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCredential {
    pub username: String,
    pub password: String,
}

/// File-backed store for the admin credential record.
///
/// The record is re-read on every login attempt so a hand-edited file
/// takes effect without a restart. No hashing, no lockout: the contract
/// is exact string equality on both fields.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Opens the store, writing the bootstrap record if the file is missing.
    pub async fn open(data_dir: &Path, bootstrap: &AdminSettings) -> Result<Self, AppError> {
        tokio::fs::create_dir_all(data_dir).await?;
        let path = data_dir.join("admin.json");

        if !tokio::fs::try_exists(&path).await? {
            let record = AdminCredential {
                username: bootstrap.username.clone(),
                password: bootstrap.password.expose_secret().clone(),
            };
            tokio::fs::write(&path, serde_json::to_vec_pretty(&record)?).await?;
            tracing::info!(path = %path.display(), "bootstrapped admin credential file");
        }

        Ok(Self { path })
    }

    /// Loads the stored record and compares both fields for exact equality.
    /// A bad username and a bad password are indistinguishable to the caller.
    pub async fn verify(&self, username: &str, password: &str) -> Result<bool, AppError> {
        let raw = tokio::fs::read(&self.path).await?;
        let record: AdminCredential = serde_json::from_slice(&raw)?;
        Ok(record.username == username && record.password == password)
    }
}
