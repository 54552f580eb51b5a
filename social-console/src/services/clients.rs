use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Client, PlatformTokens};

/// File-backed repository for the client collection.
///
/// The whole collection lives in one JSON array; every read loads it in
/// full and every create rewrites it in full. Writes hold `write_lock`
/// for the entire read-modify-rewrite cycle so concurrent creates cannot
/// drop each other's records. The rewrite itself stays non-atomic.
pub struct ClientRepo {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ClientRepo {
    /// Opens the repository, seeding an empty collection if the file is missing.
    pub async fn open(data_dir: &Path) -> Result<Self, AppError> {
        tokio::fs::create_dir_all(data_dir).await?;
        let path = data_dir.join("clients.json");

        if !tokio::fs::try_exists(&path).await? {
            tokio::fs::write(&path, b"[]").await?;
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Returns the full collection in insertion order.
    pub async fn list(&self) -> Result<Vec<Client>, AppError> {
        let raw = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&raw)?)
    }

    /// Generates a new client record, appends it and rewrites the collection.
    pub async fn create(
        &self,
        name: String,
        email: String,
        tokens: PlatformTokens,
    ) -> Result<Client, AppError> {
        let client = Client {
            client_id: generate_client_id(),
            name,
            email,
            tokens,
            created_at: Utc::now(),
        };

        let _guard = self.write_lock.lock().await;
        let mut clients = self.list().await?;
        clients.push(client.clone());
        tokio::fs::write(&self.path, serde_json::to_vec_pretty(&clients)?).await?;

        Ok(client)
    }
}

/// 8-character lowercase hex id. Collisions are theoretically possible and
/// deliberately not checked; callers tolerate the possibility.
fn generate_client_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}
