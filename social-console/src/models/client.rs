use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A managed social-media account profile.
///
/// Records are append-only: the console never updates or deletes a client,
/// so `created_at` and `client_id` are fixed at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub client_id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub tokens: PlatformTokens,
    pub created_at: DateTime<Utc>,
}

/// Per-platform access tokens. All four keys are always present in the
/// persisted record; unset tokens are empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformTokens {
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub youtube: String,
}
