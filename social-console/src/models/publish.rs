use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Success,
    Error,
}

/// Outcome of one mocked platform post. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResult {
    pub status: PostStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl PostResult {
    pub fn is_success(&self) -> bool {
        self.status == PostStatus::Success
    }
}

/// Response envelope for a publish invocation: one result per requested
/// platform, keyed by platform name, plus the completion timestamp.
#[derive(Debug, Serialize)]
pub struct PostReceipt {
    pub success: bool,
    pub results: HashMap<String, PostResult>,
    pub timestamp: DateTime<Utc>,
}
