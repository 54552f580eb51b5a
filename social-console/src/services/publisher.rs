use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::{PostResult, PostStatus};

/// Two success markers and one failure marker: success lands with
/// probability exactly 2/3 per platform, independently.
const OUTCOMES: [bool; 3] = [true, true, false];

pub const MOCK_ERROR_CODE: &str = "MOCK_ERROR_001";

/// Fabricates per-platform posting results without any network calls.
///
/// Stateless across invocations apart from the RNG. The RNG is owned and
/// seedable so tests can pin outcomes; production uses entropy seeding.
pub struct MockPublisher {
    rng: Mutex<StdRng>,
}

impl MockPublisher {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic publisher for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Draws one outcome per platform. The platform names are opaque here;
    /// nothing checks them against the client's token set.
    pub async fn publish(&self, platforms: &[String]) -> HashMap<String, PostResult> {
        let mut rng = self.rng.lock().await;

        platforms
            .iter()
            .map(|platform| {
                let success = OUTCOMES.choose(&mut *rng).copied().unwrap_or(false);
                (platform.clone(), fabricate_result(platform, success))
            })
            .collect()
    }
}

impl Default for MockPublisher {
    fn default() -> Self {
        Self::new()
    }
}

fn fabricate_result(platform: &str, success: bool) -> PostResult {
    if success {
        let mut suffix = Uuid::new_v4().simple().to_string();
        suffix.truncate(8);
        PostResult {
            status: PostStatus::Success,
            message: format!("Posted successfully to {platform}"),
            post_id: Some(format!("{platform}_{suffix}")),
            error_code: None,
        }
    } else {
        PostResult {
            status: PostStatus::Error,
            message: format!("Failed to post to {platform} (mock error)"),
            post_id: None,
            error_code: Some(MOCK_ERROR_CODE.to_string()),
        }
    }
}
