use std::time::Duration;

use dashmap::DashMap;
use tokio::time::Instant;

/// Per-community gate limiting how often the live dashboard may re-render.
///
/// Purely advisory: a `false` verdict promises nothing later, callers simply
/// skip the refresh (at most once per window, no catch-up).
#[derive(Debug)]
pub struct DashboardThrottle {
    window: Duration,
    last_refresh: DashMap<String, Instant>,
}

impl DashboardThrottle {
    /// Throttle allowing one refresh per `window` per community.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_refresh: DashMap::new(),
        }
    }

    /// Whether the caller may refresh the dashboard for `community_id` now.
    ///
    /// A `true` verdict consumes the window; concurrent callers see `false`.
    pub fn should_refresh(&self, community_id: &str) -> bool {
        let now = Instant::now();
        let mut allowed = false;
        self.last_refresh
            .entry(community_id.to_string())
            .and_modify(|last| {
                if now.duration_since(*last) >= self.window {
                    *last = now;
                    allowed = true;
                }
            })
            .or_insert_with(|| {
                allowed = true;
                now
            });
        allowed
    }
}
