use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::state::stats::{FlagStats, PlayerStats};

/// Everything persisted for one community.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityDocument {
    /// Channel the quiz is restricted to, if bound.
    pub quiz_channel_id: Option<String>,
    /// Dashboard message edited in place, if one was posted.
    pub dashboard_message_id: Option<String>,
    /// Cumulative stats per participant.
    #[serde(default)]
    pub players: HashMap<String, PlayerStats>,
    /// Cumulative stats per flag code.
    #[serde(default)]
    pub flags: HashMap<String, FlagStats>,
}
