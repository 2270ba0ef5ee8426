//! Shared engine state: per-community round registries, stat tables and
//! channel bindings.

pub mod round;
pub mod stats;

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use dashmap::DashMap;
use dashmap::mapref::one::Ref;

use crate::dao::models::CommunityDocument;

pub use self::round::{ActiveRound, Mode, RoundKey, RoundOutcome};
pub use self::stats::{FlagStats, PlayerStats};

/// Shared handle to the engine state.
pub type SharedState = Arc<QuizState>;

/// Quiz channel binding and dashboard anchor for one community.
#[derive(Debug, Clone, Default)]
pub struct ChannelBinding {
    /// Channel the quiz is restricted to, if any.
    pub quiz_channel_id: Option<String>,
    /// Message edited in place for the dashboard view, if one was posted.
    pub dashboard_message_id: Option<String>,
}

/// All engine state for one community.
#[derive(Debug, Default)]
pub struct CommunityState {
    /// In-flight rounds keyed by (channel, target participant).
    ///
    /// `DashMap::remove` on this map is the single point of mutual exclusion
    /// for round resolution: exactly one of the competing triggers gets the
    /// round back.
    pub rounds: DashMap<RoundKey, ActiveRound>,
    /// Cumulative stats per participant.
    pub players: DashMap<String, PlayerStats>,
    /// Cumulative stats per flag code.
    pub flags: DashMap<String, FlagStats>,
    /// Channel binding and dashboard anchor.
    pub binding: RwLock<ChannelBinding>,
}

impl CommunityState {
    /// Read a copy of the channel binding.
    pub fn binding(&self) -> ChannelBinding {
        self.binding
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Mutate the channel binding.
    pub fn update_binding(&self, update: impl FnOnce(&mut ChannelBinding)) {
        let mut guard = self.binding.write().unwrap_or_else(PoisonError::into_inner);
        update(&mut guard);
    }
}

impl From<CommunityDocument> for CommunityState {
    fn from(doc: CommunityDocument) -> Self {
        let state = CommunityState::default();
        state.update_binding(|binding| {
            binding.quiz_channel_id = doc.quiz_channel_id;
            binding.dashboard_message_id = doc.dashboard_message_id;
        });
        for (participant, player) in doc.players {
            state.players.insert(participant, player);
        }
        for (code, flag) in doc.flags {
            state.flags.insert(code, flag);
        }
        state
    }
}

/// Process-wide engine state, one entry per community.
///
/// Constructed by [`crate::services::round_engine::RoundEngine`]; there are
/// no static singletons.
#[derive(Debug, Default)]
pub struct QuizState {
    communities: DashMap<String, CommunityState>,
}

impl QuizState {
    /// Fresh, empty state wrapped for sharing.
    pub fn new() -> SharedState {
        Arc::new(Self::default())
    }

    /// Community entry, created on first touch.
    pub fn community(&self, community_id: &str) -> Ref<'_, String, CommunityState> {
        if let Some(existing) = self.communities.get(community_id) {
            return existing;
        }
        self.communities
            .entry(community_id.to_string())
            .or_default()
            .downgrade()
    }

    /// Atomically take the round for `key` out of the registry, if present.
    ///
    /// This is the only way a round leaves the registry; the caller that gets
    /// `Some` owns the resolution.
    pub fn take_round(&self, community_id: &str, key: &RoundKey) -> Option<ActiveRound> {
        self.community(community_id)
            .rounds
            .remove(key)
            .map(|(_, round)| round)
    }

    /// Replace the whole state with persisted documents (startup hydration).
    pub fn replace_all(&self, documents: HashMap<String, CommunityDocument>) {
        self.communities.clear();
        for (community_id, doc) in documents {
            self.communities.insert(community_id, doc.into());
        }
    }

    /// Remove every in-flight round, returning them so timers can be
    /// cancelled. Used on shutdown.
    pub fn drain_rounds(&self) -> Vec<ActiveRound> {
        let mut drained = Vec::new();
        for community in self.communities.iter() {
            let keys: Vec<RoundKey> = community
                .rounds
                .iter()
                .map(|entry| entry.key().clone())
                .collect();
            for key in keys {
                if let Some((_, round)) = community.rounds.remove(&key) {
                    drained.push(round);
                }
            }
        }
        drained
    }

    /// Serialize every community into its persisted document form.
    pub fn snapshot(&self) -> HashMap<String, CommunityDocument> {
        self.communities
            .iter()
            .map(|entry| {
                let binding = entry.binding();
                let players = entry
                    .players
                    .iter()
                    .map(|p| (p.key().clone(), p.value().clone()))
                    .collect();
                let flags = entry
                    .flags
                    .iter()
                    .map(|f| (f.key().clone(), *f.value()))
                    .collect();
                (
                    entry.key().clone(),
                    CommunityDocument {
                        quiz_channel_id: binding.quiz_channel_id,
                        dashboard_message_id: binding.dashboard_message_id,
                        players,
                        flags,
                    },
                )
            })
            .collect()
    }
}
