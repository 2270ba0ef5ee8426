//! Round identity and in-flight round data.

use std::collections::HashSet;

use indexmap::IndexMap;
use tokio::task::AbortHandle;
use tokio::time::Instant;

/// Game variants a round can be played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Free-text answer, standard reward.
    Normal,
    /// Multiple choice with four buttons, reduced reward.
    Easy,
    /// Once-per-day challenge with a deterministic flag and a bonus reward.
    Daily,
}

/// Terminal resolution of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The target participant answered correctly.
    Won,
    /// The target participant answered incorrectly (text or button).
    Lost,
    /// The timer fired before any answer arrived.
    TimedOut,
}

/// Identity of a round inside a community: one round at most per
/// (channel, target participant) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoundKey {
    /// Channel the round was started in.
    pub channel_id: String,
    /// Participant whose answers count.
    pub participant_id: String,
}

impl RoundKey {
    /// Build a key from the host platform's opaque identifiers.
    pub fn new(channel_id: impl Into<String>, participant_id: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            participant_id: participant_id.into(),
        }
    }
}

/// One in-flight round.
///
/// Mutated only by the resolution path that removes it from the registry;
/// whichever trigger removes it first owns it exclusively from then on.
#[derive(Debug)]
pub struct ActiveRound {
    /// Variant the round is played in.
    pub mode: Mode,
    /// Target ISO code.
    pub code: String,
    /// Normalized strings counting as a correct free-text guess.
    pub accepted: HashSet<String>,
    /// EASY mode only: opaque button token → candidate code, in presentation
    /// order.
    pub buttons: Option<IndexMap<String, String>>,
    /// When the round was created.
    pub started_at: Instant,
    /// Handle used to cancel the pending timeout task.
    pub timer: AbortHandle,
}

impl ActiveRound {
    /// Whether `token` belongs to this round's buttons.
    pub fn has_token(&self, token: &str) -> bool {
        self.buttons
            .as_ref()
            .is_some_and(|buttons| buttons.contains_key(token))
    }

    /// Candidate code a button token maps to, if it is one of ours.
    pub fn token_code(&self, token: &str) -> Option<&str> {
        self.buttons
            .as_ref()
            .and_then(|buttons| buttons.get(token))
            .map(String::as_str)
    }

    /// Whether a normalized guess (or a bare ISO code) hits the target.
    pub fn matches(&self, normalized: &str) -> bool {
        self.accepted.contains(normalized) || normalized.eq_ignore_ascii_case(&self.code)
    }
}
