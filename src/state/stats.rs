//! Cumulative per-player and per-flag statistics.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Streak lengths that unlock an achievement, each at most once.
pub const STREAK_ACHIEVEMENTS: [u32; 4] = [5, 10, 25, 50];

/// Lifetime statistics for one participant in one community.
///
/// Mutated only by the round resolution path; never deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Accumulated reward points.
    pub total_points: u32,
    /// Rounds answered correctly.
    pub correct: u32,
    /// Rounds answered incorrectly.
    pub wrong: u32,
    /// Consecutive correct answers; reset to 0 on a wrong answer.
    pub current_streak: u32,
    /// Highest `current_streak` ever observed.
    pub best_streak: u32,
    /// UTC date (`yyyy-mm-dd`) of the last completed daily challenge.
    pub last_daily: Option<String>,
    /// Unlocked achievement keys (`streak-5`, `streak-10`, ...).
    #[serde(default)]
    pub achievements: BTreeSet<String>,
}

impl PlayerStats {
    /// Record a win, returning achievement keys unlocked by the new streak.
    pub fn record_win(&mut self, points: u32) -> Vec<String> {
        self.total_points += points;
        self.correct += 1;
        self.current_streak += 1;
        self.best_streak = self.best_streak.max(self.current_streak);

        let mut unlocked = Vec::new();
        for threshold in STREAK_ACHIEVEMENTS {
            if self.current_streak >= threshold {
                let key = format!("streak-{threshold}");
                if self.achievements.insert(key.clone()) {
                    unlocked.push(key);
                }
            }
        }
        unlocked
    }

    /// Record an explicit wrong answer. Timeouts do not call this.
    pub fn record_loss(&mut self) {
        self.wrong += 1;
        self.current_streak = 0;
    }
}

/// Cumulative counters for one flag in one community.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagStats {
    /// Rounds started with this flag (counted even if abandoned).
    pub asked: u32,
    /// Rounds answered correctly.
    pub correct: u32,
    /// Rounds answered incorrectly or timed out.
    pub wrong: u32,
}
