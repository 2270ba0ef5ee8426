//! The round engine: creates rounds, matches answers, schedules timeouts and
//! resolves every round exactly once.

use std::sync::Arc;
use std::time::Duration;

use indexmap::IndexMap;
use rand::{Rng, seq::SliceRandom};
use time::{Date, OffsetDateTime};
use tokio::sync::mpsc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::country::{self, CountryRegistry, Locale};
use crate::dao::storage::{StatsStore, StorageResult};
use crate::error::StartRejection;
use crate::services::dashboard::DashboardThrottle;
use crate::services::flush::FlushHandle;
use crate::state::{
    ActiveRound, FlagStats, Mode, PlayerStats, QuizState, RoundKey, RoundOutcome, SharedState,
};

/// How long a participant has to answer.
pub const ROUND_TIME_LIMIT: Duration = Duration::from_secs(30);
/// Reward for a correct free-text answer.
pub const POINTS_NORMAL: u32 = 10;
/// Reward for a correct multiple-choice answer (slightly less).
pub const POINTS_EASY: u32 = 8;
/// Bonus on top of the normal reward for the daily challenge.
pub const POINTS_DAILY_BONUS: u32 = 15;

/// Number of answer buttons presented in EASY mode.
const EASY_OPTION_COUNT: usize = 4;

/// Tunable timings, injected so tests can run with paused time.
#[derive(Debug, Clone, Copy)]
pub struct EngineOptions {
    /// Single-fire timeout armed per round.
    pub round_timeout: Duration,
    /// Quiet period before a stats flush.
    pub flush_debounce: Duration,
    /// Minimum gap between two dashboard refreshes per community.
    pub dashboard_window: Duration,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            round_timeout: ROUND_TIME_LIMIT,
            flush_debounce: Duration::from_millis(500),
            dashboard_window: Duration::from_secs(5),
        }
    }
}

/// One multiple-choice button of an EASY round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonOption {
    /// Opaque one-shot token carried back by the click.
    pub token: String,
    /// German country name used as the button label.
    pub label: String,
}

/// Everything the caller needs to render a freshly started round.
#[derive(Debug, Clone)]
pub struct RoundPrompt {
    /// Variant the round is played in.
    pub mode: Mode,
    /// Target ISO code (the caller renders the flag, not the name).
    pub code: String,
    /// Unicode flag emoji for the target.
    pub flag_emoji: String,
    /// CDN image of the flag.
    pub image_url: String,
    /// EASY mode only: buttons in presentation order.
    pub buttons: Option<Vec<ButtonOption>>,
    /// Flag counters after this round was counted as asked.
    pub flag_stats: FlagStats,
}

/// Notification emitted when a round resolves, for the caller to render.
#[derive(Debug, Clone)]
pub struct OutcomeEvent {
    /// Community the round belonged to.
    pub community_id: String,
    /// Channel the round ran in.
    pub channel_id: String,
    /// Target participant.
    pub participant_id: String,
    /// Variant the round was played in.
    pub mode: Mode,
    /// Resolved target code.
    pub code: String,
    /// German display name of the target.
    pub display_name_de: String,
    /// English display name of the target.
    pub display_name_en: String,
    /// Terminal outcome of the round.
    pub outcome: RoundOutcome,
    /// Points awarded (0 unless won).
    pub points_gained: u32,
    /// Participant streak after this resolution.
    pub new_streak: u32,
    /// Achievement keys newly unlocked by this resolution.
    pub achievements_unlocked: Vec<String>,
    /// Flag counters after this resolution.
    pub flag_stats: FlagStats,
    /// Whether the dashboard throttle allows a refresh right now.
    pub refresh_dashboard: bool,
}

/// The engine owning all round state.
///
/// One instance per process, created with [`RoundEngine::new`] and torn down
/// with [`RoundEngine::shutdown`]; collaborators (store, outcome channel) are
/// injected. All gameplay operations are synchronous and never block on I/O;
/// persistence runs on the debounced flush task.
pub struct RoundEngine {
    state: SharedState,
    registry: CountryRegistry,
    store: Arc<dyn StatsStore>,
    outcomes: mpsc::UnboundedSender<OutcomeEvent>,
    throttle: DashboardThrottle,
    flush: FlushHandle,
    options: EngineOptions,
}

impl RoundEngine {
    /// Create the engine and spawn its flush task.
    ///
    /// Must be called inside a tokio runtime. Resolved-round notifications
    /// are emitted on `outcomes`; the host renders them.
    pub fn new(
        registry: CountryRegistry,
        store: Arc<dyn StatsStore>,
        outcomes: mpsc::UnboundedSender<OutcomeEvent>,
        options: EngineOptions,
    ) -> Arc<Self> {
        let state = QuizState::new();
        let flush = FlushHandle::spawn(
            Arc::clone(&state),
            Arc::clone(&store),
            options.flush_debounce,
        );
        Arc::new(Self {
            state,
            registry,
            store,
            outcomes,
            throttle: DashboardThrottle::new(options.dashboard_window),
            flush,
            options,
        })
    }

    /// Replace the in-memory state with whatever the store holds.
    pub async fn hydrate(&self) -> StorageResult<()> {
        let documents = self.store.load().await?;
        let communities = documents.len();
        self.state.replace_all(documents);
        info!(communities, "loaded persisted quiz stats");
        Ok(())
    }

    /// Cancel every pending round timer and flush the state one last time.
    pub async fn shutdown(&self) {
        for round in self.state.drain_rounds() {
            round.timer.abort();
        }
        self.flush.shutdown().await;
    }

    /// Start a round for a target participant.
    ///
    /// Declined (not an error) when the community bound its quiz to another
    /// channel or a round is already running for this participant in this
    /// channel. The returned prompt is what the caller renders; the round is
    /// already armed with its timeout when this returns.
    pub fn start_round(
        self: &Arc<Self>,
        community_id: &str,
        channel_id: &str,
        participant_id: &str,
        mode: Mode,
    ) -> Result<RoundPrompt, StartRejection> {
        let community = self.state.community(community_id);

        if let Some(bound) = community.binding().quiz_channel_id
            && bound != channel_id
        {
            return Err(StartRejection::WrongChannel);
        }

        let key = RoundKey::new(channel_id, participant_id);
        // Vacant-entry insertion keeps two simultaneous starts from both
        // passing an exists-check.
        let dashmap::mapref::entry::Entry::Vacant(slot) = community.rounds.entry(key) else {
            return Err(StartRejection::RoundActive);
        };

        let code = match mode {
            Mode::Daily => daily_code(community_id, OffsetDateTime::now_utc().date()),
            Mode::Normal | Mode::Easy => random_code(),
        };
        let accepted = self.registry.accepted_answers(&code);
        let buttons = (mode == Mode::Easy).then(|| build_button_options(&code));

        // asked counts the round even if it is later abandoned
        let flag_stats = {
            let mut flag = community.flags.entry(code.clone()).or_default();
            flag.asked += 1;
            *flag
        };

        // The vacant entry holds the registry shard's write guard until the
        // insert below, so even an instantly-firing timer blocks in its
        // atomic take until the round is in place.
        let engine = Arc::clone(self);
        let timeout = self.options.round_timeout;
        let (c, ch, p) = (
            community_id.to_string(),
            channel_id.to_string(),
            participant_id.to_string(),
        );
        let timer = tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            engine.expire_round(&c, &ch, &p);
        })
        .abort_handle();

        let prompt_buttons = buttons.as_ref().map(|map| {
            map.iter()
                .map(|(token, option_code)| ButtonOption {
                    token: token.clone(),
                    label: country::display_name(option_code, Locale::De),
                })
                .collect()
        });

        slot.insert(ActiveRound {
            mode,
            code: code.clone(),
            accepted,
            buttons,
            started_at: tokio::time::Instant::now(),
            timer,
        });
        drop(community);

        self.flush.mark_dirty();
        debug!(
            community = community_id,
            channel = channel_id,
            participant = participant_id,
            ?mode,
            code = %code,
            "round started"
        );

        Ok(RoundPrompt {
            mode,
            flag_emoji: country::flag_emoji(&code),
            image_url: country::flag_image_url(&code),
            code,
            buttons: prompt_buttons,
            flag_stats,
        })
    }

    /// Feed a free-text message from a participant into the engine.
    ///
    /// Ignored unless the sender is the target of an active round in this
    /// channel; a target's message always resolves the round, won or lost.
    pub fn submit_answer(
        &self,
        community_id: &str,
        channel_id: &str,
        participant_id: &str,
        raw_text: &str,
    ) {
        let key = RoundKey::new(channel_id, participant_id);
        let Some(round) = self.state.take_round(community_id, &key) else {
            return; // not the target, or already resolved
        };

        let normalized = country::normalize(raw_text);
        let outcome = if round.matches(&normalized) {
            RoundOutcome::Won
        } else {
            RoundOutcome::Lost
        };
        self.resolve(community_id, &key, round, outcome);
    }

    /// Feed an EASY-mode button click into the engine.
    ///
    /// Clicks carrying a token that does not belong to the clicker's own
    /// round are ignored without resolving anything.
    pub fn submit_button_answer(
        &self,
        community_id: &str,
        channel_id: &str,
        participant_id: &str,
        token: &str,
    ) {
        let key = RoundKey::new(channel_id, participant_id);
        // Token validation and removal must be one atomic step, otherwise a
        // concurrent trigger could resolve the same round twice.
        let removed = {
            let community = self.state.community(community_id);
            community
                .rounds
                .remove_if(&key, |_, round| round.has_token(token))
        };
        let Some((_, round)) = removed else {
            return; // stale click or foreign token
        };

        let hit = round
            .token_code(token)
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(&round.code));
        let outcome = if hit {
            RoundOutcome::Won
        } else {
            RoundOutcome::Lost
        };
        self.resolve(community_id, &key, round, outcome);
    }

    /// Resolve a round as timed out.
    ///
    /// Invoked by the round's own timer; finding no round (already resolved
    /// by an answer) is a no-op.
    pub fn expire_round(&self, community_id: &str, channel_id: &str, participant_id: &str) {
        let key = RoundKey::new(channel_id, participant_id);
        let Some(round) = self.state.take_round(community_id, &key) else {
            return;
        };
        self.resolve(community_id, &key, round, RoundOutcome::TimedOut);
    }

    /// Shared tail of the three resolution paths. The caller already owns
    /// the round exclusively (it won the atomic take).
    fn resolve(
        &self,
        community_id: &str,
        key: &RoundKey,
        round: ActiveRound,
        outcome: RoundOutcome,
    ) {
        // No-op if the timer itself won the race; racing the firing timer is
        // safe because its callback also goes through the atomic take.
        round.timer.abort();

        let mut points_gained = 0;
        let mut new_streak = 0;
        let mut achievements_unlocked = Vec::new();

        let flag_stats = {
            let community = self.state.community(community_id);
            match outcome {
                RoundOutcome::Won => {
                    let points = match round.mode {
                        Mode::Normal => POINTS_NORMAL,
                        Mode::Easy => POINTS_EASY,
                        Mode::Daily => POINTS_NORMAL + POINTS_DAILY_BONUS,
                    };
                    let mut player = community
                        .players
                        .entry(key.participant_id.clone())
                        .or_default();
                    achievements_unlocked = player.record_win(points);
                    if round.mode == Mode::Daily {
                        player.last_daily = Some(iso_date(OffsetDateTime::now_utc().date()));
                    }
                    points_gained = points;
                    new_streak = player.current_streak;
                    drop(player);

                    let mut flag = community.flags.entry(round.code.clone()).or_default();
                    flag.correct += 1;
                    *flag
                }
                RoundOutcome::Lost => {
                    let mut player = community
                        .players
                        .entry(key.participant_id.clone())
                        .or_default();
                    player.record_loss();
                    drop(player);

                    let mut flag = community.flags.entry(round.code.clone()).or_default();
                    flag.wrong += 1;
                    *flag
                }
                RoundOutcome::TimedOut => {
                    // Timeouts count against the flag only; the participant's
                    // streak survives an unanswered round.
                    let mut flag = community.flags.entry(round.code.clone()).or_default();
                    flag.wrong += 1;
                    *flag
                }
            }
        };

        self.flush.mark_dirty();
        let refresh_dashboard = self.throttle.should_refresh(community_id);

        info!(
            community = community_id,
            channel = %key.channel_id,
            participant = %key.participant_id,
            code = %round.code,
            ?outcome,
            "round resolved"
        );

        let event = OutcomeEvent {
            community_id: community_id.to_string(),
            channel_id: key.channel_id.clone(),
            participant_id: key.participant_id.clone(),
            mode: round.mode,
            display_name_de: country::display_name(&round.code, Locale::De),
            display_name_en: country::display_name(&round.code, Locale::En),
            code: round.code,
            outcome,
            points_gained,
            new_streak,
            achievements_unlocked,
            flag_stats,
            refresh_dashboard,
        };
        if self.outcomes.send(event).is_err() {
            debug!("outcome receiver dropped; discarding round outcome");
        }
    }

    /// Whether the participant has not yet played today's daily challenge.
    pub fn can_play_daily(&self, community_id: &str, participant_id: &str) -> bool {
        let today = iso_date(OffsetDateTime::now_utc().date());
        self.state
            .community(community_id)
            .players
            .get(participant_id)
            .and_then(|player| player.last_daily.clone())
            .is_none_or(|last| last != today)
    }

    /// Restrict the community's quiz to one channel.
    pub fn bind_channel(&self, community_id: &str, channel_id: &str) {
        self.state
            .community(community_id)
            .update_binding(|binding| binding.quiz_channel_id = Some(channel_id.to_string()));
        self.flush.mark_dirty();
    }

    /// Channel the community's quiz is bound to, if any.
    pub fn bound_channel(&self, community_id: &str) -> Option<String> {
        self.state.community(community_id).binding().quiz_channel_id
    }

    /// Remember the message the dashboard view is edited into.
    pub fn set_dashboard_message(&self, community_id: &str, message_id: Option<String>) {
        self.state
            .community(community_id)
            .update_binding(|binding| binding.dashboard_message_id = message_id);
        self.flush.mark_dirty();
    }

    /// Message the dashboard view is edited into, if one was posted.
    pub fn dashboard_message(&self, community_id: &str) -> Option<String> {
        self.state
            .community(community_id)
            .binding()
            .dashboard_message_id
    }

    /// Copy of a participant's stats (default if they never played).
    pub fn player_stats(&self, community_id: &str, participant_id: &str) -> PlayerStats {
        self.state
            .community(community_id)
            .players
            .get(participant_id)
            .map(|entry| entry.clone())
            .unwrap_or_default()
    }

    /// Copy of a flag's counters (default if it was never asked).
    pub fn flag_stats(&self, community_id: &str, code: &str) -> FlagStats {
        self.state
            .community(community_id)
            .flags
            .get(code)
            .map(|entry| *entry)
            .unwrap_or_default()
    }

    /// Top participants by total points.
    pub fn leaderboard(&self, community_id: &str, limit: usize) -> Vec<(String, PlayerStats)> {
        let mut entries = self.collect_players(community_id);
        entries.sort_by(|a, b| b.1.total_points.cmp(&a.1.total_points));
        entries.truncate(limit);
        entries
    }

    /// Top participants by current streak.
    pub fn streaks(&self, community_id: &str, limit: usize) -> Vec<(String, PlayerStats)> {
        let mut entries = self.collect_players(community_id);
        entries.sort_by(|a, b| b.1.current_streak.cmp(&a.1.current_streak));
        entries.truncate(limit);
        entries
    }

    fn collect_players(&self, community_id: &str) -> Vec<(String, PlayerStats)> {
        self.state
            .community(community_id)
            .players
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }
}

/// Deterministic daily target for a community: every participant gets the
/// same flag on the same UTC day, and repeated calls are idempotent.
pub fn daily_code(community_id: &str, date: Date) -> String {
    // FNV-1a over "community:date"; stable across runs and platforms.
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in community_id
        .bytes()
        .chain([b':'])
        .chain(iso_date(date).into_bytes())
    {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    let index = (hash % country::COUNTRIES.len() as u64) as usize;
    country::COUNTRIES[index].code.to_string()
}

fn random_code() -> String {
    let mut rng = rand::rng();
    let index = rng.random_range(0..country::COUNTRIES.len());
    country::COUNTRIES[index].code.to_string()
}

/// Target plus three distinct distractors, shuffled, each behind a one-shot
/// token.
fn build_button_options(target: &str) -> IndexMap<String, String> {
    let mut options = vec![target.to_string()];
    while options.len() < EASY_OPTION_COUNT {
        let candidate = random_code();
        if !options.contains(&candidate) {
            options.push(candidate);
        }
    }
    let mut rng = rand::rng();
    options.shuffle(&mut rng);
    options
        .into_iter()
        .map(|code| (format!("flag-easy-{}", Uuid::new_v4()), code))
        .collect()
}

fn iso_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use time::macros::date;
    use tokio::sync::mpsc::error::TryRecvError;

    use super::*;
    use crate::dao::memory::MemoryStore;
    use crate::dao::models::CommunityDocument;

    fn engine() -> (
        Arc<RoundEngine>,
        mpsc::UnboundedReceiver<OutcomeEvent>,
        Arc<MemoryStore>,
    ) {
        let store = Arc::new(MemoryStore::new());
        let (tx, rx) = mpsc::unbounded_channel();
        let engine = RoundEngine::new(
            CountryRegistry::new(),
            Arc::clone(&store) as Arc<dyn StatsStore>,
            tx,
            EngineOptions::default(),
        );
        (engine, rx, store)
    }

    fn correct_answer(prompt: &RoundPrompt) -> String {
        country::display_name(&prompt.code, Locale::De)
    }

    #[tokio::test]
    async fn win_scenario_awards_points_and_removes_round() {
        let (engine, mut rx, _store) = engine();

        let prompt = engine
            .start_round("guild", "chan", "alice", Mode::Normal)
            .unwrap();
        engine.submit_answer("guild", "chan", "alice", &correct_answer(&prompt));

        let event = rx.try_recv().unwrap();
        assert_eq!(event.outcome, RoundOutcome::Won);
        assert_eq!(event.points_gained, POINTS_NORMAL);
        assert_eq!(event.new_streak, 1);
        assert_eq!(event.code, prompt.code);

        let stats = engine.player_stats("guild", "alice");
        assert_eq!(stats.total_points, POINTS_NORMAL);
        assert_eq!(stats.correct, 1);
        assert_eq!(stats.current_streak, 1);

        let flag = engine.flag_stats("guild", &prompt.code);
        assert_eq!(flag.asked, 1);
        assert_eq!(flag.correct, 1);
        assert_eq!(flag.wrong, 0);

        // round is gone: another message from the target is ignored
        engine.submit_answer("guild", "chan", "alice", &correct_answer(&prompt));
        assert_eq!(rx.try_recv().unwrap_err(), TryRecvError::Empty);
    }

    #[tokio::test]
    async fn bare_iso_code_is_accepted() {
        let (engine, mut rx, _store) = engine();

        let prompt = engine
            .start_round("guild", "chan", "alice", Mode::Normal)
            .unwrap();
        engine.submit_answer("guild", "chan", "alice", &prompt.code.to_lowercase());

        assert_eq!(rx.try_recv().unwrap().outcome, RoundOutcome::Won);
    }

    #[tokio::test]
    async fn wrong_answer_loses_and_resets_streak() {
        let (engine, mut rx, _store) = engine();

        let prompt = engine
            .start_round("guild", "chan", "alice", Mode::Normal)
            .unwrap();
        engine.submit_answer("guild", "chan", "alice", &correct_answer(&prompt));
        assert_eq!(rx.try_recv().unwrap().outcome, RoundOutcome::Won);

        let prompt = engine
            .start_round("guild", "chan", "alice", Mode::Normal)
            .unwrap();
        engine.submit_answer("guild", "chan", "alice", "certainly not a country name");

        let event = rx.try_recv().unwrap();
        assert_eq!(event.outcome, RoundOutcome::Lost);
        assert_eq!(event.points_gained, 0);
        assert_eq!(event.new_streak, 0);

        let stats = engine.player_stats("guild", "alice");
        assert_eq!(stats.wrong, 1);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.best_streak, 1);
        assert_eq!(engine.flag_stats("guild", &prompt.code).wrong, 1);
    }

    #[tokio::test]
    async fn double_start_yields_one_accept_one_rejection() {
        let (engine, _rx, _store) = engine();

        let first = engine.start_round("guild", "chan", "alice", Mode::Normal);
        let second = engine.start_round("guild", "chan", "alice", Mode::Normal);

        assert!(first.is_ok());
        assert_eq!(second.unwrap_err(), StartRejection::RoundActive);

        // a different participant in the same channel is a separate identity
        assert!(engine.start_round("guild", "chan", "bob", Mode::Normal).is_ok());
    }

    #[tokio::test]
    async fn bound_channel_is_enforced() {
        let (engine, _rx, _store) = engine();

        engine.bind_channel("guild", "quiz-chan");
        assert_eq!(
            engine
                .start_round("guild", "other-chan", "alice", Mode::Normal)
                .unwrap_err(),
            StartRejection::WrongChannel
        );
        assert!(
            engine
                .start_round("guild", "quiz-chan", "alice", Mode::Normal)
                .is_ok()
        );
    }

    #[tokio::test]
    async fn non_target_messages_are_ignored() {
        let (engine, mut rx, _store) = engine();

        let prompt = engine
            .start_round("guild", "chan", "alice", Mode::Normal)
            .unwrap();
        engine.submit_answer("guild", "chan", "bob", &correct_answer(&prompt));

        assert_eq!(rx.try_recv().unwrap_err(), TryRecvError::Empty);
        // alice's round is still active
        assert_eq!(
            engine
                .start_round("guild", "chan", "alice", Mode::Normal)
                .unwrap_err(),
            StartRejection::RoundActive
        );
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_counts_against_the_flag_only() {
        let (engine, mut rx, _store) = engine();

        let prompt = engine
            .start_round("guild", "chan", "alice", Mode::Normal)
            .unwrap();

        // paused time auto-advances to the timer
        let event = rx.recv().await.unwrap();
        assert_eq!(event.outcome, RoundOutcome::TimedOut);
        assert_eq!(event.points_gained, 0);

        let stats = engine.player_stats("guild", "alice");
        assert_eq!(stats.wrong, 0);
        assert_eq!(stats.current_streak, 0);
        let flag = engine.flag_stats("guild", &prompt.code);
        assert_eq!(flag.asked, 1);
        assert_eq!(flag.wrong, 1);

        // the expired round is gone
        assert!(
            engine
                .start_round("guild", "chan", "alice", Mode::Normal)
                .is_ok()
        );
    }

    #[tokio::test]
    async fn easy_round_has_four_distinct_options() {
        let (engine, _rx, _store) = engine();

        let prompt = engine
            .start_round("guild", "chan", "alice", Mode::Easy)
            .unwrap();
        let buttons = prompt.buttons.as_ref().unwrap();
        assert_eq!(buttons.len(), 4);

        let tokens: HashSet<&str> = buttons.iter().map(|b| b.token.as_str()).collect();
        assert_eq!(tokens.len(), 4);
        let labels: HashSet<&str> = buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels.len(), 4);
        assert!(labels.contains(country::display_name(&prompt.code, Locale::De).as_str()));
    }

    #[tokio::test]
    async fn easy_buttons_resolve_by_token() {
        let (engine, mut rx, _store) = engine();

        // correct button
        let prompt = engine
            .start_round("guild", "chan", "alice", Mode::Easy)
            .unwrap();
        let target_label = country::display_name(&prompt.code, Locale::De);
        let winning = prompt
            .buttons
            .as_ref()
            .unwrap()
            .iter()
            .find(|b| b.label == target_label)
            .unwrap();
        engine.submit_button_answer("guild", "chan", "alice", &winning.token);
        let event = rx.try_recv().unwrap();
        assert_eq!(event.outcome, RoundOutcome::Won);
        assert_eq!(event.points_gained, POINTS_EASY);

        // wrong button
        let prompt = engine
            .start_round("guild", "chan", "alice", Mode::Easy)
            .unwrap();
        let target_label = country::display_name(&prompt.code, Locale::De);
        let losing = prompt
            .buttons
            .as_ref()
            .unwrap()
            .iter()
            .find(|b| b.label != target_label)
            .unwrap();
        engine.submit_button_answer("guild", "chan", "alice", &losing.token);
        assert_eq!(rx.try_recv().unwrap().outcome, RoundOutcome::Lost);
    }

    #[tokio::test]
    async fn foreign_tokens_do_not_resolve() {
        let (engine, mut rx, _store) = engine();

        let prompt = engine
            .start_round("guild", "chan", "alice", Mode::Easy)
            .unwrap();
        engine.submit_button_answer("guild", "chan", "alice", "flag-act-leaderboard");
        assert_eq!(rx.try_recv().unwrap_err(), TryRecvError::Empty);

        // the round is untouched and still playable
        let token = &prompt.buttons.as_ref().unwrap()[0].token;
        engine.submit_button_answer("guild", "chan", "alice", token);
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn daily_code_is_idempotent_per_day() {
        let day = date!(2026 - 08 - 30);
        assert_eq!(daily_code("guild", day), daily_code("guild", day));

        // deterministic but generally different across days/communities
        let codes: HashSet<String> = (1..=10)
            .map(|offset| daily_code("guild", day.saturating_add(time::Duration::days(offset))))
            .collect();
        assert!(codes.len() > 1);
        let other = daily_code("other-guild", day);
        assert_eq!(other, daily_code("other-guild", day));
    }

    #[tokio::test]
    async fn daily_win_awards_bonus_and_stamps_the_gate() {
        let (engine, mut rx, _store) = engine();

        assert!(engine.can_play_daily("guild", "alice"));
        let prompt = engine
            .start_round("guild", "chan", "alice", Mode::Daily)
            .unwrap();
        engine.submit_answer("guild", "chan", "alice", &correct_answer(&prompt));

        let event = rx.try_recv().unwrap();
        assert_eq!(event.outcome, RoundOutcome::Won);
        assert_eq!(event.points_gained, POINTS_NORMAL + POINTS_DAILY_BONUS);
        assert!(!engine.can_play_daily("guild", "alice"));
    }

    #[tokio::test]
    async fn streak_invariant_holds_over_mixed_sequences() {
        let (engine, mut rx, _store) = engine();

        let outcomes = [true, true, false, true, true, true, false, true];
        for win in outcomes {
            let prompt = engine
                .start_round("guild", "chan", "alice", Mode::Normal)
                .unwrap();
            let answer = if win {
                correct_answer(&prompt)
            } else {
                "not a country".to_string()
            };
            engine.submit_answer("guild", "chan", "alice", &answer);
            rx.try_recv().unwrap();

            let stats = engine.player_stats("guild", "alice");
            assert!(stats.best_streak >= stats.current_streak);
        }

        let stats = engine.player_stats("guild", "alice");
        assert_eq!(stats.best_streak, 3);
        assert_eq!(stats.current_streak, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_triggers_resolve_exactly_once() {
        let (engine, mut rx, _store) = engine();

        for iteration in 0..50 {
            let community = format!("guild-{iteration}");
            let prompt = engine
                .start_round(&community, "chan", "alice", Mode::Normal)
                .unwrap();
            let answer = correct_answer(&prompt);

            let mut tasks = Vec::new();
            for trigger in 0..3 {
                let engine = Arc::clone(&engine);
                let community = community.clone();
                let answer = answer.clone();
                tasks.push(tokio::spawn(async move {
                    match trigger {
                        0 => engine.submit_answer(&community, "chan", "alice", &answer),
                        1 => engine.submit_answer(&community, "chan", "alice", "wrong guess"),
                        _ => engine.expire_round(&community, "chan", "alice"),
                    }
                }));
            }
            for task in tasks {
                task.await.unwrap();
            }

            // exactly one outcome, never zero, never two
            let event = rx.try_recv().unwrap();
            assert_eq!(event.community_id, community);
            assert_eq!(rx.try_recv().unwrap_err(), TryRecvError::Empty);

            let stats = engine.player_stats(&community, "alice");
            let flag = engine.flag_stats(&community, &prompt.code);
            assert_eq!(flag.asked, 1);
            assert_eq!(flag.correct + flag.wrong, 1);
            assert!(stats.correct + stats.wrong <= 1);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn instant_timeouts_never_strand_a_round() {
        let store = Arc::new(MemoryStore::new());
        let (tx, mut rx) = mpsc::unbounded_channel();
        let options = EngineOptions {
            round_timeout: Duration::from_millis(1),
            ..Default::default()
        };
        let engine = RoundEngine::new(
            CountryRegistry::new(),
            Arc::clone(&store) as Arc<dyn StatsStore>,
            tx,
            options,
        );

        // the timer may fire before start_round even returns; every round
        // must still expire and free its slot
        for _ in 0..100 {
            engine
                .start_round("guild", "chan", "alice", Mode::Normal)
                .unwrap();
            let event = rx.recv().await.unwrap();
            assert_eq!(event.outcome, RoundOutcome::TimedOut);
        }
        assert!(
            engine
                .start_round("guild", "chan", "alice", Mode::Normal)
                .is_ok()
        );
    }

    #[tokio::test]
    async fn leaderboard_and_streaks_rank_players() {
        let (engine, mut rx, _store) = engine();

        for (participant, wins) in [("alice", 3), ("bob", 1), ("carol", 2)] {
            for _ in 0..wins {
                let prompt = engine
                    .start_round("guild", "chan", participant, Mode::Normal)
                    .unwrap();
                engine.submit_answer("guild", "chan", participant, &correct_answer(&prompt));
                rx.try_recv().unwrap();
            }
        }

        let top = engine.leaderboard("guild", 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].0, "alice");
        assert_eq!(top[0].1.total_points, 3 * POINTS_NORMAL);
        assert_eq!(top[1].0, "carol");

        let streaks = engine.streaks("guild", 10);
        assert_eq!(streaks[0].0, "alice");
        assert_eq!(streaks[0].1.current_streak, 3);
    }

    #[tokio::test]
    async fn hydrate_restores_persisted_state() {
        let store = Arc::new(MemoryStore::new());
        let mut doc = CommunityDocument {
            quiz_channel_id: Some("quiz-chan".into()),
            ..Default::default()
        };
        doc.players.entry("alice".into()).or_default().record_win(10);
        let mut snapshot = crate::dao::storage::StatsSnapshot::default();
        snapshot.insert("guild".into(), doc);
        store.persist(snapshot).await.unwrap();

        let (tx, _rx) = mpsc::unbounded_channel();
        let engine = RoundEngine::new(
            CountryRegistry::new(),
            Arc::clone(&store) as Arc<dyn StatsStore>,
            tx,
            EngineOptions::default(),
        );
        engine.hydrate().await.unwrap();

        assert_eq!(engine.bound_channel("guild").as_deref(), Some("quiz-chan"));
        assert_eq!(engine.player_stats("guild", "alice").total_points, 10);
    }

    #[tokio::test]
    async fn shutdown_flushes_and_cancels_timers() {
        let (engine, mut rx, store) = engine();

        engine
            .start_round("guild", "chan", "alice", Mode::Normal)
            .unwrap();
        engine.shutdown().await;

        assert!(store.persist_calls() >= 1);
        assert!(store.current().contains_key("guild"));
        // the drained round never resolves
        assert_eq!(rx.try_recv().unwrap_err(), TryRecvError::Empty);
    }
}
