//! Flag-quiz round engine: timed guess-the-flag rounds for a community chat
//! bot, resolved exactly once per round.
//!
//! The crate is transport-agnostic. The host bot translates platform events
//! (messages, button clicks, slash commands) into calls on
//! [`services::round_engine::RoundEngine`] and renders the
//! [`services::round_engine::OutcomeEvent`]s the engine emits.

pub mod config;
pub mod country;
pub mod dao;
pub mod error;
pub mod services;
pub mod state;
