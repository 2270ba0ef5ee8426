//! Service layer: the round engine and its background collaborators.

/// Dashboard refresh rate limiting.
pub mod dashboard;
/// Debounced persistence writer.
pub mod flush;
/// Core round logic and state transitions.
pub mod round_engine;
