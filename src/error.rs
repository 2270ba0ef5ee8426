//! Engine-level error types.

use thiserror::Error;

/// Reasons a start request is declined before a round is created.
///
/// These are reported back to the caller so it can tell the participant why
/// nothing happened; they are expected outcomes, not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartRejection {
    /// A round is already active for this participant in this channel.
    #[error("a round is already active for this participant in this channel")]
    RoundActive,
    /// The community bound its quiz to a different channel.
    #[error("the quiz is bound to a different channel")]
    WrongChannel,
}
