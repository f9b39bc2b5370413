//! Error types surfaced by the `players` layer.
//!
//! The search engine itself (`Mcts`) has no recoverable failures of its
//! own: contract violations panic with a descriptive message, and
//! numerical degeneracies (a prior that masks to zero, all-zero visit
//! counts) are recovered locally by falling back to a uniform
//! distribution. See `Mcts::get_distribution` and `Mcts::simulate`.
//!
//! The one place a caller can hit a legitimate, recoverable mistake is
//! asking a player to decide from a state that has no legal actions.

/// Error type for the player wrappers built on top of [`crate::Mcts`].
#[derive(thiserror::Error, Debug)]
pub enum MctsError {
    /// The state handed to a player has no legal actions (it is terminal,
    /// or the `Game` implementation violated its non-empty-actions
    /// contract).
    #[error("no legal actions available from the given state")]
    NoLegalActions,
}

/// Result type for the player wrappers.
pub type Result<T> = std::result::Result<T, MctsError>;
