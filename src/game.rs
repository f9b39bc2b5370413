//! Traits defining the game contract consumed by the search engine.
//!
//! `Game` is the primary interface a caller implements for any turn-based,
//! perfect-information, multi-player game they want to search. The engine
//! never inspects a state's contents directly: it only hashes it, asks
//! the game for legal actions, transitions, and terminal rewards, and
//! hands it to an [`Evaluator`](crate::Evaluator).

use std::fmt::Debug;

/// A canonical byte-identity for a state, used as the transposition-table
/// key. Two states the game considers equivalent must hash equal.
pub type StateHash = u64;

/// A fixed-shape identifier drawn from a game's finite action space.
///
/// `id()` must be stable and dense: it indexes directly into the
/// Evaluator's full-action-space prior vector (see
/// [`Game::action_space_size`]).
pub trait Action: Clone + Debug + PartialEq + Send + Sync {
    /// Index of this action in the game's fixed action space.
    fn id(&self) -> usize;
}

/// The game contract consumed by [`crate::Mcts`].
///
/// Implementors represent a single, self-contained game state: the type
/// itself *is* the state, and its methods describe both the rules (legal
/// actions, transitions, termination) and the current position. This
/// mirrors how most small Rust game-tree searches are written — no
/// separate "rules object" indirection — and keeps `take_action` a pure
/// function from one state to the next.
pub trait Game: Clone + Send + Sync {
    /// The type of actions that can be taken in this game.
    type Action: Action;

    /// Returns the starting state of the game.
    fn initial_state() -> Self;

    /// Total size of the dense action space actions are indexed into.
    /// Evaluator priors are vectors of this length.
    fn action_space_size() -> usize;

    /// Returns the legal actions from this state, in canonical,
    /// stable order. Never empty for a non-terminal state.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Applies `action` to this state, returning the resulting state.
    /// Undefined if `action` is not legal at this state.
    fn take_action(&self, action: &Self::Action) -> Self;

    /// Returns whether this state ends the game.
    fn is_terminal(&self) -> bool;

    /// Returns the per-player terminal reward, in `[-1, 1]`, one entry
    /// per player in canonical player order. Only meaningful when
    /// [`Game::is_terminal`] is true.
    fn terminal_value(&self) -> Vec<f64>;

    /// Returns the index (in `[0, num_players())`) of the player to move.
    /// At a terminal state this is the player who would have moved next
    /// had the game not ended; backup treats that as their perspective.
    fn current_player(&self) -> usize;

    /// Total number of players in the game.
    fn num_players(&self) -> usize;

    /// Canonical hash of this state for the transposition table. Equal
    /// states must hash equal.
    fn hash(&self) -> StateHash;
}
