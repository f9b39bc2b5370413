//! # puct-mcts
//!
//! An AlphaZero-style Monte Carlo Tree Search: PUCT selection over a
//! transposition table, driven by a pluggable [`Evaluator`] instead of
//! random rollouts.
//!
//! Unlike a classic UCB1 searcher, this crate never runs a random
//! playout to estimate a leaf's value — every freshly expanded state is
//! scored once by an `Evaluator` (a stand-in for a trained policy/value
//! network) and that score is backed up immediately. The search tree
//! itself is a hash map keyed by state hash rather than a pointer tree,
//! so two different move sequences that reach the same position share
//! one set of statistics.
//!
//! ## Basic usage
//!
//! ```
//! use puct_mcts::{Action, Evaluator, Game, Mcts, UniformEvaluator};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Guess(usize);
//!
//! impl Action for Guess {
//!     fn id(&self) -> usize { self.0 }
//! }
//!
//! // A one-move, one-player game: guess 0, 1, or 2; guessing 2 wins.
//! #[derive(Clone)]
//! struct GuessGame { chosen: Option<usize> }
//!
//! impl Game for GuessGame {
//!     type Action = Guess;
//!
//!     fn initial_state() -> Self { GuessGame { chosen: None } }
//!     fn action_space_size() -> usize { 3 }
//!
//!     fn legal_actions(&self) -> Vec<Guess> {
//!         if self.chosen.is_some() { vec![] } else { vec![Guess(0), Guess(1), Guess(2)] }
//!     }
//!     fn take_action(&self, action: &Guess) -> Self {
//!         GuessGame { chosen: Some(action.id()) }
//!     }
//!     fn is_terminal(&self) -> bool { self.chosen.is_some() }
//!     fn terminal_value(&self) -> Vec<f64> {
//!         vec![if self.chosen == Some(2) { 1.0 } else { -1.0 }]
//!     }
//!     fn current_player(&self) -> usize { 0 }
//!     fn num_players(&self) -> usize { 1 }
//!     fn hash(&self) -> u64 { self.chosen.map(|c| c as u64 + 1).unwrap_or(0) }
//! }
//!
//! let mut mcts = Mcts::new(UniformEvaluator::default());
//! let root = GuessGame::initial_state();
//! for _ in 0..64 {
//!     mcts.simulate(&root);
//! }
//! let distribution = mcts.get_distribution(&root, 0.0);
//! assert_eq!(distribution.len(), 3);
//! ```
//!
//! ## How it works
//!
//! Each call to [`Mcts::simulate`] runs one whole traversal:
//!
//! 1. **Selection**: descend from the root via [`puct::select_puct`] until
//!    reaching either a terminal state or a state not yet in the tree.
//! 2. **Expansion**: ask the [`Evaluator`] for a prior and value, mask the
//!    prior to legal actions, and insert a new [`tree::Node`].
//! 3. **Backup**: propagate the leaf value back along the traversed path,
//!    flipping sign for every player that isn't the leaf's.
//!
//! There is no separate simulation/rollout phase: the Evaluator's value
//! estimate stands in for it.
//!
//! ## Players
//!
//! [`players::DeepMctsPlayer`] wraps an [`Mcts`] with a fixed per-move
//! simulation budget and samples from [`Mcts::get_distribution`];
//! [`players::UninformedMctsPlayer`] is the same wrapper fixed to
//! [`UniformEvaluator`], the control baseline with no learned prior.

pub mod error;
pub mod evaluator;
pub mod game;
pub mod games;
pub mod mcts;
pub mod players;
pub mod puct;
pub mod tree;

pub use error::{MctsError, Result};
pub use evaluator::{Evaluator, UniformEvaluator};
pub use game::{Action, Game, StateHash};
pub use mcts::Mcts;
pub use players::{DeepMctsPlayer, UninformedMctsPlayer};
