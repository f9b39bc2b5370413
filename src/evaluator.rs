//! Evaluator contract: the external collaborator that supplies a prior
//! policy and a value estimate at expansion time.
//!
//! In the full AlphaZero-style system an `Evaluator` wraps a trained
//! neural network; training and checkpointing live outside this crate
//! (see `spec.md` §1 "Out of scope"). `UniformEvaluator` is the one stub
//! this crate carries: a uniform prior and a constant value. At `0.0` it
//! is the "uninformed MCTS player" control baseline (`spec.md` §6); at
//! `0.5` it is the fixture this crate's reference-game tests use, the
//! constant recoverable from `original_source/tests/mcts_tests.py`'s own
//! numbers (see the note on `UniformEvaluator` below).

use crate::game::Game;

/// Given a state, returns a dense prior over the full action space and a
/// scalar value estimate from the perspective of `state.current_player()`.
///
/// The engine masks the returned prior to the state's legal actions and
/// renormalizes (falling back to uniform if the masked sum is zero); see
/// [`crate::Mcts::simulate`].
pub trait Evaluator<G: Game> {
    /// Returns `(prior, value)`. `prior` must have exactly
    /// `G::action_space_size()` entries; `value` must be finite and in
    /// `[-1, 1]`. Both are contract requirements — callers that violate
    /// them will see the engine panic rather than silently misbehave.
    fn evaluate(&self, state: &G) -> (Vec<f64>, f64);
}

/// A stub evaluator returning a uniform prior and a fixed value,
/// regardless of the state it is asked about.
///
/// `UniformEvaluator::default()` (value `0.0`) is the control baseline
/// for an "uninformed MCTS player" (`spec.md` §6). This crate's
/// reference-game tests instead construct `UniformEvaluator::new(0.5)`,
/// matching the constant `original_source/tests/mcts_tests.py`'s stub
/// evaluator actually uses: its recorded first-backup `Q` values (e.g.
/// `mcts_tests.py:144`'s `Q = -0.5` after one non-terminal expansion)
/// equal the signed leaf value exactly, by the running-mean rule's own
/// `N: 0 -> 1` case, so the stub's constant must be `0.5`, not `0.0`.
#[derive(Debug, Clone, Copy)]
pub struct UniformEvaluator {
    value: f64,
}

impl UniformEvaluator {
    /// Creates a uniform evaluator that always reports `value` (commonly
    /// `0.0`, a neutral estimate).
    pub fn new(value: f64) -> Self {
        UniformEvaluator { value }
    }
}

impl Default for UniformEvaluator {
    fn default() -> Self {
        UniformEvaluator { value: 0.0 }
    }
}

impl<G: Game> Evaluator<G> for UniformEvaluator {
    fn evaluate(&self, _state: &G) -> (Vec<f64>, f64) {
        let n = G::action_space_size();
        let uniform = if n == 0 { 0.0 } else { 1.0 / n as f64 };
        (vec![uniform; n], self.value)
    }
}
