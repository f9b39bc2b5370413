//! Player wrappers: the usual way `Mcts` is actually driven at move time.
//!
//! Grounded on `original_source/experiments.py`'s `DeepMCTSPlayer` /
//! `UninformedMCTSPlayer` naming and role, and on `spec.md` §6
//! ("Consumption by players"): run a fixed simulation budget, then sample
//! a move from the resulting visit distribution.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::error::{MctsError, Result};
use crate::evaluator::{Evaluator, UniformEvaluator};
use crate::game::Game;
use crate::mcts::Mcts;

/// Runs `K` simulations per move, then samples from the resulting
/// visit distribution at a caller-chosen temperature.
///
/// Holds its own `Mcts` across moves, so statistics accumulated at a
/// state survive if that state is visited again (e.g. by an opponent's
/// reply landing back in a transposition the tree already has).
pub struct DeepMctsPlayer<G: Game, E: Evaluator<G>> {
    mcts: Mcts<G, E>,
    simulations_per_move: u32,
    temperature: f64,
}

impl<G: Game, E: Evaluator<G>> DeepMctsPlayer<G, E> {
    /// Creates a player that runs `simulations_per_move` simulations from
    /// the given state before sampling, at `temperature`
    /// (`spec.md` §6: `τ = 1` for training, `τ = 0` for evaluation).
    pub fn new(evaluator: E, simulations_per_move: u32, temperature: f64) -> Self {
        DeepMctsPlayer {
            mcts: Mcts::new(evaluator),
            simulations_per_move,
            temperature,
        }
    }

    /// Read-only access to the underlying search tree, e.g. to inspect
    /// visit counts after a move has been chosen.
    pub fn mcts(&self) -> &Mcts<G, E> {
        &self.mcts
    }

    /// Runs the configured simulation budget from `state`, then samples
    /// an action from the resulting distribution.
    ///
    /// Returns [`MctsError::NoLegalActions`] if `state` is terminal (and
    /// so has no distribution to sample from).
    pub fn choose_action(&mut self, state: &G, rng: &mut impl Rng) -> Result<G::Action> {
        if state.is_terminal() {
            return Err(MctsError::NoLegalActions);
        }
        for _ in 0..self.simulations_per_move {
            self.mcts.simulate(state);
        }
        let distribution = self.mcts.get_distribution(state, self.temperature);
        sample(&distribution, rng)
    }
}

/// A [`DeepMctsPlayer`] driven by a [`UniformEvaluator`]: the control
/// baseline `spec.md` §6 describes, isolating the contribution of the
/// search itself from any learned prior or value.
pub type UninformedMctsPlayer<G> = DeepMctsPlayer<G, UniformEvaluator>;

fn sample<A: Clone>(distribution: &[(A, f64)], rng: &mut impl Rng) -> Result<A> {
    let weights: Vec<f64> = distribution.iter().map(|(_, p)| *p).collect();
    let dist = WeightedIndex::new(&weights).map_err(|_| MctsError::NoLegalActions)?;
    let index = dist.sample(rng);
    Ok(distribution[index].0.clone())
}
