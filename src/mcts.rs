//! The core Monte Carlo Tree Search engine: PUCT selection, evaluator-driven
//! expansion, and multi-player backup over a transposition table.
//!
//! Orchestration is grounded on the teacher's `mcts.rs` (`MCTS::execute_iteration`
//! driving selection → expansion → simulation → backpropagation), collapsed
//! into the single iterative loop `spec.md` §4.3.3 describes: one call to
//! [`Mcts::simulate`] is one whole traversal, not a multi-iteration search
//! loop with its own config.

use crate::evaluator::Evaluator;
use crate::game::{Game, StateHash};
use crate::puct::select_puct;
use crate::tree::{Node, Tree};

/// One entry on the traversal stack: the hashed parent state, the index
/// of the edge taken from it, and the player to move at that state (whose
/// perspective the backed-up value is signed against).
struct PathEntry {
    hash: StateHash,
    edge_index: usize,
    parent_player: usize,
}

/// The search tree and its driving evaluator.
///
/// `Mcts` is single-threaded and synchronous (`spec.md` §5): a call to
/// `simulate` runs to completion before returning, there are no locks, no
/// timeouts, and no cancellation. Memory grows monotonically with the
/// number of distinct expanded states; the engine never prunes. A caller
/// who wants bounded memory discards the whole `Mcts` and starts over.
pub struct Mcts<G: Game, E: Evaluator<G>> {
    tree: Tree<G::Action>,
    evaluator: E,
}

impl<G: Game, E: Evaluator<G>> Mcts<G, E> {
    /// Creates a new, empty search tree driven by `evaluator`.
    pub fn new(evaluator: E) -> Self {
        Mcts {
            tree: Tree::new(),
            evaluator,
        }
    }

    /// Number of distinct expanded, non-terminal states currently in the
    /// tree.
    pub fn tree_size(&self) -> usize {
        self.tree.len()
    }

    /// Returns the expanded node at `state`, if any.
    pub fn node(&self, state: &G) -> Option<&Node<G::Action>> {
        self.tree.get(&state.hash())
    }

    /// Runs exactly one selection → expansion → evaluation → backup
    /// traversal starting from `root`.
    ///
    /// `root` is also the perspective root for backup purposes: the
    /// traversal stack starts empty at `root`, so the first entry pushed
    /// is `root`'s own player, and every other player on the path is
    /// signed relative to the eventual leaf (`spec.md` §4.3.4).
    ///
    /// If `root` is already terminal this is a no-op: no node is
    /// inserted and the (empty) traversal stack means there is nothing to
    /// back up.
    pub fn simulate(&mut self, root: &G) {
        if root.is_terminal() {
            log::debug!("simulate called on a terminal root; no-op");
            return;
        }

        let mut path: Vec<PathEntry> = Vec::new();
        let mut state = root.clone();

        loop {
            if state.is_terminal() {
                let leaf_player = state.current_player();
                let values = state.terminal_value();
                debug_assert_eq!(
                    values.len(),
                    root.num_players(),
                    "Game::terminal_value returned the wrong number of entries"
                );
                let v_leaf = values[leaf_player];
                log::trace!(
                    "reached terminal leaf, player {leaf_player} value {v_leaf}, backing up {} steps",
                    path.len()
                );
                self.backup(&path, v_leaf, leaf_player);
                return;
            }

            let hash = state.hash();
            if !self.tree.contains_key(&hash) {
                let (prior, value) = self.evaluator.evaluate(&state);
                assert_eq!(
                    prior.len(),
                    G::action_space_size(),
                    "Evaluator returned a prior of the wrong length"
                );
                assert!(
                    value.is_finite() && (-1.0..=1.0).contains(&value),
                    "Evaluator returned a non-finite or out-of-range value: {value}"
                );

                let legal = state.legal_actions();
                assert!(
                    !legal.is_empty(),
                    "Game::legal_actions returned empty for a non-terminal state"
                );
                let masked = mask_and_renormalize(&prior, &legal);
                log::debug!(
                    "expanding state (hash {hash:#x}) with {} legal actions",
                    legal.len()
                );
                self.tree.insert(hash, Node::new(legal, masked));

                let leaf_player = state.current_player();
                self.backup(&path, value, leaf_player);
                return;
            }

            let node = self.tree.get(&hash).expect("just checked contains_key");
            let edge_index = select_puct(node);
            let parent_player = state.current_player();
            let action = node.edges[edge_index].action.clone();

            path.push(PathEntry {
                hash,
                edge_index,
                parent_player,
            });
            state = state.take_action(&action);
        }
    }

    /// Updates `(N, Q)` along `path` in reverse order, flipping the sign
    /// of the leaf value for every parent that is not the leaf's player
    /// (`spec.md` §4.3.4 — the two-valued same-player/not-same-player
    /// rule, applied uniformly regardless of player count).
    fn backup(&mut self, path: &[PathEntry], v_leaf: f64, leaf_player: usize) {
        for entry in path.iter().rev() {
            let v = if entry.parent_player == leaf_player {
                v_leaf
            } else {
                -v_leaf
            };
            let node = self
                .tree
                .get_mut(&entry.hash)
                .expect("every path entry refers to a previously inserted node");
            let edge = &mut node.edges[entry.edge_index];
            edge.n += 1;
            edge.q += (v - edge.q) / edge.n as f64;
        }
    }

    /// Derives a move-probability distribution from the visit counts at
    /// the expanded node for `state`, at temperature `temperature`.
    ///
    /// At `temperature == 0` all mass goes to the action with the
    /// largest visit count, ties broken by canonical action order. For
    /// `temperature > 0`, `P(a_i) = N_i^(1/τ) / Σ_j N_j^(1/τ)`, falling
    /// back to uniform if every visit count is zero. The output preserves
    /// canonical action order.
    ///
    /// Panics if `state` is not an expanded node in this tree — calling
    /// `get_distribution` before the corresponding `simulate` has ever
    /// visited `state` is a contract violation (`spec.md` §4.3.6).
    pub fn get_distribution(&self, state: &G, temperature: f64) -> Vec<(G::Action, f64)> {
        assert!(
            temperature >= 0.0,
            "temperature must be non-negative, got {temperature}"
        );

        let node = self.tree.get(&state.hash()).unwrap_or_else(|| {
            panic!("get_distribution called on a state that has not been expanded")
        });

        let visits: Vec<u64> = node.edges.iter().map(|e| e.n).collect();
        let max_n = visits.iter().copied().max().unwrap_or(0);

        let probs: Vec<f64> = if temperature == 0.0 {
            let winner = visits
                .iter()
                .position(|&n| n == max_n)
                .expect("node has at least one edge");
            (0..visits.len())
                .map(|i| if i == winner { 1.0 } else { 0.0 })
                .collect()
        } else if max_n == 0 {
            let uniform = 1.0 / visits.len() as f64;
            vec![uniform; visits.len()]
        } else {
            // Scale every count by the max before exponentiating so the
            // formula stays finite for any temperature, including the
            // very small values that make N^(1/τ) blow up in absolute
            // terms; the ratio to the max is mathematically identical to
            // the unscaled formula since the scale factor cancels in the
            // normalization.
            let exponent = 1.0 / temperature;
            let scaled: Vec<f64> = visits
                .iter()
                .map(|&n| (n as f64 / max_n as f64).powf(exponent))
                .collect();
            let sum: f64 = scaled.iter().sum();
            scaled.iter().map(|s| s / sum).collect()
        };

        node.edges
            .iter()
            .zip(probs)
            .map(|(edge, p)| (edge.action.clone(), p))
            .collect()
    }
}

/// Masks a dense Evaluator prior down to `legal` actions (by `Action::id`)
/// and renormalizes. Falls back to uniform over `legal` if the masked
/// sum is zero (`spec.md` §4.2, §7 "numerical degeneracy").
fn mask_and_renormalize<A: crate::game::Action>(prior: &[f64], legal: &[A]) -> Vec<f64> {
    let raw: Vec<f64> = legal
        .iter()
        .map(|a| *prior.get(a.id()).unwrap_or(&0.0))
        .collect();
    let sum: f64 = raw.iter().sum();
    if sum > 0.0 {
        raw.iter().map(|p| p / sum).collect()
    } else {
        let uniform = 1.0 / legal.len() as f64;
        vec![uniform; legal.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::UniformEvaluator;
    use crate::game::Action as ActionTrait;

    #[derive(Clone, Debug, PartialEq)]
    struct Move(usize);
    impl ActionTrait for Move {
        fn id(&self) -> usize {
            self.0
        }
    }

    /// A trivial one-player game: three actions, each immediately
    /// terminal with a distinct, hand-picked reward. Exercises expansion,
    /// single-player backup, and distribution extraction without needing
    /// a multi-step reference game.
    #[derive(Clone, Debug, PartialEq)]
    struct Pick {
        chosen: Option<usize>,
    }

    impl Game for Pick {
        type Action = Move;

        fn initial_state() -> Self {
            Pick { chosen: None }
        }

        fn action_space_size() -> usize {
            3
        }

        fn legal_actions(&self) -> Vec<Move> {
            if self.chosen.is_some() {
                vec![]
            } else {
                vec![Move(0), Move(1), Move(2)]
            }
        }

        fn take_action(&self, action: &Move) -> Self {
            Pick {
                chosen: Some(action.id()),
            }
        }

        fn is_terminal(&self) -> bool {
            self.chosen.is_some()
        }

        fn terminal_value(&self) -> Vec<f64> {
            // Reward depends on which action was chosen: 0 -> -1, 1 -> 0, 2 -> 1.
            vec![self.chosen.unwrap() as f64 - 1.0]
        }

        fn current_player(&self) -> usize {
            0
        }

        fn num_players(&self) -> usize {
            1
        }

        fn hash(&self) -> StateHash {
            match self.chosen {
                None => 0,
                Some(i) => (i + 1) as u64,
            }
        }
    }

    #[test]
    fn first_simulation_only_expands_root() {
        let mut mcts = Mcts::new(UniformEvaluator::default());
        let root = Pick::initial_state();
        mcts.simulate(&root);
        assert_eq!(mcts.tree_size(), 1);
        let node = mcts.node(&root).unwrap();
        for edge in &node.edges {
            assert_eq!(edge.n, 0);
            assert_eq!(edge.q, 0.0);
            assert!((edge.p - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn second_simulation_picks_first_action_and_backs_up_its_terminal_reward() {
        let mut mcts = Mcts::new(UniformEvaluator::default());
        let root = Pick::initial_state();
        mcts.simulate(&root);
        mcts.simulate(&root);

        // Tied PUCT scores at a freshly expanded node resolve to the
        // first-listed action (Move(0)), whose terminal reward is -1.
        assert_eq!(mcts.tree_size(), 1, "child is terminal, never inserted");
        let node = mcts.node(&root).unwrap();
        assert_eq!(node.edges[0].n, 1);
        assert_eq!(node.edges[0].q, -1.0);
        assert_eq!(node.edges[1].n, 0);
        assert_eq!(node.edges[2].n, 0);
    }

    #[test]
    fn terminal_root_is_a_no_op() {
        let mut mcts = Mcts::new(UniformEvaluator::default());
        let terminal = Pick { chosen: Some(1) };
        mcts.simulate(&terminal);
        assert_eq!(mcts.tree_size(), 0);
    }

    #[test]
    fn distribution_sums_to_one_and_respects_temperature_zero() {
        let mut mcts = Mcts::new(UniformEvaluator::default());
        let root = Pick::initial_state();
        for _ in 0..7 {
            mcts.simulate(&root);
        }
        let dist = mcts.get_distribution(&root, 1.0);
        assert_eq!(dist.len(), 3);
        let total: f64 = dist.iter().map(|(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-9);

        let greedy = mcts.get_distribution(&root, 0.0);
        let max_idx = greedy
            .iter()
            .enumerate()
            .max_by(|a, b| a.1 .1.partial_cmp(&b.1 .1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(greedy[max_idx].1, 1.0);
        assert_eq!(greedy.iter().filter(|(_, p)| *p == 1.0).count(), 1);
    }

    #[test]
    #[should_panic(expected = "has not been expanded")]
    fn get_distribution_on_unexpanded_state_panics() {
        let mcts: Mcts<Pick, UniformEvaluator> = Mcts::new(UniformEvaluator::default());
        let root = Pick::initial_state();
        mcts.get_distribution(&root, 1.0);
    }
}
