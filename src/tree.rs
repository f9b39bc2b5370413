//! The search tree: a transposition table mapping hashed states to edge
//! tables, rather than a pointer tree with parent links.
//!
//! `spec.md` §9 is explicit about this shape: "Do not attempt a linked-node
//! tree with parent pointers; the transposition-table layout is simpler
//! and permits identical states reached by different paths to share
//! statistics." A node is never removed once inserted, and only `N`/`Q`
//! on its edges ever change after creation.

use std::collections::HashMap;

use crate::game::{Action, StateHash};

/// One outgoing arc from a node.
#[derive(Debug, Clone)]
pub struct Edge<A: Action> {
    /// The action this edge represents.
    pub action: A,
    /// Visit count.
    pub n: u64,
    /// Mean action-value from the parent's current-player perspective,
    /// updated as a running mean: `Q <- Q + (v - Q) / N` after `N`
    /// increments. `0.0` while `N == 0`.
    pub q: f64,
    /// Prior probability from the Evaluator, masked to legal actions and
    /// renormalized at expansion time.
    pub p: f64,
}

impl<A: Action> Edge<A> {
    fn new(action: A, p: f64) -> Self {
        Edge {
            action,
            n: 0,
            q: 0.0,
            p,
        }
    }
}

/// The edge table for one expanded, non-terminal state. Edges are stored
/// in the same order `Game::legal_actions` returned them in.
#[derive(Debug, Clone)]
pub struct Node<A: Action> {
    pub edges: Vec<Edge<A>>,
}

impl<A: Action> Node<A> {
    /// Builds a freshly expanded node: `actions` in canonical order,
    /// `priors` already masked to those actions and renormalized
    /// (`priors[i]` is the prior for `actions[i]`).
    pub fn new(actions: Vec<A>, priors: Vec<f64>) -> Self {
        debug_assert_eq!(actions.len(), priors.len());
        let edges = actions
            .into_iter()
            .zip(priors)
            .map(|(action, p)| Edge::new(action, p))
            .collect();
        Node { edges }
    }

    /// Total visits across all outgoing edges.
    pub fn visit_sum(&self) -> u64 {
        self.edges.iter().map(|e| e.n).sum()
    }
}

/// The transposition table itself: hashed state to expanded node.
pub type Tree<A> = HashMap<StateHash, Node<A>>;
