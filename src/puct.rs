//! PUCT selection: the rule used to descend the tree during the
//! selection phase of a simulation.
//!
//! Grounded on the teacher's `policy/selection.rs` `PUCTPolicy`
//! (`Q + c · P · √Nsum / (1 + N)`), with the exploration constant fixed
//! at `1` per `spec.md` §4.3.2 ("No exploration constant is exposed").

use crate::game::Action;
use crate::tree::Node;

/// Selects the index of the edge maximizing the PUCT score
/// `Q + P * sqrt(Nsum) / (1 + N)`, where `Nsum` is the sum of visit
/// counts over all of `node`'s edges. Ties (including the all-zero case
/// at a freshly expanded node) are broken by the first-listed edge,
/// i.e. canonical action order.
///
/// Panics if `node` has no edges — that only happens for a node built
/// from a non-terminal state with an empty legal-action list, which is a
/// `Game` contract violation (`spec.md` §4.1).
pub fn select_puct<A: Action>(node: &Node<A>) -> usize {
    assert!(
        !node.edges.is_empty(),
        "PUCT selection on a node with no edges (Game::legal_actions returned empty for a non-terminal state)"
    );

    let sqrt_n_sum = (node.visit_sum() as f64).sqrt();

    let mut best_index = 0;
    let mut best_score = f64::NEG_INFINITY;
    for (i, edge) in node.edges.iter().enumerate() {
        let score = edge.q + edge.p * sqrt_n_sum / (1.0 + edge.n as f64);
        if score > best_score {
            best_score = score;
            best_index = i;
        }
    }
    best_index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Action as ActionTrait;

    #[derive(Clone, Debug, PartialEq)]
    struct A(usize);
    impl ActionTrait for A {
        fn id(&self) -> usize {
            self.0
        }
    }

    #[test]
    fn fresh_node_picks_first_action() {
        let node: Node<A> = Node::new(vec![A(0), A(1), A(2)], vec![0.2, 0.5, 0.3]);
        assert_eq!(select_puct(&node), 0);
    }

    #[test]
    fn higher_prior_wins_among_unvisited() {
        // All N == 0 still ties on Q (0.0) but the score also scales
        // with P; since Nsum == 0, sqrt(Nsum) == 0 so every score is
        // exactly 0.0 regardless of P, and the first action wins.
        let node: Node<A> = Node::new(vec![A(0), A(1)], vec![0.1, 0.9]);
        assert_eq!(select_puct(&node), 0);
    }

    #[test]
    fn higher_q_wins_when_visited() {
        let mut node: Node<A> = Node::new(vec![A(0), A(1)], vec![0.5, 0.5]);
        node.edges[0].n = 1;
        node.edges[0].q = -0.9;
        node.edges[1].n = 1;
        node.edges[1].q = 0.9;
        assert_eq!(select_puct(&node), 1);
    }

    #[test]
    fn exploration_term_favors_undervisited_edge() {
        let mut node: Node<A> = Node::new(vec![A(0), A(1)], vec![0.5, 0.5]);
        // Edge 0 has a slightly higher Q but many more visits; edge 1's
        // exploration bonus should overcome the gap.
        node.edges[0].n = 100;
        node.edges[0].q = 0.1;
        node.edges[1].n = 0;
        node.edges[1].q = 0.0;
        assert_eq!(select_puct(&node), 1);
    }
}
