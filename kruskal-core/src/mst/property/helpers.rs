//! Shared helper functions for MST property-based tests.

use super::types::FixtureEdge;

/// Path-halving find over a plain parent array.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Sums edge weights as `u64` so large fixtures cannot overflow.
pub(super) fn total_weight(edges: &[FixtureEdge]) -> u64 {
    edges.iter().map(|edge| u64::from(*edge.weight())).sum()
}
