//! Seeded synthetic graphs for spanning tree benchmarks.
//!
//! Every generated graph is connected: vertex `i > 0` is first attached to a
//! random earlier vertex, then extra edges are layered on top according to
//! the requested [`GraphDensity`].

use std::fmt;

use kruskal_core::EdgeListGraph;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Extra random edges added per vertex in a sparse graph.
const SPARSE_EXTRA_EDGES_PER_VERTEX: usize = 3;

/// How many edges a synthetic graph carries beyond its spanning backbone.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphDensity {
    /// Roughly `4 * V` edges, with possible self-loops and parallel edges.
    Sparse,
    /// Every unordered vertex pair, `V * (V - 1) / 2` edges.
    Dense,
}

impl fmt::Display for GraphDensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sparse => "sparse",
            Self::Dense => "dense",
        })
    }
}

/// Configuration for [`generate_graph`].
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices, labelled `0..vertex_count`.
    pub vertex_count: usize,
    /// Edge density.
    pub density: GraphDensity,
    /// Exclusive upper bound for edge weights.
    pub max_weight: u32,
    /// Seed for the deterministic generator.
    pub seed: u64,
}

/// Errors raised while generating a synthetic graph.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SyntheticGraphError {
    /// The configuration requested a graph without vertices.
    #[error("vertex_count must be greater than zero")]
    ZeroVertices,
    /// The weight range is empty.
    #[error("max_weight must be greater than zero")]
    ZeroWeightRange,
}

/// Generates a connected graph described by `config`.
///
/// # Errors
/// Returns [`SyntheticGraphError`] when `vertex_count` or `max_weight` is
/// zero.
pub fn generate_graph(
    config: &SyntheticGraphConfig,
) -> Result<EdgeListGraph<usize, u32>, SyntheticGraphError> {
    if config.vertex_count == 0 {
        return Err(SyntheticGraphError::ZeroVertices);
    }
    if config.max_weight == 0 {
        return Err(SyntheticGraphError::ZeroWeightRange);
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut graph = EdgeListGraph::with_vertices(0..config.vertex_count);

    match config.density {
        GraphDensity::Sparse => {
            for vertex in 1..config.vertex_count {
                let anchor = rng.gen_range(0..vertex);
                graph.add_edge(anchor, vertex, rng.gen_range(0..config.max_weight));
            }
            let extra = config
                .vertex_count
                .saturating_mul(SPARSE_EXTRA_EDGES_PER_VERTEX);
            for _ in 0..extra {
                let source = rng.gen_range(0..config.vertex_count);
                let target = rng.gen_range(0..config.vertex_count);
                graph.add_edge(source, target, rng.gen_range(0..config.max_weight));
            }
        }
        GraphDensity::Dense => {
            for source in 0..config.vertex_count {
                for target in (source + 1)..config.vertex_count {
                    graph.add_edge(source, target, rng.gen_range(0..config.max_weight));
                }
            }
        }
    }

    Ok(graph)
}

/// Generates `count` seeded `(weight, index)` pairs for heap benchmarks.
#[must_use]
pub fn weighted_pairs(count: usize, seed: u64) -> Vec<(u32, usize)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count).map(|index| (rng.r#gen(), index)).collect()
}
