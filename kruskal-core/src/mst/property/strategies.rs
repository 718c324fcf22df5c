//! Strategy builders for MST property-based tests.
//!
//! Each generator builds a list of weighted edges over vertices
//! `0..node_count` from a seeded [`SmallRng`], so every fixture is
//! reproducible from its `(distribution, seed)` pair.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::WeightedEdge;

use super::types::{FixtureEdge, MstFixture, WeightDistribution};

/// Minimum node count for most generated graphs.
const MIN_NODES: usize = 8;
/// Maximum node count for most generated graphs.
const MAX_NODES: usize = 64;
/// Maximum node count for dense graphs.
const DENSE_MAX_NODES: usize = 32;
/// Upper bound (exclusive) for weights drawn from the wide range.
const WIDE_WEIGHT_MAX: u32 = 1_000_000;

/// Generates MST fixtures covering all five weight distributions.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

/// Adds each unique pair in `0..node_count` with probability drawn from
/// `edge_prob_range`, weighting it with `weight_generator`.
fn generate_probabilistic_graph(
    rng: &mut SmallRng,
    max_nodes: usize,
    edge_prob_range: (f64, f64),
    distribution: WeightDistribution,
    mut weight_generator: impl FnMut(&mut SmallRng) -> u32,
) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let edge_probability: f64 = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut edges = Vec::new();

    for (source, target) in all_pairs(0, node_count) {
        if rng.gen_bool(edge_probability) {
            edges.push(WeightedEdge::new(source, target, weight_generator(rng)));
        }
    }

    if edges.is_empty() {
        edges.push(WeightedEdge::new(0, 1, weight_generator(rng)));
    }

    MstFixture {
        node_count,
        edges,
        distribution,
    }
}

fn generate_unique_weights(rng: &mut SmallRng) -> MstFixture {
    generate_probabilistic_graph(
        rng,
        MAX_NODES,
        (0.2, 0.6),
        WeightDistribution::Unique,
        |r| r.gen_range(0..WIDE_WEIGHT_MAX),
    )
}

/// Draws every weight from a pool of one to three values, so most of the
/// heap consists of ties.
fn generate_identical_weights(rng: &mut SmallRng) -> MstFixture {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<u32> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();

    generate_probabilistic_graph(
        rng,
        MAX_NODES,
        (0.3, 0.7),
        WeightDistribution::ManyIdentical,
        move |r| pool[r.gen_range(0..pool.len())],
    )
}

/// Builds a random spanning path (guaranteeing connectivity) and then adds a
/// handful of extra edges, which may include self-loops and parallel edges.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut edges = Vec::new();

    let mut order: Vec<usize> = (0..node_count).collect();
    shuffle(&mut order, rng);
    for pair in order.windows(2) {
        if let &[source, target] = pair {
            edges.push(WeightedEdge::new(source, target, rng.gen_range(0..WIDE_WEIGHT_MAX)));
        }
    }

    let extra_count = rng.gen_range(node_count / 2..=node_count);
    for _ in 0..extra_count {
        let source = rng.gen_range(0..node_count);
        let target = rng.gen_range(0..node_count);
        edges.push(WeightedEdge::new(source, target, rng.gen_range(0..WIDE_WEIGHT_MAX)));
    }

    MstFixture {
        node_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

fn generate_dense(rng: &mut SmallRng) -> MstFixture {
    generate_probabilistic_graph(
        rng,
        DENSE_MAX_NODES,
        (0.7, 0.95),
        WeightDistribution::Dense,
        |r| r.gen_range(0..WIDE_WEIGHT_MAX),
    )
}

/// Generates 2-5 components of 3-12 vertices each. No edge crosses a
/// component boundary, though a component may itself be disconnected.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=5);
    let sizes: Vec<usize> = (0..component_count).map(|_| rng.gen_range(3..=12)).collect();
    let node_count = sizes.iter().sum();
    let mut edges: Vec<FixtureEdge> = Vec::new();
    let mut offset = 0;

    for size in sizes {
        let edge_probability: f64 = rng.gen_range(0.3..=0.8);
        let start_len = edges.len();
        for (source, target) in all_pairs(offset, size) {
            if rng.gen_bool(edge_probability) {
                edges.push(WeightedEdge::new(source, target, rng.gen_range(0..WIDE_WEIGHT_MAX)));
            }
        }
        if edges.len() == start_len {
            edges.push(WeightedEdge::new(offset, offset + 1, rng.gen_range(0..WIDE_WEIGHT_MAX)));
        }
        offset += size;
    }

    MstFixture {
        node_count,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

/// Returns all unique undirected pairs `(offset + i, offset + j)` where
/// `i < j < size`.
fn all_pairs(offset: usize, size: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..size).flat_map(move |i| ((i + 1)..size).map(move |j| (offset + i, offset + j)))
}

/// Fisher-Yates shuffle using the provided RNG.
pub(super) fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

// Manual `Arbitrary` so that the tie-heavy distribution is sampled more
// often than the others.
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
        .boxed()
    }
}
