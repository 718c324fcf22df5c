//! Minimum spanning tree (MST) construction with Kruskal's algorithm.
//!
//! Every vertex starts in its own [`DisjointSet`] group and every edge is
//! bulk-loaded into a [`MinHeap`] keyed by weight. Edges are then extracted
//! in ascending weight order and accepted whenever their endpoints still lie
//! in different groups. Selection stops once `V - 1` edges are accepted or
//! the heap runs dry, so a disconnected graph yields a spanning forest.

use std::collections::{HashMap, hash_map::Entry};

use tracing::{debug, field, info, instrument, trace};

use crate::disjoint_set::{DisjointSet, Position};
use crate::error::MstError;
use crate::graph::Graph;
use crate::heap::MinHeap;

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinimumSpanningForest<E> {
    edges: Vec<E>,
    component_count: usize,
}

impl<E> MinimumSpanningForest<E> {
    /// Returns the accepted edges in the order they were selected.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[E] { &self.edges }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans at most one component.
    ///
    /// A graph without vertices counts as a trivial tree.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count <= 1
    }

    /// Consumes the forest and returns its edges in selection order.
    #[must_use]
    pub fn into_edges(self) -> Vec<E> {
        self.edges
    }

    /// Consumes the forest and returns its edges only if they form a single
    /// spanning tree.
    ///
    /// # Errors
    /// Returns [`MstError::Disconnected`] when the graph had more than one
    /// connected component.
    pub fn into_tree(self) -> Result<Vec<E>, MstError> {
        if self.is_tree() {
            Ok(self.edges)
        } else {
            Err(MstError::Disconnected {
                components: self.component_count,
            })
        }
    }
}

/// An edge waiting in the heap, with its endpoints already resolved to
/// disjoint-set positions.
struct Candidate<E> {
    edge: E,
    source: Position,
    target: Position,
}

/// Computes the edges of a minimum spanning tree (or forest) of `graph`.
///
/// The edges are returned in the order the algorithm accepted them. A
/// disconnected graph yields a minimum spanning forest; use [`kruskal`] and
/// [`MinimumSpanningForest::into_tree`] to treat that as an error instead.
///
/// # Errors
/// Returns [`MstError::UnknownVertex`] when an edge references a vertex that
/// [`Graph::vertices`] did not list.
///
/// # Examples
/// ```
/// use kruskal_core::{EdgeListGraph, MstError, compute_mst};
///
/// let mut graph = EdgeListGraph::with_vertices(['a', 'b', 'c', 'd']);
/// graph.add_edge('a', 'b', 1);
/// graph.add_edge('b', 'c', 2);
/// graph.add_edge('c', 'd', 3);
/// graph.add_edge('a', 'd', 4);
/// graph.add_edge('a', 'c', 5);
///
/// let tree = compute_mst(&graph)?;
/// let total: u32 = tree.iter().map(|edge| *edge.weight()).sum();
/// assert_eq!(tree.len(), 3);
/// assert_eq!(total, 6);
/// # Ok::<(), MstError>(())
/// ```
pub fn compute_mst<G: Graph>(graph: &G) -> Result<Vec<G::Edge>, MstError> {
    kruskal(graph).map(MinimumSpanningForest::into_edges)
}

/// Computes a minimum spanning forest of `graph` using Kruskal's algorithm.
///
/// Duplicate vertices are grouped once. Self-loops never join two groups and
/// are therefore never selected.
///
/// # Errors
/// Returns [`MstError::UnknownVertex`] when an edge references a vertex that
/// [`Graph::vertices`] did not list. The check runs for every edge before
/// selection starts.
#[instrument(
    name = "mst.kruskal",
    err(level = "warn"),
    skip_all,
    fields(vertices = field::Empty, edges = field::Empty),
)]
pub fn kruskal<G: Graph>(graph: &G) -> Result<MinimumSpanningForest<G::Edge>, MstError> {
    let span = tracing::Span::current();

    let (mut forest, positions) = make_groups(graph);
    span.record("vertices", forest.len());

    let mut heap = load_candidates(graph, &positions)?;
    span.record("edges", heap.len());

    let spanning_len = forest.len().saturating_sub(1);
    let mut accepted = Vec::with_capacity(spanning_len);

    while accepted.len() < spanning_len && !heap.is_empty() {
        let (_, candidate) = heap.extract_min()?;
        let source = forest.find(candidate.source)?;
        let target = forest.find(candidate.target)?;
        if source == target {
            trace!(
                source = source.index(),
                "edge discarded: endpoints already connected"
            );
            continue;
        }
        forest.union(source, target)?;
        accepted.push(candidate.edge);
    }

    let component_count = forest.group_count();
    if component_count > 1 {
        debug!(
            components = component_count,
            "graph is disconnected, returning a spanning forest"
        );
    }
    info!(
        accepted = accepted.len(),
        components = component_count,
        "minimum spanning forest computed"
    );

    Ok(MinimumSpanningForest {
        edges: accepted,
        component_count,
    })
}

fn make_groups<G: Graph>(graph: &G) -> (DisjointSet<G::Vertex>, HashMap<G::Vertex, Position>) {
    let mut forest = DisjointSet::new();
    let mut positions = HashMap::new();
    let mut duplicates = 0_usize;

    for vertex in graph.vertices() {
        match positions.entry(vertex) {
            Entry::Occupied(_) => duplicates += 1,
            Entry::Vacant(slot) => {
                let position = forest.make_group(slot.key().clone());
                slot.insert(position);
            }
        }
    }

    if duplicates > 0 {
        debug!(duplicates, "duplicate vertices grouped once");
    }
    (forest, positions)
}

fn load_candidates<G: Graph>(
    graph: &G,
    positions: &HashMap<G::Vertex, Position>,
) -> Result<MinHeap<G::Weight, Candidate<G::Edge>>, MstError> {
    let resolve = |vertex: &G::Vertex, ordinal: usize| {
        positions
            .get(vertex)
            .copied()
            .ok_or(MstError::UnknownVertex { edge: ordinal })
    };

    let pairs = graph
        .edges()
        .enumerate()
        .map(|(ordinal, edge)| {
            let (source, target) = graph.endpoints(&edge);
            let candidate = Candidate {
                source: resolve(&source, ordinal)?,
                target: resolve(&target, ordinal)?,
                edge,
            };
            Ok((graph.weight(&candidate.edge), candidate))
        })
        .collect::<Result<Vec<_>, MstError>>()?;

    Ok(MinHeap::build(pairs))
}
