//! Graph abstractions consumed by the spanning tree builder.

use std::hash::Hash;

/// Read-only view of an undirected, weighted graph.
///
/// The builder only needs to enumerate vertices and edges and to inspect an
/// edge's endpoints and weight, so any storage layout can implement this.
///
/// # Examples
/// ```
/// use kruskal_core::Graph;
///
/// struct Triangle;
///
/// impl Graph for Triangle {
///     type Vertex = u8;
///     type Edge = (u8, u8, u32);
///     type Weight = u32;
///
///     fn vertices(&self) -> impl Iterator<Item = u8> { 0..3 }
///     fn edges(&self) -> impl Iterator<Item = (u8, u8, u32)> {
///         [(0, 1, 4), (1, 2, 1), (0, 2, 2)].into_iter()
///     }
///     fn endpoints(&self, edge: &Self::Edge) -> (u8, u8) { (edge.0, edge.1) }
///     fn weight(&self, edge: &Self::Edge) -> u32 { edge.2 }
/// }
///
/// assert_eq!(Triangle.vertices().count(), 3);
/// assert_eq!(Triangle.weight(&(0, 1, 4)), 4);
/// ```
pub trait Graph {
    /// Vertex identity. Equal vertices denote the same node.
    type Vertex: Eq + Hash + Clone;
    /// Edge handle returned to callers as part of the spanning tree.
    type Edge: Clone;
    /// Totally ordered edge weight.
    type Weight: Ord;

    /// Enumerates the graph's vertices in any order.
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex>;

    /// Enumerates the graph's edges in any order.
    fn edges(&self) -> impl Iterator<Item = Self::Edge>;

    /// Returns the two endpoints of `edge`.
    fn endpoints(&self, edge: &Self::Edge) -> (Self::Vertex, Self::Vertex);

    /// Returns the weight of `edge`.
    fn weight(&self, edge: &Self::Edge) -> Self::Weight;
}

/// An undirected edge with an attached weight.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct WeightedEdge<V, W> {
    source: V,
    target: V,
    weight: W,
}

impl<V, W> WeightedEdge<V, W> {
    /// Creates an edge between `source` and `target`.
    #[must_use]
    pub const fn new(source: V, target: V, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> &V { &self.source }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> &V { &self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> &W { &self.weight }
}

/// Graph stored as a vertex list plus an edge list.
///
/// Edges are not checked against the vertex list on insertion; the spanning
/// tree builder validates endpoints when it runs.
///
/// # Examples
/// ```
/// use kruskal_core::{EdgeListGraph, Graph};
///
/// let mut graph = EdgeListGraph::with_vertices(["a", "b", "c"]);
/// graph.add_edge("a", "b", 3);
/// graph.add_edge("b", "c", 1);
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.vertices().collect::<Vec<_>>(), ["a", "b", "c"]);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EdgeListGraph<V, W> {
    vertices: Vec<V>,
    edges: Vec<WeightedEdge<V, W>>,
}

impl<V, W> EdgeListGraph<V, W> {
    /// Creates a graph without vertices or edges.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Creates a graph holding `vertices` and no edges.
    pub fn with_vertices(vertices: impl IntoIterator<Item = V>) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
            edges: Vec::new(),
        }
    }

    /// Adds a vertex.
    pub fn add_vertex(&mut self, vertex: V) {
        self.vertices.push(vertex);
    }

    /// Adds an undirected edge between `source` and `target`.
    pub fn add_edge(&mut self, source: V, target: V, weight: W) {
        self.edges.push(WeightedEdge::new(source, target, weight));
    }

    /// Returns the number of listed vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<V, W> Default for EdgeListGraph<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> FromIterator<WeightedEdge<V, W>> for EdgeListGraph<V, W>
where
    V: Eq + Clone,
{
    /// Collects edges, listing every distinct endpoint as a vertex in first
    /// appearance order.
    fn from_iter<I: IntoIterator<Item = WeightedEdge<V, W>>>(iter: I) -> Self {
        let mut graph = Self::new();
        for edge in iter {
            for endpoint in [&edge.source, &edge.target] {
                if !graph.vertices.contains(endpoint) {
                    graph.vertices.push(endpoint.clone());
                }
            }
            graph.edges.push(edge);
        }
        graph
    }
}

impl<V, W> Graph for EdgeListGraph<V, W>
where
    V: Eq + Hash + Clone,
    W: Ord + Clone,
{
    type Vertex = V;
    type Edge = WeightedEdge<V, W>;
    type Weight = W;

    fn vertices(&self) -> impl Iterator<Item = V> {
        self.vertices.iter().cloned()
    }

    fn edges(&self) -> impl Iterator<Item = WeightedEdge<V, W>> {
        self.edges.iter().cloned()
    }

    fn endpoints(&self, edge: &Self::Edge) -> (V, V) {
        (edge.source.clone(), edge.target.clone())
    }

    fn weight(&self, edge: &Self::Edge) -> W {
        edge.weight.clone()
    }
}
