//! Kruskal core library.
//!
//! Provides a union-find [`DisjointSet`], an array-backed [`MinHeap`]
//! priority queue, and a Kruskal minimum spanning tree builder that composes
//! the two over any type implementing [`Graph`].

mod disjoint_set;
mod error;
mod graph;
mod heap;
mod mst;

pub use crate::{
    disjoint_set::{DisjointSet, Position},
    error::{
        DisjointSetError, DisjointSetErrorCode, HeapError, HeapErrorCode, MstError, MstErrorCode,
    },
    graph::{EdgeListGraph, Graph, WeightedEdge},
    heap::{MinHeap, PriorityQueue},
    mst::{MinimumSpanningForest, compute_mst, kruskal},
};
