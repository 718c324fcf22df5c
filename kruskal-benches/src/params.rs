//! Benchmark parameter types, rendered as Criterion benchmark ids.

use std::fmt;

use crate::synthetic::GraphDensity;

/// Parameters for a spanning tree benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Edge density of the generated graph.
    pub density: GraphDensity,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},{}", self.vertex_count, self.density)
    }
}

/// Parameters for a heap construction benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct HeapBenchParams {
    /// Number of entries loaded into the heap.
    pub entry_count: usize,
}

impl fmt::Display for HeapBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.entry_count)
    }
}
